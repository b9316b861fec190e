// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran en lecture seule : le clavier passe par app.rs (Touche), pas par un TextEdit
// - Tactile : gros boutons
// - Démarche repliable (jetons, RPN, note)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_memoire(ui);

                ui.add_space(8.0);
                self.ui_fonctions(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // historique (petit) puis écran (gros)
                ui.monospace(self.historique.as_str());
                ui.label(egui::RichText::new(self.ecran()).monospace().size(28.0));
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton_action(ui, "MC", "Remet la mémoire à zéro", Action::MemoireEffacer);
            self.bouton_action(ui, "M+", "Ajoute l’écran à la mémoire", Action::MemoireAjouter);
            self.bouton_action(ui, "MR", "Rappelle la mémoire", Action::MemoireRappeler);

            ui.separator();
            ui.monospace(format!("M = {}", crate::noyau::format_resultat(self.memoire)));
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for nom in ["sin", "cos", "tan", "asin", "acos", "atan"] {
                self.bouton_fonction(ui, nom);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for nom in ["ln", "log", "exp", "sqrt"] {
                self.bouton_fonction(ui, nom);
            }
            self.bouton_insert(ui, "π", "pi");
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_sci")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "/", "/");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Retour);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "*", "*");
                self.bouton_action(ui, "C", "Efface l’écran et l’historique", Action::Effacer);
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "-", "-");
                self.bouton_insert(ui, "^", "^");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, "%", "%");
                self.bouton_insert(ui, "+", "+");
                self.bouton_action(ui, "=", "Évalue l’expression", Action::Egal);
                ui.end_row();

                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::Retour => self.retour(),
                Action::Egal => self.egal(),
                Action::MemoireEffacer => self.memoire_effacer(),
                Action::MemoireAjouter => self.memoire_ajouter(),
                Action::MemoireRappeler => self.memoire_rappeler(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        if ui.add_sized([46.0, 30.0], egui::Button::new(label)).clicked() {
            self.inserer(to_insert);
        }
    }

    fn bouton_fonction(&mut self, ui: &mut egui::Ui, nom: &str) {
        if ui.add_sized([46.0, 28.0], egui::Button::new(nom)).clicked() {
            self.inserer_fonction(nom);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    Retour,
    Egal,
    MemoireEffacer,
    MemoireAjouter,
    MemoireRappeler,
}
