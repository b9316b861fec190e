// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier physique en Touche (etat.rs décide quoi en faire)

pub mod etat;
pub mod vue;


// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::{AppCalc, Touche};

use eframe::egui;

/// Événements clavier de la frame -> touches calculatrice.
/// ESC = C (comme le bouton).
fn touches_de_la_frame(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => out.extend(t.chars().map(Touche::Caractere)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Touche::Entree),
                    egui::Key::Backspace => out.push(Touche::Retour),
                    egui::Key::Escape => out.push(Touche::Caractere('c')),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for t in touches_de_la_frame(ctx) {
            self.touche(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
