//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (écran, historique, mémoire, démarche)
//! et offrir les actions des touches sans logique d’affichage.
//!
//! Contrats :
//! - Le noyau n’est appelé qu’à travers `evaluate_expression` / `evaluate_detaille`.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : l’écran est borné (ENTREE_MAX).

use log::{debug, info, warn};

use crate::noyau::{
    evaluate_detaille, evaluate_expression, format_resultat, DemarcheNoyau, MARQUEUR_ERREUR,
};

/// Garde-fou : longueur maximale de l’écran (anti-abus / anti-gel).
pub const ENTREE_MAX: usize = 256;

/// Caractères acceptés tels quels depuis le clavier.
const CARACTERES_CLAVIER: &str = "0123456789.+-*/^%()";

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        let note = match &d.resultat {
            Ok(v) => format!("= {}", format_resultat(*v)),
            Err(e) => e.to_string(),
        };
        Self {
            jetons: d.jetons,
            rpn: d.rpn,
            note,
        }
    }
}

/// Touche reçue du clavier physique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Caractere(char),
    Entree,
    Retour,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- écran ---
    pub entree: String,     // expression en cours (ou dernier résultat, ou "Error")
    pub historique: String, // dernière expression évaluée

    // --- mémoire (MC / M+ / MR) ---
    pub memoire: f64,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Ajoute du texte à l’écran. Si l’écran montre "Error", on repart de zéro.
    pub fn inserer(&mut self, s: &str) {
        if self.entree == MARQUEUR_ERREUR {
            self.entree.clear();
        }
        if self.entree.chars().count() + s.chars().count() > ENTREE_MAX {
            debug!("saisie ignorée : écran plein ({ENTREE_MAX})");
            return;
        }
        self.entree.push_str(s);
    }

    /// sin, cos, sqrt… : insère "nom(".
    pub fn inserer_fonction(&mut self, nom: &str) {
        self.inserer(&format!("{nom}("));
    }

    /// DEL : retire le dernier caractère.
    pub fn retour(&mut self) {
        self.entree.pop();
    }

    /// C : vide l’écran et l’historique (la mémoire reste).
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.historique.clear();
        self.demarche = Demarche::default();
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : l’expression passe en historique, l’écran reçoit le résultat (ou "Error").
    pub fn egal(&mut self) {
        self.historique = self.entree.clone();

        let d = evaluate_detaille(&self.entree);
        self.entree = match &d.resultat {
            Ok(v) => format_resultat(*v),
            Err(e) => {
                warn!("évaluation échouée pour {:?}: {e}", self.historique);
                MARQUEUR_ERREUR.to_string()
            }
        };
        self.demarche = d.into();
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MC
    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    /// M+ : ajoute la valeur de l’écran. Un échec n’ajoute rien.
    pub fn memoire_ajouter(&mut self) {
        match evaluate_expression(&self.entree) {
            Ok(v) => {
                self.memoire += v;
                info!("mémoire += {v} -> {}", self.memoire);
            }
            Err(e) => debug!("M+ ignoré : {e}"),
        }
    }

    /// MR : l’écran reçoit la mémoire.
    pub fn memoire_rappeler(&mut self) {
        self.entree = format_resultat(self.memoire);
    }

    /* ------------------------ Clavier ------------------------ */

    /// Traduit une touche physique. Retourne false si la touche n’a rien fait.
    pub fn touche(&mut self, t: Touche) -> bool {
        match t {
            Touche::Entree => self.egal(),
            Touche::Retour => self.retour(),
            Touche::Caractere('c' | 'C') => self.effacer(),
            Touche::Caractere(c) if CARACTERES_CLAVIER.contains(c) => {
                let mut buf = [0u8; 4];
                self.inserer(c.encode_utf8(&mut buf));
            }
            Touche::Caractere(_) => return false,
        }
        true
    }

    /// Texte de l’écran principal ("0" si vide).
    pub fn ecran(&self) -> &str {
        if self.entree.is_empty() {
            "0"
        } else {
            &self.entree
        }
    }
}
