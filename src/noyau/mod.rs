//! Noyau scientifique f64
//!
//! Organisation interne :
//! - operateurs.rs : tables statiques (précédence, associativité, fonctions)
//! - jetons.rs     : tokenisation (tolérante)
//! - rpn.rs        : shunting-yard -> instructions postfixées
//! - eval.rs       : pile f64 + pipeline complet
//! - format.rs     : affichage du résultat
//! - erreur.rs     : ErreurCalcul

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::MARQUEUR_ERREUR;
pub use eval::{evaluate_detaille, evaluate_expression, DemarcheNoyau};
pub use format::format_resultat;
