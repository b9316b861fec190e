// src/noyau/erreur.rs
//
// Erreurs du noyau (une seule famille : l’évaluation).
// L’UI n’affiche jamais ces messages : elle affiche MARQUEUR_ERREUR.
// Ils servent à la démarche et aux journaux.

use thiserror::Error;

/// Ce que l’UI affiche pour n’importe quel échec.
pub const MARQUEUR_ERREUR: &str = "Error";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalcul {
    #[error("Entrée vide")]
    EntreeVide,

    /// Une instruction réclame plus d’opérandes que la pile n’en contient.
    #[error("pile insuffisante à l’instruction {position}")]
    SousPile { position: usize },

    /// La pile finale ne contient pas exactement une valeur.
    #[error("expression invalide : {0} valeur(s) en fin d’évaluation")]
    PileFinale(usize),

    /// Division par zéro, domaine de asin/acos/ln/log/sqrt, débordement.
    #[error("résultat non fini : {0}")]
    NonFini(f64),
}
