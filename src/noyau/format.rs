// src/noyau/format.rs

/// Affichage d’un résultat : décimal le plus court qui relit la même valeur.
/// `-0` s’affiche `0` (une calculatrice n’a pas de zéro signé).
pub fn format_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
