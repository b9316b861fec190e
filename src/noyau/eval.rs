//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile f64 -> contrôle de finitude
//!
//! Aucun état partagé : chaque appel part de zéro, on peut appeler depuis plusieurs threads.

use log::debug;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{format_rpn, to_rpn, Instr};

/// Démarche d’une évaluation : ce que le panneau “Démarche” affiche.
#[derive(Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub resultat: Result<f64, ErreurCalcul>,
}

/// Exécute une RPN sur une pile de f64.
///
/// - Operande : empile
/// - Binaire  : dépile b puis a, empile a∘b
/// - Fonction : dépile x, empile f(x)
///
/// Échoue si la pile manque d’opérandes, si elle ne finit pas avec exactement
/// une valeur, ou si cette valeur n’est pas finie (NaN, ±∞).
pub fn eval_rpn(rpn: &[Instr]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for (position, instr) in rpn.iter().enumerate() {
        match *instr {
            Instr::Operande(v) => st.push(v),

            Instr::Binaire(op) => {
                let b = st.pop().ok_or(ErreurCalcul::SousPile { position })?;
                let a = st.pop().ok_or(ErreurCalcul::SousPile { position })?;
                st.push(op.appliquer(a, b));
            }

            Instr::Fonction(f) => {
                let x = st.pop().ok_or(ErreurCalcul::SousPile { position })?;
                st.push(f.appliquer(x));
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalcul::PileFinale(st.len()));
    }
    let v = st[0];

    // division par zéro, domaine asin/acos/ln/log/sqrt : tout finit ici
    if !v.is_finite() {
        return Err(ErreurCalcul::NonFini(v));
    }
    Ok(v)
}

/// API publique : évalue une expression texte.
///
/// Tout échec (entrée vide, syntaxe dégradée, pile insuffisante, résultat non fini)
/// revient comme une valeur d’erreur ; jamais de panique.
pub fn evaluate_expression(expr_str: &str) -> Result<f64, ErreurCalcul> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }

    let rpn = to_rpn(&tokenize(s));
    let resultat = eval_rpn(&rpn);
    if let Err(e) = &resultat {
        debug!("eval: {s:?} -> {e}");
    }
    resultat
}

/// Comme `evaluate_expression`, mais garde la démarche (jetons + RPN) même en cas d’échec.
pub fn evaluate_detaille(expr_str: &str) -> DemarcheNoyau {
    let s = expr_str.trim();
    if s.is_empty() {
        return DemarcheNoyau {
            jetons: String::new(),
            rpn: String::new(),
            resultat: Err(ErreurCalcul::EntreeVide),
        };
    }

    // 1) Jetons
    let jetons = tokenize(s);

    // 2) RPN
    let rpn = to_rpn(&jetons);

    // 3) Pile
    let resultat = eval_rpn(&rpn);

    DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        resultat,
    }
}
