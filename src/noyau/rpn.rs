// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (suite d’instructions postfixées)
//
// Règles:
// - Num           => opérande
// - Ident "pi"    => opérande π (insensible à la casse)
// - Ident fonction => empilée, sortie après SA parenthèse fermante
// - Opérateur     => dépile tant que la précédence/associativité l’exige
// - ',' '.' mots inconnus => ignorés
//
// Mode TOLÉRANT (choix assumé) : aucune erreur de structure ici.
// Parenthèse fermante orpheline, '(' jamais fermée : on continue et on trace en debug.
// C’est l’évaluateur (pile insuffisante / pile finale) qui attrape la plupart des cas.

use log::debug;

use super::jetons::Tok;
use super::operateurs::{est_pi, valeur_pi, Assoc, Fonction, Operateur};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instr {
    Operande(f64),
    Binaire(Operateur),
    Fonction(Fonction),
}

/// Contenu de la pile d’opérateurs (jamais visible hors de ce module).
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Operateur),
    Fonction(Fonction),
    LPar,
}

/// `tok` doit-il laisser passer `top` vers la sortie ?
fn doit_depiler(tok: Operateur, top: Operateur) -> bool {
    match tok.assoc() {
        Assoc::Gauche => tok.precedence() <= top.precedence(),
        Assoc::Droite => tok.precedence() < top.precedence(),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Ident("pi"), Op(/), Num(2), RPar]
///   rpn:    [Operande(π), Operande(2), Binaire(/), Fonction(sin)]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Instr> {
    let mut out: Vec<Instr> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(v) => out.push(Instr::Operande(*v)),

            Tok::Ident(name) if est_pi(name) => out.push(Instr::Operande(valeur_pi())),

            Tok::Ident(name) => match Fonction::depuis_nom(name) {
                // fonction : on la garde sur la pile (elle sortira après son argument)
                Some(f) => ops.push(Pile::Fonction(f)),
                None => debug!("rpn: identifiant inconnu ignoré: {name:?}"),
            },

            Tok::Op(op) => {
                // '(' et fonctions bloquent : seuls les opérateurs sortent
                while let Some(Pile::Op(top)) = ops.last() {
                    if !doit_depiler(*op, *top) {
                        break;
                    }
                    out.push(Instr::Binaire(*top));
                    ops.pop();
                }
                ops.push(Pile::Op(*op));
            }

            Tok::LPar => ops.push(Pile::LPar),

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    match top {
                        Pile::LPar => {
                            ouvrante = true;
                            break;
                        }
                        Pile::Op(op) => out.push(Instr::Binaire(op)),
                        Pile::Fonction(f) => out.push(Instr::Fonction(f)),
                    }
                }
                if !ouvrante {
                    debug!("rpn: ')' sans '(' correspondante");
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Pile::Fonction(f)) = ops.last() {
                    out.push(Instr::Fonction(*f));
                    ops.pop();
                }
            }

            Tok::Virgule | Tok::Point => {}
        }
    }

    // vide la pile ops (les '(' restantes disparaissent : pas d’instruction parenthèse)
    while let Some(top) = ops.pop() {
        match top {
            Pile::Op(op) => out.push(Instr::Binaire(op)),
            Pile::Fonction(f) => out.push(Instr::Fonction(f)),
            Pile::LPar => debug!("rpn: '(' non fermée ignorée"),
        }
    }

    out
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_rpn(rpn: &[Instr]) -> String {
    rpn.iter()
        .map(|i| match i {
            Instr::Operande(v) => format!("{v}"),
            Instr::Binaire(op) => op.symbole().to_string(),
            Instr::Fonction(f) => f.nom().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
