// src/noyau/jetons.rs

use super::operateurs::Operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + "pi" + mots inconnus : le RPN décidera.
    Ident(String),

    Op(Operateur),

    LPar,
    RPar,
    Virgule,

    // '.' isolé (pas un nombre) : ignoré par le RPN.
    Point,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux `[0-9]*\.?[0-9]+` (ex: 12, 3.5, .5) ; "3." donne Num(3) puis Point
/// - identifiants [a-zA-Z_]+ (casse conservée)
/// - opérateurs + - * / % ^
/// - symboles ( ) , .
///
/// Tout autre caractère est ignoré en silence : la tokenisation n’échoue jamais.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre (avant le '.' seul : ".5" est un nombre)
        if let Some(fin) = fin_nombre(&chars, i) {
            let texte: String = chars[i..fin].iter().collect();
            // le motif garantit un littéral f64 valide
            if let Ok(v) = texte.parse::<f64>() {
                out.push(Tok::Num(v));
            }
            i = fin;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_]+
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphabetic() || chars[i] == '_') {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        if let Some(op) = Operateur::depuis_symbole(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            ',' => out.push(Tok::Virgule),
            '.' => out.push(Tok::Point),
            _ => {} // caractère inconnu : sauté
        }
        i += 1;
    }

    out
}

/// Fin (exclue) du plus long nombre `[0-9]*\.?[0-9]+` commençant en `i`, s’il existe.
fn fin_nombre(chars: &[char], i: usize) -> Option<usize> {
    let chiffres = |mut j: usize| {
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let fin_entier = chiffres(i);

    // partie fractionnaire : seulement si au moins un chiffre suit le point
    if fin_entier < chars.len() && chars[fin_entier] == '.' {
        let fin_frac = chiffres(fin_entier + 1);
        if fin_frac > fin_entier + 1 {
            return Some(fin_frac);
        }
    }

    (fin_entier > i).then_some(fin_entier)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),
            Tok::Op(op) => op.symbole().to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Virgule => ",".to_string(),
            Tok::Point => ".".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
