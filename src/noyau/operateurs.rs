// src/noyau/operateurs.rs
//
// Tables statiques : opérateurs binaires + fonctions unaires.
// Tout est `const` : rien n’est construit par appel, rien n’est jamais modifié.

use num_traits::float::FloatConst;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
    Puissance,
}

/// Fiche d’un opérateur (arité toujours 2).
#[derive(Clone, Copy, Debug)]
pub struct FicheOp {
    pub symbole: char,
    pub precedence: u8,
    pub assoc: Assoc,
}

const FICHES: [(Operateur, FicheOp); 6] = [
    (Operateur::Plus, FicheOp { symbole: '+', precedence: 2, assoc: Assoc::Gauche }),
    (Operateur::Moins, FicheOp { symbole: '-', precedence: 2, assoc: Assoc::Gauche }),
    (Operateur::Fois, FicheOp { symbole: '*', precedence: 3, assoc: Assoc::Gauche }),
    (Operateur::Divise, FicheOp { symbole: '/', precedence: 3, assoc: Assoc::Gauche }),
    (Operateur::Modulo, FicheOp { symbole: '%', precedence: 3, assoc: Assoc::Gauche }),
    (Operateur::Puissance, FicheOp { symbole: '^', precedence: 4, assoc: Assoc::Droite }),
];

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        FICHES.iter().find(|(_, f)| f.symbole == c).map(|(op, _)| *op)
    }

    pub fn fiche(self) -> FicheOp {
        // FICHES couvre toutes les variantes, dans l’ordre de déclaration
        FICHES[self as usize].1
    }

    pub fn symbole(self) -> char {
        self.fiche().symbole
    }

    pub fn precedence(self) -> u8 {
        self.fiche().precedence
    }

    pub fn assoc(self) -> Assoc {
        self.fiche().assoc
    }

    /// `a op b`, sémantique IEEE 754 (pas d’erreur ici : la finitude est vérifiée à la fin).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
            // reste tronqué : même signe que le dividende
            Operateur::Modulo => a % b,
            Operateur::Puissance => a.powf(b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log,
    Exp,
    Sqrt,
}

const FONCTIONS: [(&str, Fonction); 10] = [
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("ln", Fonction::Ln),
    ("log", Fonction::Log),
    ("exp", Fonction::Exp),
    ("sqrt", Fonction::Sqrt),
];

impl Fonction {
    /// Noms exacts, sensibles à la casse ("Sin" n’est pas une fonction).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        FONCTIONS.iter().find(|(n, _)| *n == nom).map(|(_, f)| *f)
    }

    pub fn nom(self) -> &'static str {
        FONCTIONS[self as usize].0
    }

    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Asin => x.asin(),
            Fonction::Acos => x.acos(),
            Fonction::Atan => x.atan(),
            Fonction::Ln => x.ln(),
            Fonction::Log => x.log10(),
            Fonction::Exp => x.exp(),
            Fonction::Sqrt => x.sqrt(),
        }
    }
}

/// "pi" / "PI" / "Pi" … (insensible à la casse).
pub fn est_pi(nom: &str) -> bool {
    nom.eq_ignore_ascii_case("pi")
}

pub fn valeur_pi() -> f64 {
    f64::PI()
}
