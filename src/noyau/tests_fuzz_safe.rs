//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur / profondeur bornées
//! - budget temps global
//! - invariant clé : Ok(v) => v fini ; jamais de panique

use std::time::{Duration, Instant};

use super::eval::evaluate_expression;
use super::jetons::tokenize;
use super::rpn::{to_rpn, Instr};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const OPS: [&str; 6] = ["+", "-", "*", "/", "%", "^"];
const FONCTIONS: [&str; 10] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "ln", "log", "exp", "sqrt",
];

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(100))
    } else {
        format!("{entier}")
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => "pi".to_string(),
        _ => gen_nombre(rng),
    }
}

/// Expression bien formée (parenthèses équilibrées, opérateurs binaires entourés).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }
    match rng.pick(4) {
        0 => gen_atome(rng),
        1 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        2 => format!("({})", gen_expr(rng, depth - 1)),
        _ => {
            let op = OPS[rng.pick(OPS.len() as u32) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Bruit : n’importe quels caractères (y compris hors alphabet).
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '.', '+', '-', '*', '/', '%', '^', '(', ')', '(', ')', ',', ' ',
        's', 'i', 'n', 'p', 'q', 'r', 't', 'l', 'o', 'g', 'P', 'I', '_', '$', '#', 'é', '√',
        '\t',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn check_resultat(expr: &str) {
    if let Ok(v) = evaluate_expression(expr) {
        assert!(v.is_finite(), "expr={expr:?} v={v}");
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..4000 {
        budget(t0, Duration::from_secs(5));
        let len = rng.pick(40) as usize;
        let s = gen_bruit(&mut rng, len);
        check_resultat(&s);
    }
}

#[test]
fn fuzz_expressions_bien_formees() {
    let t0 = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..2000 {
        budget(t0, Duration::from_secs(5));
        let s = gen_expr(&mut rng, 4);

        // forme RPN : chaque binaire consomme 2 et rend 1 => opérandes = binaires + 1
        let rpn = to_rpn(&tokenize(&s));
        let operandes = rpn
            .iter()
            .filter(|i| matches!(i, Instr::Operande(_)))
            .count();
        let binaires = rpn
            .iter()
            .filter(|i| matches!(i, Instr::Binaire(_)))
            .count();
        assert_eq!(operandes, binaires + 1, "expr={s:?}");

        // bien formée : seul le non-fini peut échouer
        match evaluate_expression(&s) {
            Ok(v) => assert!(v.is_finite(), "expr={s:?}"),
            Err(e) => assert!(
                matches!(e, super::erreur::ErreurCalcul::NonFini(_)),
                "expr={s:?} err={e}"
            ),
        }
    }
}

#[test]
fn fuzz_idempotence() {
    let mut rng = Rng::new(7);
    for _ in 0..500 {
        let s = if rng.coin() {
            gen_expr(&mut rng, 3)
        } else {
            gen_bruit(&mut rng, 16)
        };
        assert_eq!(
            format!("{:?}", evaluate_expression(&s)),
            format!("{:?}", evaluate_expression(&s)),
            "expr={s:?}"
        );
    }
}

/// Référence naïve pour + - * / sans parenthèses :
/// produits de gauche à droite dans chaque terme, puis somme de gauche à droite.
fn reference_quatre_operations(nombres: &[f64], ops: &[char]) -> f64 {
    let mut somme: Option<(f64, char)> = None; // (accumulateur, signe en attente)
    let mut terme = nombres[0];

    for (op, &x) in ops.iter().zip(&nombres[1..]) {
        match op {
            '*' => terme *= x,
            '/' => terme /= x,
            _ => {
                somme = Some(match somme {
                    None => (terme, *op),
                    Some((acc, '+')) => (acc + terme, *op),
                    Some((acc, _)) => (acc - terme, *op),
                });
                terme = x;
            }
        }
    }

    match somme {
        None => terme,
        Some((acc, '+')) => acc + terme,
        Some((acc, _)) => acc - terme,
    }
}

#[test]
fn fuzz_quatre_operations_precedence_standard() {
    let t0 = Instant::now();
    let mut rng = Rng::new(2024);

    for _ in 0..2000 {
        budget(t0, Duration::from_secs(5));

        let n = 1 + rng.pick(8) as usize;
        let nombres: Vec<f64> = (0..n).map(|_| (1 + rng.pick(20)) as f64).collect();
        let ops: Vec<char> = (1..n)
            .map(|_| ['+', '-', '*', '/'][rng.pick(4) as usize])
            .collect();

        let mut s = format!("{}", nombres[0]);
        for (op, x) in ops.iter().zip(&nombres[1..]) {
            s.push(*op);
            s.push_str(&format!("{x}"));
        }

        let attendu = reference_quatre_operations(&nombres, &ops);
        assert_eq!(evaluate_expression(&s), Ok(attendu), "expr={s:?}");
    }
}

#[test]
fn fuzz_pli_gauche_meme_precedence() {
    let mut rng = Rng::new(99);

    // pour chaque niveau (sauf ^), regroupement de gauche à droite
    for niveau in [['+', '-', '+'], ['*', '/', '%']] {
        for _ in 0..500 {
            let n = 2 + rng.pick(6) as usize;
            let nombres: Vec<f64> = (0..n).map(|_| (1 + rng.pick(30)) as f64).collect();

            let mut s = format!("{}", nombres[0]);
            let mut attendu = nombres[0];
            for &x in &nombres[1..] {
                let op = niveau[rng.pick(3) as usize];
                s.push(op);
                s.push_str(&format!("{x}"));
                attendu = match op {
                    '+' => attendu + x,
                    '-' => attendu - x,
                    '*' => attendu * x,
                    '/' => attendu / x,
                    _ => attendu % x,
                };
            }
            assert_eq!(evaluate_expression(&s), Ok(attendu), "expr={s:?}");
        }
    }
}

#[test]
fn fuzz_domaine_asin_acos() {
    let mut rng = Rng::new(314);
    for _ in 0..500 {
        // |x| > 1 : 1.001 .. 100
        let x = 1.001 + rng.pick(99_000) as f64 / 1000.0;
        for s in [
            format!("asin({x})"),
            format!("acos({x})"),
            format!("asin(0-{x})"),
            format!("acos(0-{x})"),
        ] {
            assert!(evaluate_expression(&s).is_err(), "expr={s:?}");
        }
    }
}
