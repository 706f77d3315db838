//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une expression entièrement parenthésée vaut son évaluation directe

use std::time::{Duration, Instant};

use super::format_resultat;
use super::{eval_expression, ModeAngle};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Même valeur (NaN == NaN ici).
fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

fn gen_atom(rng: &mut Rng) -> (String, f64) {
    match rng.pick(4) {
        0 => ("pi".to_string(), std::f64::consts::PI),
        1 => ("2.5".to_string(), 2.5),
        _ => {
            let n = rng.pick(10);
            (format!("{n}"), n as f64)
        }
    }
}

/// Expression entièrement parenthésée + sa valeur calculée directement.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(7) {
        0 => gen_atom(rng),
        1 => {
            let (sa, a) = gen_expr(rng, depth - 1);
            let (sb, b) = gen_expr(rng, depth - 1);
            (format!("({sa}+{sb})"), a + b)
        }
        2 => {
            let (sa, a) = gen_expr(rng, depth - 1);
            let (sb, b) = gen_expr(rng, depth - 1);
            (format!("({sa}-{sb})"), a - b)
        }
        3 => {
            let (sa, a) = gen_expr(rng, depth - 1);
            let (sb, b) = gen_expr(rng, depth - 1);
            (format!("({sa}*{sb})"), a * b)
        }
        4 => {
            let (sa, a) = gen_expr(rng, depth - 1);
            let (sb, b) = gen_expr(rng, depth - 1);
            (format!("({sa}/{sb})"), a / b)
        }
        5 => {
            // exposant petit : reste lisible
            let (sa, a) = gen_expr(rng, depth - 1);
            let k = rng.pick(4);
            (format!("({sa}^{k})"), a.powf(k as f64))
        }
        _ => {
            let (sa, a) = gen_expr(rng, depth - 1);
            (format!("(-{sa})"), -a)
        }
    }
}

/// Chaîne quelconque sur l’alphabet accepté (ou presque).
fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '+', '-', '*', '/', '^', '(', ')', '!', ',', ' ', 's', 'i', 'n',
        'p', 'e', 'l', 'o', 'g', '#',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Virgule jamais en tête, en fin, ni collée à '(' ')' ou une autre virgule.
fn virgules_bien_placees(s: &str) -> bool {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    !compact.starts_with(',')
        && !compact.ends_with(',')
        && !compact.contains("(,")
        && !compact.contains(",)")
        && !compact.contains(",,")
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_parenthese_vaut_evaluation_directe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        let v = eval_expression(&expr, ModeAngle::Degres)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        assert!(
            meme_valeur(v, attendu),
            "expr={expr:?} obtenu={v} attendu={attendu}"
        );
    }
}

#[test]
fn fuzz_safe_idempotence_du_texte_resultat() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut vus = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let (expr, _) = gen_expr(&mut rng, 4);
        let v = match eval_expression(&expr, ModeAngle::Radians) {
            Ok(v) if v.is_finite() => v,
            _ => continue,
        };

        let texte = format_resultat(v);
        let v2 = eval_expression(&texte, ModeAngle::Radians)
            .unwrap_or_else(|e| panic!("expr={expr:?} texte={texte:?} err={e}"));
        assert_eq!(v, v2, "expr={expr:?} texte={texte:?}");
        vus += 1;
    }

    assert!(vus > 50, "trop peu de résultats finis: {vus}");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(12) as usize;
        let s = gen_bruit(&mut rng, longueur);

        // pas de panique ; et un succès ne cache jamais une virgule mal placée
        match eval_expression(&s, ModeAngle::Degres) {
            Ok(v) => {
                assert!(virgules_bien_placees(&s), "s={s:?} accepté: {v}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
    assert_eq!(seen_ok + seen_err, 400);
}

#[test]
fn fuzz_safe_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // RPN + pile itératives : pas de récursion, profondeur sans risque
    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_eq!(eval_expression(&expr, ModeAngle::Degres), Ok(1.0));
}
