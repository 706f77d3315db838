//! Tests scientifiques (campagne) : propriétés de bout en bout + limites contrôlées.
//!
//! - précédence / associativité / moins unaire
//! - mode d’angle (DEG / RAD), trig inverse
//! - factorielle et son domaine
//! - idempotence : réévaluer le texte du résultat redonne la même valeur
//! - entrées mal formées : toujours une erreur, jamais un nombre “silencieux”

use std::time::{Duration, Instant};

use super::erreur::Categorie;
use super::{eval_expression, format_resultat, ErreurCalc, ModeAngle};

const EPS: f64 = 1e-9;

fn eval_ok(expr: &str, mode: ModeAngle) -> f64 {
    eval_expression(expr, mode).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_valeur(expr: &str, mode: ModeAngle, attendu: f64) {
    let v = eval_ok(expr, mode);
    assert!(
        (v - attendu).abs() < EPS,
        "expr={expr:?} mode={mode} obtenu={v} attendu={attendu}"
    );
}

fn assert_echec(expr: &str) -> ErreurCalc {
    match eval_expression(expr, ModeAngle::Degres) {
        Ok(v) => panic!("expr={expr:?} devait échouer, obtenu {v}"),
        Err(e) => e,
    }
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Valeurs de référence ------------------------ */

#[test]
fn sci_valeurs_de_reference() {
    use ModeAngle::*;

    assert_eq!(eval_ok("2+3*4", Degres), 14.0);
    assert_eq!(eval_ok("(2+3)*4", Degres), 20.0);
    assert_eq!(eval_ok("2^3^2", Degres), 512.0);
    assert_eq!(eval_ok("-3+5", Degres), 2.0);
    assert_eq!(eval_ok("3-(-2)", Degres), 5.0);
    assert_eq!(eval_ok("sqrt(9)", Degres), 3.0);
    assert_eq!(eval_ok("3!", Degres), 6.0);

    assert_valeur("sin(30)", Degres, 0.5);
    assert_valeur("sin(pi/6)", Radians, 0.5);
    assert_valeur("log(100)", Degres, 2.0);
    assert_valeur("ln(e)", Degres, 1.0);
}

#[test]
fn sci_mode_angle_ne_touche_que_la_trig() {
    for expr in ["2+3*4", "sqrt(2)", "ln(10)", "abs(-3.5)", "5!", "2^0.5"] {
        assert_eq!(
            eval_ok(expr, ModeAngle::Degres),
            eval_ok(expr, ModeAngle::Radians),
            "expr={expr:?}"
        );
    }
}

#[test]
fn sci_trig_inverse_aller_retour() {
    // asin(sin(x)) = x sur [-90, 90] en degrés
    for x in [-90.0, -45.0, -30.0, 0.0, 10.0, 60.0, 90.0] {
        let expr = format!("asin(sin({}))", format_resultat(x));
        assert_valeur(&expr, ModeAngle::Degres, x);
    }
    // atan(tan(x)) = x sur ]-π/2, π/2[ en radians
    assert_valeur("atan(tan(1))", ModeAngle::Radians, 1.0);
    assert_valeur("acos(cos(2))", ModeAngle::Radians, 2.0);
}

#[test]
fn sci_identites() {
    // sin² + cos² = 1, dans les deux modes
    assert_valeur("sin(37)^2 + cos(37)^2", ModeAngle::Degres, 1.0);
    assert_valeur("sin(1.3)^2 + cos(1.3)^2", ModeAngle::Radians, 1.0);
    // ln / exp-like via e^x
    assert_valeur("ln(e^3)", ModeAngle::Degres, 3.0);
    assert_valeur("log(10^5)", ModeAngle::Degres, 5.0);
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle_domaine() {
    assert_eq!(eval_ok("10!", ModeAngle::Degres), 3_628_800.0);
    assert_eq!(eval_ok("(2+1)!", ModeAngle::Degres), 6.0);
    assert_eq!(eval_ok("3!!", ModeAngle::Degres), 720.0);
    assert_eq!(eval_ok("200!", ModeAngle::Degres), f64::INFINITY);

    for expr in ["(-1)!", "0.5!", "(1/0)!", "(0/0)!"] {
        let e = assert_echec(expr);
        assert_eq!(e, ErreurCalc::Factorielle, "expr={expr:?}");
        assert_eq!(e.categorie(), Categorie::Evaluation);
    }
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    let exprs = [
        "2+3*4",
        "1/3",
        "-2/7",
        "sqrt(2)",
        "pi",
        "e^10",
        "2^60",
        "10^-7",
        "sin(1)",
        "170!",
    ];

    for mode in [ModeAngle::Degres, ModeAngle::Radians] {
        for expr in exprs {
            let v = eval_ok(expr, mode);
            assert!(v.is_finite(), "expr={expr:?}");
            let v2 = eval_ok(&format_resultat(v), mode);
            assert!(
                (v - v2).abs() <= EPS * v.abs().max(1.0),
                "expr={expr:?} v={v} v2={v2}"
            );
        }
    }
}

/* ------------------------ Entrées mal formées ------------------------ */

#[test]
fn sci_malformees() {
    let cas = [
        ("2+", Categorie::Evaluation),
        ("((2)", Categorie::Syntaxe),
        ("", Categorie::Syntaxe),
        ("foo(1)", Categorie::Syntaxe),
        (")(", Categorie::Syntaxe),
        ("1..2", Categorie::Syntaxe),
        ("*3", Categorie::Evaluation),
        ("3 4 +", Categorie::Syntaxe),
        ("1,2", Categorie::Syntaxe),
        ("sqrt(1,2)", Categorie::Evaluation),
        ("2,", Categorie::Syntaxe),
        (",2", Categorie::Syntaxe),
        ("(,2)", Categorie::Syntaxe),
        ("sqrt(4,)", Categorie::Syntaxe),
        ("(2,)", Categorie::Syntaxe),
        ("2+3,", Categorie::Syntaxe),
        ("()", Categorie::Syntaxe),
        ("sin", Categorie::Syntaxe),
        ("sqrt 4 + 5", Categorie::Syntaxe),
        ("2 & 3", Categorie::Lexicale),
        ("√4", Categorie::Lexicale),
    ];

    for (expr, categorie) in cas {
        let e = assert_echec(expr);
        assert_eq!(e.categorie(), categorie, "expr={expr:?} err={e}");
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..1000 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    // 1000*(0.5) = 500 (exact en binaire)
    assert_eq!(eval_ok(&expr, ModeAngle::Degres), 500.0);
}

#[test]
fn sci_stress_fonctions_imbriquees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // abs(abs(...(-1)...)) profond
    let n = 500;
    let expr = format!("{}-1{}", "abs(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_eq!(eval_ok(&expr, ModeAngle::Degres), 1.0);
}
