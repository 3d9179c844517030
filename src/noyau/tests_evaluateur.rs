//! Tests de l’évaluateur : grammaire, fonctions, constantes, formatage.
//!
//! On compare à une tolérance près dès qu’une primitive transcendante intervient.

use super::erreur::ErreurCalc;
use super::eval::evaluer;
use super::format::{format_resultat, lire_nombre};

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

fn assert_affiche(expr: &str, attendu: &str) {
    assert_eq!(format_resultat(eval_ok(expr)), attendu, "expr={expr:?}");
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn precedence_et_parentheses() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("10-4-3"), 3.0);
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("  7 / 2 "), 3.5);
}

#[test]
fn moins_unaire() {
    assert_eq!(eval_ok("-2^2"), -4.0);
    assert_eq!(eval_ok("2^-1"), 0.5);
    assert_eq!(eval_ok("-(2+3)"), -5.0);
    assert_eq!(eval_ok("4*-2"), -8.0);
    assert_proche("5^(-1)", 0.2);
    assert_eq!(eval_ok("--3"), 3.0);
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn racines() {
    assert_eq!(eval_ok("sqrt(9)"), 3.0);
    assert_eq!(eval_ok("cbrt(27)"), 3.0);
    assert_eq!(eval_ok("cbrt(-8)"), -2.0);
}

#[test]
fn logarithmes_et_exponentielle() {
    assert_proche("log(e)", 1.0);
    assert_proche("log10(1000)", 3.0);
    assert_proche("exp(0)", 1.0);
    assert_proche("(log(8)/log(2))", 3.0);
    assert_proche("10^2", 100.0);
}

#[test]
fn trig_radians_et_degres() {
    assert_proche("sin(pi/2)", 1.0);
    assert_proche("cos(0)", 1.0);
    assert_proche("atan(1)*4", std::f64::consts::PI);
    assert_proche("sin(toRadians(30))", 0.5);
    assert_proche("cos(toRadians(60))", 0.5);
    assert_proche("tan(toRadians(45))", 1.0);
    assert_affiche("sin(toRadians(30))", "0.5");
}

#[test]
fn hyperboliques() {
    assert_proche("sinh(0)", 0.0);
    assert_proche("cosh(0)", 1.0);
    assert_proche("tanh(1000)", 1.0);
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn constantes_resolues_au_tokenizer() {
    assert_proche("pi", std::f64::consts::PI);
    assert_proche("2pi", 2.0 * std::f64::consts::PI);
    assert_proche("e^1", std::f64::consts::E);
    // `exp` et `log10` ne sont pas touchés par la constante e
    assert_proche("exp(1)", std::f64::consts::E);
    assert_proche("log10(100)", 2.0);
}

/* ------------------------ Échecs ------------------------ */

#[test]
fn echecs_de_syntaxe() {
    for s in ["", "2+", "(2+3", "2+3)", "abc(2)", "1..2", "sqrt", "*3", "Error"] {
        assert!(
            matches!(evaluer(s), Err(ErreurCalc::Syntaxe(_))),
            "attendu syntaxe pour {s:?}"
        );
    }
}

#[test]
fn echecs_de_domaine() {
    for s in ["1/0", "5/(2-2)", "sqrt(-4)", "log(-1)", "acos(2)"] {
        assert!(
            matches!(evaluer(s), Err(ErreurCalc::Domaine(_))),
            "attendu domaine pour {s:?}"
        );
    }
}

/* ------------------------ Formatage ------------------------ */

#[test]
fn formatage_idempotent() {
    for s in ["1/3", "2/3", "pi", "e", "sqrt(2)", "-1/7", "123456789.123456789", "1/1024"] {
        let f = format_resultat(eval_ok(s));
        let relu = lire_nombre(&f).unwrap();
        assert_eq!(format_resultat(relu), f, "expr={s:?}");
    }
}

#[test]
fn formatage_dix_decimales() {
    assert_affiche("pi", "3.1415926536");
    assert_affiche("1/8", "0.125");
    assert_affiche("0.1+0.2", "0.3");
}
