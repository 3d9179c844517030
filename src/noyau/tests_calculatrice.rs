//! Tests de scénario : suites de touches telles que la vue les envoie.
//!
//! Invariants vérifiés :
//! - une erreur n’est jamais fatale et la touche suivante repart de zéro
//! - la mémoire n’est modifiée que par une lecture réussie
//! - le mode degrés ne change que la saisie des touches trig

use crate::presse_papiers::PressePapiersLocal;

use super::calculatrice::{
    Calculatrice, FonctionUnaire, Phase, TEXTE_COLLAGE_INVALIDE, TEXTE_DIVISION_ZERO,
    TEXTE_ERREUR,
};
use super::fonctions::{Fonction, ModeAngle};
use super::PressePapiers;

fn touches(calc: &mut Calculatrice, jetons: &[&str]) {
    for j in jetons {
        calc.ajouter(j);
    }
}

fn resultat_de(jetons: &[&str]) -> Calculatrice {
    let mut c = Calculatrice::default();
    touches(&mut c, jetons);
    c.egal();
    c
}

/* ------------------------ = ------------------------ */

#[test]
fn scenario_egal_simple() {
    assert_eq!(resultat_de(&["2", "+", "3", "*", "4"]).affichage(), "14");
    assert_eq!(resultat_de(&["(", "2", "+", "3", ")", "*", "4"]).affichage(), "20");
    assert_eq!(resultat_de(&["1", "/", "3"]).affichage(), "0.3333333333");
    assert_eq!(resultat_de(&["10^", "3"]).affichage(), "1000");
}

#[test]
fn scenario_resultat_reutilise_par_operateur() {
    let mut c = resultat_de(&["6", "*", "7"]);
    assert_eq!(c.tampon(), "42");
    // en phase Resultat, un opérateur vide aussi le tampon (règle unique)
    c.ajouter("+");
    assert_eq!(c.affichage(), "+");
}

#[test]
fn scenario_egal_vide_et_division_par_zero() {
    let c = resultat_de(&[]);
    assert_eq!(c.affichage(), TEXTE_ERREUR);

    let mut c = resultat_de(&["5", "/", "0"]);
    assert_eq!(c.affichage(), TEXTE_ERREUR);
    assert_eq!(c.tampon(), "5/0");
    c.ajouter("9");
    assert_eq!(c.affichage(), "9");
}

/* ------------------------ Mode d’angle ------------------------ */

#[test]
fn scenario_sinus_en_degres() {
    let mut c = Calculatrice::new(ModeAngle::Degres);
    c.ajouter_fonction(Fonction::Sin);
    c.ajouter("30");
    assert_eq!(c.affichage(), "sin(toRadians(30");
    c.egal();
    assert_eq!(c.affichage(), "0.5");
}

#[test]
fn scenario_sinus_en_radians() {
    let mut c = Calculatrice::default();
    c.ajouter_fonction(Fonction::Sin);
    c.ajouter("30");
    c.ajouter(")");
    assert_eq!(c.affichage(), "sin(30)");
    c.egal();
    assert_eq!(c.affichage(), "-0.9880316241");
}

#[test]
fn scenario_changement_de_mode() {
    let mut c = Calculatrice::default();
    c.definir_mode_angle(ModeAngle::Degres);
    c.ajouter_fonction(Fonction::Cos);
    c.ajouter("60");
    c.ajouter(")");
    c.ajouter(")");
    c.ajouter("+");
    c.definir_mode_angle(ModeAngle::Radians);
    c.ajouter_fonction(Fonction::Cos);
    c.ajouter("0");
    assert_eq!(c.affichage(), "cos(toRadians(60))+cos(0");
    c.egal();
    assert_eq!(c.affichage(), "1.5");
}

#[test]
fn scenario_fonctions_non_trig_ignorent_le_mode() {
    let mut c = Calculatrice::new(ModeAngle::Degres);
    c.ajouter_fonction(Fonction::Sinh);
    c.ajouter_fonction(Fonction::Log10);
    assert_eq!(c.affichage(), "sinh(log10(");
}

/* ------------------------ Fonctions unaires ------------------------ */

#[test]
fn scenario_fonction_sur_resultat() {
    let mut c = resultat_de(&["4", "+", "5"]);
    c.appliquer_fonction(FonctionUnaire::Sqrt);
    assert_eq!(c.affichage(), "sqrt(9)");
    assert_eq!(c.phase(), Phase::Edition);
    c.egal();
    assert_eq!(c.affichage(), "3");

    c.appliquer_fonction(FonctionUnaire::Cube);
    assert_eq!(c.affichage(), "(3)^3");
    c.egal();
    assert_eq!(c.affichage(), "27");
}

#[test]
fn scenario_fonction_en_saisie() {
    let mut c = Calculatrice::default();
    c.ajouter("3");
    c.appliquer_fonction(FonctionUnaire::Carre);
    assert_eq!(c.affichage(), "3^2");
    c.ajouter("+");
    c.appliquer_fonction(FonctionUnaire::Cbrt);
    c.ajouter("27");
    c.egal();
    assert_eq!(c.affichage(), "12");
}

/* ------------------------ ± et 1/x ------------------------ */

#[test]
fn scenario_changer_signe() {
    let mut c = Calculatrice::default();
    c.ajouter("2+3");
    c.changer_signe();
    assert_eq!(c.affichage(), "-(2+3)");
    c.egal();
    assert_eq!(c.affichage(), "-5");

    c.changer_signe();
    assert_eq!(c.affichage(), "5");
    assert_eq!(c.phase(), Phase::Resultat);
}

#[test]
fn scenario_changer_signe_apres_erreur() {
    let mut c = resultat_de(&["2", "+"]);
    c.changer_signe();
    assert_eq!(c.affichage(), TEXTE_ERREUR);
    assert_eq!(c.phase(), Phase::Resultat);
}

#[test]
fn scenario_inverse() {
    let mut c = resultat_de(&["4"]);
    c.inverse();
    assert_eq!(c.affichage(), "0.25");

    let mut c = Calculatrice::default();
    c.ajouter("8");
    c.inverse();
    assert_eq!(c.affichage(), "8^(-1)");
    c.egal();
    assert_eq!(c.affichage(), "0.125");
}

#[test]
fn scenario_inverse_de_zero() {
    let mut c = resultat_de(&["5", "-", "5"]);
    c.memoire_stocker();
    assert_eq!(c.memoire(), 0.0);

    c.memoire_effacer();
    c.ajouter("7");
    c.memoire_stocker();
    let mut c2 = c.clone();
    c2.effacer();
    touches(&mut c2, &["3", "-", "3"]);
    c2.egal();
    c2.inverse();
    assert_eq!(c2.affichage(), TEXTE_DIVISION_ZERO);
    assert_eq!(c2.memoire(), 7.0);
    assert_eq!(c2.phase(), Phase::Resultat);

    c2.ajouter("1");
    assert_eq!(c2.affichage(), "1");
}

/* ------------------------ % ------------------------ */

#[test]
fn scenario_pourcentage() {
    let mut c = Calculatrice::default();
    c.ajouter("200+10");
    c.pourcentage();
    assert_eq!(c.affichage(), "200+20.0");
    c.egal();
    assert_eq!(c.affichage(), "220");

    let mut c = Calculatrice::default();
    c.ajouter("10");
    c.pourcentage();
    assert_eq!(c.affichage(), "0.1");
}

#[test]
fn scenario_pourcentage_cas_limites() {
    // partie gauche invalide : pourcentage simple
    let mut c = Calculatrice::default();
    c.ajouter("(2+*50");
    c.pourcentage();
    assert_eq!(c.affichage(), "(2+*0.5");

    // pas de nombre : rien
    let mut c = Calculatrice::default();
    c.ajouter("pi");
    c.pourcentage();
    assert_eq!(c.affichage(), "pi");

    // sur un résultat : rien
    let mut c = resultat_de(&["50"]);
    c.pourcentage();
    assert_eq!(c.affichage(), "50");

    // moins en tête : pas de partie gauche
    let mut c = Calculatrice::default();
    c.ajouter("-20");
    c.pourcentage();
    assert_eq!(c.affichage(), "-0.2");
}

#[test]
fn scenario_pourcentage_balayage_lexical() {
    // le texte après le dernier nombre est abandonné, comme le balayage d’origine
    let mut c = Calculatrice::default();
    c.ajouter("sqrt(16)");
    c.pourcentage();
    assert_eq!(c.affichage(), "sqrt(0.16");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn scenario_memoire() {
    let mut c = resultat_de(&["1", "2"]);
    c.memoire_stocker();
    assert_eq!(c.memoire(), 12.0);

    let mut c2 = c.clone();
    c2.ajouter("3*2");
    c2.memoire_ajouter();
    assert_eq!(c2.memoire(), 18.0);
    c2.memoire_soustraire();
    assert_eq!(c2.memoire(), 12.0);

    c2.egal();
    c2.memoire_rappeler();
    assert_eq!(c2.affichage(), "12");
    c2.ajouter("+");
    c2.memoire_rappeler();
    assert_eq!(c2.affichage(), "12+12");

    c2.memoire_effacer();
    assert_eq!(c2.memoire(), 0.0);
}

#[test]
fn scenario_memoire_en_erreur() {
    let mut c = Calculatrice::default();
    c.ajouter("5");
    c.memoire_stocker();
    assert_eq!(c.memoire(), 5.0);

    c.ajouter("+");
    c.memoire_ajouter();
    assert_eq!(c.affichage(), TEXTE_ERREUR);
    assert_eq!(c.memoire(), 5.0);
    assert_eq!(c.phase(), Phase::Resultat);

    // affichage "Error" : ignoré, sans nouvelle erreur
    c.memoire_soustraire();
    assert_eq!(c.memoire(), 5.0);

    // affichage vide : ignoré
    c.effacer();
    c.memoire_stocker();
    assert_eq!(c.memoire(), 5.0);
}

#[test]
fn scenario_memoire_depassement() {
    let mut c = Calculatrice::default();
    c.ajouter(&format!("1{}", "0".repeat(308)));
    c.memoire_stocker();
    assert_eq!(c.memoire(), 1e308);

    // 1e308 + 1e308 déborde : registre intact, "Error" à l’écran
    c.memoire_ajouter();
    assert_eq!(c.affichage(), TEXTE_ERREUR);
    assert_eq!(c.phase(), Phase::Resultat);
    assert_eq!(c.memoire(), 1e308);

    // le rappel reste une saisie lisible par l’évaluateur
    c.memoire_rappeler();
    assert!(c.affichage().starts_with("1000"));
    assert!(c.affichage().chars().all(|ch| ch.is_ascii_digit()));
    c.egal();
    assert_eq!(c.affichage().len(), 309);
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn scenario_effacer() {
    let mut c = resultat_de(&["9", "+", "1"]);
    c.effacer();
    assert_eq!(c.affichage(), "");
    assert_eq!(c.tampon(), "");
    assert_eq!(c.phase(), Phase::Edition);
}

#[test]
fn scenario_effacer_entree() {
    let mut c = Calculatrice::default();
    c.ajouter("12+34*5");
    c.effacer_entree();
    assert_eq!(c.affichage(), "12+34*");
    c.ajouter("2");
    c.egal();
    assert_eq!(c.affichage(), "80");
}

/* ------------------------ logₙ ------------------------ */

#[test]
fn scenario_log_base() {
    let mut c = Calculatrice::default();
    c.ajouter_log_base("2", "8").unwrap();
    assert_eq!(c.affichage(), "(log(8)/log(2.0))");
    c.egal();
    assert_eq!(c.affichage(), "3");
}

#[test]
fn scenario_log_base_reecrite_depuis_sa_valeur() {
    // notation exponentielle acceptée à la lecture, réécrite en littéral lisible
    let mut c = Calculatrice::default();
    c.ajouter_log_base("1e2", "100").unwrap();
    assert_eq!(c.affichage(), "(log(100)/log(100.0))");
    c.egal();
    assert_eq!(c.affichage(), "1");

    let mut c = Calculatrice::default();
    c.ajouter_log_base(" 0.5 ", "4").unwrap();
    c.egal();
    assert_eq!(c.affichage(), "-2");

    let mut c = Calculatrice::default();
    for base in ["inf", "NaN", "1E0"] {
        assert!(c.ajouter_log_base(base, "8").is_err(), "base={base:?}");
    }
    assert_eq!(c.affichage(), "");
}

#[test]
fn scenario_log_base_refusee() {
    let mut c = Calculatrice::default();
    c.ajouter("1+");
    for base in ["1", "0", "-3", "deux"] {
        assert!(c.ajouter_log_base(base, "8").is_err(), "base={base:?}");
    }
    assert_eq!(c.affichage(), "1+");

    // argument vide : annulation
    c.ajouter_log_base("10", "  ").unwrap();
    assert_eq!(c.affichage(), "1+");
}

/* ------------------------ Presse-papiers ------------------------ */

#[test]
fn scenario_copier_coller() {
    let mut pp = PressePapiersLocal::default();

    let c = resultat_de(&["6", "*", "7"]);
    c.copier(&mut pp);
    assert_eq!(pp.lire().as_deref(), Ok("42"));

    let mut d = resultat_de(&["1"]);
    pp.ecrire("2*(3+4").unwrap();
    d.coller(&mut pp);
    assert_eq!(d.affichage(), "2*(3+4");
    assert_eq!(d.phase(), Phase::Edition);
    d.ajouter(")");
    d.egal();
    assert_eq!(d.affichage(), "14");
}

#[test]
fn scenario_coller_texte_de_la_plateforme() {
    let mut c = resultat_de(&["9"]);
    c.coller_texte("7*6");
    assert_eq!(c.affichage(), "7*6");
    assert_eq!(c.phase(), Phase::Edition);
    c.egal();
    assert_eq!(c.affichage(), "42");
}

#[test]
fn scenario_coller_invalide_puis_egal() {
    let mut pp = PressePapiersLocal::default();
    pp.ecrire("bonjour").unwrap();
    let mut c = Calculatrice::default();
    c.coller(&mut pp);
    assert_eq!(c.affichage(), "bonjour");
    c.egal();
    assert_eq!(c.affichage(), TEXTE_ERREUR);
}

struct PressePapiersEnPanne;

impl PressePapiers for PressePapiersEnPanne {
    fn lire(&mut self) -> Result<String, String> {
        Err("indisponible".into())
    }
    fn ecrire(&mut self, _texte: &str) -> Result<(), String> {
        Err("indisponible".into())
    }
}

#[test]
fn scenario_presse_papiers_en_panne() {
    let mut c = Calculatrice::default();
    c.ajouter("12");
    c.copier(&mut PressePapiersEnPanne);
    assert_eq!(c.affichage(), "12");

    c.coller(&mut PressePapiersEnPanne);
    assert_eq!(c.affichage(), TEXTE_COLLAGE_INVALIDE);
    assert_eq!(c.tampon(), "12");
    assert_eq!(c.phase(), Phase::Resultat);
}
