//! Noyau : évaluation (adaptateur)
//!
//! tokenize (constantes e/pi résolues) -> RPN -> pile f64 -> contrôle du domaine
//!
//! Le mode degrés ne demande aucun traitement ici : le marqueur `toRadians(...)`
//! posé par la saisie est une fonction de la table comme les autres.

use std::borrow::Cow;

use tracing::{debug, trace};

use super::erreur::ErreurCalc;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_rpn, to_rpn};

/// API publique : évalue une expression complète.
///
/// Échecs :
/// - Syntaxe : entrée vide, jeton invalide, parenthèses déséquilibrées
/// - Domaine : division par zéro, résultat NaN ou infini
pub fn evaluer(expr_str: &str) -> Result<f64, ErreurCalc> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::syntaxe("entrée vide"));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "expression découpée");

    // 3) Valeur
    let v = evaluer_rpn(&rpn)?;

    if v.is_nan() {
        return Err(ErreurCalc::domaine("résultat indéfini (NaN)"));
    }
    if v.is_infinite() {
        return Err(ErreurCalc::domaine("résultat infini"));
    }

    debug!(longueur = s.len(), valeur = v, "expression évaluée");
    Ok(v)
}

/// Évalue un tampon de saisie : les parenthèses restées ouvertes sont fermées
/// avant l’évaluation (`sin(toRadians(30` -> `sin(toRadians(30))`).
pub fn evaluer_saisie(tampon: &str) -> Result<f64, ErreurCalc> {
    evaluer(&fermer_parentheses(tampon))
}

/// Ajoute les ')' manquantes en fin de texte.
/// Un texte qui ferme plus qu’il n’ouvre est rendu tel quel (le parseur le refusera).
pub fn fermer_parentheses(s: &str) -> Cow<'_, str> {
    let mut profondeur: i64 = 0;
    for c in s.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur < 0 {
                    return Cow::Borrowed(s);
                }
            }
            _ => {}
        }
    }

    if profondeur == 0 {
        return Cow::Borrowed(s);
    }

    let mut complet = s.to_string();
    for _ in 0..profondeur {
        complet.push(')');
    }
    Cow::Owned(complet)
}
