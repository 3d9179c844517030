// src/noyau/format.rs
//
// Affichage des nombres
// ---------------------
// - Résultat : au plus DECIMALES chiffres après la virgule, zéros finaux retirés,
//   jamais de notation exponentielle ("-0" devient "0").
// - Les deux formats ne reçoivent que des valeurs finies : NaN/∞ sont refusés
//   en amont (adaptateur, mémoire, résultats directs).
// - Littéral : nombre réinjecté dans le tampon (pourcentage), toujours avec un point.

use super::erreur::ErreurCalc;

/// Chiffres après la virgule à l’affichage.
pub const DECIMALES: usize = 10;

/// Formate un résultat fini pour l’affichage (et comme nouveau tampon).
pub fn format_resultat(x: f64) -> String {
    let brut = format!("{:.*}", DECIMALES, x);
    let coupe = brut.trim_end_matches('0').trim_end_matches('.');

    if coupe == "-0" {
        "0".to_string()
    } else {
        coupe.to_string()
    }
}

/// Formate un nombre réinjecté dans l’expression : 20 -> "20.0", 0.1 -> "0.1".
/// Pas d’exposant (le tokenizer lirait `e` comme la constante).
pub fn format_litteral(x: f64) -> String {
    let s = format!("{x}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Lecture d’un nombre brut (affichage d’un résultat, base de logarithme…).
pub fn lire_nombre(s: &str) -> Result<f64, ErreurCalc> {
    let t = s.trim();
    t.parse::<f64>()
        .map_err(|_| ErreurCalc::saisie(format!("nombre attendu: {t:?}")))
}
