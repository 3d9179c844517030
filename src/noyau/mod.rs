//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - erreur.rs       : erreurs typées (syntaxe / domaine / saisie)
//! - fonctions.rs    : table des fonctions + mode d’angle
//! - jetons.rs       : tokenisation (constantes e, pi ; multiplication implicite)
//! - rpn.rs          : shunting-yard + évaluation sur pile (sans récursion)
//! - format.rs       : affichage des nombres (10 décimales au plus)
//! - eval.rs         : adaptateur (pipeline complet + contrôle du domaine)
//! - calculatrice.rs : tampon d’expression, mémoire, phases Edition/Resultat

pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_calculatrice;

#[cfg(test)]
mod tests_evaluateur;


// API publique minimale
pub use calculatrice::{Calculatrice, FonctionUnaire, Phase, PressePapiers};
pub use fonctions::{Fonction, ModeAngle};
