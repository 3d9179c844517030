//! Erreurs du noyau (parsing, domaine, saisie).
//!
//! Contrat : aucune erreur n’est fatale. Chaque opération déclenchée par
//! l’utilisateur attrape l’erreur à sa frontière et la convertit en texte
//! d’affichage ("Error" ou un message plus précis).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    /// Expression mal formée : parenthèses, jeton invalide, identifiant inconnu.
    #[error("syntaxe : {0}")]
    Syntaxe(String),

    /// Valeur hors domaine : division par zéro, NaN, infini.
    #[error("domaine : {0}")]
    Domaine(String),

    /// Texte non numérique là où un nombre brut était attendu.
    #[error("saisie : {0}")]
    Saisie(String),
}

impl ErreurCalc {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }

    pub fn domaine(msg: impl Into<String>) -> Self {
        Self::Domaine(msg.into())
    }

    pub fn saisie(msg: impl Into<String>) -> Self {
        Self::Saisie(msg.into())
    }
}
