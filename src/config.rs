//! Réglages de démarrage (lecture seule).
//!
//! Fichier : `<config_dir>/calculatrice-sci/reglages.toml` (natif seulement).
//!
//! ```toml
//! mode_angle = "degres"   # ou "radians"
//! journal = "info"        # filtre tracing, écrasé par RUST_LOG
//! ```
//!
//! Fichier absent : valeurs par défaut. Fichier illisible : avertissement + défauts.
//! Rien n’est jamais écrit.

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::ModeAngle;

/// Filtre de journal par défaut.
pub const JOURNAL_DEFAUT: &str = "info";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Mode d’angle au lancement.
    pub mode_angle: ModeAngle,
    /// Filtre `tracing` (syntaxe EnvFilter).
    pub journal: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            mode_angle: ModeAngle::Radians,
            journal: JOURNAL_DEFAUT.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("format TOML invalide: {0}")]
    Format(#[from] toml::de::Error),
}

impl Reglages {
    pub fn depuis_texte(texte: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(texte)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod fichier {
    use std::path::PathBuf;

    use super::{ErreurConfig, Reglages};

    pub fn chemin() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice-sci").join("reglages.toml"))
    }

    /// Ok(None) si le fichier n’existe pas.
    pub fn lire() -> Result<Option<Reglages>, ErreurConfig> {
        let Some(chemin) = chemin() else {
            return Ok(None);
        };
        if !chemin.exists() {
            return Ok(None);
        }
        let texte = std::fs::read_to_string(&chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.display().to_string(),
            source,
        })?;
        Reglages::depuis_texte(&texte).map(Some)
    }
}

/// Charge les réglages ; n’échoue jamais.
///
/// Appelé avant l’installation du journal : l’avertissement est donc rendu au
/// démarrage via la valeur de retour.
pub fn charger() -> (Reglages, Option<ErreurConfig>) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match fichier::lire() {
            Ok(r) => (r.unwrap_or_default(), None),
            Err(e) => (Reglages::default(), Some(e)),
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        (Reglages::default(), None)
    }
}
