// src/noyau/fonctions.rs
//
// Table des fonctions nommées + mode d’angle
// ------------------------------------------
// - Une seule table (nom -> Fonction) partagée par le tokenizer et le parseur.
// - Les primitives trig de f64 travaillent en radians : en mode degrés, la saisie
//   enveloppe l’argument dans `toRadians(...)`, qui est lui-même une entrée de la table.

use serde::Deserialize;

/// Mode d’angle global (exclusif).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeAngle {
    #[default]
    Radians,
    #[serde(alias = "degrees")]
    Degres,
}

impl ModeAngle {
    /// Texte ajouté au tampon pour une touche trig (sin, cos, …).
    pub fn prefixe_trig(self, nom: &str) -> String {
        match self {
            ModeAngle::Radians => format!("{nom}("),
            ModeAngle::Degres => format!("{nom}({MARQUEUR_DEGRES}("),
        }
    }
}

/// Nom du marqueur d’argument en degrés.
pub const MARQUEUR_DEGRES: &str = "toRadians";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Cbrt,
    Exp,
    Ln,
    Log10,

    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,

    Sinh,
    Cosh,
    Tanh,

    // Marqueur du mode degrés : degrés -> radians
    VersRadians,
}

const TABLE: &[(&str, Fonction)] = &[
    ("sqrt", Fonction::Sqrt),
    ("cbrt", Fonction::Cbrt),
    ("exp", Fonction::Exp),
    ("log", Fonction::Ln),
    ("log10", Fonction::Log10),
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("sinh", Fonction::Sinh),
    ("cosh", Fonction::Cosh),
    ("tanh", Fonction::Tanh),
    (MARQUEUR_DEGRES, Fonction::VersRadians),
];

impl Fonction {
    /// Recherche exacte (sensible à la casse, comme les touches).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        TABLE.iter().find(|(n, _)| *n == nom).map(|(_, f)| *f)
    }

    pub fn nom(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, f)| *f == self)
            .map(|(n, _)| *n)
            .unwrap_or("?")
    }

    /// Fonctions dont la touche dépend du mode d’angle.
    pub fn est_trig(self) -> bool {
        matches!(
            self,
            Fonction::Sin
                | Fonction::Cos
                | Fonction::Tan
                | Fonction::Asin
                | Fonction::Acos
                | Fonction::Atan
        )
    }

    /// Application directe sur les primitives f64 (radians).
    /// Le domaine (NaN/∞) est vérifié par l’adaptateur, pas ici.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Fonction::Sqrt => x.sqrt(),
            Fonction::Cbrt => x.cbrt(),
            Fonction::Exp => x.exp(),
            Fonction::Ln => x.ln(),
            Fonction::Log10 => x.log10(),

            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Asin => x.asin(),
            Fonction::Acos => x.acos(),
            Fonction::Atan => x.atan(),

            Fonction::Sinh => x.sinh(),
            Fonction::Cosh => x.cosh(),
            Fonction::Tanh => x.tanh(),

            Fonction::VersRadians => x.to_radians(),
        }
    }
}
