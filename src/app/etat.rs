//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la calculatrice du noyau, le presse-papiers de la plateforme
//! et l’invite modale de logₙ, puis offrir une action par touche.
//!
//! Contrats :
//! - Aucune évaluation ici (tout passe par noyau::Calculatrice).
//! - Tant que l’invite logₙ est ouverte, les touches sont ignorées.

use eframe::egui;
use tracing::debug;

use crate::config::Reglages;
use crate::noyau::{Calculatrice, Fonction, FonctionUnaire, ModeAngle, PressePapiers};
use crate::presse_papiers;

/// Saisie en cours dans l’invite logₙ.
#[derive(Clone, Default, Debug)]
pub struct InviteLog {
    pub base: String,
    pub argument: String,
    pub erreur: String,
}

/// Une touche du pavé (ou son équivalent clavier / menu).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Touche {
    Jeton(&'static str),
    Fonction(Fonction),
    Unaire(FonctionUnaire),
    LogBase,

    Egal,
    Effacer,
    EffacerEntree,
    RetourArriere,
    ChangerSigne,
    Inverse,
    Pourcentage,

    MemoireEffacer,
    MemoireRappeler,
    MemoireStocker,
    MemoireAjouter,
    MemoireSoustraire,

    Copier,
    Coller,
    /// Collage livré avec son texte par la plateforme (Ctrl+V).
    CollerTexte(String),
}

pub struct AppCalc {
    pub calc: Calculatrice,
    pub invite_log: Option<InviteLog>,
    presse_papiers: Box<dyn PressePapiers>,
}

impl AppCalc {
    pub fn new(reglages: &Reglages, ctx: &egui::Context) -> Self {
        Self::avec_presse_papiers(reglages, presse_papiers::par_defaut(ctx))
    }

    pub fn avec_presse_papiers(reglages: &Reglages, pp: Box<dyn PressePapiers>) -> Self {
        Self {
            calc: Calculatrice::new(reglages.mode_angle),
            invite_log: None,
            presse_papiers: pp,
        }
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.calc.mode_angle()
    }

    pub fn definir_mode_angle(&mut self, mode: ModeAngle) {
        self.calc.definir_mode_angle(mode);
    }

    /// Dispatch d’une touche vers le noyau.
    pub fn presser(&mut self, touche: Touche) {
        if self.invite_log.is_some() {
            debug!(?touche, "touche ignorée (invite ouverte)");
            return;
        }

        let c = &mut self.calc;
        match touche {
            Touche::Jeton(j) => c.ajouter(j),
            Touche::Fonction(f) => c.ajouter_fonction(f),
            Touche::Unaire(f) => c.appliquer_fonction(f),
            Touche::LogBase => self.invite_log = Some(InviteLog::default()),

            Touche::Egal => c.egal(),
            Touche::Effacer => c.effacer(),
            Touche::EffacerEntree => c.effacer_entree(),
            Touche::RetourArriere => c.retour_arriere(),
            Touche::ChangerSigne => c.changer_signe(),
            Touche::Inverse => c.inverse(),
            Touche::Pourcentage => c.pourcentage(),

            Touche::MemoireEffacer => c.memoire_effacer(),
            Touche::MemoireRappeler => c.memoire_rappeler(),
            Touche::MemoireStocker => c.memoire_stocker(),
            Touche::MemoireAjouter => c.memoire_ajouter(),
            Touche::MemoireSoustraire => c.memoire_soustraire(),

            Touche::Copier => c.copier(self.presse_papiers.as_mut()),
            Touche::Coller => c.coller(self.presse_papiers.as_mut()),
            Touche::CollerTexte(texte) => c.coller_texte(&texte),
        }
    }

    /// OK de l’invite : la base est validée par le noyau ; en cas de refus,
    /// l’invite reste ouverte avec le message.
    pub fn valider_invite_log(&mut self) {
        let Some(invite) = self.invite_log.as_mut() else {
            return;
        };
        match self.calc.ajouter_log_base(&invite.base, &invite.argument) {
            Ok(()) => self.invite_log = None,
            Err(e) => invite.erreur = e.to_string(),
        }
    }

    pub fn annuler_invite_log(&mut self) {
        self.invite_log = None;
    }
}
