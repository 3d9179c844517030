//! Presse-papiers : copier le texte affiché, coller un texte dans le tampon.
//!
//! - Natif : presse-papiers système (arboard), ouvert à chaque accès.
//! - Web : écriture via egui (`ctx.copy_text`, relayé au navigateur). Le
//!   navigateur ne se lit pas à la demande : Ctrl+V arrive par
//!   `Event::Paste` avec son texte, le menu « Coller » relit la dernière copie.
//! - Tests : texte gardé en mémoire dans le processus.

use eframe::egui;

use crate::noyau::PressePapiers;

#[cfg(not(target_arch = "wasm32"))]
pub use systeme::PressePapiersSysteme;

#[cfg(not(target_arch = "wasm32"))]
mod systeme {
    use arboard::Clipboard;

    use crate::noyau::PressePapiers;

    #[derive(Default)]
    pub struct PressePapiersSysteme;

    impl PressePapiers for PressePapiersSysteme {
        fn lire(&mut self) -> Result<String, String> {
            let mut clipboard =
                Clipboard::new().map_err(|e| format!("presse-papiers inaccessible: {e}"))?;
            clipboard
                .get_text()
                .map_err(|e| format!("lecture impossible: {e}"))
        }

        fn ecrire(&mut self, texte: &str) -> Result<(), String> {
            let mut clipboard =
                Clipboard::new().map_err(|e| format!("presse-papiers inaccessible: {e}"))?;
            clipboard
                .set_text(texte.to_string())
                .map_err(|e| format!("copie impossible: {e}"))
        }
    }
}

/// Presse-papiers du navigateur, atteint par le contexte egui.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub struct PressePapiersNavigateur {
    ctx: egui::Context,
    derniere_copie: Option<String>,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl PressePapiersNavigateur {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            derniere_copie: None,
        }
    }
}

impl PressePapiers for PressePapiersNavigateur {
    fn lire(&mut self) -> Result<String, String> {
        self.derniere_copie
            .clone()
            .ok_or_else(|| "rien de copié depuis la calculatrice (utiliser Ctrl+V)".to_string())
    }

    fn ecrire(&mut self, texte: &str) -> Result<(), String> {
        self.ctx.copy_text(texte.to_string());
        self.derniere_copie = Some(texte.to_string());
        Ok(())
    }
}

/// Presse-papiers interne au processus.
#[cfg(test)]
#[derive(Default, Debug)]
pub struct PressePapiersLocal {
    texte: Option<String>,
}

#[cfg(test)]
impl PressePapiers for PressePapiersLocal {
    fn lire(&mut self) -> Result<String, String> {
        self.texte.clone().ok_or_else(|| "presse-papiers vide".to_string())
    }

    fn ecrire(&mut self, texte: &str) -> Result<(), String> {
        self.texte = Some(texte.to_string());
        Ok(())
    }
}

/// Presse-papiers de la plateforme courante.
pub fn par_defaut(ctx: &egui::Context) -> Box<dyn PressePapiers> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ctx;
        Box::new(PressePapiersSysteme)
    }
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(PressePapiersNavigateur::new(ctx.clone()))
    }
}
