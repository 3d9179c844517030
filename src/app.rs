// src/app.rs
//
// Calculatrice scientifique : module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en touches du pavé

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

/// Caractères tapés au clavier recopiés tels quels dans le tampon.
const CARACTERES_JETONS: [(char, &str); 18] = [
    ('0', "0"),
    ('1', "1"),
    ('2', "2"),
    ('3', "3"),
    ('4', "4"),
    ('5', "5"),
    ('6', "6"),
    ('7', "7"),
    ('8', "8"),
    ('9', "9"),
    ('.', "."),
    ('+', "+"),
    ('-', "-"),
    ('*', "*"),
    ('/', "/"),
    ('^', "^"),
    ('(', "("),
    (')', ")"),
];

fn jeton_pour(c: char) -> Option<&'static str> {
    CARACTERES_JETONS
        .iter()
        .find(|(k, _)| *k == c)
        .map(|(_, j)| *j)
}

/// Touches produites par les événements clavier de la frame.
fn touches_clavier(i: &egui::InputState) -> Vec<Touche> {
    let mut touches = Vec::new();

    for ev in &i.events {
        match ev {
            egui::Event::Text(t) => {
                touches.extend(t.chars().filter_map(jeton_pour).map(Touche::Jeton));
            }
            egui::Event::Copy => touches.push(Touche::Copier),
            // le texte collé voyage avec l’événement (seule voie côté navigateur)
            egui::Event::Paste(texte) => touches.push(Touche::CollerTexte(texte.clone())),
            _ => {}
        }
    }

    if i.key_pressed(egui::Key::Enter) {
        touches.push(Touche::Egal);
    }
    if i.key_pressed(egui::Key::Backspace) {
        touches.push(Touche::RetourArriere);
    }
    if i.key_pressed(egui::Key::Escape) {
        touches.push(Touche::Effacer);
    }

    touches
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Invite logₙ ouverte : le clavier appartient à ses champs,
        // sauf Entrée qui valide.
        if self.invite_log.is_some() {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.valider_invite_log();
            }
        } else {
            for touche in ctx.input(touches_clavier) {
                self.presser(touche);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
