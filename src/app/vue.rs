// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Barre de menus : Édition (copier / coller / effacer), Mode (radians / degrés)
// - Une ligne d’affichage en lecture seule, rendue telle quelle
// - Pavé 5 colonnes (mémoire, puissances, fonctions, trig, chiffres)
// - logₙ : invite modale (base + argument), bloque le reste tant qu’elle est ouverte

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::{Fonction, FonctionUnaire, ModeAngle};

const TAILLE_BOUTON: [f32; 2] = [72.0, 38.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_menus(ui);
        ui.add_space(6.0);

        self.ui_affichage(ui);
        ui.add_space(8.0);

        self.ui_pave(ui);

        self.ui_invite_log(ui.ctx());
    }

    fn ui_menus(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Édition", |ui| {
                for (label, touche) in [
                    ("Copier", Touche::Copier),
                    ("Coller", Touche::Coller),
                    ("Effacer", Touche::Effacer),
                ] {
                    if ui.button(label).clicked() {
                        self.presser(touche);
                        ui.close();
                    }
                }
            });

            ui.menu_button("Mode", |ui| {
                let mut mode = self.mode_angle();
                ui.radio_value(&mut mode, ModeAngle::Radians, "Radians");
                ui.radio_value(&mut mode, ModeAngle::Degres, "Degrés");
                if mode != self.mode_angle() {
                    self.definir_mode_angle(mode);
                    ui.close();
                }
            });
        });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Indicateurs : mode d’angle + mémoire non nulle
        ui.horizontal(|ui| {
            let mode = match self.mode_angle() {
                ModeAngle::Radians => "RAD",
                ModeAngle::Degres => "DEG",
            };
            ui.small(mode);
            if self.calc.memoire() != 0.0 {
                ui.small("M");
            }
        });

        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(40.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.calc.affichage())
                            .monospace()
                            .size(24.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Touche as T;

        // Disposition de la calculatrice d’origine, ligne par ligne
        let lignes: [[(&str, Touche); 5]; 10] = [
            [
                ("MC", T::MemoireEffacer),
                ("MR", T::MemoireRappeler),
                ("MS", T::MemoireStocker),
                ("M+", T::MemoireAjouter),
                ("M-", T::MemoireSoustraire),
            ],
            [
                ("x²", T::Unaire(FonctionUnaire::Carre)),
                ("x³", T::Unaire(FonctionUnaire::Cube)),
                ("x^y", T::Jeton("^")),
                ("10^x", T::Jeton("10^")),
                ("1/x", T::Inverse),
            ],
            [
                ("√", T::Unaire(FonctionUnaire::Sqrt)),
                ("∛", T::Unaire(FonctionUnaire::Cbrt)),
                ("log", T::Fonction(Fonction::Log10)),
                ("ln", T::Fonction(Fonction::Ln)),
                ("logₙ", T::LogBase),
            ],
            [
                ("sin", T::Fonction(Fonction::Sin)),
                ("cos", T::Fonction(Fonction::Cos)),
                ("tan", T::Fonction(Fonction::Tan)),
                ("(", T::Jeton("(")),
                (")", T::Jeton(")")),
            ],
            [
                ("asin", T::Fonction(Fonction::Asin)),
                ("acos", T::Fonction(Fonction::Acos)),
                ("atan", T::Fonction(Fonction::Atan)),
                ("C", T::Effacer),
                ("⌫", T::RetourArriere),
            ],
            [
                ("sinh", T::Fonction(Fonction::Sinh)),
                ("cosh", T::Fonction(Fonction::Cosh)),
                ("tanh", T::Fonction(Fonction::Tanh)),
                ("CE", T::EffacerEntree),
                ("%", T::Pourcentage),
            ],
            [
                ("7", T::Jeton("7")),
                ("8", T::Jeton("8")),
                ("9", T::Jeton("9")),
                ("π", T::Jeton("pi")),
                ("÷", T::Jeton("/")),
            ],
            [
                ("4", T::Jeton("4")),
                ("5", T::Jeton("5")),
                ("6", T::Jeton("6")),
                ("e", T::Jeton("e")),
                ("×", T::Jeton("*")),
            ],
            [
                ("1", T::Jeton("1")),
                ("2", T::Jeton("2")),
                ("3", T::Jeton("3")),
                ("±", T::ChangerSigne),
                ("-", T::Jeton("-")),
            ],
            [
                ("0", T::Jeton("0")),
                (".", T::Jeton(".")),
                ("eˣ", T::Unaire(FonctionUnaire::Exp)),
                ("+", T::Jeton("+")),
                ("=", T::Egal),
            ],
        ];

        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for (label, touche) in ligne {
                        self.bouton(ui, label, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.presser(touche);
        }
    }

    fn ui_invite_log(&mut self, ctx: &egui::Context) {
        let Some(invite) = self.invite_log.as_mut() else {
            return;
        };

        let mut valider = false;
        let mut annuler = false;

        let modal = egui::Modal::new(egui::Id::new("invite_log_base")).show(ctx, |ui| {
            ui.heading("Logarithme de base n");
            ui.add_space(6.0);

            ui.label("Base :");
            ui.text_edit_singleline(&mut invite.base);
            ui.label("Argument :");
            ui.text_edit_singleline(&mut invite.argument);

            if !invite.erreur.is_empty() {
                ui.add_space(4.0);
                ui.colored_label(ui.visuals().error_fg_color, &invite.erreur);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                valider = ui.button("OK").clicked();
                annuler = ui.button("Annuler").clicked();
            });
        });

        if modal.should_close() {
            annuler = true;
        }

        if valider {
            self.valider_invite_log();
        } else if annuler {
            self.annuler_invite_log();
        }
    }
}
