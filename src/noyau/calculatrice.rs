//! src/noyau/calculatrice.rs
//!
//! Tampon d’expression + mémoire + mode d’angle (sans vue).
//!
//! Rôle : une méthode par touche. Chaque méthode modifie le tampon, puis
//! l’affichage est recopié depuis le tampon, sauf en cas d’erreur où
//! l’affichage montre "Error" et le tampon garde son texte précédent.
//!
//! Contrats :
//! - Aucune erreur ne remonte à la vue : elle est attrapée ici, journalisée,
//!   et convertie en texte d’affichage.
//! - Phase::Resultat : la prochaine touche repart d’un tampon vide (jamais d’ajout en place).

use num_traits::Zero;
use tracing::{debug, info};

use super::erreur::ErreurCalc;
use super::eval::{evaluer, evaluer_saisie};
use super::fonctions::{Fonction, ModeAngle};
use super::format::{format_litteral, format_resultat, lire_nombre};

/// Texte affiché pour tout échec d’évaluation.
pub const TEXTE_ERREUR: &str = "Error";

/// Texte affiché pour 1/x sur un résultat nul.
pub const TEXTE_DIVISION_ZERO: &str = "Error: Division by zero";

/// Texte affiché si le presse-papiers ne peut pas être lu.
pub const TEXTE_COLLAGE_INVALIDE: &str = "Error: Invalid paste";

/// Opérateurs binaires reconnus par les balayages lexicaux (CE, %).
const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Le tampon accumule les jetons.
    Edition,
    /// Un résultat (ou une erreur) est affiché : la prochaine saisie repart de zéro.
    Resultat,
}

/// Touches « fonction » qui enveloppent un résultat fraîchement calculé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionUnaire {
    Sqrt,
    Cbrt,
    Exp,
    Carre,
    Cube,
}

impl FonctionUnaire {
    /// Forme appliquée à un résultat affiché `d`.
    fn envelopper(self, d: &str) -> String {
        match self {
            FonctionUnaire::Sqrt => format!("sqrt({d})"),
            FonctionUnaire::Cbrt => format!("cbrt({d})"),
            FonctionUnaire::Exp => format!("exp({d})"),
            FonctionUnaire::Carre => format!("({d})^2"),
            FonctionUnaire::Cube => format!("({d})^3"),
        }
    }

    /// Texte ajouté en cours de saisie.
    fn suffixe(self) -> &'static str {
        match self {
            FonctionUnaire::Sqrt => "sqrt(",
            FonctionUnaire::Cbrt => "cbrt(",
            FonctionUnaire::Exp => "exp(",
            FonctionUnaire::Carre => "^2",
            FonctionUnaire::Cube => "^3",
        }
    }
}

/// Accès au presse-papiers (système en natif, local en wasm et en test).
pub trait PressePapiers {
    fn lire(&mut self) -> Result<String, String>;
    fn ecrire(&mut self, texte: &str) -> Result<(), String>;
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    tampon: String,
    affichage: String,
    phase: Phase,
    mode_angle: ModeAngle,
    memoire: f64,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(ModeAngle::default())
    }
}

impl Calculatrice {
    pub fn new(mode_angle: ModeAngle) -> Self {
        Self {
            tampon: String::new(),
            affichage: String::new(),
            phase: Phase::Edition,
            mode_angle,
            memoire: 0.0,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Texte que la vue affiche tel quel.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn definir_mode_angle(&mut self, mode: ModeAngle) {
        if self.mode_angle != mode {
            debug!(?mode, "mode d’angle");
        }
        self.mode_angle = mode;
    }

    /* ------------------------ Outils internes ------------------------ */

    /// Recopie le tampon dans l’affichage.
    fn rafraichir(&mut self) {
        self.affichage.clone_from(&self.tampon);
    }

    /// Phase::Resultat -> tampon vidé, retour en édition.
    fn demarrer_saisie(&mut self) {
        if self.phase == Phase::Resultat {
            self.tampon.clear();
            self.phase = Phase::Edition;
        }
    }

    /// Dépose un résultat : il devient le point de départ de la saisie suivante.
    /// Une valeur non finie n’entre jamais dans le tampon.
    fn afficher_resultat(&mut self, v: f64) {
        if !v.is_finite() {
            let e = ErreurCalc::domaine("résultat non fini");
            self.afficher_erreur(TEXTE_ERREUR, &e);
            return;
        }
        self.tampon = format_resultat(v);
        self.phase = Phase::Resultat;
        self.rafraichir();
    }

    /// Échec : message à l’écran, tampon conservé, prochaine touche repart de zéro.
    fn afficher_erreur(&mut self, texte: &str, e: &ErreurCalc) {
        debug!(erreur = %e, tampon = %self.tampon, "échec converti en affichage");
        self.affichage = texte.to_string();
        self.phase = Phase::Resultat;
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre, opérateur, parenthèse, constante ou préfixe de fonction.
    pub fn ajouter(&mut self, jeton: &str) {
        self.demarrer_saisie();
        self.tampon.push_str(jeton);
        self.rafraichir();
    }

    /// Touche de fonction nommée ; les fonctions trig suivent le mode d’angle.
    pub fn ajouter_fonction(&mut self, f: Fonction) {
        let texte = if f.est_trig() {
            self.mode_angle.prefixe_trig(f.nom())
        } else {
            format!("{}(", f.nom())
        };
        self.ajouter(&texte);
    }

    /// √, ∛, exp, x², x³ : sur un résultat, enveloppe le texte affiché.
    pub fn appliquer_fonction(&mut self, f: FonctionUnaire) {
        match self.phase {
            Phase::Resultat => {
                self.tampon = f.envelopper(&self.affichage);
                self.phase = Phase::Edition;
            }
            Phase::Edition => self.tampon.push_str(f.suffixe()),
        }
        self.rafraichir();
    }

    /// logₙ(x) = log(x)/log(n).
    ///
    /// Base refusée (non numérique, ≤ 0, = 1) : erreur de saisie, rien n’est ajouté.
    /// Argument vide : annulation silencieuse.
    /// La base est réécrite depuis sa valeur lue (`1e2` -> `100.0`).
    pub fn ajouter_log_base(&mut self, base: &str, argument: &str) -> Result<(), ErreurCalc> {
        let b = lire_nombre(base)?;
        if !b.is_finite() || b <= 0.0 || b == 1.0 {
            return Err(ErreurCalc::saisie(
                "la base doit être un nombre positif différent de 1",
            ));
        }

        let arg = argument.trim();
        if arg.is_empty() {
            return Ok(());
        }

        self.ajouter(&format!("(log({arg})/log({}))", format_litteral(b)));
        Ok(())
    }

    /* ------------------------ Effacement ------------------------ */

    /// C : tout effacer (tampon + affichage).
    pub fn effacer(&mut self) {
        self.tampon.clear();
        self.phase = Phase::Edition;
        self.rafraichir();
    }

    /// CE : coupe juste après le dernier opérateur `+ - * /` (balayage lexical depuis la fin,
    /// sans tenir compte des parenthèses), sinon vide tout.
    pub fn effacer_entree(&mut self) {
        if self.tampon.is_empty() {
            return;
        }
        match self.tampon.rfind(OPERATEURS) {
            Some(pos) => self.tampon.truncate(pos + 1),
            None => self.tampon.clear(),
        }
        self.rafraichir();
    }

    /// ⌫ : retire le dernier caractère.
    pub fn retour_arriere(&mut self) {
        if self.tampon.pop().is_some() {
            self.rafraichir();
        }
    }

    /* ------------------------ Calcul ------------------------ */

    /// = : évalue le tampon.
    pub fn egal(&mut self) {
        match evaluer_saisie(&self.tampon) {
            Ok(v) => {
                info!(expression = %self.tampon, valeur = v, "calcul");
                self.afficher_resultat(v);
            }
            Err(e) => self.afficher_erreur(TEXTE_ERREUR, &e),
        }
    }

    /// ± : sur un résultat, négation directe ; en saisie, `-(…)`.
    pub fn changer_signe(&mut self) {
        match self.phase {
            Phase::Resultat => match lire_nombre(&self.affichage) {
                Ok(v) => self.afficher_resultat(-v),
                Err(e) => self.afficher_erreur(TEXTE_ERREUR, &e),
            },
            Phase::Edition => {
                self.tampon = format!("-({})", self.tampon);
                self.rafraichir();
            }
        }
    }

    /// 1/x : sur un résultat, inverse direct (zéro refusé) ; en saisie, `^(-1)`.
    pub fn inverse(&mut self) {
        match self.phase {
            Phase::Resultat => match lire_nombre(&self.affichage) {
                Ok(v) if v.is_zero() => {
                    let e = ErreurCalc::domaine("inverse de zéro");
                    self.afficher_erreur(TEXTE_DIVISION_ZERO, &e);
                }
                Ok(v) => self.afficher_resultat(1.0 / v),
                Err(e) => self.afficher_erreur(TEXTE_ERREUR, &e),
            },
            Phase::Edition => {
                self.tampon.push_str("^(-1)");
                self.rafraichir();
            }
        }
    }

    /// % : remplace le dernier nombre du tampon par son pourcentage.
    ///
    /// - "10"     -> "0.1"
    /// - "200+10" -> "200+20.0" (10 % de ce qui précède l’opérateur)
    ///
    /// Balayage purement lexical. L’échec de l’évaluation de la partie gauche est
    /// ignoré : on garde alors le pourcentage simple. Sans effet sur un résultat.
    pub fn pourcentage(&mut self) {
        if self.phase == Phase::Resultat {
            return;
        }

        let Some((debut, fin)) = dernier_nombre(&self.tampon) else {
            return;
        };
        let Ok(nombre) = lire_nombre(&self.tampon[debut..fin]) else {
            return;
        };

        let avant = &self.tampon[..debut];
        let mut pourcent = nombre / 100.0;

        if let Some(gauche) = avant.strip_suffix(OPERATEURS) {
            if !gauche.is_empty() {
                match evaluer(gauche) {
                    Ok(base) => pourcent *= base,
                    Err(e) => debug!(erreur = %e, "pourcentage : partie gauche ignorée"),
                }
            }
        }

        if !pourcent.is_finite() {
            debug!("pourcentage hors limites : ignoré");
            return;
        }

        self.tampon = format!("{avant}{}", format_litteral(pourcent));
        self.rafraichir();
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MC
    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    /// MR : ajoute la valeur mémorisée (même règle que les chiffres).
    pub fn memoire_rappeler(&mut self) {
        let texte = format_resultat(self.memoire);
        self.ajouter(&texte);
    }

    /// MS
    pub fn memoire_stocker(&mut self) {
        self.modifier_memoire(|_, v| v);
    }

    /// M+
    pub fn memoire_ajouter(&mut self) {
        self.modifier_memoire(|m, v| m + v);
    }

    /// M−
    pub fn memoire_soustraire(&mut self) {
        self.modifier_memoire(|m, v| m - v);
    }

    /// Lit la valeur affichée puis met à jour le registre ; en cas d’échec
    /// (lecture ou dépassement), le registre reste intact.
    fn modifier_memoire(&mut self, op: impl FnOnce(f64, f64) -> f64) {
        match self.valeur_affichee() {
            Ok(Some(v)) => {
                let nouveau = op(self.memoire, v);
                if !nouveau.is_finite() {
                    let e = ErreurCalc::domaine("mémoire hors limites");
                    self.afficher_erreur(TEXTE_ERREUR, &e);
                    return;
                }
                self.memoire = nouveau;
                debug!(memoire = self.memoire, "mémoire");
            }
            Ok(None) => {}
            Err(e) => self.afficher_erreur(TEXTE_ERREUR, &e),
        }
    }

    /// Valeur de l’affichage : nombre brut sur un résultat, expression en saisie.
    /// None si l’affichage est vide ou montre exactement "Error".
    fn valeur_affichee(&self) -> Result<Option<f64>, ErreurCalc> {
        let texte = self.affichage.as_str();
        if texte.is_empty() || texte == TEXTE_ERREUR {
            return Ok(None);
        }
        let v = match self.phase {
            Phase::Resultat => lire_nombre(texte)?,
            Phase::Edition => evaluer_saisie(texte)?,
        };
        Ok(Some(v))
    }

    /* ------------------------ Presse-papiers ------------------------ */

    /// Copier : pousse le texte affiché (rien si vide).
    pub fn copier(&self, pp: &mut dyn PressePapiers) {
        if self.affichage.is_empty() {
            return;
        }
        if let Err(e) = pp.ecrire(&self.affichage) {
            tracing::warn!(erreur = %e, "copie impossible");
        }
    }

    /// Coller depuis le presse-papiers de la plateforme.
    pub fn coller(&mut self, pp: &mut dyn PressePapiers) {
        match pp.lire() {
            Ok(texte) => self.coller_texte(&texte),
            Err(e) => {
                tracing::warn!(erreur = %e, "collage impossible");
                self.affichage = TEXTE_COLLAGE_INVALIDE.to_string();
                self.phase = Phase::Resultat;
            }
        }
    }

    /// Coller un texte déjà lu (événement de collage de la plateforme) :
    /// remplace le tampon tel quel, validé au prochain "=".
    pub fn coller_texte(&mut self, texte: &str) {
        self.tampon = texte.to_string();
        self.phase = Phase::Edition;
        self.rafraichir();
    }
}

/// Dernière suite maximale de `[0-9.]` du texte : (début, fin) en octets,
/// toujours sur des frontières de caractères.
fn dernier_nombre(s: &str) -> Option<(usize, usize)> {
    let est_num = |c: char| c.is_ascii_digit() || c == '.';

    let fin = s.rfind(est_num)? + 1;
    let debut = s[..fin]
        .char_indices()
        .rev()
        .find(|(_, c)| !est_num(*c))
        .map_or(0, |(p, c)| p + c.len_utf8());

    Some((debut, fin))
}
