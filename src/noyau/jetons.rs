// src/noyau/jetons.rs

use super::erreur::ErreurCalc;
use super::fonctions::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonction de la table (sqrt, sin, toRadians, …)
    Fonc(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // Moins unaire (décidé ici, pas dans le shunting-yard)
    Neg,

    LPar,
    RPar,
}

impl Tok {
    /// Jeton qui termine une valeur : nombre, constante, ')'.
    fn termine_valeur(&self) -> bool {
        matches!(self, Tok::Num(_) | Tok::RPar)
    }

    /// Jeton qui commence une valeur (pour la multiplication implicite).
    fn commence_valeur(&self) -> bool {
        matches!(self, Tok::Num(_) | Tok::Fonc(_) | Tok::LPar)
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 5.)
/// - opérateurs + - * / ^ (moins/plus unaires compris)
/// - parenthèses ( )
/// - constantes `e` et `pi` (identifiants entiers seulement : `exp` n’est pas touché)
/// - fonctions de la table (voir fonctions.rs)
/// - multiplication implicite : 2pi, 3(4), (1)(2), 2sqrt(9)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => {
                i += 1;
                Tok::LPar
            }
            ')' => {
                i += 1;
                Tok::RPar
            }
            '+' => {
                i += 1;
                // plus unaire : ignoré
                if !attend_operateur(&out) {
                    continue;
                }
                Tok::Plus
            }
            '-' => {
                i += 1;
                if attend_operateur(&out) {
                    Tok::Minus
                } else {
                    Tok::Neg
                }
            }
            '*' => {
                i += 1;
                Tok::Star
            }
            '/' => {
                i += 1;
                Tok::Slash
            }
            '^' => {
                i += 1;
                Tok::Caret
            }

            // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                i += 1;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let mot: String = chars[start..i].iter().collect();
                match mot.as_str() {
                    "e" => Tok::Num(std::f64::consts::E),
                    "pi" => Tok::Num(std::f64::consts::PI),
                    _ => match Fonction::depuis_nom(&mot) {
                        Some(f) => Tok::Fonc(f),
                        None => return Err(ErreurCalc::syntaxe(format!("identifiant inconnu: {mot}"))),
                    },
                }
            }

            // Nombre : chiffres avec au plus un point
            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                let mut points = 0;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    if chars[i] == '.' {
                        points += 1;
                    }
                    i += 1;
                }
                let txt: String = chars[start..i].iter().collect();
                if points > 1 || txt == "." {
                    return Err(ErreurCalc::syntaxe(format!("nombre invalide: {txt}")));
                }
                let v = txt
                    .parse::<f64>()
                    .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: {txt}")))?;
                Tok::Num(v)
            }

            _ => return Err(ErreurCalc::syntaxe(format!("caractère inattendu: '{c}'"))),
        };

        // multiplication implicite entre deux valeurs collées
        if tok.commence_valeur() && out.last().is_some_and(Tok::termine_valeur) {
            out.push(Tok::Star);
        }
        out.push(tok);
    }

    Ok(out)
}

/// Vrai si le jeton précédent clôt une valeur : un '+'/'-' est alors binaire.
fn attend_operateur(out: &[Tok]) -> bool {
    out.last().is_some_and(Tok::termine_valeur)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Fonc(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
