// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis l’évaluer sur une pile de f64
//
// Règles:
// - Fonc(f) : fonction unaire, doit être suivie de '(' ; sortie après la parenthèse fermante.
// - Neg : opérateur préfixe, plus fort que * et /, plus faible que ^ (-2^2 = -4, 2^-1 = 1/2).
// - ^ : associatif à droite.

use num_traits::Zero;

use super::erreur::ErreurCalc;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::Neg)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonc(Sin), LPar, Num(1), Slash, Num(2), RPar]
///   rpn:    [Num(1), Num(2), Slash, Fonc(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for (i, tok) in tokens.iter().cloned().enumerate() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Fonc(f) => {
                // fonction : parenthèse obligatoire
                if !matches!(tokens.get(i + 1), Some(Tok::LPar)) {
                    return Err(ErreurCalc::syntaxe(format!("'(' attendue après {}", f.nom())));
                }
                ops.push(tok);
            }

            // préfixe : rien à dépiler
            Tok::Neg | Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurCalc::syntaxe("parenthèse fermante sans ouvrante"));
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Tok::Fonc(_)) = ops.last() {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Fonc(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN avec une pile explicite de f64.
///
/// Aucune récursion : la longueur et l’imbrication de l’expression ne sont
/// bornées que par la mémoire.
/// La division par zéro est refusée ici ; NaN/∞ produits par les primitives
/// sont laissés passer (l’adaptateur tranche).
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let invalide = || ErreurCalc::syntaxe("expression invalide");
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Neg => {
                let x = st.pop().ok_or_else(invalide)?;
                st.push(-x);
            }

            Tok::Fonc(f) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurCalc::syntaxe(format!("{} sans argument", f.nom())))?;
                st.push(f.appliquer(x));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or_else(invalide)?;
                let a = st.pop().ok_or_else(invalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b.is_zero() {
                            return Err(ErreurCalc::domaine("Division by zero"));
                        }
                        a / b
                    }
                    _ => a.powf(b),
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(invalide()),
    }
}
