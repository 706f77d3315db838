//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile (f64)
//!
//! Fonction pure : le mode d’angle est un paramètre, aucun état global.

use log::debug;

use super::erreur::{ErreurCalc, Resultat};
use super::format::{format_jetons, format_rpn};
use super::jetons::tokenize;
use super::operateurs::ModeAngle;
use super::rpn::{to_rpn, ElementRpn};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression dans le mode d’angle donné.
pub fn eval_expression(expr_str: &str, mode: ModeAngle) -> Resultat<f64> {
    eval_expression_detaillee(expr_str, mode).map(|(v, _d)| v)
}

/// Comme `eval_expression`, avec la démarche (jetons + RPN) en texte.
pub fn eval_expression_detaillee(
    expr_str: &str,
    mode: ModeAngle,
) -> Resultat<(f64, DemarcheNoyau)> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_jetons(&jetons);
    debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_rpn(&rpn);
    debug!("rpn: {rpn_txt}");

    // 3) Pile
    let v = eval_rpn(&rpn, mode)?;
    debug!("{expr_str:?} [{mode}] = {v}");

    Ok((
        v,
        DemarcheNoyau {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}

/// Machine à pile : consomme la RPN de gauche à droite.
/// Il doit rester exactement une valeur à la fin.
pub fn eval_rpn(rpn: &[ElementRpn], mode: ModeAngle) -> Resultat<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for item in rpn {
        match *item {
            ElementRpn::Nombre(v) => st.push(v),

            // dépile 1 ou 2 opérandes selon l’arité, empile le résultat
            ElementRpn::Op(op) => op.applique(&mut st)?,

            ElementRpn::Fonction(f) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurCalc::OperandesManquants(f.nom().to_string()))?;
                st.push(f.applique(x, mode));
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalc::PileFinale(st.len())),
    }
}
