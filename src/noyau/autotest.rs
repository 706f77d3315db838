// src/noyau/autotest.rs
//
// Vérification rapide au démarrage : quelques valeurs connues, résultat journalisé.
// N’interrompt jamais l’application.

use log::{info, warn};

use super::eval::eval_expression;
use super::operateurs::ModeAngle;

const TOLERANCE: f64 = 1e-9;

/// (expression, mode, valeur attendue)
const CAS: [(&str, ModeAngle, f64); 9] = [
    ("sqrt(9)", ModeAngle::Degres, 3.0),
    ("sin(30)", ModeAngle::Degres, 0.5),
    ("sin(pi/6)", ModeAngle::Radians, 0.5),
    ("3!", ModeAngle::Degres, 6.0),
    ("log(100)", ModeAngle::Degres, 2.0),
    ("ln(e)", ModeAngle::Degres, 1.0),
    ("2+3*4", ModeAngle::Degres, 14.0),
    ("(2+3)*4", ModeAngle::Degres, 20.0),
    ("2^3^2", ModeAngle::Degres, 512.0),
];

/// Retourne (réussis, total).
pub fn verifie_noyau() -> (usize, usize) {
    let mut reussis = 0;

    for (expr, mode, attendu) in CAS {
        match eval_expression(expr, mode) {
            Ok(v) if (v - attendu).abs() < TOLERANCE => reussis += 1,
            Ok(v) => warn!("autotest {expr:?} [{mode}] : obtenu {v}, attendu {attendu}"),
            Err(e) => warn!("autotest {expr:?} [{mode}] : {e}"),
        }
    }

    info!("autotest noyau : {reussis}/{} réussis", CAS.len());
    (reussis, CAS.len())
}
