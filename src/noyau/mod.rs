//! Noyau flottant
//!
//! Organisation interne :
//! - autotest.rs   : vérification rapide au démarrage (journalisée)
//! - erreur.rs     : ErreurCalc + catégorie (lexicale / syntaxe / évaluation)
//! - jetons.rs     : tokenisation
//! - operateurs.rs : tables fixes (opérateurs, fonctions, constantes) + mode d’angle
//! - rpn.rs        : shunting-yard
//! - eval.rs       : machine à pile + pipeline complet
//! - format.rs     : texte du résultat, des jetons, de la RPN
//! - historique.rs : historique borné (20 entrées)

pub mod autotest;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use autotest::verifie_noyau;
pub use erreur::ErreurCalc;
pub use eval::{eval_expression, eval_expression_detaillee, DemarcheNoyau};
pub use format::format_resultat;
pub use historique::{EntreeHistorique, Historique};
pub use operateurs::ModeAngle;
