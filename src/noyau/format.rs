// src/noyau/format.rs
//
// Affichage texte : résultat (réinjectable dans l’entrée), jetons, RPN.

use super::jetons::{Jeton, Tok};
use super::rpn::ElementRpn;

/// Texte d’un résultat.
///
/// `Display` de f64 donne la plus courte écriture qui se relit exactement,
/// sans notation exponentielle : le texte se re-tokenize tel quel.
pub fn format_resultat(v: f64) -> String {
    // pas de "-0" à l’écran
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match &j.tok {
            Tok::Nombre(lexeme) => lexeme.clone(),
            Tok::Ident(name) => name.clone(),
            Tok::Symbole(c) => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format utilitaire (“démarche”) : RPN en texte.
pub fn format_rpn(rpn: &[ElementRpn]) -> String {
    rpn.iter()
        .map(|e| match e {
            ElementRpn::Nombre(v) => format_resultat(*v),
            ElementRpn::Op(op) => op.symbole().to_string(),
            ElementRpn::Fonction(f) => f.nom().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
