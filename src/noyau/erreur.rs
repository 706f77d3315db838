// src/noyau/erreur.rs
//
// Erreurs du noyau (jetons -> RPN -> évaluation).
// Toutes les étapes échouent tout de suite (`?`), rien n’est rattrapé en interne.

use thiserror::Error;

/// Résultat du noyau.
pub type Resultat<T> = std::result::Result<T, ErreurCalc>;

/// Étape du pipeline où l’erreur est née.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    /// Caractère non reconnu (jetons).
    Lexicale,
    /// Structure invalide (nombre mal formé, parenthèses, virgule, identifiant, vide).
    Syntaxe,
    /// Pile insuffisante, domaine invalide, pile finale ≠ 1.
    Evaluation,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurCalc {
    #[error("caractère inattendu '{caractere}' en position {position}")]
    Lexicale { position: usize, caractere: char },

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("identifiant inconnu: '{0}'")]
    IdentifiantInconnu(String),

    #[error("opérateur manquant en position {0}")]
    OperateurManquant(usize),

    #[error("opérande attendu en position {0}")]
    OperandeAttendu(usize),

    #[error("virgule hors parenthèses en position {0}")]
    VirguleHorsParentheses(usize),

    #[error("parenthèse attendue après '{0}'")]
    ParentheseAttendue(String),

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseFermante,

    #[error("parenthèse non fermée")]
    ParentheseOuverte,

    #[error("expression vide")]
    Vide,

    #[error("opérandes manquants pour '{0}'")]
    OperandesManquants(String),

    #[error("factorielle : entier positif ou nul requis")]
    Factorielle,

    #[error("expression invalide ({0} valeurs restantes sur la pile)")]
    PileFinale(usize),
}

impl ErreurCalc {
    pub fn categorie(&self) -> Categorie {
        match self {
            ErreurCalc::Lexicale { .. } => Categorie::Lexicale,

            ErreurCalc::NombreInvalide(_)
            | ErreurCalc::IdentifiantInconnu(_)
            | ErreurCalc::OperateurManquant(_)
            | ErreurCalc::OperandeAttendu(_)
            | ErreurCalc::VirguleHorsParentheses(_)
            | ErreurCalc::ParentheseAttendue(_)
            | ErreurCalc::ParentheseFermante
            | ErreurCalc::ParentheseOuverte
            | ErreurCalc::Vide => Categorie::Syntaxe,

            ErreurCalc::OperandesManquants(_)
            | ErreurCalc::Factorielle
            | ErreurCalc::PileFinale(_) => Categorie::Evaluation,
        }
    }
}
