// src/noyau/operateurs.rs
//
// Tables fixes du noyau : opérateurs, fonctions, constantes, mode d’angle.
// Énumérations fermées => le compilateur vérifie que chaque cas est traité.

use std::f64::consts::{E, PI};
use std::fmt;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::erreur::{ErreurCalc, Resultat};

/// Au-delà, le produit vaut déjà +inf en f64 (171! > f64::MAX).
const FACTORIELLE_MAX: u64 = 171;

/* ------------------------ Mode d’angle ------------------------ */

/// Convention des fonctions trigonométriques. Possédé par l’appelant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Argument de sin/cos/tan -> radians.
    fn vers_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x * PI / 180.0,
            ModeAngle::Radians => x,
        }
    }

    /// Résultat de asin/acos/atan (radians) -> unité du mode.
    fn depuis_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x * 180.0 / PI,
            ModeAngle::Radians => x,
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAngle::Degres => f.write_str("DEG"),
            ModeAngle::Radians => f.write_str("RAD"),
        }
    }
}

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire,
    Binaire,
}

impl Arite {
    /// Nombre d’opérandes consommés sur la pile.
    pub const fn nombre(self) -> usize {
        match self {
            Arite::Unaire => 1,
            Arite::Binaire => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixite {
    Prefixe,
    Infixe,
    Postfixe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DescripteurOp {
    pub symbole: &'static str,
    pub precedence: u8,
    pub associativite: Associativite,
    pub arite: Arite,
    pub fixite: Fixite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Factorielle,
    /// Moins unaire (distinct de la soustraction).
    Negation,
}

impl Operateur {
    /// Opérateur binaire/postfixe associé à un symbole.
    /// Le moins unaire n’a pas de symbole propre : c’est la RPN qui le déduit.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            '!' => Some(Operateur::Factorielle),
            _ => None,
        }
    }

    pub const fn descripteur(self) -> DescripteurOp {
        use Arite::*;
        use Associativite::*;
        use Fixite::*;

        let (symbole, precedence, associativite, arite, fixite) = match self {
            Operateur::Plus => ("+", 2, Gauche, Binaire, Infixe),
            Operateur::Moins => ("-", 2, Gauche, Binaire, Infixe),
            Operateur::Fois => ("*", 3, Gauche, Binaire, Infixe),
            Operateur::Divise => ("/", 3, Gauche, Binaire, Infixe),
            Operateur::Puissance => ("^", 4, Droite, Binaire, Infixe),
            Operateur::Factorielle => ("!", 5, Gauche, Unaire, Postfixe),
            Operateur::Negation => ("neg", 5, Droite, Unaire, Prefixe),
        };

        DescripteurOp {
            symbole,
            precedence,
            associativite,
            arite,
            fixite,
        }
    }

    pub fn symbole(self) -> &'static str {
        self.descripteur().symbole
    }

    /// Dépile ses opérandes et empile le résultat.
    /// Division par zéro : convention IEEE (inf / NaN), non interceptée.
    pub fn applique(self, pile: &mut Vec<f64>) -> Resultat<()> {
        let r = match self {
            Operateur::Negation => {
                let [a] = self.operandes::<1>(pile)?;
                -a
            }
            Operateur::Factorielle => {
                let [a] = self.operandes::<1>(pile)?;
                factorielle(a)?
            }
            Operateur::Plus => {
                let [a, b] = self.operandes::<2>(pile)?;
                a + b
            }
            Operateur::Moins => {
                let [a, b] = self.operandes::<2>(pile)?;
                a - b
            }
            Operateur::Fois => {
                let [a, b] = self.operandes::<2>(pile)?;
                a * b
            }
            Operateur::Divise => {
                let [a, b] = self.operandes::<2>(pile)?;
                a / b
            }
            Operateur::Puissance => {
                let [a, b] = self.operandes::<2>(pile)?;
                a.powf(b)
            }
        };
        pile.push(r);
        Ok(())
    }

    /// Retire les `N` valeurs du sommet, gauche -> droite (le sommet est l’opérande de droite).
    fn operandes<const N: usize>(self, pile: &mut Vec<f64>) -> Resultat<[f64; N]> {
        debug_assert_eq!(N, self.descripteur().arite.nombre());

        let debut = pile
            .len()
            .checked_sub(N)
            .ok_or_else(|| ErreurCalc::OperandesManquants(self.symbole().to_string()))?;

        let mut r = [0.0; N];
        r.copy_from_slice(&pile[debut..]);
        pile.truncate(debut);
        Ok(r)
    }
}

/// n! par produit itératif ; n doit être un entier >= 0.
fn factorielle(n: f64) -> Resultat<f64> {
    // NaN et ±inf ont une partie fractionnaire NaN => refusés ici aussi
    if n < 0.0 || n.fract() != 0.0 {
        return Err(ErreurCalc::Factorielle);
    }

    let borne = n
        .to_u64()
        .map_or(FACTORIELLE_MAX, |k| k.min(FACTORIELLE_MAX));

    let mut r = 1.0_f64;
    for i in 2..=borne {
        r *= i as f64;
    }
    Ok(r)
}

/* ------------------------ Fonctions ------------------------ */

/// Fonctions nommées, toutes unaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,
    Log,
    Abs,
}

impl Fonction {
    pub const TOUTES: [Fonction; 10] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Sqrt,
        Fonction::Ln,
        Fonction::Log,
        Fonction::Abs,
    ];

    /// Nom déjà en minuscules (les jetons sont normalisés).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        Self::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Sqrt => "sqrt",
            Fonction::Ln => "ln",
            Fonction::Log => "log",
            Fonction::Abs => "abs",
        }
    }

    /// Trig directe : l’argument suit le mode. Trig inverse : le résultat suit le mode.
    pub fn applique(self, x: f64, mode: ModeAngle) -> f64 {
        match self {
            Fonction::Sin => mode.vers_radians(x).sin(),
            Fonction::Cos => mode.vers_radians(x).cos(),
            Fonction::Tan => mode.vers_radians(x).tan(),
            Fonction::Asin => mode.depuis_radians(x.asin()),
            Fonction::Acos => mode.depuis_radians(x.acos()),
            Fonction::Atan => mode.depuis_radians(x.atan()),
            Fonction::Sqrt => x.sqrt(),
            Fonction::Ln => x.ln(),
            Fonction::Log => x.log10(),
            Fonction::Abs => x.abs(),
        }
    }
}

/* ------------------------ Constantes ------------------------ */

/// Constantes nommées (pi, e).
pub fn constante(nom: &str) -> Option<f64> {
    match nom {
        "pi" => Some(PI),
        "e" => Some(E),
        _ => None,
    }
}
