// src/noyau/jetons.rs

use super::erreur::{ErreurCalc, Resultat};

/// Symboles reconnus (chacun forme un jeton à lui seul).
pub const SYMBOLES: [char; 9] = ['+', '-', '*', '/', '^', '(', ')', '!', ','];

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Lexème brut (chiffres et points) : la validité du nombre est vérifiée par la RPN.
    Nombre(String),

    // Mot ASCII en minuscules. Fonction, constante ou inconnu : la RPN décidera.
    Ident(String),

    Symbole(char),
}

/// Jeton + position (index de caractère) dans l’entrée.
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub position: usize,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres : suite de chiffres et de points (ex: 12, 3.5, .5)
/// - identifiants [a-zA-Z]+ (normalisés en minuscules)
/// - symboles + - * / ^ ( ) ! ,
/// - espaces ignorés
pub fn tokenize(s: &str) -> Resultat<Vec<Jeton>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre (non validé ici : "1.2.3" reste un seul jeton)
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Jeton {
                tok: Tok::Nombre(chars[start..i].iter().collect()),
                position: start,
            });
            continue;
        }

        // Identifiants ASCII : [a-zA-Z]+
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Jeton {
                tok: Tok::Ident(word.to_ascii_lowercase()),
                position: start,
            });
            continue;
        }

        if SYMBOLES.contains(&c) {
            out.push(Jeton {
                tok: Tok::Symbole(c),
                position: i,
            });
            i += 1;
            continue;
        }

        return Err(ErreurCalc::Lexicale {
            position: i,
            caractere: c,
        });
    }

    Ok(out)
}
