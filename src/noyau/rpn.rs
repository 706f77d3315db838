// src/noyau/rpn.rs
//
// Shunting-yard : jetons -> RPN (postfix)
//
// Règles:
// - Nombre : parsé en f64 puis sorti directement (lexème mal formé => erreur)
// - Ident(name):
//    - constante (pi, e) => valeur sortie directement
//    - fonction (sin, cos, ...) => empilée, sortie après sa parenthèse fermante ;
//      doit être suivie de '(' ("sqrt 4" refusé)
//    - sinon => identifiant inconnu (refusé ici, pas à l’évaluation)
// - Moins unaire:
//    - '-' en début, après un opérateur, après '(' ou ',' => Negation
// - Parenthèses vérifiées : ')' orpheline ou '(' non fermée => erreur
// - Deux valeurs côte à côte ("3 4", "(2)(3)", "2pi") => opérateur manquant
// - ',' seulement entre deux arguments, dans des parenthèses ("2,", "(,2)", "(2,)" refusés)

use super::erreur::{ErreurCalc, Resultat};
use super::jetons::{Jeton, Tok};
use super::operateurs::{constante, Associativite, Fixite, Fonction, Operateur};

/// Élément d’une séquence RPN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementRpn {
    Nombre(f64),
    Op(Operateur),
    Fonction(Fonction),
}

/// Contenu possible de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pile {
    ParOuvrante,
    Op(Operateur),
    Fonction(Fonction),
}

/// Catégorie du jeton précédent (sert au moins unaire).
#[derive(Clone, Copy, Debug, PartialEq)]
enum Precedent {
    Debut,
    Valeur,
    Operateur,
    ParOuvrante,
    Virgule,
    Fonction(Fonction),
}

impl Precedent {
    fn attend_operande(self) -> bool {
        matches!(
            self,
            Precedent::Debut | Precedent::Operateur | Precedent::ParOuvrante | Precedent::Virgule
        )
    }
}

/// `top` doit sortir avant d’empiler `entrant` ?
fn doit_depiler(top: Operateur, entrant: Operateur) -> bool {
    let t = top.descripteur();
    let e = entrant.descripteur();
    t.precedence > e.precedence
        || (t.precedence == e.precedence && e.associativite == Associativite::Gauche)
}

/// Une valeur (nombre, constante, fonction, '(') ne peut pas suivre une valeur.
fn verifie_operateur(prev: Precedent, jeton: &Jeton) -> Resultat<()> {
    if prev == Precedent::Valeur {
        return Err(ErreurCalc::OperateurManquant(jeton.position));
    }
    Ok(())
}

fn parse_nombre(lexeme: &str) -> Resultat<f64> {
    lexeme
        .parse::<f64>()
        .map_err(|_| ErreurCalc::NombreInvalide(lexeme.to_string()))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: sin ( pi / 2 )
///   rpn:    3.14159… 2 / sin
pub fn to_rpn(jetons: &[Jeton]) -> Resultat<Vec<ElementRpn>> {
    if jetons.is_empty() {
        return Err(ErreurCalc::Vide);
    }

    let mut out: Vec<ElementRpn> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Pile> = Vec::new();
    let mut prev = Precedent::Debut;

    for jeton in jetons {
        if let Precedent::Fonction(f) = prev {
            if jeton.tok != Tok::Symbole('(') {
                return Err(ErreurCalc::ParentheseAttendue(f.nom().to_string()));
            }
        }

        match &jeton.tok {
            Tok::Nombre(lexeme) => {
                verifie_operateur(prev, jeton)?;
                out.push(ElementRpn::Nombre(parse_nombre(lexeme)?));
                prev = Precedent::Valeur;
            }

            Tok::Ident(name) => {
                verifie_operateur(prev, jeton)?;
                if let Some(v) = constante(name) {
                    out.push(ElementRpn::Nombre(v));
                    prev = Precedent::Valeur;
                } else if let Some(f) = Fonction::depuis_nom(name) {
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    ops.push(Pile::Fonction(f));
                    prev = Precedent::Fonction(f);
                } else {
                    return Err(ErreurCalc::IdentifiantInconnu(name.clone()));
                }
            }

            Tok::Symbole('(') => {
                verifie_operateur(prev, jeton)?;
                ops.push(Pile::ParOuvrante);
                prev = Precedent::ParOuvrante;
            }

            Tok::Symbole(')') => {
                // "()", "(2,)", "(2+)" : argument vide
                if matches!(
                    prev,
                    Precedent::ParOuvrante | Precedent::Virgule | Precedent::Operateur
                ) {
                    return Err(ErreurCalc::OperandeAttendu(jeton.position));
                }
                depile_jusqu_a_parenthese(&mut ops, &mut out)?;
                // retire '('
                ops.pop();

                // si une fonction est au sommet, on la sort aussi
                if let Some(Pile::Fonction(f)) = ops.last().copied() {
                    ops.pop();
                    out.push(ElementRpn::Fonction(f));
                }

                prev = Precedent::Valeur;
            }

            Tok::Symbole(',') => {
                // séparateur d’arguments : l’argument courant doit être complet
                if prev.attend_operande() {
                    return Err(ErreurCalc::OperandeAttendu(jeton.position));
                }
                // on vide l’argument courant, '(' reste en place
                depile_jusqu_a_parenthese(&mut ops, &mut out)
                    .map_err(|_| ErreurCalc::VirguleHorsParentheses(jeton.position))?;
                prev = Precedent::Virgule;
            }

            Tok::Symbole(c) => {
                let mut op = Operateur::depuis_symbole(*c).ok_or(ErreurCalc::Lexicale {
                    position: jeton.position,
                    caractere: *c,
                })?;

                if op == Operateur::Moins && prev.attend_operande() {
                    op = Operateur::Negation;
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(Pile::Op(top)) = ops.last().copied() {
                    if !doit_depiler(top, op) {
                        break;
                    }
                    ops.pop();
                    out.push(ElementRpn::Op(top));
                }

                ops.push(Pile::Op(op));

                // '!' ferme une valeur : le '-' suivant est binaire ("3!-1" = 5), pas unaire
                prev = if op.descripteur().fixite == Fixite::Postfixe {
                    Precedent::Valeur
                } else {
                    Precedent::Operateur
                };
            }
        }
    }

    // "sin" en fin d’entrée
    if let Precedent::Fonction(f) = prev {
        return Err(ErreurCalc::ParentheseAttendue(f.nom().to_string()));
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top {
            Pile::ParOuvrante => return Err(ErreurCalc::ParentheseOuverte),
            Pile::Op(op) => out.push(ElementRpn::Op(op)),
            Pile::Fonction(f) => out.push(ElementRpn::Fonction(f)),
        }
    }

    Ok(out)
}

/// Sort les opérateurs jusqu’à la '(' la plus proche (laissée sur la pile).
fn depile_jusqu_a_parenthese(ops: &mut Vec<Pile>, out: &mut Vec<ElementRpn>) -> Resultat<()> {
    while let Some(top) = ops.last().copied() {
        match top {
            Pile::ParOuvrante => return Ok(()),
            Pile::Op(op) => out.push(ElementRpn::Op(op)),
            Pile::Fonction(f) => out.push(ElementRpn::Fonction(f)),
        }
        ops.pop();
    }
    Err(ErreurCalc::ParentheseFermante)
}
