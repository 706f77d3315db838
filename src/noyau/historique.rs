// src/noyau/historique.rs
//
// Historique borné des évaluations réussies : plus récent en tête.
// Le noyau ne l’alimente pas lui-même : c’est l’appelant (UI) qui ajoute.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Nombre maximal d’entrées conservées.
pub const HISTORIQUE_MAX: usize = 20;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Ajoute en tête ; la plus ancienne sort si la borne est dépassée.
    pub fn ajoute(&mut self, expression: impl Into<String>, resultat: f64) {
        self.entrees.push_front(EntreeHistorique {
            expression: expression.into(),
            resultat,
        });
        self.borne();
    }

    /// Ne garde que les `HISTORIQUE_MAX` plus récentes (historique restauré trop long).
    pub fn borne(&mut self) {
        self.entrees.truncate(HISTORIQUE_MAX);
    }

    /// i = 0 : la plus récente.
    pub fn get(&self, i: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn clear(&mut self) {
        self.entrees.clear();
    }
}
