//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (écran, erreur, mode d’angle, historique,
//! démarche) et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - L’évaluation passe uniquement par `noyau::eval_expression_detaillee`.
//! - Le mode d’angle est lu au moment de l’appel et passé en paramètre au noyau.
//! - Persistant (eframe) : mode d’angle + historique. Le reste repart à zéro.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::noyau::{self, format_resultat, DemarcheNoyau, ErreurCalc, Historique, ModeAngle};

/// Ce que l’écran affiche en cas d’échec (toutes erreurs confondues).
pub const TEXTE_ERREUR: &str = "Erreur";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppCalc {
    // --- persistant ---
    pub mode_angle: ModeAngle,
    pub historique: Historique,

    // --- entrée utilisateur (écran) ---
    #[serde(skip)]
    pub entree: String,

    // --- sorties ---
    #[serde(skip)]
    pub erreur: String, // message détaillé (si parsing/éval échoue)
    #[serde(skip)]
    pub en_erreur: bool, // l’écran montre TEXTE_ERREUR jusqu’à la prochaine saisie

    // --- démarche (panneau d’explication) ---
    #[serde(skip)]
    pub demarche: DemarcheNoyau,

    // --- navigation ArrowUp / ArrowDown (None = saisie libre) ---
    #[serde(skip)]
    pub index_historique: Option<usize>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    #[serde(skip)]
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            mode_angle: ModeAngle::default(),
            historique: Historique::default(),
            entree: String::new(),
            erreur: String::new(),
            en_erreur: false,
            demarche: DemarcheNoyau::default(),
            index_historique: None,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// État restauré depuis le stockage eframe (ou neuf).
    pub fn restaure(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut app: Self = storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();
        app.historique.borne();
        info!(
            "état restauré : mode {}, {} entrées d’historique",
            app.mode_angle,
            app.historique.len()
        );
        app
    }

    /* ------------------------ Mode d’angle ------------------------ */

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn set_mode_angle(&mut self, mode: ModeAngle) {
        if mode != self.mode_angle {
            info!("mode d’angle : {} -> {}", self.mode_angle, mode);
        }
        self.mode_angle = mode;
        self.focus_entree = true;
    }

    pub fn bascule_mode_angle(&mut self) {
        self.set_mode_angle(self.mode_angle.bascule());
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute du texte à l’écran (touche du pavé).
    pub fn ajoute(&mut self, texte: &str) {
        self.en_erreur = false;
        self.index_historique = None;
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace(&mut self) {
        self.en_erreur = false;
        self.entree.pop();
        self.focus_entree = true;
    }

    /// C / Escape : efface seulement l’écran.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.en_erreur = false;
        self.index_historique = None;
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" / Enter : évalue l’écran, alimente l’historique, remplace l’écran par le résultat.
    pub fn evaluer(&mut self) {
        let expr = self.entree.trim().to_string();

        match noyau::eval_expression_detaillee(&expr, self.mode_angle) {
            Ok((v, demarche)) => {
                self.historique.ajoute(expr, v);
                self.entree = format_resultat(v);
                self.demarche = demarche;
                self.erreur.clear();
                self.en_erreur = false;
            }
            Err(e) => self.set_erreur(&expr, e),
        }

        self.index_historique = None;
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE l’entrée pour permettre la correction.
    /// - On coupe la démarche (non fiable si l’évaluation échoue).
    fn set_erreur(&mut self, expr: &str, e: ErreurCalc) {
        warn!("évaluation de {expr:?} impossible ({:?}) : {e}", e.categorie());
        self.erreur = e.to_string();
        self.en_erreur = true;
        self.demarche = DemarcheNoyau::default();
    }

    /* ------------------------ Historique ------------------------ */

    /// Clic sur une entrée : remet son expression à l’écran.
    pub fn rappel_historique(&mut self, i: usize) {
        if let Some(e) = self.historique.get(i) {
            self.entree = e.expression.clone();
            self.en_erreur = false;
            self.index_historique = Some(i);
        }
        self.focus_entree = true;
    }

    /// ArrowUp : entrée plus ancienne.
    pub fn historique_precedent(&mut self) {
        let suivant = self.index_historique.map_or(0, |i| i + 1);
        if suivant < self.historique.len() {
            self.rappel_historique(suivant);
        }
    }

    /// ArrowDown : entrée plus récente ; après la plus récente, écran vide.
    pub fn historique_suivant(&mut self) {
        match self.index_historique {
            Some(0) => self.clear_entree(),
            Some(i) => self.rappel_historique(i - 1),
            None => {}
        }
    }

    pub fn efface_historique(&mut self) {
        self.historique.clear();
        self.index_historique = None;
        self.focus_entree = true;
    }
}
