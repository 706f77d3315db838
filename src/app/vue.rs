// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, ArrowUp/ArrowDown parcourent l’historique (quand le champ est focus)
// - Tactile : pavé complet (chiffres, opérateurs, fonctions), focus redonné après clic
// - Historique cliquable (plus récent en tête) + démarche (jetons / RPN)

use eframe::egui;

use super::etat::{AppCalc, TEXTE_ERREUR};
use crate::noyau::operateurs::Fonction;
use crate::noyau::{format_resultat, EntreeHistorique};

/// Pavé : 4 colonnes, dans l’ordre d’affichage.
const TOUCHES: [&str; 32] = [
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "0", ".", "=", "+", //
    "(", ")", "^", "!", //
    "pi", "e", "sin", "cos", //
    "tan", "asin", "acos", "atan", //
    "sqrt", "ln", "log", "abs",
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);

                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // Actions + mode d’angle
        ui.horizontal(|ui| {
            let mode = ui
                .add_sized([56.0, 30.0], egui::Button::new(self.mode_angle().to_string()))
                .on_hover_text("Bascule degrés / radians");
            if mode.clicked() {
                self.bascule_mode_angle();
            }

            ui.separator();

            if bouton(ui, "C", "Efface l’écran") {
                self.clear_entree();
            }
            if bouton(ui, "DEL", "Efface le dernier caractère") {
                self.backspace();
            }
        });

        ui.add_space(6.0);

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, sin(30), (-1)!, ln(e)")
                .id_source("ecran_edit")
                .font(egui::TextStyle::Monospace),
        );

        if resp.changed() {
            // saisie clavier directe : on quitte l’état d’erreur et la navigation
            self.en_erreur = false;
            self.index_historique = None;
        }

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier (seulement si le champ est focus) ---
        // On évite les déclenchements “globaux” quand l’utilisateur clique ailleurs.
        if resp.has_focus() {
            let (enter, haut, bas) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::Enter),
                    i.key_pressed(egui::Key::ArrowUp),
                    i.key_pressed(egui::Key::ArrowDown),
                )
            });
            if enter {
                self.evaluer();
            } else if haut {
                self.historique_precedent();
            } else if bas {
                self.historique_suivant();
            }
        }

        if self.en_erreur {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, TEXTE_ERREUR)
                .on_hover_text(self.erreur.as_str());
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (k, touche) in TOUCHES.iter().enumerate() {
                    let resp = ui.add_sized([64.0, 32.0], egui::Button::new(*touche));
                    if resp.clicked() {
                        self.touche(touche);
                    }
                    if k % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn touche(&mut self, touche: &str) {
        match touche {
            "=" => self.evaluer(),
            // une fonction s’insère avec sa parenthèse : "sin("
            f if Fonction::depuis_nom(f).is_some() => self.ajoute(&format!("{f}(")),
            _ => self.ajoute(touche),
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel = None;

        egui::CollapsingHeader::new(format!("Historique ({})", self.historique.len()))
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("vide");
                    return;
                }

                for (i, e) in self.historique.iter().enumerate() {
                    let courant = self.index_historique == Some(i);
                    if ui.selectable_label(courant, ligne_historique(e)).clicked() {
                        rappel = Some(i);
                    }
                }

                ui.add_space(4.0);
                if bouton(ui, "CLR", "Vide l’historique") {
                    rappel = None;
                    self.efface_historique();
                }
            });

        if let Some(i) = rappel {
            self.rappel_historique(i);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }
}

/// "expression = résultat" (format de l’historique).
fn ligne_historique(e: &EntreeHistorique) -> egui::RichText {
    egui::RichText::new(format!("{} = {}", e.expression, format_resultat(e.resultat))).monospace()
}

fn bouton(ui: &mut egui::Ui, label: &str, tip: &str) -> bool {
    ui.add_sized([56.0, 30.0], egui::Button::new(label))
        .on_hover_text(tip)
        .clicked()
}

fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
    ui.add_space(4.0);
    ui.label(format!("{titre} :"));
    champ_monospace(ui, id, contenu, 2);
}

fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
    // Affichage lecture seule “stable”, sans TextEdit interactif.
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.push_id(id, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.monospace(contenu);
            });
        });
}
