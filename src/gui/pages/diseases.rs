// src/gui/pages/diseases.rs
use eframe::egui::{self, RichText};

use crate::{
    gui::{
        app::App,
        components::{data_table, picker},
        table_model::{TableData, TOP_SYMPTOMS_SHOWN},
    },
    index::Snapshot,
};

pub struct DiseasesPage;
pub static PAGE: DiseasesPage = DiseasesPage;

const WIDTHS: [f32; 3] = [50.0, 320.0, 140.0];

impl super::Page for DiseasesPage {
    fn title(&self) -> &'static str {
        "Disease → Symptoms"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, snap: &Snapshot) {
        ui.heading("Find Symptoms Associated with a Disease");

        let gui = &mut app.state.gui;
        let options = snap.disease_names();
        if gui.selected_disease.is_none() {
            gui.selected_disease = options.first().cloned();
        }
        picker::draw(ui, "disease_selector", "Select a disease:", options, &mut gui.disease_filter, &mut gui.selected_disease);

        let Some(disease) = gui.selected_disease.clone() else { return };
        let ix = snap.index();
        let symptoms = ix.symptoms_for(&disease);
        if symptoms.is_empty() {
            ui.colored_label(ui.visuals().warn_fg_color, format!("No symptoms found for disease: {}", disease));
            return;
        }

        ui.label(RichText::new(format!("Found {} symptoms for {}", symptoms.len(), disease)).strong());

        ui.add_space(4.0);
        ui.strong(format!("Top {} Most Associated Symptoms:", TOP_SYMPTOMS_SHOWN));
        for (i, s) in symptoms.iter().take(TOP_SYMPTOMS_SHOWN).enumerate() {
            ui.label(format!("{}. {}", i + 1, s));
        }
        ui.add_space(4.0);

        let table = TableData::symptoms_for_disease(ix, &disease);
        data_table::draw(ui, "disease_table", &table, &[1], &WIDTHS);
    }
}
