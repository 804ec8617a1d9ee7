// src/gui/pages/symptoms.rs
use eframe::egui::{self, RichText};

use crate::{
    gui::{
        app::App,
        components::{data_table, picker},
        table_model::{details_line, TableData},
    },
    index::Snapshot,
};

pub struct SymptomsPage;
pub static PAGE: SymptomsPage = SymptomsPage;

const WIDTHS: [f32; 3] = [50.0, 320.0, 110.0];

impl super::Page for SymptomsPage {
    fn title(&self) -> &'static str {
        "Symptom → Diseases"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, snap: &Snapshot) {
        ui.heading("Find Diseases Associated with a Symptom");

        let gui = &mut app.state.gui;
        let options = snap.symptom_names();
        if gui.selected_symptom.is_none() {
            gui.selected_symptom = options.first().cloned();
        }
        picker::draw(ui, "symptom_selector", "Select a symptom:", options, &mut gui.symptom_filter, &mut gui.selected_symptom);

        let Some(symptom) = gui.selected_symptom.clone() else { return };
        let ix = snap.index();
        let diseases = ix.diseases_for(&symptom);
        if diseases.is_empty() {
            ui.colored_label(ui.visuals().warn_fg_color, format!("No diseases found for symptom: {}", symptom));
            return;
        }

        ui.label(RichText::new(format!("Found {} diseases associated with {}", diseases.len(), symptom)).strong());

        ui.checkbox(&mut gui.show_symptom_details, "Show symptom details");
        if gui.show_symptom_details {
            ui.horizontal_wrapped(|ui| {
                ui.strong("Symptom:");
                ui.label(symptom.as_str());
            });
            ui.horizontal_wrapped(|ui| {
                ui.strong("Associated diseases:");
                ui.label(details_line(diseases));
            });
        }
        ui.add_space(4.0);

        let table = TableData::diseases_for_symptom(ix, &symptom);
        data_table::draw(ui, "symptom_table", &table, &[1], &WIDTHS);
    }
}
