// src/gui/pages/stats.rs
use eframe::egui::{self, RichText};

use crate::{gui::app::App, index::Snapshot};

pub struct StatsPage;
pub static PAGE: StatsPage = StatsPage;

fn metric(ui: &mut egui::Ui, label: &str, value: usize) {
    ui.vertical(|ui| {
        ui.label(label);
        ui.label(RichText::new(value.to_string()).size(28.0).strong());
    });
}

impl super::Page for StatsPage {
    fn title(&self) -> &'static str {
        "Statistics"
    }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App, snap: &Snapshot) {
        ui.heading("Database Statistics");
        let st = snap.stats();

        ui.columns(3, |cols| {
            metric(&mut cols[0], "Total Diseases", st.total_diseases);
            metric(&mut cols[1], "Total Symptoms", st.total_symptoms);
            metric(&mut cols[2], "Total Associations", st.total_associations);
        });
        ui.separator();

        egui::ScrollArea::vertical().id_salt("stats_scroll").show(ui, |ui| {
            ui.heading("Symptom Distribution");
            ui.strong(format!("Top {} Most Common Symptoms (by disease count):", st.top_symptoms.len()));
            for (name, n) in &st.top_symptoms {
                ui.label(format!("• {}: {} diseases", name, n));
            }

            ui.add_space(8.0);
            ui.heading("Disease Distribution");
            ui.strong(format!("Top {} Diseases with Most Symptoms:", st.top_diseases.len()));
            for (name, n) in &st.top_diseases {
                ui.label(format!("• {}: {} symptoms", name, n));
            }
        });
    }
}
