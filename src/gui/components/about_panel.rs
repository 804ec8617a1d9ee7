// src/gui/components/about_panel.rs
use eframe::egui;

const ABOUT: &[(&str, &str)] = &[
    ("Source", "Columbia University DBMI"),
    ("Data", "New York Presbyterian Hospital (2004)"),
    ("Method", "MedLEE NLP + Statistical Analysis"),
];

const REFERENCE: &str = "Wang X, et al. \"Automated Knowledge Acquisition from Clinical \
                         Narrative Reports.\" AMIA Annu Symp Proc. 2008:783-787.";

const HOW_TO: &[(&str, &str)] = &[
    ("Symptom → Diseases", "pick a symptom to find associated diseases"),
    ("Disease → Symptoms", "pick a disease to find associated symptoms"),
    ("Statistics", "database overview and distribution"),
];

pub fn draw(ui: &mut egui::Ui) {
    ui.heading("About");
    ui.strong("Disease-Symptom Knowledge Database");
    for (k, v) in ABOUT {
        ui.horizontal_wrapped(|ui| {
            ui.strong(format!("{}:", k));
            ui.label(*v);
        });
    }
    ui.horizontal_wrapped(|ui| {
        ui.strong("Reference:");
        ui.label(REFERENCE);
    });

    ui.separator();
    ui.heading("How to Use");
    for (i, (k, v)) in HOW_TO.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(format!("{}.", i + 1));
            ui.strong(*k);
            ui.label(format!(": {}", v));
        });
    }
}
