// src/gui/components/picker.rs
//
// Filter box + combo box over a sorted name list. Returns true when the
// selection changed.

use eframe::egui;

use crate::gui::table_model::filter_options;

pub fn draw(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    options: &[String],
    filter: &mut String,
    selected: &mut Option<String>,
) -> bool {
    let before = selected.clone();

    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(&mut *filter).hint_text("filter…").desired_width(160.0));

        let shown = filter_options(options, filter.as_str());
        let text = selected.as_deref().unwrap_or("(none)");
        egui::ComboBox::from_id_salt(id)
            .selected_text(text)
            .width(280.0)
            .height(400.0)
            .show_ui(ui, |ui| {
                for name in shown {
                    let is_sel = selected.as_deref() == Some(name.as_str());
                    if ui.selectable_label(is_sel, name.as_str()).clicked() {
                        *selected = Some(name.clone());
                    }
                }
            });
        ui.label(format!("{} options", options.len()));
    });

    let changed = *selected != before;
    if changed {
        logd!("UI: {} → {:?}", id, selected);
    }
    changed
}
