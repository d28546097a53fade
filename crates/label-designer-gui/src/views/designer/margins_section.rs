use eframe::egui;
use label_designer::Designer;

use super::ViewOutput;
use crate::ui_components::MarginPairEditor;

const MAX_MARGIN_PERCENT: u32 = 300;

pub fn show(ui: &mut egui::Ui, designer: &mut Designer, out: &mut ViewOutput) {
    egui::CollapsingHeader::new("📏 Margins")
        .default_open(false)
        .show(ui, |ui| {
            ui.label("In percent of the font size");

            let controls = *designer.controls();
            let form = &mut designer.form;

            let mut changed = MarginPairEditor::new(
                ("Top:", &mut form.margin_top),
                ("Bottom:", &mut form.margin_bottom),
                controls.margins_top_bottom,
                MAX_MARGIN_PERCENT,
            )
            .show(ui);

            ui.add_space(5.0);

            changed |= MarginPairEditor::new(
                ("Left:", &mut form.margin_left),
                ("Right:", &mut form.margin_right),
                controls.margins_left_right,
                MAX_MARGIN_PERCENT,
            )
            .show(ui);

            if changed {
                out.refresh(designer);
            }
        });
}
