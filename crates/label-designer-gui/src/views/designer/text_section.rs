use eframe::egui;
use label_designer::Designer;

use super::ViewOutput;

pub fn show(ui: &mut egui::Ui, designer: &mut Designer, out: &mut ViewOutput) {
    egui::CollapsingHeader::new("✏ Text")
        .default_open(true)
        .show(ui, |ui| {
            let edit = egui::TextEdit::multiline(&mut designer.form.text)
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .hint_text("Label text");

            if ui.add(edit).changed() {
                out.refresh(designer);
            }
        });
}
