use eframe::egui;
use label_designer::Designer;

pub fn show(ui: &mut egui::Ui, designer: &Designer, texture: Option<&egui::TextureHandle>) {
    ui.horizontal(|ui| {
        ui.heading("Preview");
        if let Some(size) = designer.preview_size_label() {
            ui.separator();
            ui.label(size);
        }
    });
    ui.separator();

    let Some(texture) = texture else {
        ui.centered_and_justified(|ui| {
            ui.spinner();
        });
        return;
    };

    let round = designer.controls().round_preview;
    egui::ScrollArea::both().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            let mut image = egui::Image::new((texture.id(), texture.size_vec2()))
                .max_width(ui.available_width())
                .bg_fill(egui::Color32::WHITE);
            if round {
                image = image.corner_radius(egui::CornerRadius::same(u8::MAX));
            }
            ui.add(image);
        });
    });
}
