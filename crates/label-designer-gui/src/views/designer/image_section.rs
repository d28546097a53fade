use eframe::egui;
use label_designer::{Designer, FileState};

use super::ViewOutput;

const UPLOAD_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "pdf"];

pub fn show(ui: &mut egui::Ui, designer: &mut Designer, out: &mut ViewOutput) {
    egui::CollapsingHeader::new("🖼 Image")
        .default_open(true)
        .show(ui, |ui| {
            ui.label("Drop a PNG, JPEG or PDF file on the window, or choose one.");
            ui.add_space(5.0);

            if ui.button("📂 Choose File...").clicked() {
                out.open_file = rfd::FileDialog::new()
                    .add_filter("Image or PDF", &UPLOAD_EXTENSIONS)
                    .pick_file();
            }

            ui.add_space(5.0);

            let queued = designer
                .uploads()
                .file()
                .map(|file| file.name.clone())
                .zip(designer.uploads().state());

            match queued {
                Some((name, state)) => {
                    let mut remove = false;
                    ui.horizontal(|ui| {
                        ui.label(&name);
                        if state == FileState::Uploading {
                            ui.spinner();
                        }
                        remove = ui.small_button("✖").on_hover_text("Remove file").clicked();
                    });
                    if remove {
                        out.commands.extend(designer.remove_file());
                    }
                }
                None => {
                    ui.weak("No file selected");
                }
            }
        });
}
