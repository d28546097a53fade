mod font_section;
mod image_section;
mod label_section;
mod margins_section;
mod preview_panel;
mod print_section;
mod qr_section;
mod text_section;

use eframe::egui;
use label_designer::{Designer, DesignerCommand, PrintType};
use std::path::PathBuf;

/// Everything a frame of the designer asks the app to do
#[derive(Default)]
pub struct ViewOutput {
    pub commands: Vec<DesignerCommand>,
    /// File the user picked for upload; loading it is asynchronous
    pub open_file: Option<PathBuf>,
}

impl ViewOutput {
    /// Form values were edited
    fn refresh(&mut self, designer: &mut Designer) {
        self.commands.extend(designer.settings_changed());
    }
}

pub fn show_designer(
    ui: &mut egui::Ui,
    designer: &mut Designer,
    preview: Option<&egui::TextureHandle>,
) -> ViewOutput {
    let mut out = ViewOutput::default();

    egui::SidePanel::left("designer_controls")
        .min_width(320.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Label Designer");
                ui.separator();

                label_section::show(ui, designer, &mut out);
                section_gap(ui);

                if designer.controls().text_panel_visible {
                    text_section::show(ui, designer, &mut out);
                    section_gap(ui);

                    font_section::show(ui, designer, &mut out);
                    section_gap(ui);

                    if matches!(
                        designer.form.print_type,
                        PrintType::QrCode | PrintType::QrCodeText
                    ) {
                        qr_section::show(ui, designer, &mut out);
                        section_gap(ui);
                    }

                    margins_section::show(ui, designer, &mut out);
                    section_gap(ui);
                }

                if designer.controls().image_panel_visible {
                    image_section::show(ui, designer, &mut out);
                    section_gap(ui);
                }

                print_section::show(ui, designer, &mut out);
            });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        preview_panel::show(ui, designer, preview);
    });

    out
}

fn section_gap(ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}
