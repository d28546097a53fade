use eframe::egui;
use label_designer::{Designer, QrCorrection};

use super::ViewOutput;
use crate::ui_components::{enum_selector, labeled_drag_clamped};

pub fn show(ui: &mut egui::Ui, designer: &mut Designer, out: &mut ViewOutput) {
    egui::CollapsingHeader::new("▦ QR Code")
        .default_open(true)
        .show(ui, |ui| {
            let mut changed =
                labeled_drag_clamped(ui, "Module size:", &mut designer.form.qrcode_size, 1..=50, "");

            changed |= enum_selector(
                ui,
                "qrcode_correction",
                "Error correction:",
                &mut designer.form.qrcode_correction,
                &[
                    (QrCorrection::L, "L (7%)"),
                    (QrCorrection::M, "M (15%)"),
                    (QrCorrection::Q, "Q (25%)"),
                    (QrCorrection::H, "H (30%)"),
                ],
            );

            if changed {
                out.refresh(designer);
            }
        });
}
