use eframe::egui;
use label_designer::constants::LINE_SPACINGS;
use label_designer::{Designer, TextAlign};

use super::ViewOutput;
use crate::ui_components::{DragValueBuilder, button_group, string_selector};

pub fn show(ui: &mut egui::Ui, designer: &mut Designer, out: &mut ViewOutput) {
    egui::CollapsingHeader::new("🔤 Font")
        .default_open(true)
        .show(ui, |ui| {
            let families = designer
                .font_families()
                .iter()
                .map(|family| (family.clone(), family.clone()))
                .collect::<Vec<_>>();
            if let Some(family) =
                string_selector(ui, "font_family", "Family:", &designer.form.font_family, families)
            {
                out.commands.extend(designer.select_font_family(family));
            }

            let styles = designer
                .styles()
                .styles
                .iter()
                .map(|style| (style.clone(), style.clone()))
                .collect::<Vec<_>>();
            if let Some(style) =
                string_selector(ui, "font_style", "Style:", &designer.form.font_style, styles)
            {
                out.commands.extend(designer.select_font_style(&style));
            }

            let mut changed = ui
                .horizontal(|ui| {
                    ui.label("Size:");
                    DragValueBuilder::new(&mut designer.form.font_size)
                        .range(1..=400)
                        .speed(0.5)
                        .suffix(" pt")
                        .show(ui)
                })
                .inner;

            ui.horizontal(|ui| {
                ui.label("Align:");
                changed |= button_group(
                    ui,
                    &mut designer.form.align,
                    &[
                        (TextAlign::Left, "Left"),
                        (TextAlign::Center, "Center"),
                        (TextAlign::Right, "Right"),
                    ],
                );
            });

            let spacings = LINE_SPACINGS
                .iter()
                .map(|spacing| (spacing.to_string(), format!("{spacing} %")))
                .collect::<Vec<_>>();
            let picked = string_selector(
                ui,
                "line_spacing",
                "Line spacing:",
                &designer.form.line_spacing.to_string(),
                spacings,
            );
            if let Some(Ok(spacing)) = picked.map(|spacing| spacing.parse()) {
                designer.form.line_spacing = spacing;
                changed = true;
            }

            if changed {
                out.refresh(designer);
            }
        });
}
