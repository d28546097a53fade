use eframe::egui;
use label_designer::Availability;

/// Builder for drag values with range and suffix
pub struct DragValueBuilder<'a, T> {
    value: &'a mut T,
    range: Option<std::ops::RangeInclusive<T>>,
    suffix: Option<String>,
    speed: Option<f32>,
}

impl<'a, T> DragValueBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T) -> Self {
        Self {
            value,
            range: None,
            suffix: None,
            speed: None,
        }
    }

    pub fn range(mut self, range: std::ops::RangeInclusive<T>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut drag = egui::DragValue::new(self.value);

        if let Some(range) = self.range {
            drag = drag.range(range);
        }

        if let Some(suffix) = self.suffix {
            drag = drag.suffix(suffix);
        }

        if let Some(speed) = self.speed {
            drag = drag.speed(speed);
        }

        ui.add(drag).changed()
    }
}

/// Labeled drag value with range and suffix
pub fn labeled_drag_clamped<T>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    range: std::ops::RangeInclusive<T>,
    suffix: &str,
) -> bool
where
    T: egui::emath::Numeric,
{
    ui.horizontal(|ui| {
        ui.label(label);
        DragValueBuilder::new(value)
            .range(range)
            .suffix(suffix)
            .show(ui)
    })
    .inner
}

/// Enum selector using ComboBox
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| *text)
            .unwrap_or("Unknown");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in options {
                    if ui
                        .selectable_value(value, option_value.clone(), *option_text)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });
    changed
}

/// ComboBox over a list of strings; the selection is the string itself
pub fn string_selector(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &str,
    options: impl IntoIterator<Item = (String, String)>,
) -> Option<String> {
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.label(label);

        let options: Vec<(String, String)> = options.into_iter().collect();
        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| text.as_str())
            .unwrap_or(value);

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in &options {
                    if ui
                        .selectable_label(option_value == value, option_text)
                        .clicked()
                        && option_value != value
                    {
                        picked = Some(option_value.clone());
                    }
                }
            });
    });
    picked
}

/// Horizontal button group for enum selection
pub fn button_group<T>(ui: &mut egui::Ui, value: &mut T, options: &[(T, &str)]) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        for (option_value, option_text) in options {
            if ui
                .selectable_value(value, option_value.clone(), *option_text)
                .changed()
            {
                changed = true;
            }
        }
    });
    changed
}

/// Pair of margins that is greyed out, with its hint, when unavailable
pub struct MarginPairEditor<'a> {
    first: (&'a str, &'a mut u32),
    second: (&'a str, &'a mut u32),
    availability: Availability,
    max: u32,
}

impl<'a> MarginPairEditor<'a> {
    pub fn new(
        first: (&'a str, &'a mut u32),
        second: (&'a str, &'a mut u32),
        availability: Availability,
        max: u32,
    ) -> Self {
        Self {
            first,
            second,
            availability,
            max,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let Self {
            first,
            second,
            availability,
            max,
        } = self;

        let changed = ui
            .add_enabled_ui(availability.enabled, |ui| {
                let mut changed = labeled_drag_clamped(ui, first.0, first.1, 0..=max, " %");
                changed |= labeled_drag_clamped(ui, second.0, second.1, 0..=max, " %");
                changed
            })
            .inner;

        if let Some(hint) = availability.hint {
            ui.small(hint);
        }

        changed
    }
}
