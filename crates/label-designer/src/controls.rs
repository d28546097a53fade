use crate::constants::{HINT_LEFT_RIGHT_MARGINS, HINT_TOP_BOTTOM_MARGINS};
use crate::form::FormState;
use crate::labels::{LabelCatalog, supports_two_color};
use crate::types::{Orientation, PrintColor};

/// Whether a control accepts input, and why not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub enabled: bool,
    pub hint: Option<&'static str>,
}

impl Availability {
    pub const ENABLED: Self = Self {
        enabled: true,
        hint: None,
    };

    pub fn disabled(hint: &'static str) -> Self {
        Self {
            enabled: false,
            hint: Some(hint),
        }
    }
}

/// Control state that follows from the form values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub margins_top_bottom: Availability,
    pub margins_left_right: Availability,
    /// Both colour buttons; black is forced when this is false
    pub color_choice_enabled: bool,
    pub text_panel_visible: bool,
    pub image_panel_visible: bool,
    /// Draw the preview clipped to a circle
    pub round_preview: bool,
}

impl ControlState {
    pub fn derive(form: &FormState, catalog: &LabelCatalog) -> Self {
        let (margins_top_bottom, margins_left_right) = match form.orientation {
            Orientation::Standard => (
                Availability::ENABLED,
                Availability::disabled(HINT_LEFT_RIGHT_MARGINS),
            ),
            Orientation::Rotated => (
                Availability::disabled(HINT_TOP_BOTTOM_MARGINS),
                Availability::ENABLED,
            ),
        };

        let image_mode = form.print_type.is_upload();
        let round_preview = catalog
            .get(&form.label_size)
            .map(|size| size.is_round())
            .unwrap_or(false);

        Self {
            margins_top_bottom,
            margins_left_right,
            color_choice_enabled: supports_two_color(&form.label_size),
            text_panel_visible: !image_mode,
            image_panel_visible: image_mode,
            round_preview,
        }
    }

    /// Bring the form in line with what the controls allow
    pub fn constrain(&self, form: &mut FormState) {
        if !self.color_choice_enabled {
            form.print_color = PrintColor::Black;
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::derive(&FormState::default(), &LabelCatalog::default())
    }
}
