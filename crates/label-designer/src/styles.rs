use crate::constants::DEFAULT_STYLE_NAMES;

/// Options of the font style selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleOptions {
    pub styles: Vec<String>,
    pub selected: Option<usize>,
}

impl StyleOptions {
    /// Replace the options with the styles returned for a family
    ///
    /// The last conventional default among them is selected, otherwise the
    /// first style.
    pub fn from_keys(styles: Vec<String>) -> Self {
        let selected = styles
            .iter()
            .rposition(|style| DEFAULT_STYLE_NAMES.contains(&style.as_str()))
            .or(if styles.is_empty() { None } else { Some(0) });

        Self { styles, selected }
    }

    pub fn selected_style(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.styles.get(index))
            .map(String::as_str)
    }

    pub fn select(&mut self, style: &str) -> bool {
        match self.styles.iter().position(|s| s == style) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }
}
