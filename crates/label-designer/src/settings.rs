use crate::constants::DEFAULT_DPI;
use crate::form::FormState;
use crate::labels::LabelCatalog;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Where the label server lives and how its endpoints are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub base_url: String,
    pub styles_path: String,
    pub preview_path: String,
    pub print_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8013".to_string(),
            styles_path: "/api/font/styles".to_string(),
            preview_path: "/api/preview".to_string(),
            print_path: "/api/print".to_string(),
        }
    }
}

/// Complete designer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    pub server: ServerSettings,

    /// Resolution used to turn preview pixels into a physical size
    pub default_dpi: f32,

    /// Form values at startup
    pub form: FormState,

    // Selector contents
    pub font_families: Vec<String>,
    pub label_sizes: LabelCatalog,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        let form = FormState::default();
        Self {
            server: ServerSettings::default(),
            default_dpi: DEFAULT_DPI,
            font_families: vec![form.font_family.clone()],
            form,
            label_sizes: LabelCatalog::default(),
        }
    }
}

impl DesignerSettings {
    /// Load settings from JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let settings: Self = serde_json::from_slice(&bytes)
            .map_err(|e| DesignerError::Config(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DesignerError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.server.base_url)?;

        if !(self.default_dpi > 0.0) {
            return Err(DesignerError::Config(format!(
                "DPI must be positive, got {}",
                self.default_dpi
            )));
        }

        if self.label_sizes.is_empty() {
            return Err(DesignerError::Config("No label sizes configured".to_string()));
        }

        if self.label_sizes.get(&self.form.label_size).is_none() {
            return Err(DesignerError::Config(format!(
                "Default label size {} is not in the label list",
                self.form.label_size
            )));
        }

        Ok(())
    }
}
