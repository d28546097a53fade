use serde::{Deserialize, Serialize};

/// Physical form of the label stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    /// Continuous tape, cut to the content length
    Endless,
    /// Pre-cut rectangular labels
    DieCut,
    /// Pre-cut round labels
    RoundDieCut,
}

/// One entry of the label size selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSize {
    /// Identifier the server understands, e.g. `62` or `62red`
    pub id: String,
    /// Human readable name
    pub name: String,
    pub kind: LabelKind,
}

impl LabelSize {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: LabelKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn is_round(&self) -> bool {
        self.kind == LabelKind::RoundDieCut
    }

    /// Black/red/white tape is the only stock with a second colour plane
    pub fn supports_two_color(&self) -> bool {
        supports_two_color(&self.id)
    }
}

/// Two-colour support is encoded in the label identifier itself
pub fn supports_two_color(label_id: &str) -> bool {
    label_id.contains("red")
}

/// Ordered list of selectable label sizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelCatalog {
    sizes: Vec<LabelSize>,
}

impl LabelCatalog {
    pub fn new(sizes: Vec<LabelSize>) -> Self {
        Self { sizes }
    }

    /// Brother QL label sizes
    pub fn brother_ql() -> Self {
        use LabelKind::*;

        let sizes = [
            ("12", "12mm endless", Endless),
            ("29", "29mm endless", Endless),
            ("38", "38mm endless", Endless),
            ("50", "50mm endless", Endless),
            ("54", "54mm endless", Endless),
            ("62", "62mm endless", Endless),
            ("62red", "62mm endless (black/red/white)", Endless),
            ("102", "102mm endless", Endless),
            ("17x54", "17mm x 54mm die-cut", DieCut),
            ("17x87", "17mm x 87mm die-cut", DieCut),
            ("23x23", "23mm x 23mm die-cut", DieCut),
            ("29x42", "29mm x 42mm die-cut", DieCut),
            ("29x90", "29mm x 90mm die-cut", DieCut),
            ("39x90", "38mm x 90mm die-cut", DieCut),
            ("39x48", "39mm x 48mm die-cut", DieCut),
            ("52x29", "52mm x 29mm die-cut", DieCut),
            ("62x29", "62mm x 29mm die-cut", DieCut),
            ("62x100", "62mm x 100mm die-cut", DieCut),
            ("102x51", "102mm x 51mm die-cut", DieCut),
            ("102x152", "102mm x 153mm die-cut", DieCut),
            ("d12", "12mm round die-cut", RoundDieCut),
            ("d24", "24mm round die-cut", RoundDieCut),
            ("d58", "58mm round die-cut", RoundDieCut),
        ];

        Self::new(
            sizes
                .into_iter()
                .map(|(id, name, kind)| LabelSize::new(id, name, kind))
                .collect(),
        )
    }

    pub fn get(&self, id: &str) -> Option<&LabelSize> {
        self.sizes.iter().find(|size| size.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelSize> {
        self.sizes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::brother_ql()
    }
}
