use crate::foundation::error::{GradsyncError, GradsyncResult};

/// Untyped animation document: mappings, sequences and scalar leaves.
///
/// `serde_json` is built with `preserve_order`, so mapping keys keep their
/// authored order through a load/modify/save cycle.
pub type Document = serde_json::Value;

/// Mapping node of a [`Document`].
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// Discriminator field carried by shape items.
pub const KIND_FIELD: &str = "ty";
/// Human-readable name of a shape item.
pub const NAME_FIELD: &str = "nm";
/// Gradient color payload of a gradient paint.
pub const COLOR_FIELD: &str = "g";
/// Stop positions inside the gradient color payload.
pub const STOP_POSITIONS_FIELD: &str = "p";
/// Stop keyframes inside the gradient color payload.
pub const STOP_KEYFRAMES_FIELD: &str = "k";

/// The two gradient paint kinds that carry a restorable color payload.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum GradientKind {
    /// Gradient fill (`"gf"`).
    #[serde(rename = "gf")]
    Fill,
    /// Gradient stroke (`"gs"`).
    #[serde(rename = "gs")]
    Stroke,
}

impl GradientKind {
    /// All recognized kinds, fill first.
    pub const ALL: [GradientKind; 2] = [GradientKind::Fill, GradientKind::Stroke];

    /// Parse a `ty` tag. Anything but `"gf"`/`"gs"` is not a gradient paint.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gf" => Some(Self::Fill),
            "gs" => Some(Self::Stroke),
            _ => None,
        }
    }

    /// The `ty` tag written in documents.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Fill => "gf",
            Self::Stroke => "gs",
        }
    }

    /// Prefix used when allocating a fresh name for this kind.
    pub fn name_prefix(self) -> &'static str {
        match self {
            Self::Fill => "Gradient_Fill_",
            Self::Stroke => "Gradient_Stroke_",
        }
    }
}

impl std::fmt::Display for GradientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-kind tally of gradient nodes touched by one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KindCounts {
    /// Gradient fills.
    pub fill: u64,
    /// Gradient strokes.
    pub stroke: u64,
}

impl KindCounts {
    /// Bump the counter for `kind`.
    pub fn record(&mut self, kind: GradientKind) {
        match kind {
            GradientKind::Fill => self.fill += 1,
            GradientKind::Stroke => self.stroke += 1,
        }
    }

    /// Counter for `kind`.
    pub fn get(self, kind: GradientKind) -> u64 {
        match kind {
            GradientKind::Fill => self.fill,
            GradientKind::Stroke => self.stroke,
        }
    }

    /// Fills plus strokes.
    pub fn total(self) -> u64 {
        self.fill + self.stroke
    }
}

/// Reject roots the walker cannot traverse. Only mappings and sequences are accepted.
pub fn ensure_traversable(doc: &Document) -> GradsyncResult<()> {
    match doc {
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => Ok(()),
        other => Err(GradsyncError::invalid_root(format!(
            "expected a mapping or sequence at the document root, found {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(v: &Document) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
