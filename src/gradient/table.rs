use std::collections::BTreeMap;

use crate::foundation::core::{
    COLOR_FIELD, Document, Mapping, STOP_KEYFRAMES_FIELD, STOP_POSITIONS_FIELD,
};
use crate::foundation::error::GradsyncResult;
use crate::gradient::walker::{gradient_name, walk_gradients};

/// Opaque color payload of one gradient: the `p` and `k` fields of its `g` mapping.
///
/// Neither value is interpreted; both are copied wholesale. A field absent in the
/// source stays `None`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStops {
    /// Stop positions (`p`).
    #[serde(rename = "p", default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<serde_json::Value>,
    /// Stop keyframes (`k`).
    #[serde(rename = "k", default, skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<serde_json::Value>,
}

impl GradientStops {
    /// Copy the stop fields out of a `g` payload.
    pub fn from_payload(payload: &Mapping) -> Self {
        Self {
            positions: payload.get(STOP_POSITIONS_FIELD).cloned(),
            keyframes: payload.get(STOP_KEYFRAMES_FIELD).cloned(),
        }
    }

    /// Replace the stop fields of a `g` payload with these values.
    ///
    /// A `None` field is removed from the payload, other keys are left alone.
    pub fn write_into(&self, payload: &mut Mapping) {
        write_field(payload, STOP_POSITIONS_FIELD, self.positions.as_ref());
        write_field(payload, STOP_KEYFRAMES_FIELD, self.keyframes.as_ref());
    }
}

fn write_field(payload: &mut Mapping, key: &str, value: Option<&serde_json::Value>) {
    match value {
        Some(v) => {
            payload.insert(key.to_string(), v.clone());
        }
        None => {
            payload.shift_remove(key);
        }
    }
}

/// Gradient name to color payload, built from one document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct GradientTable {
    entries: BTreeMap<String, GradientStops>,
}

impl GradientTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `name`. Returns the replaced entry, if any.
    pub fn insert(&mut self, name: impl Into<String>, stops: GradientStops) -> Option<GradientStops> {
        self.entries.insert(name.into(), stops)
    }

    /// Entry for `name`.
    pub fn get(&self, name: &str) -> Option<&GradientStops> {
        self.entries.get(name)
    }

    /// Whether `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GradientStops)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Build a [`GradientTable`] from every named gradient node in `doc`.
///
/// Nodes need a non-empty string `nm` and a mapping `g`; anything else is skipped.
/// When a name repeats, the node visited last wins.
#[tracing::instrument(skip(doc))]
pub fn extract_gradients(doc: &Document) -> GradsyncResult<GradientTable> {
    let mut table = GradientTable::new();
    let mut replaced = 0usize;

    walk_gradients(doc, |_, node| {
        let Some(name) = gradient_name(node).filter(|n| !n.is_empty()) else {
            return;
        };
        let Some(payload) = node.get(COLOR_FIELD).and_then(serde_json::Value::as_object) else {
            return;
        };
        if table
            .insert(name, GradientStops::from_payload(payload))
            .is_some()
        {
            replaced += 1;
        }
    })?;

    if replaced > 0 {
        tracing::debug!(replaced, "duplicate gradient names; later nodes replaced earlier ones");
    }
    tracing::debug!(entries = table.len(), "extracted gradient table");
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/table.rs"]
mod tests;
