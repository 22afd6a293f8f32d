use std::collections::HashSet;

use crate::foundation::core::{COLOR_FIELD, Document, KindCounts};
use crate::foundation::error::GradsyncResult;
use crate::gradient::table::GradientTable;
use crate::gradient::walker::{gradient_name, walk_gradients_mut};

/// Caller-selected gradient names eligible for one overwrite pass.
pub type AllowSet = HashSet<String>;

/// Write table colors back onto matching gradient nodes of `doc`, in place.
///
/// A node is rewritten when its name is a table key and `allow` is `None` or contains
/// that name. Only the `p`/`k` fields of its `g` payload change. Nodes without a
/// mapping `g` cannot take the payload and are skipped. Every other node keeps its
/// current colors, so the pass can be rerun on a fresh clone with another selection.
#[tracing::instrument(skip(doc, table, allow), fields(entries = table.len()))]
pub fn apply_gradients(
    doc: &mut Document,
    table: &GradientTable,
    allow: Option<&AllowSet>,
) -> GradsyncResult<KindCounts> {
    let mut counts = KindCounts::default();

    walk_gradients_mut(doc, |kind, node| {
        let Some(stops) = gradient_name(node).and_then(|name| {
            if allow.is_some_and(|set| !set.contains(name)) {
                return None;
            }
            table.get(name)
        }) else {
            return;
        };
        let Some(payload) = node
            .get_mut(COLOR_FIELD)
            .and_then(serde_json::Value::as_object_mut)
        else {
            tracing::debug!(%kind, "gradient node has no color payload; skipped");
            return;
        };
        stops.write_into(payload);
        counts.record(kind);
    })?;

    tracing::debug!(
        fill = counts.fill,
        stroke = counts.stroke,
        "applied gradient colors"
    );
    Ok(counts)
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/overwrite.rs"]
mod tests;
