use crate::foundation::core::{Document, KindCounts, NAME_FIELD};
use crate::foundation::error::GradsyncResult;
use crate::gradient::walker::walk_gradients_mut;
use crate::naming::allocator::{NameAllocator, NameRegistry};

/// Give every gradient node under `doc` a fresh name, in place.
///
/// Fills get `Gradient_Fill_<suffix>`, strokes `Gradient_Stroke_<suffix>`. Existing names
/// are discarded, so duplicated or missing names in the input cannot collide afterwards.
/// Callers that need the source untouched must clone before calling.
#[tracing::instrument(skip(doc, registry))]
pub fn rename_gradients(
    doc: &mut Document,
    registry: &mut NameRegistry,
) -> GradsyncResult<KindCounts> {
    rename_gradients_with(doc, registry, &NameAllocator::default())
}

/// [`rename_gradients`] with an explicit allocator.
pub fn rename_gradients_with(
    doc: &mut Document,
    registry: &mut NameRegistry,
    allocator: &NameAllocator,
) -> GradsyncResult<KindCounts> {
    let mut counts = KindCounts::default();
    walk_gradients_mut(doc, |kind, node| {
        let name = allocator.allocate(registry, kind.name_prefix());
        node.insert(NAME_FIELD.to_string(), serde_json::Value::String(name));
        counts.record(kind);
    })?;

    tracing::debug!(
        fill = counts.fill,
        stroke = counts.stroke,
        "renamed gradient nodes"
    );
    Ok(counts)
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/rename.rs"]
mod tests;
