//! Depth-first traversal that visits every gradient paint node of a document.
//!
//! Order is pre-order: a mapping is tested before its children, children are visited
//! in key order (mappings) or index order (sequences). Matched nodes are still
//! descended into. The walk uses an explicit stack, so document depth is bounded by
//! heap rather than the call stack.

use crate::foundation::core::{
    Document, GradientKind, KIND_FIELD, Mapping, NAME_FIELD, ensure_traversable,
};
use crate::foundation::error::GradsyncResult;

/// Gradient-node predicate shared by every pass.
///
/// A mapping matches iff its `ty` field is the string `"gf"` or `"gs"`.
pub fn gradient_kind(map: &Mapping) -> Option<GradientKind> {
    map.get(KIND_FIELD)
        .and_then(serde_json::Value::as_str)
        .and_then(GradientKind::from_tag)
}

/// The node's `nm`, when it is a string.
pub fn gradient_name(map: &Mapping) -> Option<&str> {
    map.get(NAME_FIELD).and_then(serde_json::Value::as_str)
}

/// Visit every gradient node under `root` read-only.
pub fn walk_gradients<'a>(
    root: &'a Document,
    mut visit: impl FnMut(GradientKind, &'a Mapping),
) -> GradsyncResult<()> {
    ensure_traversable(root)?;

    let mut stack: Vec<&'a Document> = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            serde_json::Value::Object(map) => {
                if let Some(kind) = gradient_kind(map) {
                    visit(kind, map);
                }
                stack.extend(map.values().rev());
            }
            serde_json::Value::Array(items) => stack.extend(items.iter().rev()),
            _ => {}
        }
    }
    Ok(())
}

/// Visit every gradient node under `root` with mutable access.
///
/// Children are collected after the visitor returns, so edits the visitor makes to a
/// node's own fields are what the walk descends into.
pub fn walk_gradients_mut(
    root: &mut Document,
    mut visit: impl FnMut(GradientKind, &mut Mapping),
) -> GradsyncResult<()> {
    ensure_traversable(root)?;

    let mut stack: Vec<&mut Document> = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            serde_json::Value::Object(map) => {
                if let Some(kind) = gradient_kind(map) {
                    visit(kind, map);
                }
                stack.extend(map.values_mut().rev());
            }
            serde_json::Value::Array(items) => stack.extend(items.iter_mut().rev()),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/walker.rs"]
mod tests;
