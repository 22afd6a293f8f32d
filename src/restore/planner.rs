use std::collections::HashSet;

use crate::foundation::core::Document;
use crate::foundation::error::GradsyncResult;
use crate::gradient::table::GradientTable;
use crate::gradient::walker::{gradient_name, walk_gradients};

/// Names of gradient nodes in `target` that `reference` can restore.
///
/// Each name appears once, in the order it is first met while walking `target`.
#[tracing::instrument(skip(target, reference), fields(entries = reference.len()))]
pub fn restorable_names(
    target: &Document,
    reference: &GradientTable,
) -> GradsyncResult<Vec<String>> {
    let mut seen = HashSet::<&str>::new();
    let mut names = Vec::new();

    walk_gradients(target, |_, node| {
        if let Some(name) = gradient_name(node)
            && reference.contains(name)
            && seen.insert(name)
        {
            names.push(name.to_string());
        }
    })?;

    tracing::debug!(restorable = names.len(), "planned restorable gradients");
    Ok(names)
}

#[cfg(test)]
#[path = "../../tests/unit/restore/planner.rs"]
mod tests;
