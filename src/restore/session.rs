//! Caller-level workflow around the gradient passes.
//!
//! Step one clones a freshly loaded animation and renames its gradients so they
//! survive an external color edit. Step two loads the edited file plus a reference
//! copy, works out which gradients can be restored, and applies a chosen subset.

use crate::foundation::core::{Document, KindCounts, ensure_traversable};
use crate::foundation::error::{GradsyncError, GradsyncResult};
use crate::gradient::overwrite::{AllowSet, apply_gradients};
use crate::gradient::rename::rename_gradients;
use crate::gradient::table::{GradientTable, extract_gradients};
use crate::naming::allocator::NameRegistry;
use crate::restore::planner::restorable_names;

/// Output of [`prepare_for_editing`].
#[derive(Clone, Debug)]
pub struct Prepared {
    /// Independent copy of the input with every gradient renamed.
    pub document: Document,
    /// Gradients renamed, per kind.
    pub counts: KindCounts,
}

/// Clone `source` and give each gradient a stable, collision-free name.
#[tracing::instrument(skip(source))]
pub fn prepare_for_editing(source: &Document) -> GradsyncResult<Prepared> {
    ensure_traversable(source)?;
    let mut document = source.clone();
    let counts = rename_gradients(&mut document, &mut NameRegistry::new())?;
    tracing::info!(
        fill = counts.fill,
        stroke = counts.stroke,
        "prepared document for editing"
    );
    Ok(Prepared { document, counts })
}

/// Output of [`RestoreSession::apply`].
#[derive(Clone, Debug)]
pub struct Restored {
    /// Copy of the target with the selected colors restored.
    pub document: Document,
    /// Gradients restored, per kind.
    pub counts: KindCounts,
}

/// Edited target, reference colors and the names they share.
#[derive(Clone, Debug)]
pub struct RestoreSession {
    target: Document,
    table: GradientTable,
    restorable: Vec<String>,
}

impl RestoreSession {
    /// Start a restore of `target` from `reference`.
    ///
    /// Fails with [`GradsyncError::MissingReference`] when no reference is given and
    /// with [`GradsyncError::NoGradientData`] when the reference holds no named
    /// gradient payloads.
    #[tracing::instrument(skip(target, reference))]
    pub fn new(target: Document, reference: Option<&Document>) -> GradsyncResult<Self> {
        let reference = reference.ok_or_else(|| {
            GradsyncError::missing_reference(
                "a reference document is required (prepare a file first or supply one)",
            )
        })?;
        ensure_traversable(&target)?;

        let table = extract_gradients(reference)?;
        if table.is_empty() {
            return Err(GradsyncError::no_gradient_data(
                "reference document contains no named gradients with color data",
            ));
        }
        Self::with_table(target, table)
    }

    /// Start a restore from an already extracted table.
    pub fn with_table(target: Document, table: GradientTable) -> GradsyncResult<Self> {
        let restorable = restorable_names(&target, &table)?;
        tracing::info!(
            reference_entries = table.len(),
            restorable = restorable.len(),
            "restore session ready"
        );
        Ok(Self {
            target,
            table,
            restorable,
        })
    }

    /// Names that can be restored, in first-seen order.
    pub fn restorable(&self) -> &[String] {
        &self.restorable
    }

    /// Reference colors by gradient name.
    pub fn table(&self) -> &GradientTable {
        &self.table
    }

    /// The edited document as loaded. [`RestoreSession::apply`] never mutates it.
    pub fn target(&self) -> &Document {
        &self.target
    }

    /// Restore colors on a fresh copy of the target.
    ///
    /// `allow` of `None` restores every restorable name. Calling again with another
    /// selection starts over from the unmodified target.
    pub fn apply(&self, allow: Option<&AllowSet>) -> GradsyncResult<Restored> {
        let mut document = self.target.clone();
        let counts = apply_gradients(&mut document, &self.table, allow)?;
        Ok(Restored { document, counts })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/restore/session.rs"]
mod tests;
