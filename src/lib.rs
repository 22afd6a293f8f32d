//! gradsync keeps gradient colors of Lottie animations recoverable across an external edit.
//!
//! Editing gradient colors in an authoring tool (for example After Effects with the
//! Bodymovin exporter) tends to flatten or scramble them. gradsync makes that round
//! trip safe:
//!
//! 1. **Prepare**: clone the animation and give every gradient fill (`"gf"`) and
//!    gradient stroke (`"gs"`) a unique generated name ([`prepare_for_editing`]).
//! 2. **Edit**: the prepared file is edited elsewhere; names survive, colors may not.
//! 3. **Restore**: extract name → color data from a reference copy
//!    ([`extract_gradients`]), list which names the edited file shares with it
//!    ([`restorable_names`]), and write the reference colors back for a chosen subset
//!    ([`apply_gradients`], or [`RestoreSession`] for the whole flow).
//!
//! Documents are plain [`serde_json::Value`] trees; only mappings whose `ty` is `"gf"`
//! or `"gs"` are ever touched. Container IO (`.json` / gzip `.tgs`) lives in
//! [`decode_document`] and [`encode_document`]; the gradient passes themselves do no IO.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod container;
mod foundation;
mod gradient;
mod naming;
mod restore;

pub use container::codec::{Container, decode_document, decode_document_as, encode_document};
pub use foundation::core::{
    COLOR_FIELD, Document, GradientKind, KIND_FIELD, KindCounts, Mapping, NAME_FIELD,
    STOP_KEYFRAMES_FIELD, STOP_POSITIONS_FIELD, ensure_traversable,
};
pub use foundation::error::{GradsyncError, GradsyncResult};
pub use gradient::overwrite::{AllowSet, apply_gradients};
pub use gradient::rename::{rename_gradients, rename_gradients_with};
pub use gradient::table::{GradientStops, GradientTable, extract_gradients};
pub use gradient::walker::{gradient_kind, gradient_name, walk_gradients, walk_gradients_mut};
pub use naming::allocator::{
    DEFAULT_SUFFIX_LEN, NameAllocator, NameRegistry, SUFFIX_ALPHABET, allocate_name,
};
pub use restore::planner::restorable_names;
pub use restore::session::{Prepared, RestoreSession, Restored, prepare_for_editing};
