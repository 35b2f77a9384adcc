//! Label editor actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use uuid::Uuid;

/// Row-level edits emitted by the label editor view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelAction {
    /// Replace the key text of a row.
    EditKey {
        /// Target row identity.
        id: Uuid,
        /// New key text.
        key: String,
    },
    /// Replace the value text of a row.
    EditValue {
        /// Target row identity.
        id: Uuid,
        /// New value text.
        value: String,
    },
    /// Remove a row.
    Delete {
        /// Target row identity.
        id: Uuid,
    },
}
