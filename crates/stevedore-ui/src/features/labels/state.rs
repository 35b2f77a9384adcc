//! Deploy-form label list state.
//!
//! # Design
//! - Rows carry ids so deletion works by identity, not position.
//! - Values stay behind an accessor; derived rows re-read their source on every get.
//! - The trailing row is the in-progress entry and is never removable.

use crate::features::labels::logic;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Lazily resolved row value.
#[derive(Clone)]
pub enum LabelValue {
    /// Value typed directly into the row.
    Edited(String),
    /// Value mirrored from another form field on every read.
    Derived(Rc<dyn Fn() -> String>),
}

impl LabelValue {
    /// Resolve the current value.
    #[must_use]
    pub fn get(&self) -> String {
        match self {
            Self::Edited(value) => value.clone(),
            Self::Derived(read) => read(),
        }
    }

    /// Whether the resolved value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Edited(value) => value.is_empty(),
            Self::Derived(read) => read().is_empty(),
        }
    }

    /// Replace an edited value; derived values are read-only and unchanged.
    pub fn set(&mut self, value: String) {
        if let Self::Edited(current) = self {
            *current = value;
        }
    }
}

impl Default for LabelValue {
    fn default() -> Self {
        Self::Edited(String::new())
    }
}

impl PartialEq for LabelValue {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl fmt::Debug for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edited(value) => f.debug_tuple("Edited").field(value).finish(),
            Self::Derived(read) => f.debug_tuple("Derived").field(&read()).finish(),
        }
    }
}

/// One key/value row in the label editor.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelRow {
    id: Uuid,
    key: String,
    value: LabelValue,
    editable: bool,
}

impl LabelRow {
    /// Fresh blank editable row, the in-progress entry.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            key: String::new(),
            value: LabelValue::default(),
            editable: true,
        }
    }

    /// Editable row seeded with a key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: key.into(),
            value: LabelValue::Edited(value.into()),
            editable: true,
        }
    }

    /// Non-editable row whose value mirrors another form field.
    #[must_use]
    pub fn derived(key: impl Into<String>, read: impl Fn() -> String + 'static) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: key.into(),
            value: LabelValue::Derived(Rc::new(read)),
            editable: false,
        }
    }

    /// Row identity.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current key text.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolved value.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Whether the row accepts edits and may be deleted.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        self.editable
    }

    /// Whether the value is mirrored from elsewhere.
    #[must_use]
    pub fn is_derived(&self) -> bool {
        matches!(self.value, LabelValue::Derived(_))
    }

    /// Key and resolved value are both non-empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Validity flags for a label key, one per rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyValidity {
    /// No other non-empty row shares the key.
    pub unique: bool,
    /// Prefix part is a lowercase DNS subdomain (vacuously true without `/`).
    pub prefix_pattern: bool,
    /// Name part is empty or a valid qualified name.
    pub name_pattern: bool,
    /// Prefix part stays within 253 characters.
    pub prefix_length: bool,
    /// Name part stays within 63 characters.
    pub name_length: bool,
}

impl KeyValidity {
    /// All five rules hold.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.unique
            && self.prefix_pattern
            && self.name_pattern
            && self.prefix_length
            && self.name_length
    }

    /// Messages for the rules that failed, for display under the field.
    #[must_use]
    pub fn violations(self) -> Vec<&'static str> {
        let mut messages = Vec::new();
        if !self.unique {
            messages.push("key is already in use");
        }
        if !self.prefix_pattern {
            messages.push("prefix must be a lowercase DNS subdomain");
        }
        if !self.name_pattern {
            messages.push("name must use alphanumerics, '-', '_' or '.', with alphanumeric ends");
        }
        if !self.prefix_length {
            messages.push("prefix must be at most 253 characters");
        }
        if !self.name_length {
            messages.push("name must be at most 63 characters");
        }
        messages
    }
}

/// The label list editor: owns row shape, checks keys, gates deletion.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelListForm {
    rows: Vec<LabelRow>,
}

impl Default for LabelListForm {
    fn default() -> Self {
        Self {
            rows: vec![LabelRow::blank()],
        }
    }
}

impl LabelListForm {
    /// Empty editor holding a single blank in-progress row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor seeded with preset rows plus the trailing in-progress row.
    #[must_use]
    pub fn seeded(mut rows: Vec<LabelRow>) -> Self {
        rows.push(LabelRow::blank());
        Self { rows }
    }

    /// Rows in insertion order; the last row is the in-progress entry.
    #[must_use]
    pub fn rows(&self) -> &[LabelRow] {
        &self.rows
    }

    /// Replace a row's key text; unknown ids are ignored.
    pub fn set_key(&mut self, id: Uuid, key: String) {
        if let Some(row) = self.row_mut(id) {
            row.key = key;
        }
    }

    /// Replace a row's edited value; derived values and unknown ids are ignored.
    pub fn set_value(&mut self, id: Uuid, value: String) {
        if let Some(row) = self.row_mut(id) {
            row.value.set(value);
        }
    }

    /// React to an edit of the identified row.
    ///
    /// Appends a blank row when the last row has become filled, then reports
    /// the edited row's key validity. Returns `None` for unknown ids; callers
    /// with no use for validity drop the result, the append still happened.
    pub fn check(&mut self, id: Uuid) -> Option<KeyValidity> {
        if self.rows.last().is_some_and(LabelRow::is_filled) {
            self.rows.push(LabelRow::blank());
        }
        let key = self.rows.iter().find(|row| row.id == id)?.key.clone();
        Some(self.key_validity(&key))
    }

    /// Whether the row may be deleted: editable and not the in-progress row.
    #[must_use]
    pub fn is_removable(&self, id: Uuid) -> bool {
        let Some((last, rest)) = self.rows.split_last() else {
            return false;
        };
        if last.id == id {
            return false;
        }
        rest.iter().any(|row| row.id == id && row.editable)
    }

    /// Remove the first row with this identity; no-op when absent.
    pub fn delete(&mut self, id: Uuid) {
        if let Some(index) = self.rows.iter().position(|row| row.id == id) {
            self.rows.remove(index);
        }
    }

    /// Validity of a key against the current rows.
    #[must_use]
    pub fn key_validity(&self, key: &str) -> KeyValidity {
        KeyValidity {
            unique: logic::key_is_unique(key, self.rows.iter().map(LabelRow::key)),
            prefix_pattern: logic::prefix_pattern_ok(key),
            name_pattern: logic::name_pattern_ok(key),
            prefix_length: logic::prefix_length_ok(key),
            name_length: logic::name_length_ok(key),
        }
    }

    /// Convert the rows into the submission label map.
    ///
    /// Rows with an empty key are skipped: they are in-progress entries, not
    /// labels.
    ///
    /// # Errors
    /// Returns a human-readable message naming the first malformed or
    /// duplicated key.
    pub fn to_request_labels(&self) -> Result<BTreeMap<String, String>, String> {
        let mut labels = BTreeMap::new();
        for row in &self.rows {
            if row.key.is_empty() {
                continue;
            }
            let validity = self.key_validity(&row.key);
            let well_formed = validity.prefix_pattern
                && validity.name_pattern
                && validity.prefix_length
                && validity.name_length;
            if !well_formed {
                return Err(format!(
                    "label key '{}' is not a valid Kubernetes label key",
                    row.key
                ));
            }
            if labels.insert(row.key.clone(), row.value.get()).is_some() {
                return Err(format!("duplicate label key '{}'", row.key));
            }
        }
        Ok(labels)
    }

    fn row_mut(&mut self, id: Uuid) -> Option<&mut LabelRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}
