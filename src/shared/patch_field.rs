// src/shared/patch_field.rs

use serde::Serialize;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit "what changed" semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field did not change => not part of the diff
// - Null: field changed to an absent value
// - Value(v): field changed to v
//
// Serde behavior:
// - Unset is never serialized (pair with skip_serializing_if = "PatchField::is_unset")
// - Null => null
// - Value(v) => v
//

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    /// `Value` for `Some`, `Null` for `None`.
    pub fn changed_to(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn into_value(self) -> Option<T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}
