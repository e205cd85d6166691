//! Action-based control for the picker.

use crate::picker::Field;

/// Actions a host UI forwards to [`crate::Picker::handle_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Text typed into a field.
    Input { field: Field, text: String },
    /// Focus left a field.
    Blur { field: Field, text: String },
    /// A saved color was clicked.
    SelectSaved(String),
    /// Save button pressed with the hex field's current text.
    Save(String),
    /// A saved color was long-pressed.
    DeleteSaved(String),
}

impl PickerAction {
    /// Creates an input action.
    pub fn input(field: Field, text: impl Into<String>) -> Self {
        Self::Input { field, text: text.into() }
    }

    /// Creates a blur action.
    pub fn blur(field: Field, text: impl Into<String>) -> Self {
        Self::Blur { field, text: text.into() }
    }
}
