//! Color picker controller.
//!
//! Provides [`Picker`], which turns edits of the four color fields and palette
//! actions into a [`ColorState`] for display, persisting the last used color and
//! the saved palette through a [`ColorStore`]. The picker holds no UI handles;
//! the host renders whatever it returns.

use tracing::debug;

use crate::collection::SavedColors;
use crate::command::PickerAction;
use crate::config::PickerConfig;
use crate::hex::normalize_hex;
use crate::parse::{parse_hsl_value, parse_hsv_value, parse_rgb_value};
use crate::storage::{ColorStore, KeyValueStore, StoreError};
use crate::types::{ColorError, ColorState};

/// The four editable color fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hex,
    Rgb,
    Hsl,
    Hsv,
}

impl Field {
    /// Parses `text` as this field's format.
    pub fn parse(&self, text: &str) -> Result<ColorState, ColorError> {
        match self {
            Field::Hex => normalize_hex(text).map(ColorState::from_hex),
            Field::Rgb => parse_rgb_value(text).map(ColorState::from_rgb),
            Field::Hsl => parse_hsl_value(text).map(ColorState::from_hsl),
            Field::Hsv => parse_hsv_value(text).map(ColorState::from_hsv),
        }
    }

    /// Detects the field format of free text, trying hex, RGB, HSL then HSV.
    ///
    /// HSL and HSV share a shape, so such text always resolves as HSL.
    pub fn detect(text: &str) -> Option<Field> {
        [Field::Hex, Field::Rgb, Field::Hsl, Field::Hsv]
            .into_iter()
            .find(|field| field.parse(text).is_ok())
    }
}

/// Errors from picker operations.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Applies color edits and palette actions, persisting through a store.
///
/// # Type Parameters
/// * `S` - Key-value store implementation type
pub struct Picker<S: KeyValueStore> {
    store: ColorStore<S>,
    current: ColorState,
}

impl<S: KeyValueStore> Picker<S> {
    /// Creates a picker showing the last used color, or the configured default.
    pub fn new(store: S, config: &PickerConfig) -> Result<Self, PickerError> {
        let mut store = ColorStore::new(store, config.save_policy());
        let default = config.default_hex()?;
        let initial = store.initial_color(&default)?;
        debug!(color = %initial, "picker initialized");

        Ok(Self {
            store,
            current: ColorState::from_hex(initial),
        })
    }

    /// Handles a picker action by dispatching to the appropriate method.
    ///
    /// # Returns
    /// * `Ok(Some(state))` - The color changed; redraw all fields
    /// * `Ok(None)` - Nothing to redraw (hex typing, palette-only changes)
    /// * `Err` - Invalid field text or a storage failure
    pub fn handle_action(&mut self, action: PickerAction) -> Result<Option<ColorState>, PickerError> {
        match action {
            PickerAction::Input { field, text } => self.input(field, &text),
            PickerAction::Blur { field, text } => self.blur(field, &text).map(Some),
            PickerAction::SelectSaved(hex) => self.select_saved(&hex).map(Some),
            PickerAction::Save(text) => {
                self.save_current_input(&text)?;
                Ok(None)
            }
            PickerAction::DeleteSaved(hex) => {
                self.delete_saved(&hex)?;
                Ok(None)
            }
        }
    }

    /// Text typed into a field.
    ///
    /// The hex field is only applied on blur, so typing there returns
    /// `Ok(None)`. Other fields apply immediately when their text is valid; on
    /// invalid text the current color is left unchanged.
    pub fn input(&mut self, field: Field, text: &str) -> Result<Option<ColorState>, PickerError> {
        if field == Field::Hex {
            return Ok(None);
        }
        self.apply(field.parse(text)?).map(Some)
    }

    /// Focus left a field; applies its text for every field including hex.
    pub fn blur(&mut self, field: Field, text: &str) -> Result<ColorState, PickerError> {
        self.apply(field.parse(text)?)
    }

    /// Makes a saved color the current color.
    pub fn select_saved(&mut self, hex: &str) -> Result<ColorState, PickerError> {
        self.apply(ColorState::from_hex(normalize_hex(hex)?))
    }

    /// Saves the hex field's text to the front of the palette.
    ///
    /// The saved color also becomes the last used color.
    ///
    /// # Errors
    /// `Color` if the text is not a hex color; nothing is saved.
    pub fn save_current_input(&mut self, text: &str) -> Result<SavedColors, PickerError> {
        let hex = normalize_hex(text)?;
        let saved = self.store.save_color(&hex)?;
        debug!(color = %hex, count = saved.len(), "color saved");
        Ok(saved)
    }

    /// Deletes a color from the palette.
    pub fn delete_saved(&mut self, hex: &str) -> Result<SavedColors, PickerError> {
        let saved = self.store.delete_color(hex)?;
        debug!(color = hex, count = saved.len(), "saved color deleted");
        Ok(saved)
    }

    /// Returns the current color.
    pub fn current(&self) -> &ColorState {
        &self.current
    }

    /// Loads the saved palette.
    pub fn saved(&self) -> Result<SavedColors, PickerError> {
        Ok(self.store.saved_colors()?)
    }

    /// Returns the underlying color store.
    pub fn store(&self) -> &ColorStore<S> {
        &self.store
    }

    fn apply(&mut self, state: ColorState) -> Result<ColorState, PickerError> {
        self.store.set_last_used(&state.hex)?;
        self.current = state.clone();
        Ok(state)
    }
}
