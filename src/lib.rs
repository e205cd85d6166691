#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Hex`**: Canonical `#rrggbb` color string (fixed capacity, no allocation)
//! - **`Rgb`**: 8-bit sRGB triple, an alias of `palette::Srgb<u8>`
//! - **`Hsl`** / **`Hsv`**: Integer hue (0-359) plus percentage components
//! - **`ColorState`**: The four equivalent representations of one color
//! - **`SavedColors`**: Ordered, de-duplicated palette of saved colors
//! - **`KeyValueStore`**: Trait to implement for your persistence backend
//! - **`Picker`**: Applies field edits and palette actions, persisting through a store
//! - **`LongPress`** / **`Panel`**: Small state machines for palette gestures
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Conversions are pure functions over plain values. Malformed text is reported
//! as [`ColorError::InvalidFormat`] and never panics.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod types;
pub mod hex;
pub mod convert;
pub mod parse;
pub mod collection;
pub mod storage;
pub mod picker;
pub mod command;
pub mod gesture;
pub mod config;

pub use types::{ColorError, ColorState, Hsl, Hsv, Rgb, Shade, rgb_clamped};
pub use hex::{Hex, hex_to_rgb, normalize_hex, rgb_to_hex};
pub use convert::{
    Component, contrast_shade, hsl_to_rgb, hsv_components_to_rgb, hsv_to_rgb, rgb_to_hsl,
    rgb_to_hsv, to_preview,
};
pub use parse::{format_hsl, format_hsv, format_rgb, parse_hsl_value, parse_hsv_value, parse_rgb_value};
pub use collection::{SavePolicy, SavedColors};
pub use storage::{ColorStore, FileStore, KeyValueStore, MemoryStore, StoreError};
pub use picker::{Field, Picker, PickerError};
pub use command::PickerAction;
pub use gesture::{LongPress, Panel, PanelState, PressOutcome, PressPhase};
pub use time::{SystemClock, TimeDuration, TimeInstant, TimeSource};
pub use config::{ConfigError, PickerConfig};

/// Color shown when nothing has been used yet.
pub const DEFAULT_COLOR: &str = "#0080ff";
