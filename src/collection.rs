//! Ordered collection of saved colors.

use tracing::warn;

use crate::hex::{Hex, normalize_hex};

/// How many saved colors a collection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavePolicy {
    max_len: Option<usize>,
}

impl SavePolicy {
    /// Keeps every saved color.
    pub const fn unlimited() -> Self {
        Self { max_len: None }
    }

    /// Keeps at most `max_len` colors, dropping the oldest first.
    pub const fn capped(max_len: usize) -> Self {
        Self { max_len: Some(max_len) }
    }

    /// Returns the cap, if any.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}

/// Saved colors, most recently added first.
///
/// Entries are canonical hex colors and never repeat; adding a color that is
/// already present moves it to the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedColors {
    colors: Vec<Hex>,
    policy: SavePolicy,
}

impl SavedColors {
    /// Creates an empty collection.
    pub fn new(policy: SavePolicy) -> Self {
        Self {
            colors: Vec::new(),
            policy,
        }
    }

    /// Builds a collection from stored text entries, in order.
    ///
    /// Entries that are not hex colors are skipped, as are repeats of an
    /// earlier entry. The policy cap is applied afterwards.
    pub fn from_entries<I, E>(entries: I, policy: SavePolicy) -> Self
    where
        I: IntoIterator<Item = E>,
        E: AsRef<str>,
    {
        let mut saved = Self::new(policy);
        for entry in entries {
            let entry = entry.as_ref();
            match normalize_hex(entry) {
                Ok(hex) if !saved.contains(&hex) => saved.colors.push(hex),
                Ok(_) => {}
                Err(_) => warn!(entry, "skipping saved color that is not a hex color"),
            }
        }
        saved.enforce_cap();
        saved
    }

    /// Parses the persisted JSON array.
    ///
    /// Anything other than a JSON array of strings loads as an empty
    /// collection.
    pub fn from_json(text: &str, policy: SavePolicy) -> Self {
        match serde_json::from_str::<Vec<String>>(text) {
            Ok(entries) => Self::from_entries(entries, policy),
            Err(e) => {
                warn!("saved colors are not a JSON string array, starting empty: {e}");
                Self::new(policy)
            }
        }
    }

    /// Serializes to the persisted JSON array.
    pub fn to_json(&self) -> String {
        // A Vec of strings always serializes.
        serde_json::to_string(&self.colors).unwrap_or_else(|_| String::from("[]"))
    }

    /// Adds a color at the front, removing any earlier copy of it.
    ///
    /// Returns `true` if the collection changed.
    pub fn add(&mut self, hex: Hex) -> bool {
        if self.colors.first() == Some(&hex) {
            return false;
        }

        self.colors.retain(|c| c != &hex);
        self.colors.insert(0, hex);
        self.enforce_cap();
        true
    }

    /// Removes a color, matching case-insensitively.
    ///
    /// Returns `true` if it was present.
    pub fn remove(&mut self, color: &str) -> bool {
        let before = self.colors.len();
        self.colors.retain(|c| !c.matches(color));
        self.colors.len() != before
    }

    /// Returns true if the color is saved.
    pub fn contains(&self, hex: &Hex) -> bool {
        self.colors.contains(hex)
    }

    /// Returns the most recently added color.
    pub fn first(&self) -> Option<&Hex> {
        self.colors.first()
    }

    /// Iterates from most to least recent.
    pub fn iter(&self) -> impl Iterator<Item = &Hex> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the size policy.
    pub fn policy(&self) -> SavePolicy {
        self.policy
    }

    fn enforce_cap(&mut self) {
        if let Some(max_len) = self.policy.max_len {
            self.colors.truncate(max_len);
        }
    }
}

impl<'a> IntoIterator for &'a SavedColors {
    type Item = &'a Hex;
    type IntoIter = core::slice::Iter<'a, Hex>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
