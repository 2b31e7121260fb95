use web_time::Duration;

/// Tunables for a popup menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// How long a soft close waits before re-checking focus and hover.
    pub close_delay: Duration,
    /// Jump to the next item starting with a typed character.
    pub typeahead: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            close_delay: Duration::from_millis(300),
            typeahead: true,
        }
    }
}

impl MenuConfig {
    pub fn with_close_delay(mut self, close_delay: Duration) -> Self {
        self.close_delay = close_delay;
        self
    }

    pub fn without_typeahead(mut self) -> Self {
        self.typeahead = false;
        self
    }
}
