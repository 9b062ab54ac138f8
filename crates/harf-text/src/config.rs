//! Shaping Configuration

/// Shaping configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    /// Replace lam + alef with a single ligature code point.
    ///
    /// Consumes the alef, so output is shorter than input when enabled.
    pub lam_alef_ligatures: bool,

    /// Treat tatweel and ZWJ as join-causing instead of word breaks
    pub join_causing: bool,

    /// Remove harakat before shaping
    pub strip_harakat: bool,
}

impl Config {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable lam-alef ligatures
    pub fn lam_alef_ligatures(mut self, enabled: bool) -> Self {
        self.lam_alef_ligatures = enabled;
        self
    }

    /// Enable or disable join-causing tatweel/ZWJ
    pub fn join_causing(mut self, enabled: bool) -> Self {
        self.join_causing = enabled;
        self
    }

    /// Enable or disable harakat stripping
    pub fn strip_harakat(mut self, enabled: bool) -> Self {
        self.strip_harakat = enabled;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lam_alef_ligatures: false,
            join_causing: true,
            strip_harakat: false,
        }
    }
}
