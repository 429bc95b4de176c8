//! Process-wide settings computed once at startup.

use crate::capabilities::CapabilitySet;

/// Whether quick-reference examples are shown alongside the manual page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayMode {
    ExamplesOn,
    ExamplesOff,
}

impl DisplayMode {
    #[must_use]
    pub fn from_flag(examples: bool) -> Self {
        if examples {
            DisplayMode::ExamplesOn
        } else {
            DisplayMode::ExamplesOff
        }
    }

    /// Mode actually usable with the given capabilities.
    ///
    /// Examples need an example provider, without one the mode drops to `ExamplesOff`.
    #[must_use]
    pub fn effective(self, capabilities: &CapabilitySet) -> Self {
        match self {
            DisplayMode::ExamplesOn if !capabilities.has_example_provider() => {
                DisplayMode::ExamplesOff
            }
            mode => mode,
        }
    }
}

/// Immutable startup state handed to every component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub mode: DisplayMode,
    pub capabilities: CapabilitySet,
    /// Set when examples were asked for but no provider exists.
    pub downgraded: bool,
}

impl Session {
    #[must_use]
    pub fn new(requested: DisplayMode, capabilities: CapabilitySet) -> Self {
        let mode = requested.effective(&capabilities);

        Self {
            mode,
            downgraded: mode != requested,
            capabilities,
        }
    }
}
