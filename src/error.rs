//! Error types for distance configuration and computation.

use thiserror::Error;

/// Errors raised while configuring or computing a weighted edit distance.
///
/// Configuration errors (`UnknownMetric`, `UnknownLayout`, `NegativeCost`)
/// are reported before any alignment table is built. `UnsupportedCharacter`
/// is raised lazily during keyboard-aware substitution pricing, so inputs
/// whose characters are never compared against a differing character (for
/// example, identical strings) do not trigger it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The substitution metric name is not recognized.
    #[error("Unknown metric {0:?}. Valid options: euclidean, manhattan, log-euclidean, log-manhattan")]
    UnknownMetric(String),

    /// The keyboard layout name is not recognized.
    #[error("Unknown layout {0:?}. Valid options: QWERTY, Dvorak, AZERTY, QWERTZ")]
    UnknownLayout(String),

    /// A cost component is negative.
    ///
    /// Cost tuples are validated up front; a negative component would make
    /// the alignment recurrence meaningless.
    #[error("Cost component `{name}` must be non-negative, got {value}")]
    NegativeCost {
        /// Name of the offending cost component.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A character was not found in either shift bank of the selected
    /// keyboard layout.
    #[error("Character {ch:?} not found on the {layout} layout")]
    UnsupportedCharacter {
        /// The character that could not be located.
        ch: char,
        /// The layout that was searched.
        layout: crate::typo::Layout,
    },
}

/// A specialized `Result` type for distance operations.
pub type Result<T> = std::result::Result<T, Error>;
