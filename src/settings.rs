//! Password generation settings.

use crate::pass::Classes;

/// Shortest length the CLI accepts.
pub const MIN_LENGTH: usize = 2;
/// Longest length the CLI accepts.
pub const MAX_LENGTH: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub classes: Classes,
    pub use_os_rng: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 10,
            number_of_passwords: 1,
            classes: Classes::all(),
            use_os_rng: false,
        }
    }
}
