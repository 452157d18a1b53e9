//! cyclepass - password generator that rotates through the enabled
//! character classes in a fixed order.
//!
//! The core is [`generate_password`]: pick the enabled classes out of
//! lower, upper, digit, symbol (always in that order) and cycle through
//! them, drawing one random character per position from an injected
//! [`RandomSource`].

pub mod cli;
pub mod error;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{Error, Result};
pub use pass::{
    CharacterClass, Classes, Reporter, Silent, generate_batch, generate_password, random_digit,
    random_lower, random_symbol, random_upper, try_generate,
};
pub use crate::rand::{OsSource, Rand, RandomSource, Sequence};
pub use settings::Settings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
