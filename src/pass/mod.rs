//! Password generation.

pub mod charset;
mod generate;

pub use charset::{CharacterClass, Classes};
pub use generate::{
    Reporter, Silent, generate_batch, generate_password, random_digit, random_lower,
    random_symbol, random_upper, try_generate,
};
