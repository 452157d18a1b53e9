//! Character classes and the generator selection built from the toggles.

use crate::rand::RandomSource;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*(){}[]=<>/,.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Fixed generator order. Selections always follow it.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// Draw one value from `source` and map it onto this class's alphabet.
    #[inline]
    pub fn draw<R: RandomSource + ?Sized>(self, source: &mut R) -> char {
        let alphabet = self.alphabet();
        let index = (source.next_unit() * alphabet.len() as f64).floor() as usize;
        // A misbehaving source at exactly 1.0 lands on the last character.
        alphabet[index.min(alphabet.len() - 1)] as char
    }
}

/// The four class toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classes {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl Classes {
    pub fn new(lower: bool, upper: bool, digit: bool, symbol: bool) -> Self {
        Self {
            lower,
            upper,
            digit,
            symbol,
        }
    }

    pub fn all() -> Self {
        Self::new(true, true, true, true)
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Turn one class on or off.
    pub fn set(&mut self, class: CharacterClass, enabled: bool) -> &mut Self {
        match class {
            CharacterClass::Lower => self.lower = enabled,
            CharacterClass::Upper => self.upper = enabled,
            CharacterClass::Digit => self.digit = enabled,
            CharacterClass::Symbol => self.symbol = enabled,
        }
        self
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.set(class, true);
        self
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lower => self.lower,
            CharacterClass::Upper => self.upper,
            CharacterClass::Digit => self.digit,
            CharacterClass::Symbol => self.symbol,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selection().is_empty()
    }

    /// Enabled classes in [`CharacterClass::ALL`] order.
    pub fn selection(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| self.is_enabled(class))
            .collect()
    }

    /// Whether `c` belongs to any enabled alphabet.
    pub fn allows(&self, c: char) -> bool {
        self.selection().into_iter().any(|class| class.contains(c))
    }
}
