//! Mapping between letters and the compact slots used to count them.
//!
//! Every alphabet resolves a character case-insensitively to a slot in
//! `0..len()`, and separately classifies the wildcard symbols that stand in
//! for any letter. The order of [`Alphabet::letters`] is the slot order.

mod custom;
mod swedish;

pub use self::custom::{AlphabetConfig, CustomAlphabet};
pub use self::swedish::SwedishAlphabet;

use crate::error::Result;

pub trait Alphabet: Send + Sync {
    /// Slot of the letter, ignoring case. `None` if it is not part of the alphabet
    fn slot_of(&self, letter: char) -> Option<usize>;
    /// Letter stored in the slot
    fn char_of(&self, slot: usize) -> Result<char>;
    /// True for the wildcard symbols only. Blanks never have a slot
    fn is_blank(&self, c: char) -> bool;
    /// All real letters in slot order
    fn letters(&self) -> &[char];

    fn len(&self) -> usize {
        self.letters().len()
    }

    fn is_empty(&self) -> bool {
        self.letters().is_empty()
    }
}

/// Upper case form of a single character. Characters whose upper case form
/// is more than one character (such as 'ß') are left as they are.
pub(crate) fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
