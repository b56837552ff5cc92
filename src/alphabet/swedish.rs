use super::{fold_case, Alphabet};
use crate::error::{Error, Result};

static LETTERS: [char; 29] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Å', 'Ä', 'Ö',
];

/// The built in alphabet: A-Z followed by Å, Ä and Ö. Blanks are written as
/// '?' or '*'.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwedishAlphabet;

impl Alphabet for SwedishAlphabet {
    fn slot_of(&self, letter: char) -> Option<usize> {
        match fold_case(letter) {
            c @ 'A'..='Z' => Some(c as usize - 'A' as usize),
            'Å' => Some(26),
            'Ä' => Some(27),
            'Ö' => Some(28),
            _ => None,
        }
    }

    fn char_of(&self, slot: usize) -> Result<char> {
        LETTERS.get(slot).copied().ok_or(Error::OutOfRange {
            slot,
            len: LETTERS.len(),
        })
    }

    fn is_blank(&self, c: char) -> bool {
        matches!(c, '?' | '*')
    }

    fn letters(&self) -> &[char] {
        &LETTERS
    }
}
