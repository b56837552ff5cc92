use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::{fold_case, Alphabet};
use crate::error::{Error, Result};

/// Alphabet configured at runtime from an ordered string of letters and a
/// string of blank symbols.
#[derive(Debug, Clone)]
pub struct CustomAlphabet {
    letters: Vec<char>,
    slots: HashMap<char, usize>,
    blanks: Vec<char>,
}

impl CustomAlphabet {
    /// Builds the alphabet. Letters are upper cased and whitespace in either
    /// string is ignored.
    pub fn new(letters: &str, blanks: &str) -> Result<Self> {
        let mut alph = Self {
            letters: Vec::new(),
            slots: HashMap::new(),
            blanks: Vec::new(),
        };

        for c in letters.chars().filter(|c| !c.is_whitespace()) {
            let c = fold_case(c);
            if alph.slots.insert(c, alph.letters.len()).is_some() {
                return Err(Error::DuplicateLetter(c));
            }
            alph.letters.push(c);
        }
        if alph.letters.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        for b in blanks.chars().filter(|c| !c.is_whitespace()) {
            if alph.slots.contains_key(&fold_case(b)) {
                return Err(Error::BlankIsLetter(b));
            }
            if !alph.blanks.contains(&b) {
                alph.blanks.push(b);
            }
        }

        debug!(
            "Built alphabet with {} letters and {} blank symbols",
            alph.letters.len(),
            alph.blanks.len()
        );
        Ok(alph)
    }
}

impl Alphabet for CustomAlphabet {
    fn slot_of(&self, letter: char) -> Option<usize> {
        self.slots.get(&fold_case(letter)).copied()
    }

    fn char_of(&self, slot: usize) -> Result<char> {
        self.letters.get(slot).copied().ok_or(Error::OutOfRange {
            slot,
            len: self.letters.len(),
        })
    }

    fn is_blank(&self, c: char) -> bool {
        self.blanks.contains(&c)
    }

    fn letters(&self) -> &[char] {
        &self.letters
    }
}

fn default_blanks() -> String {
    "?*".to_string()
}

/// On disk form of a [`CustomAlphabet`]:
///
/// ```json
/// { "letters": "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "blanks": "?*" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlphabetConfig {
    pub letters: String,
    #[serde(default = "default_blanks")]
    pub blanks: String,
}

impl AlphabetConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn build(&self) -> Result<CustomAlphabet> {
        CustomAlphabet::new(&self.letters, &self.blanks)
    }
}
