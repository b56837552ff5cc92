use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::lexicon::Lexicon;

impl Lexicon {
    /// Reads a word list with one word per line. Surrounding whitespace is
    /// trimmed and empty lines are skipped. Words are inserted in file order.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lexicon = Lexicon::new();
        let mut n_lines = 0;
        let mut n_skipped = 0;
        for line in reader.lines() {
            let line = line?;
            n_lines += 1;
            let word = line.trim();
            if word.is_empty() {
                n_skipped += 1;
                continue;
            }
            lexicon.insert(word)?;
        }

        info!(
            "Loaded {} words from {} lines ({} blank)",
            lexicon.len(),
            n_lines,
            n_skipped
        );
        Ok(lexicon)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.insert(word.as_ref().trim())?;
        }
        Ok(lexicon)
    }
}
