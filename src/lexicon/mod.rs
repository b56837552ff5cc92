//! Prefix tree over the dictionary and the rack constrained word search.
//!
//! A [`Lexicon`] is built once and then only read, so one lexicon can serve
//! any number of searches as long as every search has its own [`Rack`].

mod search;
mod trie;

pub use self::trie::TrieNode;

use log::debug;
use rayon::prelude::*;

use self::search::Search;
use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::rack::Rack;

/// Longest word, in characters, the lexicon accepts
pub const MAX_WORD_LEN: usize = 64;

/// A word found by a search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordMatch {
    pub word: String,
    /// Character positions in `word` that were filled with a blank
    pub blanks: Vec<usize>,
}

impl WordMatch {
    /// The word with every blank filled letter in lower case, eg. "KaTT"
    pub fn marked(&self) -> String {
        let mut marked = String::with_capacity(self.word.len());
        for (i, c) in self.word.chars().enumerate() {
            if self.blanks.contains(&i) {
                marked.extend(c.to_lowercase());
            } else {
                marked.push(c);
            }
        }
        marked
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    root: TrieNode,
    n_words: usize,
    max_len: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word, upper cased. Returns false if it was already there.
    /// Empty words are ignored.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = word.to_uppercase();
        let len = word.chars().count();
        if len == 0 {
            return Ok(false);
        }
        if len > MAX_WORD_LEN {
            return Err(Error::WordTooLong {
                word,
                len,
                max: MAX_WORD_LEN,
            });
        }

        let added = self.root.add_word(&word);
        if added {
            self.n_words += 1;
            self.max_len = self.max_len.max(len);
        }
        Ok(added)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.n_words
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }

    /// Length of the longest word, in characters
    pub fn max_word_len(&self) -> usize {
        self.max_len
    }

    fn root(&self) -> Result<&TrieNode> {
        if self.is_empty() {
            Err(Error::NotInitialized)
        } else {
            Ok(&self.root)
        }
    }

    /// Exact, case insensitive lookup
    pub fn contains(&self, word: &str) -> Result<bool> {
        let root = self.root()?;
        Ok(root
            .find(&word.to_uppercase())
            .map_or(false, |node| node.is_terminal()))
    }

    /// Finds every word that can be laid with the tiles in the rack, along
    /// with the positions that needed a blank. Words come out in trie order,
    /// which follows dictionary insertion order. The rack is left as it was.
    pub fn find_matches<A: Alphabet + ?Sized>(
        &self,
        rack: &mut Rack<'_, A>,
    ) -> Result<Vec<WordMatch>> {
        let root = self.root()?;
        let mut search = Search::new(self.max_len);
        search.run(root, rack);
        debug!(
            "Search visited {} nodes and found {} words",
            search.visited,
            search.matches.len()
        );
        Ok(search.matches)
    }

    /// Finds every word that can be laid with the tiles in the rack
    pub fn find_words<A: Alphabet + ?Sized>(
        &self,
        rack: &mut Rack<'_, A>,
    ) -> Result<Vec<String>> {
        Ok(self
            .find_matches(rack)?
            .into_iter()
            .map(|m| m.word)
            .collect())
    }

    /// Runs [`Lexicon::find_words`] for each rack in parallel
    pub fn find_words_many<A: Alphabet + ?Sized>(
        &self,
        racks: &mut [Rack<'_, A>],
    ) -> Result<Vec<Vec<String>>> {
        racks
            .par_iter_mut()
            .map(|rack| self.find_words(rack))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::alphabet::{CustomAlphabet, SwedishAlphabet};

    fn english() -> CustomAlphabet {
        CustomAlphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "?*").unwrap()
    }

    fn lexicon(words: &[&str]) -> Lexicon {
        let mut lex = Lexicon::new();
        for w in words {
            lex.insert(w).unwrap();
        }
        lex
    }

    #[test]
    fn test_exact_tiles() {
        let alph = english();
        let lex = lexicon(&["CAT", "CAR", "ARC", "CARS"]);
        let mut rack = Rack::from_counts(&alph, vec![('C', 1), ('A', 1), ('T', 1), ('R', 1)]).unwrap();

        let found = lex.find_words(&mut rack).unwrap();
        let found: HashSet<&str> = found.iter().map(|w| w.as_str()).collect();
        assert_eq!(found, ["CAT", "ARC", "CAR"].into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_insertion_order() {
        let alph = english();
        let lex = lexicon(&["CAT", "ARC", "CAR", "CARS"]);
        let mut rack = Rack::from_letters(&alph, "CATRS").unwrap();
        assert_eq!(
            lex.find_words(&mut rack).unwrap(),
            vec!["CAT", "CAR", "CARS", "ARC"]
        );
    }

    #[test]
    fn test_blank_fills_missing_letter() {
        let alph = english();
        let lex = lexicon(&["CAT"]);
        let mut rack = Rack::from_counts(&alph, vec![('C', 1), ('A', 1), ('?', 1)]).unwrap();

        let found = lex.find_matches(&mut rack).unwrap();
        assert_eq!(
            found,
            vec![WordMatch {
                word: "CAT".into(),
                blanks: vec![2]
            }]
        );
        assert_eq!(found[0].marked(), "CAt");
    }

    #[test]
    fn test_missing_letter_no_blank() {
        let alph = english();
        let lex = lexicon(&["CAT"]);
        let mut rack = Rack::from_counts(&alph, vec![('C', 1), ('A', 1)]).unwrap();
        assert!(lex.find_words(&mut rack).unwrap().is_empty());
    }

    #[test]
    fn test_contains() {
        let lex = lexicon(&["CAT", "DOG"]);
        assert!(lex.contains("DOG").unwrap());
        assert!(!lex.contains("DO").unwrap());
        assert!(!lex.contains("DOGS").unwrap());
        assert!(!lex.contains("").unwrap());
        for w in ["cat", "CAT", "Cat"] {
            assert!(lex.contains(w).unwrap());
        }
    }

    #[test]
    fn test_not_initialized() {
        let alph = english();
        let lex = Lexicon::new();
        let mut rack = Rack::from_letters(&alph, "CAT").unwrap();
        assert!(matches!(lex.contains("CAT"), Err(Error::NotInitialized)));
        assert!(matches!(lex.find_words(&mut rack), Err(Error::NotInitialized)));

        let mut lex = Lexicon::new();
        assert!(!lex.insert("").unwrap());
        assert!(matches!(lex.contains(""), Err(Error::NotInitialized)));
    }

    #[test]
    fn test_insert_normalizes_and_dedups() {
        let mut lex = Lexicon::new();
        assert!(lex.insert("katt").unwrap());
        assert!(!lex.insert("KATT").unwrap());
        assert!(lex.insert("kat").unwrap());
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.max_word_len(), 4);
        assert!(lex.contains("KATT").unwrap());
    }

    #[test]
    fn test_word_too_long() {
        let mut lex = Lexicon::new();
        let long = "A".repeat(MAX_WORD_LEN + 1);
        let err = lex.insert(&long).unwrap_err();
        assert!(matches!(err, Error::WordTooLong { len, max, .. } if len == MAX_WORD_LEN + 1 && max == MAX_WORD_LEN));
        assert!(lex.is_empty());

        assert!(lex.insert(&"A".repeat(MAX_WORD_LEN)).unwrap());
    }

    #[test]
    fn test_real_tile_preferred() {
        let alph = english();
        let lex = lexicon(&["AT", "TAT"]);
        let mut rack = Rack::from_letters(&alph, "AT?").unwrap();

        let found = lex.find_matches(&mut rack).unwrap();
        assert_eq!(found.len(), 2);
        let at = found.iter().find(|m| m.word == "AT").unwrap();
        assert!(at.blanks.is_empty());
        // First T comes from the rack, the second one needs the blank
        let tat = found.iter().find(|m| m.word == "TAT").unwrap();
        assert_eq!(tat.blanks, vec![2]);
        assert_eq!(tat.marked(), "TAt");
    }

    #[test]
    fn test_word_and_extension() {
        let alph = english();
        let lex = lexicon(&["AA", "A", "AAA"]);
        let mut rack = Rack::from_letters(&alph, "A?").unwrap();
        let found = lex.find_matches(&mut rack).unwrap();
        let words: Vec<&str> = found.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["A", "AA"]);
        assert_eq!(found[1].blanks, vec![1]);
    }

    #[test]
    fn test_rack_untouched() {
        let alph = SwedishAlphabet;
        let lex = lexicon(&["KATT", "KAT", "TAK", "ÖKA", "ÅKA"]);
        let mut rack = Rack::from_letters(&alph, "kat??").unwrap();
        let before = rack.clone();

        let found = lex.find_words(&mut rack).unwrap();
        assert_eq!(found.len(), 5);
        assert_eq!(rack, before);
        assert_eq!(rack.count_of('K'), 1);
        assert_eq!(rack.blank_count(), 2);
    }

    #[test]
    fn test_only_blanks() {
        let alph = SwedishAlphabet;
        let lex = lexicon(&["ÖL", "ÅL", "ÅLAR"]);
        let mut rack = Rack::from_counts(&alph, vec![('?', 2)]).unwrap();
        let found = lex.find_matches(&mut rack).unwrap();
        let marked: Vec<String> = found.iter().map(|m| m.marked()).collect();
        assert_eq!(marked, vec!["öl", "ål"]);
    }

    #[test]
    fn test_find_words_many() {
        let alph = english();
        let lex = lexicon(&["CAT", "CAR", "ARC", "CARS"]);
        let mut racks = vec![
            Rack::from_letters(&alph, "CATR").unwrap(),
            Rack::from_letters(&alph, "CA").unwrap(),
            Rack::from_letters(&alph, "CA?").unwrap(),
        ];

        let results = lex.find_words_many(&mut racks).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], vec!["CAT", "CAR", "ARC"]);
        assert!(results[1].is_empty());
        assert_eq!(results[2], vec!["CAT", "CAR", "ARC"]);
        assert_eq!(racks[2].blank_count(), 1);
    }
}
