//! Finds every dictionary word that can be spelled from a set of letter
//! tiles, where blank tiles stand in for any letter.
//!
//! ```
//! # use wordfind::{Lexicon, Rack, SwedishAlphabet};
//! let lexicon = Lexicon::from_words(["katt", "tak", "takt"])?;
//! let alphabet = SwedishAlphabet;
//! let mut rack = Rack::from_letters(&alphabet, "kat?")?;
//! let words = lexicon.find_words(&mut rack)?;
//! assert_eq!(words, vec!["KATT", "TAK", "TAKT"]);
//! # Ok::<(), wordfind::Error>(())
//! ```

pub mod alphabet;
mod dictionary;
mod error;
pub mod lexicon;
pub mod rack;

pub use crate::alphabet::{Alphabet, AlphabetConfig, CustomAlphabet, SwedishAlphabet};
pub use crate::error::{Error, Result};
pub use crate::lexicon::{Lexicon, WordMatch, MAX_WORD_LEN};
pub use crate::rack::{Rack, TakenTile, Tile};
