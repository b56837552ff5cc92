use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Lookup or search on a lexicon that never had a word inserted
    #[error("lexicon has not been built from a dictionary")]
    NotInitialized,
    #[error("'{0}' is neither a letter nor a blank in this alphabet")]
    InvalidLetter(char),
    #[error("slot {slot} is out of range for an alphabet of {len} letters")]
    OutOfRange { slot: usize, len: usize },
    #[error("word '{word}' has {len} letters, the limit is {max}")]
    WordTooLong { word: String, len: usize, max: usize },

    #[error("letter '{0}' appears more than once in the alphabet")]
    DuplicateLetter(char),
    #[error("blank symbol '{0}' is also a letter of the alphabet")]
    BlankIsLetter(char),
    #[error("alphabet has no letters")]
    EmptyAlphabet,

    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid alphabet configuration: {0}")]
    Config(#[from] serde_json::Error),
}
