use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded lexicon
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Lexicon {0} could not be deserialized")]
    LexiconDeserializeError(String),

    /// Error serializing lexicon
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Lexicon could not be serialized: {0}")]
    LexiconSerializeError(String),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// Code is not valid for `Letter`
    #[error("Invalid code for letter {0}")]
    InvalidLetterCode(u8),

    /// Attempt to use a letter that is not in the hand
    #[error("Letter '{0}' is not in hand")]
    NotInHand(char),

    /// Parsing a board row with a different length than the first row
    #[error("Invalid row \"{0}\": length {1}, expect {2}")]
    InvalidRowLength(String, usize, usize),

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at x:{x}, y:{y}")]
    TileReplaceError { x: i32, y: i32 },
}
