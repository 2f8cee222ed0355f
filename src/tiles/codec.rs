//! Translate between strings and letters.
//!
//! Encoding ignores case. Decoding produces uppercase for the board, or lowercase
//! for the lexicon; this is the only place where the two forms meet.
use super::{Letter, Word};
use crate::error::Error;

/// Encode string, and return a `Word`.
/// ## Errors
/// An error is returned if the string contains anything but ascii letters.
/// ## Examples
/// ```
/// use bananagrams_solver::{encode, Error};
/// let word = encode("Banana")?;
/// assert_eq!(word.len(), 6);
/// assert_eq!(word.to_string(), "BANANA");
/// # Ok::<(), Error>(())
/// ```
pub fn encode(word: &str) -> Result<Word, Error> {
    word.chars()
        .map(|ch| Letter::from_char(ch).ok_or_else(|| Error::EncodeInvalidToken(ch.to_string())))
        .collect()
}

/// Decode letters to an uppercase string, as shown on the board.
pub fn decode(letters: &[Letter]) -> String {
    letters.iter().map(|letter| letter.to_char()).collect()
}

/// Decode letters to a lowercase string, as stored in the lexicon.
pub fn decode_lowercase(letters: &[Letter]) -> String {
    letters.iter().map(|letter| letter.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() -> Result<(), Error> {
        let word = encode("azAZ")?;
        let codes: Vec<usize> = word.iter().map(|l| l.index()).collect();
        assert_eq!(codes, vec![0, 25, 0, 25]);
        Ok(())
    }

    #[test]
    fn test_decode() -> Result<(), Error> {
        let word = encode("Split")?;
        assert_eq!(decode(&word), "SPLIT");
        assert_eq!(decode_lowercase(&word), "split");
        Ok(())
    }

    #[test]
    #[should_panic(expected = "EncodeInvalidToken")]
    fn test_encode_error() {
        encode("Illegal!").unwrap();
    }
}
