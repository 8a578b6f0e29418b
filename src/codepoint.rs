use crate::{Error, Result};

/// Splits `text` into Unicode scalar values.
///
/// `what` names the argument in the `InvalidArgument` error raised for
/// empty input ("word", "prefix", ...).
pub fn decode_as(text: &str, what: &'static str) -> Result<Vec<char>> {
    if text.is_empty() {
        return Err(Error::InvalidArgument(what));
    }
    let mut codepoints = Vec::new();
    codepoints.try_reserve_exact(text.chars().count())?;
    codepoints.extend(text.chars());
    Ok(codepoints)
}

/// Splits a non-empty word into code points.
pub fn decode(word: &str) -> Result<Vec<char>> {
    decode_as(word, "word")
}

/// Validates `bytes` as UTF-8, then behaves like [`decode`].
pub fn decode_utf8(bytes: &[u8]) -> Result<Vec<char>> {
    decode(std::str::from_utf8(bytes)?)
}

pub(crate) fn utf8_text(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        assert_eq!(decode("cat").unwrap(), vec!['c', 'a', 't']);
    }

    #[test]
    fn test_decode_multibyte() {
        // one code point per scalar value, not per byte
        let codepoints = decode("naïve日本").unwrap();
        assert_eq!(codepoints.len(), 7);
        assert_eq!(codepoints[2], 'ï');
        assert_eq!(codepoints[5], '日');
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode(""), Err(Error::InvalidArgument("word"))));
        assert!(matches!(
            decode_as("", "prefix"),
            Err(Error::InvalidArgument("prefix"))
        ));
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_utf8("dog".as_bytes()).unwrap(), vec!['d', 'o', 'g']);
        assert!(matches!(
            decode_utf8(&[b'o', b'k', 0xc3]),
            Err(Error::InvalidEncoding { valid_up_to: 2 })
        ));
        assert!(matches!(decode_utf8(&[]), Err(Error::InvalidArgument(_))));
    }
}
