use alloc::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Decodes a single key or value from a query string.
///
/// `+` means space, `%XX` sequences are percent-decoded, invalid UTF-8 is
/// replaced lossily. Malformed escapes pass through unchanged. Borrows the
/// input whenever no decoding was necessary.
pub(crate) fn decode(input: &str) -> Cow<'_, str> {
    if input.as_bytes().contains(&b'+') {
        // Plus substitution happens before percent-decoding so that an
        // encoded `%2B` still comes out as a literal plus.
        let spaced = input.replace('+', " ");
        Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
    } else {
        percent_decode_str(input).decode_utf8_lossy()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_plain() {
        assert!(matches!(decode("plain"), Cow::Borrowed("plain")));
        assert!(matches!(decode(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_percent() {
        assert_eq!(decode("John%20Doe"), "John Doe");
        assert_eq!(decode("a%3Db%26c"), "a=b&c");
        assert_eq!(decode("%C3%A9"), "é");
    }

    #[test]
    fn test_plus() {
        assert_eq!(decode("John+Doe"), "John Doe");
        assert_eq!(decode("1%2B1"), "1+1");
        assert_eq!(decode("a+%2B+b"), "a + b");
    }

    #[test]
    fn test_malformed() {
        assert_eq!(decode("100%"), "100%");
        assert_eq!(decode("%zz"), "%zz");
        assert_eq!(decode("%2"), "%2");
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(decode("%FF"), "\u{fffd}");
    }
}
