//! Query string parameter extraction.
//!
//! Naive `&`/`=` splitting only; no repeated-parameter or nested syntax.
//! The gateway extracts exactly three parameter names: the raw `key`
//! credential and the percent-decoded `command` and `name` values. The
//! `key` credential is deliberately NOT decoded, so deployed keys keep
//! matching byte-for-byte.

use percent_encoding::percent_decode_str;

/// First occurrence of `name` in the raw query, value returned as-is.
pub fn raw_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == name).then_some(v)
    })
}

/// First occurrence of `name`, percent-decoded, with `+` read as a space.
pub fn decoded_param(query: &str, name: &str) -> Option<String> {
    let raw = raw_param(query, name)?;
    // '+' is a space in query strings
    let plus_as_space = raw.replace('+', " ");
    Some(
        percent_decode_str(&plus_as_space)
            .decode_utf8_lossy()
            .into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_param_first_occurrence() {
        assert_eq!(raw_param("a=1&b=2&a=3", "a"), Some("1"));
        assert_eq!(raw_param("a=1&b=2", "b"), Some("2"));
    }

    #[test]
    fn test_raw_param_missing() {
        assert_eq!(raw_param("a=1&b=2", "c"), None);
        assert_eq!(raw_param("", "a"), None);
    }

    #[test]
    fn test_raw_param_ignores_pairs_without_equals() {
        assert_eq!(raw_param("flag&a=1", "flag"), None);
        assert_eq!(raw_param("flag&a=1", "a"), Some("1"));
    }

    #[test]
    fn test_raw_param_keeps_percent_sequences() {
        // The credential path must compare keys without decoding.
        assert_eq!(raw_param("key=a%41", "key"), Some("a%41"));
    }

    #[test]
    fn test_raw_param_value_may_contain_equals() {
        assert_eq!(raw_param("key=a=b", "key"), Some("a=b"));
    }

    #[test]
    fn test_decoded_param_percent_sequences() {
        assert_eq!(
            decoded_param("command=say%20hello", "command").as_deref(),
            Some("say hello")
        );
        assert_eq!(decoded_param("name=a%41", "name").as_deref(), Some("aA"));
    }

    #[test]
    fn test_decoded_param_plus_is_space() {
        assert_eq!(
            decoded_param("command=give+Steve+dirt", "command").as_deref(),
            Some("give Steve dirt")
        );
    }

    #[test]
    fn test_decoded_param_utf8() {
        assert_eq!(
            decoded_param("name=%D0%98%D0%B3%D1%80%D0%BE%D0%BA", "name").as_deref(),
            Some("Игрок")
        );
    }
}
