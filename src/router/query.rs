//! Query-string parsing
//!
//! Parses `application/x-www-form-urlencoded` query strings into a
//! key/value map. Malformed percent escapes pass through literally
//! instead of failing the request.

use std::collections::HashMap;

/// Parse a raw query string into a key/value map.
///
/// Pairs split on `&`, keys from values on the first `=`. A pair without
/// `=` becomes a key with an empty value. Later duplicate keys overwrite
/// earlier ones.
pub fn parse(raw: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(decode(key), decode(value));
    }
    params
}

/// Decode `+` as space and `%XX` hex escapes
fn decode(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let Some(byte) = hex_pair(bytes[i + 1], bytes[i + 2]) {
                    decoded.push(byte);
                    i += 3;
                } else {
                    decoded.push(b'%');
                    i += 1;
                }
            }
            byte => {
                decoded.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

/// Decode two hex digits into a byte
fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = char::from(hi).to_digit(16)?;
    let lo = char::from(lo).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_single_pair() {
        let params = parse("name=Ada");
        assert_eq!(params["name"], "Ada");
    }

    #[test]
    fn test_multiple_pairs() {
        let params = parse("a=1&b=2");
        assert_eq!(params["a"], "1");
        assert_eq!(params["b"], "2");
    }

    #[test]
    fn test_pair_without_value() {
        let params = parse("flag");
        assert_eq!(params["flag"], "");
    }

    #[test]
    fn test_plus_and_percent_decoding() {
        let params = parse("name=Ada+Lovelace&title=Ms%2E");
        assert_eq!(params["name"], "Ada Lovelace");
        assert_eq!(params["title"], "Ms.");
    }

    #[test]
    fn test_utf8_percent_sequence() {
        let params = parse("name=J%C3%BCrgen");
        assert_eq!(params["name"], "Jürgen");
    }

    #[test]
    fn test_malformed_escape_passes_through() {
        let params = parse("name=50%25&bad=%zz&cut=%2");
        assert_eq!(params["name"], "50%");
        assert_eq!(params["bad"], "%zz");
        assert_eq!(params["cut"], "%2");
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let params = parse("name=first&name=second");
        assert_eq!(params["name"], "second");
    }
}
