//! String escape handling shared by the parser and the formatter.
//!
//! Strings round-trip byte-for-byte through ISO-8859-1: every wire byte maps
//! to the char with the same scalar value, and chars up to U+00FF map back to
//! single bytes. Chars above U+00FF only appear in hand-authored source and
//! fall back to their UTF-8 encoding.

/// Applies C-style escapes: `\n \r \t \\ \" \xHH`. Returns `None` when an
/// escape is malformed (dangling `\`, bad hex digits).
pub fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            'x' => {
                let hi = chars.next()?.to_digit(16)?;
                let lo = chars.next()?.to_digit(16)?;
                out.push(char::from_u32(hi * 16 + lo)?);
            }
            _ => return None,
        }
    }
    Some(out)
}

/// Inverse of [`unescape`]: renders control bytes and non-ASCII as escapes so
/// the formatter's output re-parses to the same string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if (c as u32) < 0x20 || ((c as u32) >= 0x7F && (c as u32) <= 0xFF) => {
                out.push_str(&format!("\\x{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Byte-preserving string encoding: chars up to U+00FF become single bytes
/// (ISO-8859-1), anything higher falls back to UTF-8.
pub fn string_to_bytes(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let cp = c as u32;
        if cp <= 0xFF {
            out.push(cp as u8);
        } else {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }
    out
}

/// Inverse of [`string_to_bytes`] for wire data: each byte becomes the char
/// with the same scalar value.
pub fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_basics() {
        assert_eq!(unescape(r"a\tb\n").unwrap(), "a\tb\n");
        assert_eq!(unescape(r#"say \"hi\""#).unwrap(), "say \"hi\"");
        assert_eq!(unescape(r"\x41\x00").unwrap(), "A\u{0}");
        assert!(unescape(r"\q").is_none());
        assert!(unescape(r"\x4").is_none());
    }

    #[test]
    fn escape_round_trips() {
        for s in ["plain", "tab\there", "\u{1}\u{fe}", "q\"q\\"] {
            assert_eq!(unescape(&escape(s)).unwrap(), s);
        }
    }

    #[test]
    fn latin1_bytes_round_trip() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        assert_eq!(string_to_bytes(&bytes_to_string(&bytes)), bytes);
    }
}
