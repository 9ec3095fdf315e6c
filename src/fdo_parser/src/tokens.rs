//! Lexical pieces: whitespace/comments, identifiers, numbers, hex and
//! string literals, global ids.

use fdo_syntax::{escape, Gid};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1, take_while_m_n};
use nom::character::complete::{char as ch, digit1};
use nom::combinator::{map, opt, recognize, value, verify};
use nom::error::{ErrorKind, ParseError};
use nom::multi::many0;
use nom::sequence::pair;
use nom::{Input, Parser};

use crate::errors::{FdoError, PResult};
use crate::span::Span;

fn ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Skips whitespace and `;`/`//` line comments.
pub(crate) fn ws(input: Span<'_>) -> PResult<'_, ()> {
    value(
        (),
        many0(alt((
            value((), take_while1(|c: char| c.is_ascii_whitespace())),
            value(
                (),
                pair(alt((tag(";"), tag("//"))), take_while(|c| c != '\n')),
            ),
        ))),
    )
    .parse(input)
}

/// Raw identifier span (used for atom names, which keep their position).
pub(crate) fn ident_raw(input: Span<'_>) -> PResult<'_, Span<'_>> {
    recognize(pair(
        take_while_m_n(1, 1, ident_start),
        take_while(ident_char),
    ))
    .parse(input)
}

pub(crate) fn identifier(input: Span<'_>) -> PResult<'_, String> {
    map(ident_raw, |span| span.fragment().to_string()).parse(input)
}

fn boundary(input: Span<'_>) -> PResult<'_, ()> {
    match input.fragment().chars().next() {
        Some(c) if ident_char(c) => Err(nom::Err::Error(FdoError::from_error_kind(
            input,
            ErrorKind::Verify,
        ))),
        _ => Ok((input, ())),
    }
}

pub(crate) fn number(input: Span<'_>) -> PResult<'_, i64> {
    let (rest, span) = recognize(pair(opt(ch('-')), digit1)).parse(input)?;
    let (rest, ()) = boundary(rest)?;
    match span.fragment().parse::<i64>() {
        Ok(n) => Ok((rest, n)),
        Err(_) => Err(nom::Err::Error(FdoError::from_error_kind(
            input,
            ErrorKind::Digit,
        ))),
    }
}

fn hex_pairs(text: &str) -> Vec<u8> {
    text.as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16).unwrap_or(0);
            let lo = (pair[1] as char).to_digit(16).unwrap_or(0);
            (hi * 16 + lo) as u8
        })
        .collect()
}

/// `0A1Fx` (an even run of hex digits with the `x` suffix), or a bare
/// uppercase pair run like `7F` (at least one A..F so decimal numbers stay
/// numbers).
pub(crate) fn hex_literal(input: Span<'_>) -> PResult<'_, Vec<u8>> {
    let suffixed = map(
        (
            verify(take_while1(|c: char| c.is_ascii_hexdigit()), |s: &Span| {
                s.fragment().len() % 2 == 0
            }),
            ch('x'),
        ),
        |(digits, _): (Span, char)| hex_pairs(digits.fragment()),
    );
    let bare = map(
        verify(
            take_while1(|c: char| c.is_ascii_digit() || ('A'..='F').contains(&c)),
            |s: &Span| {
                let text = s.fragment();
                text.len() % 2 == 0 && text.chars().any(|c| c.is_ascii_uppercase())
            },
        ),
        |digits: Span| hex_pairs(digits.fragment()),
    );
    let (rest, bytes) = alt((suffixed, bare)).parse(input)?;
    let (rest, ()) = boundary(rest)?;
    Ok((rest, bytes))
}

/// `T-I` or `T-S-I`, decimal parts within their field ranges.
pub(crate) fn gid_literal(input: Span<'_>) -> PResult<'_, Gid> {
    let part = |input| digit1(input);
    let (rest, (first, _, second, third)) =
        (part, ch('-'), part, opt(map((ch('-'), part), |(_, p)| p))).parse(input)?;
    let (rest, ()) = boundary(rest)?;
    let reject = || nom::Err::Error(FdoError::from_error_kind(input, ErrorKind::Verify));
    let first: u32 = first.fragment().parse().map_err(|_| reject())?;
    let second: u32 = second.fragment().parse().map_err(|_| reject())?;
    match third {
        None => {
            if first > 0xFF || second > 0xFFFF {
                return Err(reject());
            }
            Ok((rest, Gid::two_part(first as u8, second as u16)))
        }
        Some(third) => {
            let third: u32 = third.fragment().parse().map_err(|_| reject())?;
            if first > 0xFF || second > 0xFF || third > 0xFFFF {
                return Err(reject());
            }
            Ok((
                rest,
                Gid::three_part(first as u8, second as u8, third as u16),
            ))
        }
    }
}

/// Quoted string with the C-style escapes applied.
pub(crate) fn string_literal(input: Span<'_>) -> PResult<'_, String> {
    let text = *input.fragment();
    if !text.starts_with('"') {
        return Err(nom::Err::Error(FdoError::from_error_kind(
            input,
            ErrorKind::Char,
        )));
    }
    let bytes = text.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let raw = &text[1..i];
                let Some(unescaped) = escape::unescape(raw) else {
                    return Err(nom::Err::Failure(FdoError {
                        location: input,
                        contexts: vec!["a valid string escape"],
                    }));
                };
                let (rest, _) = input.take_split(i + 1);
                return Ok((rest, unescaped));
            }
            b'\\' => i += 2,
            _ => i += 1,
        }
    }
    Err(nom::Err::Failure(FdoError {
        location: input,
        contexts: vec!["a closing string quote"],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full<'a, O>(result: PResult<'a, O>) -> O {
        let (rest, out) = result.expect("parse ok");
        assert!(rest.fragment().is_empty(), "leftover: {}", rest.fragment());
        out
    }

    #[test]
    fn numbers_and_boundaries() {
        assert_eq!(full(number(Span::new("300"))), 300);
        assert_eq!(full(number(Span::new("-12"))), -12);
        assert!(number(Span::new("12abc")).is_err());
    }

    #[test]
    fn hex_forms() {
        assert_eq!(full(hex_literal(Span::new("0A1Fx"))), vec![0x0A, 0x1F]);
        assert_eq!(full(hex_literal(Span::new("7F"))), vec![0x7F]);
        assert!(hex_literal(Span::new("12")).is_err()); // no letter, no suffix
        assert!(hex_literal(Span::new("ABCx")).is_err()); // odd digits
    }

    #[test]
    fn gid_ranges() {
        assert_eq!(full(gid_literal(Span::new("32-105"))), Gid::two_part(32, 105));
        assert_eq!(
            full(gid_literal(Span::new("1-0-1329"))),
            Gid::three_part(1, 0, 1329)
        );
        assert!(gid_literal(Span::new("300-5")).is_err());
        assert!(gid_literal(Span::new("1-70000")).is_err());
    }

    #[test]
    fn strings() {
        assert_eq!(full(string_literal(Span::new("\"hi\""))), "hi");
        assert_eq!(
            full(string_literal(Span::new(r#""a\tb\x41""#))),
            "a\tbA"
        );
        assert!(string_literal(Span::new("\"open")).is_err());
    }

    #[test]
    fn comments() {
        let (rest, ()) = ws(Span::new("  ; comment\n// more\n  x")).unwrap();
        assert_eq!(*rest.fragment(), "x");
    }
}
