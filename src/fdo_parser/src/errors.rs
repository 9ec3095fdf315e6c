//! Parser error machinery: a nom error type that tracks the deepest failure
//! point with its expectation labels, and the owned failure the public API
//! returns.

use miette::{LabeledSpan, NamedSource, Report};
use nom::error::{ContextError, ErrorKind, ParseError};

use crate::span::Span;

/// Internal nom error: keeps the furthest position reached and the context
/// labels attached on the way out.
#[derive(Debug)]
pub struct FdoError<'a> {
    pub location: Span<'a>,
    pub contexts: Vec<&'static str>,
}

impl<'a> FdoError<'a> {
    fn offset(&self) -> usize {
        self.location.location_offset()
    }
}

impl<'a> ParseError<Span<'a>> for FdoError<'a> {
    fn from_error_kind(input: Span<'a>, _kind: ErrorKind) -> Self {
        FdoError {
            location: input,
            contexts: Vec::new(),
        }
    }

    fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    // Alternatives keep whichever branch got furthest; that is almost
    // always the message a human wants.
    fn or(self, other: Self) -> Self {
        if other.offset() > self.offset() {
            other
        } else {
            self
        }
    }
}

impl<'a> ContextError<Span<'a>> for FdoError<'a> {
    fn add_context(_input: Span<'a>, ctx: &'static str, mut other: Self) -> Self {
        other.contexts.push(ctx);
        other
    }
}

pub type PResult<'a, O> = nom::IResult<Span<'a>, O, FdoError<'a>>;

/// Owned parse failure with everything needed to render a message.
#[derive(Clone, Debug)]
pub struct ParseFailure {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub message: String,
    pub line_text: String,
}

impl ParseFailure {
    pub(crate) fn from_error(source: &str, error: &FdoError<'_>) -> Self {
        let line = error.location.location_line() as usize;
        let column = error.location.get_utf8_column();
        let expected = match error.contexts.first() {
            Some(ctx) => format!("expected {ctx}"),
            None => "unexpected input".to_string(),
        };
        ParseFailure {
            line,
            column,
            offset: error.offset(),
            message: expected,
            line_text: line_slice(source, line),
        }
    }

    pub(crate) fn eof(source: &str) -> Self {
        let line = source.lines().count().max(1);
        ParseFailure {
            line,
            column: 1,
            offset: source.len(),
            message: "unexpected end of input".to_string(),
            line_text: line_slice(source, line),
        }
    }
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "at {}:{}: {}", self.line, self.column, self.message)?;
        writeln!(f, "{}", self.line_text)?;
        write!(f, "{}^", " ".repeat(self.column.saturating_sub(1)))
    }
}

impl std::error::Error for ParseFailure {}

fn line_slice(input: &str, line_no: usize) -> String {
    input
        .lines()
        .nth(line_no.saturating_sub(1))
        .unwrap_or("")
        .to_string()
}

/// Lifts a failure into a miette report for fancy terminal rendering.
pub fn to_miette_report(file_name: &str, source: &str, failure: &ParseFailure) -> Report {
    let span_len = source[failure.offset..]
        .chars()
        .next()
        .map_or(0, char::len_utf8);
    miette::miette!(
        labels = vec![LabeledSpan::at(
            failure.offset..failure.offset + span_len,
            failure.message.clone(),
        )],
        "parse error at {}:{}",
        failure.line,
        failure.column
    )
    .with_source_code(NamedSource::new(file_name, source.to_string()))
}
