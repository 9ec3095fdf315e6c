//! Grammar proper: streams of atoms, argument lists, nested sub-streams.

use fdo_syntax::{ArgumentNode, AtomNode, StreamNode};
use nom::branch::alt;
use nom::character::complete::char as ch;
use nom::combinator::map;
use nom::error::context;
use nom::multi::{many0, many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::Parser;

use crate::errors::PResult;
use crate::span::{position, Span};
use crate::tokens;

pub(crate) fn stream(input: Span<'_>) -> PResult<'_, StreamNode> {
    map(
        preceded(tokens::ws, many0(terminated(atom, tokens::ws))),
        StreamNode::new,
    )
    .parse(input)
}

fn atom(input: Span<'_>) -> PResult<'_, AtomNode> {
    let (rest, name_span) = tokens::ident_raw(input)?;
    let pos = position(&name_span);
    let name = name_span.fragment().to_ascii_lowercase();
    let (rest, bracket_args) = nom::combinator::opt(preceded(tokens::ws, bracket)).parse(rest)?;
    let mut node = AtomNode::with_args(name, bracket_args.unwrap_or_default());
    node.pos = pos;
    Ok((rest, node))
}

/// `<…>` after an atom name: an argument list when the content reads as
/// comma-separated values, otherwise a nested sub-stream.
fn bracket(input: Span<'_>) -> PResult<'_, Vec<ArgumentNode>> {
    let (rest, _) = ch('<').parse(input)?;
    let (rest, _) = tokens::ws(rest)?;
    match argument_list(rest) {
        Ok((after, args)) => Ok((after, args)),
        // Unrecoverable failures (bad escapes, unterminated strings) keep
        // their diagnostics instead of re-reading as a sub-stream.
        Err(err @ nom::Err::Failure(_)) => Err(err),
        Err(_) => nested_stream(rest),
    }
}

fn argument_list(input: Span<'_>) -> PResult<'_, Vec<ArgumentNode>> {
    alt((
        map(ch('>'), |_| Vec::new()),
        terminated(
            separated_list1(delimited(tokens::ws, ch(','), tokens::ws), argument),
            pair(tokens::ws, ch('>')),
        ),
    ))
    .parse(input)
}

fn nested_stream(input: Span<'_>) -> PResult<'_, Vec<ArgumentNode>> {
    let (rest, atoms) = many1(terminated(atom, tokens::ws)).parse(input)?;
    let (rest, trailing) = many0(terminated(trailing_value, tokens::ws)).parse(rest)?;
    let (rest, _) = context("a closing `>`", ch('>')).parse(rest)?;
    Ok((
        rest,
        vec![ArgumentNode::NestedStream {
            stream: StreamNode::new(atoms),
            trailing,
        }],
    ))
}

/// Raw data after the atoms of a nested stream.
fn trailing_value(input: Span<'_>) -> PResult<'_, ArgumentNode> {
    alt((
        map(tokens::hex_literal, ArgumentNode::Hex),
        map(tokens::number, ArgumentNode::Number),
    ))
    .parse(input)
}

/// One argument: a value, or several OR'd with `|`.
fn argument(input: Span<'_>) -> PResult<'_, ArgumentNode> {
    let (rest, first) = value_node(input)?;
    let (rest, more) = many0(preceded(
        delimited(tokens::ws, ch('|'), tokens::ws),
        value_node,
    ))
    .parse(rest)?;
    if more.is_empty() {
        Ok((rest, first))
    } else {
        let mut items = vec![first];
        items.extend(more);
        Ok((rest, ArgumentNode::Piped(items)))
    }
}

fn value_node(input: Span<'_>) -> PResult<'_, ArgumentNode> {
    alt((
        map(tokens::string_literal, ArgumentNode::Str),
        sub_bracket,
        map(tokens::hex_literal, ArgumentNode::Hex),
        map(tokens::gid_literal, ArgumentNode::Gid),
        map(tokens::number, ArgumentNode::Number),
        // Case is preserved: VAR register letters are uppercase.
        map(tokens::identifier, ArgumentNode::Ident),
    ))
    .parse(input)
}

/// A bracket in value position: a sub-list `<a, b>` or an inline nested
/// stream.
fn sub_bracket(input: Span<'_>) -> PResult<'_, ArgumentNode> {
    let (rest, mut args) = bracket(input)?;
    let node = match args.len() {
        1 => args.remove(0),
        _ => ArgumentNode::List(args),
    };
    Ok((rest, node))
}
