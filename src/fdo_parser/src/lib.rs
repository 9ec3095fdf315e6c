//! fdo_parser crate
//!
//! Parses FDO source (`atom_name <arg, arg, …>` invocations, one tree per
//! file) into the shared [`fdo_syntax`] stream model. Every atom node
//! carries its 1-based line and column so downstream codec errors can point
//! back at the source.
//!
//! The bracket after an atom name is ambiguous between an argument list and
//! a nested sub-stream; the argument-list reading wins, and anything that
//! does not read as comma-separated values (two atoms in sequence, an inner
//! atom with its own bracket, trailing raw data) parses as a sub-stream.

pub mod errors;
pub mod span;
mod stream;
mod tokens;

use fdo_syntax::StreamNode;
use nom::combinator::all_consuming;
use nom::Parser;

pub use errors::{to_miette_report, ParseFailure};
pub use span::Span;

/// Parses a whole source file.
pub fn parse_source(input: &str) -> Result<StreamNode, ParseFailure> {
    match all_consuming(stream::stream).parse(Span::new(input)) {
        Ok((_, tree)) => Ok(tree),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(ParseFailure::from_error(input, &e))
        }
        Err(nom::Err::Incomplete(_)) => Err(ParseFailure::eof(input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdo_syntax::{ArgumentNode, Gid};

    #[test]
    fn parses_flat_atoms() {
        let tree = parse_source("uni_start_stream\nuni_end_stream\n").unwrap();
        assert_eq!(tree.atoms.len(), 2);
        assert_eq!(tree.atoms[0].name, "uni_start_stream");
        assert_eq!(tree.atoms[0].pos.line, 1);
        assert_eq!(tree.atoms[1].pos.line, 2);
    }

    #[test]
    fn parses_arguments() {
        let tree = parse_source(
            "mat_font_sis <arial, 10, bold | italic>\nmat_title <\"Lo\\\"bby\">\nmat_art_id <1-0-1329>\nman_append_data <0A1Fx>\n",
        )
        .unwrap();
        let font = &tree.atoms[0];
        assert_eq!(
            font.arguments,
            vec![
                ArgumentNode::Ident("arial".into()),
                ArgumentNode::Number(10),
                ArgumentNode::Piped(vec![
                    ArgumentNode::Ident("bold".into()),
                    ArgumentNode::Ident("italic".into()),
                ]),
            ]
        );
        assert_eq!(
            tree.atoms[1].arguments,
            vec![ArgumentNode::Str("Lo\"bby".into())]
        );
        assert_eq!(
            tree.atoms[2].arguments,
            vec![ArgumentNode::Gid(Gid::three_part(1, 0, 1329))]
        );
        assert_eq!(
            tree.atoms[3].arguments,
            vec![ArgumentNode::Hex(vec![0x0A, 0x1F])]
        );
    }

    #[test]
    fn parses_nested_stream() {
        let tree = parse_source(
            "act_replace_select_action <\n    uni_start_stream\n    uni_end_stream\n>\n",
        )
        .unwrap();
        match tree.atoms[0].arguments.as_slice() {
            [ArgumentNode::NestedStream { stream, trailing }] => {
                assert_eq!(stream.atoms.len(), 2);
                assert!(trailing.is_empty());
            }
            other => panic!("expected nested stream, got {other:?}"),
        }
    }

    #[test]
    fn nested_stream_with_trailing_data() {
        let tree = parse_source("dod_data <dod_start <1> 7F 01x>\n").unwrap();
        match tree.atoms[0].arguments.as_slice() {
            [ArgumentNode::NestedStream { stream, trailing }] => {
                assert_eq!(stream.atoms[0].name, "dod_start");
                assert_eq!(stream.atoms[0].arguments, vec![ArgumentNode::Number(1)]);
                assert_eq!(
                    trailing,
                    &vec![ArgumentNode::Number(127), ArgumentNode::Hex(vec![0x01])]
                );
            }
            other => panic!("expected nested stream, got {other:?}"),
        }
    }

    #[test]
    fn single_identifier_bracket_is_an_argument() {
        let tree = parse_source("act_replace_select_action <uni_start_stream>\n").unwrap();
        assert_eq!(
            tree.atoms[0].arguments,
            vec![ArgumentNode::Ident("uni_start_stream".into())]
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let tree = parse_source(
            "; header comment\nuni_start_stream // trailing\n\n; more\nuni_end_stream\n",
        )
        .unwrap();
        assert_eq!(tree.atoms.len(), 2);
    }

    #[test]
    fn errors_carry_line_and_column() {
        let err = parse_source("uni_start_stream\nmat_title <\"unterminated\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("string"), "{}", err.message);
    }

    #[test]
    fn rejects_stray_tokens() {
        assert!(parse_source("uni_start_stream >").is_err());
        assert!(parse_source("<1, 2>").is_err());
    }
}
