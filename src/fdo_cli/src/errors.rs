use std::path::Path;

use fdo_parser::ParseFailure;

/// Machine-readable parse error on stdout, one JSON object.
pub fn emit_json_error(input: &Path, failure: &ParseFailure) {
    let payload = serde_json::json!({
        "error": {
            "kind": "parse_error",
            "file": input.display().to_string(),
            "line": failure.line,
            "column": failure.column,
            "offset": failure.offset,
            "line_text": failure.line_text,
            "message": failure.message,
        }
    });
    println!(
        "{}",
        serde_json::to_string(&payload)
            .unwrap_or_else(|_| "{\"error\":{\"message\":\"parse error\"}}".to_string())
    );
}

/// Human-readable parse error on stderr, with the source excerpt.
pub fn print_pretty_error(input: &Path, source: &str, failure: &ParseFailure) {
    let report = fdo_parser::to_miette_report(&input.display().to_string(), source, failure);
    eprintln!("{report:?}");
}
