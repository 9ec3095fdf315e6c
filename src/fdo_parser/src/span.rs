use nom_locate::LocatedSpan;

/// Input type threaded through every parser; tracks byte offset, line and
/// column for free.
pub type Span<'a> = LocatedSpan<&'a str>;

/// 1-based source position of the start of `span`.
pub fn position(span: &Span<'_>) -> fdo_syntax::SourcePos {
    fdo_syntax::SourcePos::new(span.location_line(), span.get_utf8_column() as u32)
}
