use crate::argument::ArgumentNode;
use crate::escape;
use crate::stream::{AtomNode, StreamNode};

/// Pretty-print layout hints for one atom name. These come from the catalog
/// flags and affect only how the text is laid out, never the bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutFlags {
    pub indent: bool,
    pub outdent: bool,
    pub eos: bool,
}

/// Where the formatter asks for layout hints. The catalog implements this;
/// `()` formats everything flat.
pub trait LayoutSource {
    fn layout(&self, name: &str) -> LayoutFlags;
}

impl LayoutSource for () {
    fn layout(&self, _name: &str) -> LayoutFlags {
        LayoutFlags::default()
    }
}

#[derive(Clone, Debug)]
pub struct FormatOptions {
    pub indent_width: usize,
    pub newline: &'static str,
    pub ensure_final_newline: bool,
    /// Blank line after an end-of-stream atom at the top level.
    pub blank_line_after_eos: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            newline: "\n",
            ensure_final_newline: true,
            blank_line_after_eos: true,
        }
    }
}

/// Renders a [`StreamNode`] as FDO source, one atom per line, with
/// indentation driven by the catalog's INDENT/OUTDENT flags.
pub struct Formatter {
    pub opts: FormatOptions,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

impl Formatter {
    pub fn new(opts: FormatOptions) -> Self {
        Self { opts }
    }

    pub fn format(&self, stream: &StreamNode, layout: &dyn LayoutSource) -> String {
        let mut out = String::new();
        self.write_stream(&mut out, stream, layout, 0);
        if self.opts.ensure_final_newline && !out.is_empty() && !out.ends_with('\n') {
            out.push_str(self.opts.newline);
        }
        out
    }

    fn write_stream(
        &self,
        out: &mut String,
        stream: &StreamNode,
        layout: &dyn LayoutSource,
        base_depth: usize,
    ) {
        let mut depth = base_depth;
        for atom in &stream.atoms {
            let flags = layout.layout(&atom.name);
            if flags.outdent && depth > base_depth {
                depth -= 1;
            }
            self.push_indent(out, depth);
            self.write_atom(out, atom, layout, depth);
            out.push_str(self.opts.newline);
            if flags.indent {
                depth += 1;
            }
            if flags.eos && base_depth == 0 && self.opts.blank_line_after_eos {
                out.push_str(self.opts.newline);
            }
        }
    }

    fn write_atom(
        &self,
        out: &mut String,
        atom: &AtomNode,
        layout: &dyn LayoutSource,
        depth: usize,
    ) {
        out.push_str(&atom.name);
        if atom.arguments.is_empty() {
            return;
        }
        // A lone nested-stream argument renders in block form; everything
        // else is an inline `<a, b, c>` list.
        if let [ArgumentNode::NestedStream { stream, trailing }] = atom.arguments.as_slice() {
            out.push_str(" <");
            out.push_str(self.opts.newline);
            self.write_stream(out, stream, layout, depth + 1);
            for t in trailing {
                self.push_indent(out, depth + 1);
                out.push_str(&self.render_arg(t, layout, depth));
                out.push_str(self.opts.newline);
            }
            self.push_indent(out, depth);
            out.push('>');
            return;
        }
        out.push_str(" <");
        let mut first = true;
        for arg in &atom.arguments {
            if !first {
                out.push_str(", ");
            }
            first = false;
            out.push_str(&self.render_arg(arg, layout, depth));
        }
        out.push('>');
    }

    fn render_arg(&self, arg: &ArgumentNode, layout: &dyn LayoutSource, depth: usize) -> String {
        match arg {
            ArgumentNode::Number(n) => n.to_string(),
            ArgumentNode::Hex(bytes) => {
                let mut s: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
                s.push('x');
                s
            }
            ArgumentNode::Str(text) => format!("\"{}\"", escape::escape(text)),
            ArgumentNode::Ident(name) => name.clone(),
            ArgumentNode::Gid(gid) => gid.to_string(),
            ArgumentNode::ObjectType { type_name, title } => {
                format!("{type_name}, \"{}\"", escape::escape(title))
            }
            ArgumentNode::Piped(items) => items
                .iter()
                .map(|i| self.render_arg(i, layout, depth))
                .collect::<Vec<_>>()
                .join(" | "),
            ArgumentNode::List(items) => items
                .iter()
                .map(|i| self.render_arg(i, layout, depth))
                .collect::<Vec<_>>()
                .join(", "),
            ArgumentNode::NestedStream { stream, trailing } => {
                // Nested stream in a multi-argument position: inline form.
                let mut s = String::from("<");
                s.push_str(self.opts.newline);
                let mut inner = String::new();
                self.write_stream(&mut inner, stream, layout, depth + 1);
                s.push_str(&inner);
                for t in trailing {
                    self.push_indent(&mut s, depth + 1);
                    s.push_str(&self.render_arg(t, layout, depth));
                    s.push_str(self.opts.newline);
                }
                for _ in 0..depth * self.opts.indent_width {
                    s.push(' ');
                }
                s.push('>');
                s
            }
        }
    }

    fn push_indent(&self, out: &mut String, depth: usize) {
        for _ in 0..depth * self.opts.indent_width {
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gid::Gid;

    #[test]
    fn flat_stream_one_atom_per_line() {
        let stream = StreamNode::new(vec![
            AtomNode::new("uni_start_stream"),
            AtomNode::with_args("mat_object_id", vec![ArgumentNode::Gid(Gid::two_part(32, 105))]),
            AtomNode::new("uni_end_stream"),
        ]);
        let text = Formatter::default().format(&stream, &());
        assert_eq!(
            text,
            "uni_start_stream\nmat_object_id <32-105>\nuni_end_stream\n"
        );
    }

    #[test]
    fn nested_stream_renders_block_form() {
        let inner = StreamNode::new(vec![
            AtomNode::new("uni_start_stream"),
            AtomNode::new("uni_end_stream"),
        ]);
        let stream = StreamNode::new(vec![AtomNode::with_args(
            "act_replace_select_action",
            vec![ArgumentNode::NestedStream { stream: inner, trailing: vec![] }],
        )]);
        let text = Formatter::default().format(&stream, &());
        assert_eq!(
            text,
            "act_replace_select_action <\n    uni_start_stream\n    uni_end_stream\n>\n"
        );
    }

    #[test]
    fn piped_and_string_args() {
        let stream = StreamNode::new(vec![AtomNode::with_args(
            "mat_font_sis",
            vec![
                ArgumentNode::Ident("arial".into()),
                ArgumentNode::Number(10),
                ArgumentNode::Piped(vec![
                    ArgumentNode::Ident("bold".into()),
                    ArgumentNode::Ident("italic".into()),
                ]),
            ],
        )]);
        let text = Formatter::default().format(&stream, &());
        assert_eq!(text, "mat_font_sis <arial, 10, bold | italic>\n");
    }
}
