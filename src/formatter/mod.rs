//! Rendering of individual lines
//!
//! A rendered segment is the optional prepend block, then the prefix, the
//! case-converted line and the suffix. Decoration templates are filled in
//! per line; the line content itself is never scanned for placeholders.

pub mod case;
pub mod placeholder;

pub use case::transform;
pub use placeholder::{
    substitute, CONVERTED_VALUE_TOKEN, INDEX_TOKEN, ORIGINAL_VALUE_TOKEN, TOKENS,
};

use crate::conversion::{CaseStyle, FormatOptions};

/// Renders surviving lines with a fixed style and set of templates
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter<'a> {
    style: CaseStyle,
    options: &'a FormatOptions,
}

impl<'a> LineFormatter<'a> {
    pub fn new(style: CaseStyle, options: &'a FormatOptions) -> Self {
        Self { style, options }
    }

    /// Render the line at `index` into `out`
    pub fn render_into(&self, out: &mut String, index: usize, line: &str) {
        let converted = transform(line, self.style);

        if !self.options.prepend.is_empty() {
            out.push_str(&substitute(&self.options.prepend, index, line, &converted));
            out.push('\n');
        }
        out.push_str(&substitute(&self.options.prefix, index, line, &converted));
        out.push_str(&converted);
        out.push_str(&substitute(&self.options.suffix, index, line, &converted));
    }

    /// Render the line at `index` as a new string
    pub fn render(&self, index: usize, line: &str) -> String {
        let mut out = String::new();
        self.render_into(&mut out, index, line);
        out
    }
}
