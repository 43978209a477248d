//! Template validation module

pub mod template_lint;

pub use template_lint::{lint_options, LintIssue, LintReport};
