//! Lint checks for decoration templates
//!
//! Linting never changes what a conversion produces. It points out template
//! text that probably does not do what its author meant.

use std::fmt;

use crate::conversion::FormatOptions;
use crate::formatter::TOKENS;

/// A single problem found in a template field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    /// A recognized token appears more than once; only the first is replaced
    RepeatedPlaceholder {
        field: &'static str,
        token: &'static str,
        count: usize,
    },
    /// Something shaped like a placeholder that is not a recognized token
    UnknownPlaceholder { field: &'static str, token: String },
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintIssue::RepeatedPlaceholder { field, token, count } => write!(
                f,
                "{} uses {} {} times; only the first occurrence is replaced",
                field, token, count
            ),
            LintIssue::UnknownPlaceholder { field, token } => write!(
                f,
                "{} contains unrecognized placeholder {}",
                field, token
            ),
        }
    }
}

/// Issues found across all template fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check every decoration field of `options`
pub fn lint_options(options: &FormatOptions) -> LintReport {
    let mut report = LintReport::default();
    for (field, template) in options.fields() {
        lint_template(field, template, &mut report);
    }
    report
}

fn lint_template(field: &'static str, template: &str, report: &mut LintReport) {
    for token in TOKENS {
        let count = template.matches(token).count();
        if count > 1 {
            report.issues.push(LintIssue::RepeatedPlaceholder { field, token, count });
        }
    }

    for candidate in placeholder_candidates(template) {
        if !TOKENS.iter().any(|token| *token == candidate) {
            report.issues.push(LintIssue::UnknownPlaceholder {
                field,
                token: candidate.to_string(),
            });
        }
    }
}

/// `{NAME}` markers whose body is letters and underscores only
fn placeholder_candidates(template: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        let start = offset + open;
        let after_open = &template[start + 1..];
        let Some(close) = after_open.find(['{', '}']) else {
            break;
        };

        let body = &after_open[..close];
        let closed = after_open[close..].starts_with('}');
        if closed
            && !body.is_empty()
            && body.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
        {
            let end = start + 1 + close + 1;
            candidates.push(&template[start..end]);
            offset = end;
        } else {
            offset = start + 1 + close;
        }
        rest = &template[offset..];
    }

    candidates
}
