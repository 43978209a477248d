//! Per-line case transformation
//!
//! Word splitting follows `heck`: any non-alphanumeric character separates
//! words, a lowercase letter followed by an uppercase one starts a new word,
//! and the last capital of an acronym run belongs to the following word
//! (`XMLHttp` splits as `XML|Http`). Separators never reach the output.
//!
//! A run of digits is a word of its own (`line2` splits as `line|2`), except
//! for English ordinals such as `1st` or `22ND`, which stay in one piece.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase};
use std::borrow::Cow;

use crate::conversion::CaseStyle;

/// Apply `style` to a single line of literal text
pub fn transform(line: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::None => line.to_string(),
        CaseStyle::Camel => split_digit_boundaries(line).to_lower_camel_case(),
        CaseStyle::Snake => split_digit_boundaries(line).to_shouty_snake_case(),
        CaseStyle::Kebab => split_digit_boundaries(line).to_kebab_case(),
    }
}

/// Insert a space wherever a letter meets a digit
fn split_digit_boundaries(line: &str) -> Cow<'_, str> {
    if !line.chars().any(|c| c.is_ascii_digit()) {
        return Cow::Borrowed(line);
    }

    let chars: Vec<char> = line.chars().collect();
    let mut split = String::with_capacity(line.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if i > 0 {
            let prev = chars[i - 1];
            if prev.is_ascii_digit() && c.is_alphabetic() {
                if let Some(len) = ordinal_suffix(prev, &chars[i..]) {
                    split.extend(&chars[i..i + len]);
                    i += len;
                    continue;
                }
                split.push(' ');
            } else if prev.is_alphabetic() && c.is_ascii_digit() {
                split.push(' ');
            }
        }
        split.push(c);
        i += 1;
    }

    Cow::Owned(split)
}

/// Length of the ordinal suffix after `digit` at the start of `rest`, if any.
/// The suffix must match the digit (`1st`, `2nd`, `3rd`, `4th`) and end the word.
fn ordinal_suffix(digit: char, rest: &[char]) -> Option<usize> {
    let expected = match digit {
        '1' => "st",
        '2' => "nd",
        '3' => "rd",
        _ => "th",
    };
    let suffix: String = rest.iter().take(2).collect();
    let upper = suffix == expected.to_ascii_uppercase();
    if suffix != expected && !upper {
        return None;
    }

    match rest.get(2) {
        None => Some(2),
        Some(next) if !next.is_alphanumeric() => Some(2),
        Some(next) if upper && next.is_lowercase() => Some(2),
        Some(next) if !upper && next.is_uppercase() => Some(2),
        _ => None,
    }
}
