//! Placeholder substitution inside decoration templates

/// Replaced with the 0-based index of the current line
pub const INDEX_TOKEN: &str = "{INDEX}";
/// Replaced with the line as it appeared in the input
pub const ORIGINAL_VALUE_TOKEN: &str = "{ORIGINAL_VALUE}";
/// Replaced with the line after case transformation
pub const CONVERTED_VALUE_TOKEN: &str = "{CONVERTED_VALUE}";

/// All recognized tokens, in substitution order
pub const TOKENS: [&str; 3] = [INDEX_TOKEN, ORIGINAL_VALUE_TOKEN, CONVERTED_VALUE_TOKEN];

/// Fill in the placeholders of `template` for one line.
///
/// Only the first occurrence of each token is replaced; later occurrences
/// are left as literal text. Token positions are taken from the template
/// itself, so substituted values are never rescanned for tokens.
pub fn substitute(template: &str, index: usize, original: &str, converted: &str) -> String {
    if template.is_empty() {
        return String::new();
    }

    let index = index.to_string();
    let values = [index.as_str(), original, converted];

    let mut hits: Vec<(usize, &str, &str)> = TOKENS
        .iter()
        .zip(values)
        .filter_map(|(token, value)| template.find(token).map(|pos| (pos, *token, value)))
        .collect();

    if hits.is_empty() {
        return template.to_string();
    }
    hits.sort_unstable_by_key(|(pos, _, _)| *pos);

    let mut rendered = String::with_capacity(template.len() + converted.len() + original.len());
    let mut cursor = 0;
    for (pos, token, value) in hits {
        rendered.push_str(&template[cursor..pos]);
        rendered.push_str(value);
        cursor = pos + token.len();
    }
    rendered.push_str(&template[cursor..]);
    rendered
}
