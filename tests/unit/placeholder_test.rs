//! Unit tests for placeholder substitution

use casewrap::formatter::{CONVERTED_VALUE_TOKEN, INDEX_TOKEN, ORIGINAL_VALUE_TOKEN};
use casewrap::substitute;

#[test]
fn test_token_literals() {
    assert_eq!(INDEX_TOKEN, "{INDEX}");
    assert_eq!(ORIGINAL_VALUE_TOKEN, "{ORIGINAL_VALUE}");
    assert_eq!(CONVERTED_VALUE_TOKEN, "{CONVERTED_VALUE}");
}

#[test]
fn test_index_is_unpadded_decimal() {
    assert_eq!(substitute("#{INDEX}", 0, "", ""), "#0");
    assert_eq!(substitute("#{INDEX}", 42, "", ""), "#42");
    assert_eq!(substitute("#{INDEX}", 1000, "", ""), "#1000");
}

#[test]
fn test_first_occurrence_per_token() {
    assert_eq!(
        substitute(
            "{ORIGINAL_VALUE}={CONVERTED_VALUE} {ORIGINAL_VALUE}={CONVERTED_VALUE}",
            0,
            "a b",
            "aB"
        ),
        "a b=aB {ORIGINAL_VALUE}={CONVERTED_VALUE}"
    );
}

#[test]
fn test_unknown_tokens_untouched() {
    assert_eq!(substitute("{VALUE} {Index}", 3, "x", "y"), "{VALUE} {Index}");
}

#[test]
fn test_multibyte_values() {
    assert_eq!(
        substitute("«{ORIGINAL_VALUE}» → {CONVERTED_VALUE}", 1, "größe", "größe"),
        "«größe» → größe"
    );
}
