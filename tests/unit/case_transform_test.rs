//! Unit tests for per-line case transformation

use casewrap::{transform, CaseStyle};

#[test]
fn test_camel_word_boundaries() {
    assert_eq!(transform("user name", CaseStyle::Camel), "userName");
    assert_eq!(transform("USER_NAME", CaseStyle::Camel), "userName");
    assert_eq!(transform("user-name", CaseStyle::Camel), "userName");
    assert_eq!(transform("UserName", CaseStyle::Camel), "userName");
    assert_eq!(transform("  user   name  ", CaseStyle::Camel), "userName");
}

#[test]
fn test_snake_word_boundaries() {
    assert_eq!(transform("user name", CaseStyle::Snake), "USER_NAME");
    assert_eq!(transform("userName", CaseStyle::Snake), "USER_NAME");
    assert_eq!(transform("user.name", CaseStyle::Snake), "USER_NAME");
    assert_eq!(transform("HTTPServer", CaseStyle::Snake), "HTTP_SERVER");
}

#[test]
fn test_kebab_word_boundaries() {
    assert_eq!(transform("user name", CaseStyle::Kebab), "user-name");
    assert_eq!(transform("USER_NAME", CaseStyle::Kebab), "user-name");
    assert_eq!(transform("userName", CaseStyle::Kebab), "user-name");
}

#[test]
fn test_digits_start_a_new_word() {
    assert_eq!(transform("address line2", CaseStyle::Kebab), "address-line-2");
    assert_eq!(transform("field1name", CaseStyle::Camel), "field1Name");
    assert_eq!(transform("field1name", CaseStyle::Snake), "FIELD_1_NAME");
    assert_eq!(transform("v2Api", CaseStyle::Kebab), "v-2-api");
    assert_eq!(transform("HTTP2Server", CaseStyle::Snake), "HTTP_2_SERVER");
    assert_eq!(transform("user id2", CaseStyle::Camel), "userId2");
}

#[test]
fn test_ordinals_are_one_word() {
    assert_eq!(transform("1st place", CaseStyle::Kebab), "1st-place");
    assert_eq!(transform("2nd line", CaseStyle::Camel), "2ndLine");
    assert_eq!(transform("3rd party", CaseStyle::Snake), "3RD_PARTY");
}

#[test]
fn test_digits_untouched_without_style() {
    assert_eq!(transform("line2", CaseStyle::None), "line2");
}

#[test]
fn test_punctuation_only_line_has_no_words() {
    assert_eq!(transform("!!!", CaseStyle::Camel), "");
    assert_eq!(transform("---", CaseStyle::Kebab), "");
    assert_eq!(transform("!!!", CaseStyle::None), "!!!");
}

#[test]
fn test_none_keeps_whitespace_and_case() {
    let line = "\t Mixed_Case line ";
    assert_eq!(transform(line, CaseStyle::None), line);
}
