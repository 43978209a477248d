//! End-to-end checks of the conversion contract
//!
//! Covers the documented scenarios plus the properties every conversion
//! must hold: blank lines dropped, dense indices, no trailing newline.

use casewrap::{convert, convert_with, CaseStyle, FormatOptions};

#[cfg(test)]
mod scenario_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_camel_without_decorations() {
        assert_eq!(
            convert("hello world\nfoo bar", CaseStyle::Camel, &FormatOptions::default()),
            "helloWorld\nfooBar"
        );
    }

    #[test]
    fn test_snake_with_suffix_skips_blank_line() {
        let options = FormatOptions::new("", ";", "");
        assert_eq!(convert("a\n\nb", CaseStyle::Snake, &options), "A;\nB;");
    }

    #[test]
    fn test_column_annotation() {
        let options = FormatOptions::new("private String ", ";", "@Column(\"{ORIGINAL_VALUE}\")");
        assert_eq!(
            convert("name", CaseStyle::Camel, &options),
            "@Column(\"name\")\nprivate String name;"
        );
    }

    #[test]
    fn test_kebab_with_index_comment() {
        let options = FormatOptions::new("", "", "// {INDEX}");
        assert_eq!(
            convert("x\ny", CaseStyle::Kebab, &options),
            "// 0\nx\n// 1\ny"
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "first name\n\n   \nLast-Name\n\t\nemail_address\n";

    fn all_options() -> Vec<FormatOptions> {
        vec![
            FormatOptions::default(),
            FormatOptions::new("pre ", " post", ""),
            FormatOptions::new("{INDEX} ", "", "/* {CONVERTED_VALUE} */"),
        ]
    }

    #[test]
    fn test_blank_input_gives_empty_output() {
        for style in CaseStyle::ALL {
            for options in all_options() {
                assert_eq!(convert("", style, &options), "");
                assert_eq!(convert("  \n\t\n \r\n", style, &options), "");
            }
        }
    }

    #[test]
    fn test_segment_count_matches_non_blank_lines() {
        let options = FormatOptions::new("<", ">", "");
        for style in CaseStyle::ALL {
            let output = convert(SAMPLE, style, &options);
            assert_eq!(output.split('\n').count(), 3);
            assert!(!output.ends_with('\n'));
            assert!(!output.starts_with('\n'));
        }
    }

    #[test]
    fn test_none_style_preserves_content() {
        let options = FormatOptions::new("[", "]", "");
        assert_eq!(
            convert(SAMPLE, CaseStyle::None, &options),
            "[first name]\n[Last-Name]\n[email_address]"
        );
    }

    #[test]
    fn test_indices_are_dense() {
        let options = FormatOptions::new("", "", "{INDEX}");
        let output = convert("a\n\n\nb\n \nc\n\n\n\nd", CaseStyle::None, &options);
        assert_eq!(output, "0\na\n1\nb\n2\nc\n3\nd");
    }

    #[test]
    fn test_converted_value_in_prepend_reflects_casing() {
        let options = FormatOptions::new("", "", "{CONVERTED_VALUE}|{ORIGINAL_VALUE}");
        assert_eq!(
            convert("Order Total", CaseStyle::Snake, &options),
            "ORDER_TOTAL|Order Total\nORDER_TOTAL"
        );
        assert_eq!(
            convert("Order Total", CaseStyle::None, &options),
            "Order Total|Order Total\nOrder Total"
        );
    }

    #[test]
    fn test_only_first_occurrence_replaced_per_field() {
        let options = FormatOptions::new("{INDEX}{INDEX}", "{ORIGINAL_VALUE}{ORIGINAL_VALUE}", "");
        assert_eq!(
            convert("a b", CaseStyle::Camel, &options),
            "0{INDEX}aBa b{ORIGINAL_VALUE}"
        );
    }

    #[test]
    fn test_placeholders_inside_lines_are_literal() {
        let options = FormatOptions::new("{INDEX}:", "", "");
        assert_eq!(
            convert("{INDEX}", CaseStyle::None, &options),
            "0:{INDEX}"
        );
    }

    #[test]
    fn test_convert_with_lenient_arguments() {
        assert_eq!(convert_with("a b\nc d", None, None, None, None), "a b\nc d");
        assert_eq!(
            convert_with("a b", Some("pascal"), Some("<"), None, None),
            "<a b"
        );
        assert_eq!(
            convert_with("a b", Some("kebab"), None, Some(","), None),
            "a-b,"
        );
    }

    #[test]
    fn test_java_presets_render_blank_line_between_fields() {
        let preset = casewrap::conversion::find_preset("csvBindPositionJava").unwrap();
        let config = preset.to_config();
        assert_eq!(
            convert("user id\nuser name", config.style, &config.options),
            "\n@CsvBindPosition(position = 0)\nprivate String userId;\n\n@CsvBindPosition(position = 1)\nprivate String userName;"
        );
    }
}
