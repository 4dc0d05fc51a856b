//! Edge case tests for elkc-par

#[cfg(test)]
mod tests {
    use crate::{BindingStyle, Parser, ParserOptions, Program};
    use elkc_lex::Scanner;
    use elkc_util::DiagnosticCode;

    fn parse_source(source: &str) -> (Program<'_>, Vec<String>) {
        let mut parser = Parser::new(Scanner::new(source));
        let program = parser.parse_program();
        (program, parser.errors())
    }

    fn names<'a>(program: &Program<'a>) -> Vec<&'a str> {
        program
            .statements
            .iter()
            .filter_map(|s| s.as_binding())
            .map(|b| b.name.value)
            .collect()
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Empty source
    #[test]
    fn test_edge_empty_source() {
        let (program, errors) = parse_source("");
        assert!(program.is_empty());
        assert!(errors.is_empty());
    }

    /// EDGE CASE: Whitespace only
    #[test]
    fn test_edge_whitespace_only() {
        let (program, errors) = parse_source("   \n\t  \n  ");
        assert!(program.is_empty());
        assert!(errors.is_empty());
    }

    /// EDGE CASE: Lone binding keyword
    #[test]
    fn test_edge_lone_keyword() {
        let (program, errors) = parse_source("val");
        assert!(program.is_empty());
        assert_eq!(
            errors,
            vec!["expected next token to be of type IDENTITY, got EOF instead"]
        );
    }

    /// EDGE CASE: Keyword and name only
    #[test]
    fn test_edge_missing_everything_after_name() {
        let (program, errors) = parse_source("val x");
        assert!(program.is_empty());
        assert_eq!(errors.len(), 1);
    }

    /// EDGE CASE: Semicolons only
    #[test]
    fn test_edge_semicolons_only() {
        let (program, errors) = parse_source(";;;;");
        assert!(program.is_empty());
        assert!(errors.is_empty());
    }

    /// EDGE CASE: Keyword used as name
    #[test]
    fn test_edge_keyword_as_name() {
        let (program, errors) = parse_source("val func = 1; val ok = 2;");
        assert_eq!(names(&program), vec!["ok"]);
        assert_eq!(
            errors,
            vec!["expected next token to be of type IDENTITY, got func instead"]
        );
    }

    /// EDGE CASE: Right-hand side swallows the next binding without `;`
    #[test]
    fn test_edge_missing_semicolon_swallows_next_binding() {
        let (program, errors) = parse_source("val x = 1 val y = 2;");
        assert_eq!(names(&program), vec!["x"]);
        assert!(errors.is_empty());
    }

    /// EDGE CASE: Unterminated string in right-hand side
    #[test]
    fn test_edge_unterminated_string_in_value() {
        let (program, errors) = parse_source("val s = \"open; val t = 1;");
        assert!(program.is_empty());
        assert_eq!(
            errors,
            vec!["unexpected end of input: binding `s` is missing a terminating `;`"]
        );
    }

    /// EDGE CASE: Every error recorded in order
    #[test]
    fn test_edge_multiple_errors_in_order() {
        let (program, errors) = parse_source("val = 1; val y 2; var z = 3; let");
        assert_eq!(names(&program), vec!["z"]);
        assert_eq!(
            errors,
            vec![
                "expected next token to be of type IDENTITY, got = instead",
                "expected next token to be of type =, got INTEGER instead",
                "expected next token to be of type IDENTITY, got EOF instead",
            ]
        );
    }

    /// EDGE CASE: Diagnostic codes
    #[test]
    fn test_edge_diagnostic_codes() {
        let options = ParserOptions {
            binding: BindingStyle::Val,
        };
        let mut parser = Parser::with_options(Scanner::new("let a = 1; val = 2; val c = 3"), options);
        parser.parse_program();
        let codes: Vec<_> = parser
            .diagnostics()
            .diagnostics()
            .iter()
            .filter_map(|d| d.code)
            .collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::E_PARSER_DISABLED_KEYWORD,
                DiagnosticCode::E_PARSER_EXPECTED_TOKEN,
                DiagnosticCode::E_PARSER_UNEXPECTED_EOF,
            ]
        );
    }

    /// EDGE CASE: Many statements
    #[test]
    fn test_edge_many_statements() {
        let source: String = (0..1000).map(|i| format!("var v{} = {};", i, i)).collect();
        let (program, errors) = parse_source(&source);
        assert_eq!(program.len(), 1000);
        assert!(errors.is_empty());
        assert!(program.statements.iter().all(|s| s.as_binding().unwrap().mutable));
    }

    /// EDGE CASE: Program display
    #[test]
    fn test_edge_program_display() {
        let (program, _) = parse_source("let a = 1; var b = a + 1;");
        assert_eq!(program.to_string(), "let a = …;\nvar b = …;\n");
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_property_terminates_on_token_soup() {
        use proptest::prelude::*;

        proptest!(|(words in prop::collection::vec(
            prop::sample::select(vec!["val", "let", "var", "x", "=", ";", "1", "\"s\"", "(", "@", "\""]),
            0..60,
        ))| {
            let source = words.join(" ");
            let mut parser = Parser::new(Scanner::new(&source));
            let program = parser.parse_program();
            prop_assert!(parser.current().is_end());
            prop_assert!(program.len() <= words.len());
        });
    }

    #[test]
    fn test_property_arbitrary_text_never_panics() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,120}")| {
            let mut parser = Parser::new(Scanner::new(&input));
            let program = parser.parse_program();
            for statement in &program.statements {
                prop_assert!(statement.as_binding().is_some());
            }
        });
    }

    #[test]
    fn test_property_well_formed_bindings() {
        use proptest::prelude::*;

        proptest!(|(bindings in prop::collection::vec(("[a-z][a-z0-9]{0,8}", 0u32..100_000), 1..20))| {
            prop_assume!(bindings.iter().all(|(name, _)| elkc_lex::keyword_from_ident(name).is_none()));
            let source: String = bindings
                .iter()
                .map(|(name, value)| format!("val {} = {};\n", name, value))
                .collect();
            let (program, errors) = parse_source(&source);
            prop_assert!(errors.is_empty());
            let expected: Vec<&str> = bindings.iter().map(|(name, _)| name.as_str()).collect();
            prop_assert_eq!(names(&program), expected);
        });
    }
}
