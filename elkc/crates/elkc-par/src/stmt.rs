//! Statement parsing - binding declarations.

use elkc_lex::TokenKind;

use crate::ast::{BindingStatement, Identifier, Statement};
use crate::error::{Result, SyntaxError};
use crate::Parser;

impl<'src> Parser<'src> {
    /// Parse a statement starting at the current token.
    ///
    /// Returns `Ok(None)` for a token that cannot start a statement; the
    /// caller skips it without a diagnostic.
    pub(crate) fn parse_statement(&mut self) -> Result<Option<Statement<'src>>> {
        if self.current.kind.is_binding_keyword() {
            self.parse_binding_statement().map(|b| Some(Statement::Binding(b)))
        } else {
            Ok(None)
        }
    }

    /// Parse `let|val|var IDENT = ... ;`.
    ///
    /// The right-hand side is skipped token by token up to the `;`, which is
    /// left as the current token.
    fn parse_binding_statement(&mut self) -> Result<BindingStatement<'src>> {
        let keyword = self.current;
        if !self.options.binding.accepts(keyword.kind) {
            return Err(SyntaxError::DisabledKeyword {
                keyword: keyword.kind,
            });
        }

        self.expect_next(TokenKind::Identity)?;
        let name = Identifier::new(self.current);

        self.expect_next(TokenKind::Equals)?;

        while !self.is_current(TokenKind::Semicolon) {
            if self.current.is_end() {
                return Err(SyntaxError::UnterminatedBinding {
                    name: name.value.to_string(),
                });
            }
            self.advance();
        }

        Ok(BindingStatement::new(keyword, name))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BindingStyle, Parser, ParserOptions, Statement};
    use elkc_lex::Scanner;

    fn parse_one(source: &str) -> (Vec<String>, Vec<String>) {
        let mut parser = Parser::new(Scanner::new(source));
        let program = parser.parse_program();
        let names = program
            .statements
            .iter()
            .map(|Statement::Binding(b)| b.name.value.to_string())
            .collect();
        (names, parser.errors())
    }

    #[test]
    fn test_let_val_var_all_bind() {
        for keyword in ["let", "val", "var"] {
            let (names, errors) = parse_one(&format!("{} x = 5;", keyword));
            assert_eq!(names, vec!["x"], "keyword {}", keyword);
            assert!(errors.is_empty());
        }
    }

    #[test]
    fn test_missing_identifier() {
        let (names, errors) = parse_one("val = 5;");
        assert!(names.is_empty());
        assert_eq!(
            errors,
            vec!["expected next token to be of type IDENTITY, got = instead"]
        );
    }

    #[test]
    fn test_missing_equals() {
        let (names, errors) = parse_one("val x 5;");
        assert!(names.is_empty());
        assert_eq!(
            errors,
            vec!["expected next token to be of type =, got INTEGER instead"]
        );
    }

    #[test]
    fn test_illegal_token_in_place_of_name() {
        let (_, errors) = parse_one("val @ = 1;");
        assert_eq!(errors, vec!["unexpected token \"@\", expected IDENTITY"]);
    }

    #[test]
    fn test_right_hand_side_is_skipped() {
        let (names, errors) = parse_one("val x = func(a, b) { return [1, 2] } + \"s\";");
        assert_eq!(names, vec!["x"]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_right_hand_side() {
        let (names, errors) = parse_one("val x = ;");
        assert_eq!(names, vec!["x"]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unterminated_binding() {
        let (names, errors) = parse_one("val x = 5");
        assert!(names.is_empty());
        assert_eq!(
            errors,
            vec!["unexpected end of input: binding `x` is missing a terminating `;`"]
        );
    }

    #[test]
    fn test_binding_style_val_rejects_let() {
        let options = ParserOptions {
            binding: BindingStyle::Val,
        };
        let mut parser = Parser::with_options(Scanner::new("let a = 1; val b = 2;"), options);
        let program = parser.parse_program();
        assert_eq!(program.len(), 1);
        assert_eq!(program.statements[0].token_literal(), "val");
        assert_eq!(parser.errors(), vec!["binding keyword `let` is not enabled"]);
    }

    #[test]
    fn test_binding_style_let_rejects_val_but_keeps_var() {
        let options = ParserOptions {
            binding: BindingStyle::Let,
        };
        let mut parser =
            Parser::with_options(Scanner::new("val a = 1; let b = 2; var c = 3;"), options);
        let program = parser.parse_program();
        let keywords: Vec<_> = program.statements.iter().map(|s| s.token_literal()).collect();
        assert_eq!(keywords, vec!["let", "var"]);
        assert_eq!(parser.errors().len(), 1);
    }
}
