//! Lexical diagnostics.
//!
//! The scanner itself never reports anything; callers that want errors for
//! `Illegal` tokens run the token stream through [`report_illegal_tokens`].

use elkc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};

use crate::classify::is_quote;
use crate::token::{Token, TokenKind};

/// Builds the diagnostic for an `Illegal` token, or `None` for any other kind.
///
/// A literal that opens with a quote is an unterminated string (`E1002`);
/// anything else is a single unexpected character (`E1001`).
pub fn illegal_token_diagnostic(token: &Token<'_>) -> Option<Diagnostic> {
    if token.kind != TokenKind::Illegal {
        return None;
    }

    let diagnostic = if token.literal.starts_with(is_quote) {
        DiagnosticBuilder::error("unterminated string literal")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .help("add a closing `\"`")
            .build()
    } else {
        DiagnosticBuilder::error(format!("unexpected character {:?}", token.literal))
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .build()
    };
    Some(diagnostic)
}

/// Emits one diagnostic per `Illegal` token and returns how many were found.
pub fn report_illegal_tokens<'a, 'src: 'a>(
    tokens: impl IntoIterator<Item = &'a Token<'src>>,
    handler: &Handler,
) -> usize {
    let mut count = 0;
    for diagnostic in tokens.into_iter().filter_map(illegal_token_diagnostic) {
        handler.emit_diagnostic(diagnostic);
        count += 1;
    }
    count
}
