//! Edge case tests for elkc-lex
