//! Front-end session.
//!
//! A session holds the configuration and the diagnostics of one driver run
//! and exposes the two batch commands, token dumping and parsing.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use elkc_lex::{report_illegal_tokens, Scanner};
use elkc_par::Parser;
use elkc_util::{DiagnosticCode, Handler};

use crate::config::Config;
use crate::error::{DriverError, Result};

/// One driver run
#[derive(Debug, Default)]
pub struct Session {
    config: Config,
    diagnostics: Handler,
}

impl Session {
    /// Creates a session with no diagnostics
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// The configuration this session runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every diagnostic reported so far
    pub fn diagnostics(&self) -> &Handler {
        &self.diagnostics
    }

    /// Reads a source file.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, which the
    /// scanner turns into `Illegal` tokens, and a W1001 warning is recorded.
    pub fn read_source(&self, path: &Path) -> Result<String> {
        tracing::debug!(path = %path.display(), "reading source");
        let bytes = std::fs::read(path).map_err(|source| DriverError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.decode_source(path, &bytes))
    }

    fn decode_source(&self, path: &Path, bytes: &[u8]) -> String {
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => text.to_owned(),
            Cow::Owned(text) => {
                tracing::debug!(path = %path.display(), "source is not valid UTF-8");
                self.diagnostics
                    .build_warning(format!("`{}` is not valid UTF-8", path.display()))
                    .code(DiagnosticCode::W_SOURCE_INVALID_UTF8)
                    .note("invalid byte sequences were replaced with U+FFFD")
                    .emit(&self.diagnostics);
                text
            },
        }
    }

    /// Writes every token of `source` to `out`, one per line, and reports
    /// each `Illegal` token. Returns the number of errors found.
    pub fn emit_tokens<W: Write>(&self, source: &str, out: &mut W) -> Result<usize> {
        let tokens: Vec<_> = Scanner::new(source).collect();
        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
        out.flush()?;

        let errors = report_illegal_tokens(&tokens, &self.diagnostics);
        tracing::debug!(tokens = tokens.len(), errors, "scanned source");
        Ok(errors)
    }

    /// Parses `source`, writes the statements to `out` and keeps the
    /// parser's diagnostics. Returns the number of errors found.
    pub fn emit_program<W: Write>(&self, source: &str, out: &mut W) -> Result<usize> {
        let mut parser = Parser::with_options(Scanner::new(source), self.config.parser_options());
        let program = parser.parse_program();
        write!(out, "{}", program)?;
        out.flush()?;

        let reported = parser.diagnostics();
        for diagnostic in reported.diagnostics() {
            self.diagnostics.emit_diagnostic(diagnostic);
        }
        tracing::debug!(
            statements = program.len(),
            errors = reported.error_count(),
            "parsed source"
        );
        Ok(reported.error_count())
    }

    /// Runs the `tokens` command on a file.
    pub fn tokens<W: Write, E: Write>(&self, path: &Path, out: &mut W, err: &mut E) -> Result<()> {
        let source = self.read_source(path)?;
        let errors = self.emit_tokens(&source, out)?;
        self.finish(errors, err)
    }

    /// Runs the `parse` command on a file.
    pub fn parse<W: Write, E: Write>(&self, path: &Path, out: &mut W, err: &mut E) -> Result<()> {
        let source = self.read_source(path)?;
        let errors = self.emit_program(&source, out)?;
        self.finish(errors, err)
    }

    /// Renders diagnostics to `err` and fails if any were errors.
    fn finish<E: Write>(&self, errors: usize, err: &mut E) -> Result<()> {
        tracing::debug!(
            errors,
            warnings = self.diagnostics.warning_count(),
            "rendering diagnostics"
        );
        self.diagnostics.render_to(err)?;
        if errors > 0 {
            return Err(DriverError::Reported(errors));
        }
        Ok(())
    }
}
