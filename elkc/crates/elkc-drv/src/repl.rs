//! Line-oriented token REPL.

use std::io::{BufRead, Write};

use elkc_lex::Scanner;

/// Runs the REPL until `input` is exhausted.
///
/// Each line, without its terminator, is scanned on its own with a fresh
/// scanner and every token up to `EndOfInput` is written to `output`, one per
/// line. Bytes that are not valid UTF-8 are replaced with U+FFFD and scan as
/// `Illegal`.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// elkc_drv::repl::start(&b"val x;\n"[..], &mut out, "> ").unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("IDENTITY \"x\""));
/// ```
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W, prompt: &str) -> std::io::Result<()> {
    let mut line = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }

        let decoded = String::from_utf8_lossy(&line);
        let text = decoded.trim_end_matches(['\n', '\r']);
        for token in Scanner::new(text) {
            writeln!(output, "{}", token)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_bytes(input: &[u8]) -> String {
        let mut out = Vec::new();
        start(input, &mut out, "> ").unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run(input: &str) -> String {
        run_bytes(input.as_bytes())
    }

    #[test]
    fn test_empty_input_prints_one_prompt() {
        assert_eq!(run(""), "> ");
    }

    #[test]
    fn test_tokens_per_line() {
        assert_eq!(
            run("val x = 5;\n"),
            "> val \"val\"\nIDENTITY \"x\"\n= \"=\"\nINTEGER \"5\"\n; \";\"\n> "
        );
    }

    #[test]
    fn test_lines_are_scanned_independently() {
        let out = run("\"open\nclose\"\n");
        assert!(out.contains("ILLEGAL \"\\\"open\""));
        assert!(out.contains("IDENTITY \"close\""));
        assert!(out.contains("ILLEGAL \"\\\"\""));
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(run("x"), "> IDENTITY \"x\"\n> ");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        assert_eq!(
            run_bytes(b"val x\xff;\nval y;\n"),
            "> val \"val\"\nIDENTITY \"x\"\nILLEGAL \"\u{fffd}\"\n; \";\"\n\
             > val \"val\"\nIDENTITY \"y\"\n; \";\"\n> "
        );
    }

    #[test]
    fn test_crlf_terminator_is_stripped() {
        assert_eq!(run("1\r\n"), "> INTEGER \"1\"\n> ");
    }
}
