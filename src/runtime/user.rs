//! User interaction operations (confirmation prompts).

use anyhow::Result;

use super::RealRuntime;

use std::io::{self, BufRead, Write};

/// Core, testable implementation that reads from any BufRead and writes to any Write.
/// End of input and undecodable bytes count as a decline; only I/O failures are errors.
pub(crate) fn confirm_with_io<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;

    let response = String::from_utf8_lossy(&line).trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

impl RealRuntime {
    pub(crate) fn confirm_impl(&self, prompt: &str) -> Result<bool> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        confirm_with_io(prompt, &mut stdin_lock, &mut stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::confirm_with_io;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn confirms_yes_and_short_y() -> Result<()> {
        let cases = vec!["y\n", "Y\n", "yes\n", " YES \n", "  y  \n", "y"];
        for case in cases {
            let mut input = Cursor::new(case.as_bytes());
            let mut output = Vec::new();
            let ok = confirm_with_io("Do you want to update?", &mut input, &mut output)?;
            assert!(ok, "expected '{}' to be accepted as yes", case);
            let out = String::from_utf8(output)?;
            assert!(out.contains("Do you want to update? [y/N]"));
        }
        Ok(())
    }

    #[test]
    fn rejects_no_and_anything_else() -> Result<()> {
        let cases = vec!["n\n", "no\n", "\n", "  \n", "sure\n", "yy\n"];
        for case in cases {
            let mut input = Cursor::new(case.as_bytes());
            let mut output = Vec::new();
            let ok = confirm_with_io("Do you want to update?", &mut input, &mut output)?;
            assert!(!ok, "expected '{}' to be rejected as no", case);
        }
        Ok(())
    }

    #[test]
    fn end_of_input_declines() -> Result<()> {
        let mut input = Cursor::new(b"");
        let mut output = Vec::new();
        assert!(!confirm_with_io("Do you want to update?", &mut input, &mut output)?);
        Ok(())
    }

    #[test]
    fn invalid_utf8_declines() -> Result<()> {
        let cases: Vec<&[u8]> = vec![b"\xff\xfe\n", b"y\xff\n", b"\xc3\n"];
        for case in cases {
            let mut input = Cursor::new(case);
            let mut output = Vec::new();
            let ok = confirm_with_io("Do you want to update?", &mut input, &mut output)?;
            assert!(!ok, "expected {:?} to be rejected as no", case);
        }
        Ok(())
    }

    #[test]
    fn read_failure_is_an_error() {
        struct FailingReader;

        impl std::io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("stdin closed"))
            }
        }

        let mut input = std::io::BufReader::new(FailingReader);
        let mut output = Vec::new();
        assert!(confirm_with_io("Do you want to update?", &mut input, &mut output).is_err());
    }

    #[test]
    fn prompt_is_written_before_reading() -> Result<()> {
        let mut input = Cursor::new(b"n\n");
        let mut output = Vec::new();
        let _ = confirm_with_io("Do you want to update?", &mut input, &mut output)?;
        let out = String::from_utf8(output)?;
        assert_eq!(out, "Do you want to update? [y/N] ");
        Ok(())
    }
}
