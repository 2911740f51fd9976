pub mod add;
pub mod choice;
pub mod import;
pub mod init;
pub mod lookup;
pub mod menu;
pub mod quiz;
pub mod review;

use std::io::{self, BufRead, Write};

/// Print `prompt`, then read one trimmed line. `None` means end of input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_reads_trimmed_line() {
        let mut input = Cursor::new("  lucid \nnext\n");
        let mut output = Vec::new();
        let answer = prompt(&mut input, &mut output, "Word: ").unwrap();
        assert_eq!(answer.as_deref(), Some("lucid"));
        assert_eq!(String::from_utf8(output).unwrap(), "Word: ");
    }

    #[test]
    fn prompt_eof_is_none() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "> ").unwrap(), None);
    }
}
