use std::io::{self, BufRead, Write};

/// Writes `prompt`, then reads one line with the line ending stripped.
/// `Ok(None)` means the input is exhausted.
pub fn read_prompted_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
