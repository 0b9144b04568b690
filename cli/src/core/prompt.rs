use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and block for one line on stdin.
pub fn confirm(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_with(question, &mut stdin.lock(), &mut stdout)
}

/// Only `y` or `Y` confirms; anything else, including EOF, declines.
pub fn confirm_with<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
