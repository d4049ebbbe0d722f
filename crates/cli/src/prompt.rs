use std::io::{self, BufRead, IsTerminal, Write};

/// Asks for a CSV filename on an interactive terminal. An empty answer or a
/// non-interactive stdin means no CSV report.
pub fn ask_csv_path() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(None);
    }

    let mut stderr = io::stderr();
    write!(
        stderr,
        "CSV output file (e.g. results.csv), leave empty to skip: "
    )?;
    stderr.flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}
