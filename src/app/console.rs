use std::io::{self, BufRead, Write};

use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Console over stdin/stdout for interactive sessions.
#[derive(Debug, Clone, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

/// Reads one line without the trailing newline. A zero-byte read means the
/// input is closed; that is an error so prompt loops terminate instead of
/// spinning on an endless stream of empty answers.
fn read_prompt_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

impl Console for StdConsole {
    fn prompt(&mut self, message: &str) -> Result<String> {
        print!("{}", message);
        io::stdout().flush()?;

        read_prompt_line(&mut io::stdin().lock())
    }

    fn show(&mut self, message: &str) {
        println!("{}", message);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("❌ {}", message);
    }
}
