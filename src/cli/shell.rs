//! Interactive assistant loop
//!
//! Reads one command per line until `close`, `exit` or end of input, then
//! saves the book.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::debug;

use crate::commands::{parse_input, Command};
use crate::display::Painter;
use crate::error::ContactsResult;
use crate::services::BookService;

const PROMPT: &str = "Enter a command: ";

/// Run the assistant until the user leaves
///
/// `today` is asked for the reference date on every command, so a session
/// left open past midnight still reports the right birthdays.
pub fn run_shell<R, W, F>(
    service: &mut BookService,
    painter: Painter,
    input: R,
    output: &mut W,
    today: F,
) -> ContactsResult<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "Welcome to the assistant bot!")?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            break;
        };
        let line = line?;

        let Some((word, args)) = parse_input(&line) else {
            continue;
        };

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", painter.error(&e))?;
                continue;
            }
        };
        debug!(command = %command, args = args.len(), "shell command");

        match service.execute(command, &args, today()) {
            Ok(reply) => writeln!(output, "{}", painter.reply(&reply))?,
            Err(e) => writeln!(output, "{}", painter.error(&e))?,
        }

        if command == Command::Exit {
            break;
        }
    }

    service.save()
}
