//! Text command driver.
//!
//! Reads a script, builds a tree from its initial keys, runs each command,
//! and writes one status line per command followed by the final key list.
//!
//! # Script Format
//! ```text
//! 4            item count
//! 5 1 9 3      items (any whitespace)
//! 3            order M
//! 3            command count
//! I 7          one command per line
//! R 5
//! B
//! ```
//!
//! # Components
//! - [`Command`] - one parsed command line
//! - [`Session`] / [`Outcome`] - command execution and status messages
//! - [`run`] - the whole script, stream to stream

mod command;
mod error;
mod session;

pub use command::Command;
pub use error::DriverError;
pub use session::{Outcome, Session};

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Lines, Write};
use std::str::FromStr;

use log::{debug, warn};

/// Status line written for a command that cannot be parsed.
pub const INVALID_COMMAND: &str = "Invalid command";

/// Pulls whitespace-separated header tokens, then whole command lines, from
/// the same input.
struct Script<R> {
    lines: Lines<R>,
    pending: VecDeque<String>,
}

impl<R: BufRead> Script<R> {
    fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            pending: VecDeque::new(),
        }
    }

    fn token(&mut self, what: &'static str) -> Result<String, DriverError> {
        while self.pending.is_empty() {
            let line = self.lines.next().ok_or(DriverError::UnexpectedEof(what))??;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front().ok_or(DriverError::UnexpectedEof(what))
    }

    fn parse<T: FromStr>(&mut self, what: &'static str) -> Result<T, DriverError> {
        let token = self.token(what)?;
        token
            .parse()
            .map_err(|_| DriverError::Parse { what, token })
    }

    /// Next non-blank line. Header tokens left on the current line are dropped.
    fn command_line(&mut self) -> Result<Option<String>, DriverError> {
        self.pending.clear();
        for line in self.lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}

/// Run a full command script from `input`, writing status lines to `output`.
///
/// Per-command problems (duplicate insert, missing key, malformed line) are
/// reported on `output` and the script carries on. A script that ends
/// before all commands are read just stops early.
///
/// # Errors
/// - `DriverError::Tree` with `InvalidOrder` if the order is below 2
/// - `DriverError::UnexpectedEof` / `DriverError::Parse` for a bad header
/// - `DriverError::Io` on read or write failure
///
/// # Example
/// ```
/// let script = "4\n5 1 9 3\n3\n2\nI 7\nF 9\n";
/// let mut out = Vec::new();
/// mwaytree::driver::run::<i64, _, _>(script.as_bytes(), &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.ends_with("Final list: 1 3 5 7 9 \n"));
/// ```
pub fn run<K, R, W>(input: R, mut output: W) -> Result<(), DriverError>
where
    K: FromStr + Ord + Clone + Display,
    R: BufRead,
    W: Write,
{
    let mut script = Script::new(input);

    let count: usize = script.parse("item count")?;
    let items = (0..count)
        .map(|_| script.parse::<K>("item"))
        .collect::<Result<Vec<K>, _>>()?;
    let order: usize = script.parse("order")?;
    let commands: usize = script.parse("command count")?;

    let mut session = Session::new(order, items)?;
    debug!("session started: {}", session.tree().stats());

    for _ in 0..commands {
        let Some(line) = script.command_line()? else {
            warn!("script ended before all {} commands were read", commands);
            break;
        };

        match Command::<K>::parse(&line) {
            Ok(command) => {
                let outcome = session.execute(command)?;
                debug!("{:?} -> {}", line.trim(), outcome);
                writeln!(output, "{}", outcome)?;
            }
            Err(e) if e.is_per_command() => {
                warn!("skipping command line: {}", e);
                writeln!(output, "{}", INVALID_COMMAND)?;
            }
            Err(e) => return Err(e),
        }
    }

    writeln!(output, "{}", session.final_list())?;
    output.flush()?;
    Ok(())
}
