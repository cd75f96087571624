//! Line driver
//!
//! Reads one command per line, applies it to a [`SessionController`] and
//! writes the resulting dashboard. Lines are either the text syntax
//! (`transfer jd 500`) or a JSON action (`{"action":"toggle_sort"}`), plus the
//! driver-only commands `show`, `accounts`, `help` and `quit`.
//!
//! Rejected actions produce no output; they are only logged.

use std::io::{BufRead, Write};

use serde_json::json;

use crate::config::OutputFormat;
use crate::domain::LedgerEvent;
use crate::error::{AppError, AppResult};
use crate::session::{Action, SessionController};

const HELP: &str = "\
commands:
  login <username> <pin>
  transfer <username> <amount>
  loan <amount>
  close <username> <pin>
  sort
  show | accounts | help | quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    Show,
    Accounts,
    Help,
    Quit,
}

impl Command {
    /// Parse a line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> AppResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        if line.starts_with('{') {
            let action: Action = serde_json::from_str(line)?;
            return Ok(Some(Command::Action(action)));
        }

        let command = match line.to_lowercase().as_str() {
            "show" => Command::Show,
            "accounts" => Command::Accounts,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Action(line.parse()?),
        };

        Ok(Some(command))
    }
}

/// Whether the driver keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Feeds input lines to a session controller
pub struct Driver {
    controller: SessionController,
    output_format: OutputFormat,
}

impl Driver {
    pub fn new(controller: SessionController, output_format: OutputFormat) -> Self {
        Self {
            controller,
            output_format,
        }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Process every line of `input` until EOF or `quit`
    pub fn run<R, W>(&mut self, mut input: R, output: &mut W) -> AppResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Undecodable bytes become U+FFFD and the line is skipped as an unknown command
            let line = String::from_utf8_lossy(&buf);

            match self.execute(&line, output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(AppError::Domain(e)) => {
                    tracing::debug!(reason = e.code(), "Ignoring rejected action");
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Skipping line {:?}: {}", line, e);
                }
                Err(e) => return Err(e),
            }
        }

        output.flush()?;
        Ok(())
    }

    fn execute<W: Write>(&mut self, line: &str, output: &mut W) -> AppResult<Flow> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Flow::Continue);
        };

        match command {
            Command::Action(action) => {
                let event = self.controller.dispatch(&action)?;
                self.write_outcome(Some(&event), output)?;
            }
            Command::Show => self.write_outcome(None, output)?,
            Command::Accounts => self.write_accounts(output)?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn write_outcome<W: Write>(
        &self,
        event: Option<&LedgerEvent>,
        output: &mut W,
    ) -> AppResult<()> {
        let dashboard = self.controller.dashboard();

        match self.output_format {
            OutputFormat::Json => {
                let value = json!({ "event": event, "dashboard": dashboard });
                writeln!(output, "{}", serde_json::to_string(&value)?)?;
            }
            OutputFormat::Text => match dashboard {
                Some(dashboard) => writeln!(output, "{}\n", dashboard)?,
                None => writeln!(output, "Logged out\n")?,
            },
        }

        Ok(())
    }

    fn write_accounts<W: Write>(&self, output: &mut W) -> AppResult<()> {
        let accounts = self.controller.store().iter();

        match self.output_format {
            OutputFormat::Json => {
                let list: Vec<_> = accounts
                    .map(|acc| json!({ "username": acc.username(), "owner": acc.owner() }))
                    .collect();
                writeln!(output, "{}", serde_json::to_string(&list)?)?;
            }
            OutputFormat::Text => {
                for acc in accounts {
                    writeln!(output, "{:<6}{}", acc.username(), acc.owner())?;
                }
            }
        }

        Ok(())
    }
}
