// File: src/protocol.rs
//! Line protocol over a `KeypadForm`, meant to be driven by another process.
//!
//! In:  `KEY <char>` | `BACKSPACE` | `ENTER` | `RESET` | `EXIT`
//! Out: `SHOW_ERROR <message>` | `HIDE_RESULTS` | `SHOW_COUNT <label>`
//!      | `ADD_COMBINATION <index> <text>` | `SHOW_RESULTS`
//!      | `CLEAR_INPUT` | `FOCUS_INPUT`
//!
//! Unknown commands are logged and otherwise ignored.

use crate::presenter::{FormAction, KeypadForm};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

/// Serves commands from `input` until `EXIT` or end of input.
pub fn run_protocol(
    form: &mut KeypadForm,
    input: impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        debug!("event=command_in module=protocol line={:?}", line);
        let (command, arg) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        match command {
            "KEY" => match arg.chars().next() {
                Some(c) => {
                    form.apply(FormAction::Insert(c));
                }
                None => warn!("event=command_in module=protocol status=rejected reason=missing_key"),
            },
            "BACKSPACE" => {
                form.apply(FormAction::Backspace);
            }
            "ENTER" => {
                form.apply(FormAction::Submit);
                write_view(form, output)?;
            }
            "RESET" => {
                form.apply(FormAction::Reset);
                writeln!(output, "CLEAR_INPUT")?;
                writeln!(output, "HIDE_RESULTS")?;
                writeln!(output, "FOCUS_INPUT")?;
                output.flush()?;
            }
            "EXIT" => break,
            _ => warn!("event=command_in module=protocol status=rejected reason=unknown_command"),
        }
    }
    debug!("event=shutdown module=protocol status=ok");
    Ok(())
}

/// Emits the error region and the results region of `form`.
pub fn write_view(form: &KeypadForm, output: &mut impl Write) -> io::Result<()> {
    if let Some(error) = &form.error {
        writeln!(output, "SHOW_ERROR {}", error)?;
    }
    match (&form.results, form.count_label()) {
        (Some(view), Some(label)) => {
            writeln!(output, "SHOW_COUNT {}", label)?;
            for (i, combination) in view.items.iter().enumerate() {
                writeln!(output, "ADD_COMBINATION {} {}", i, combination)?;
            }
            writeln!(output, "SHOW_RESULTS")?;
        }
        _ => writeln!(output, "HIDE_RESULTS")?,
    }
    output.flush()
}
