use crossterm::{
    cursor::{MoveTo, MoveToNextLine},
    event::{self, Event},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_core::input::action_for_key;
use keypad_core::logging::init_logging;
use keypad_core::{AdapterConfig, FormOutcome, KeypadForm};
use std::io::{self, stdout, Write};

const LOG_DIR_NAME: &str = "keypad-combos-logs";

/// Restores the terminal on every exit path, including early `?` returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Leaving the alternate screen is a no-op when it was never entered.
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    let config = AdapterConfig::from_env_or_report(&mut io::stderr());
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    if let Err(e) = init_logging(&config.log_level, &log_dir) {
        eprintln!("[WARN] Logging disabled: {}", e);
    }

    let mut form = KeypadForm::new(config);
    let mut out = stdout();

    let _guard = TerminalGuard::enter(&mut out)?;
    run(&mut form, &mut out)
}

fn run(form: &mut KeypadForm, out: &mut impl Write) -> io::Result<()> {
    loop {
        draw(form, out)?;
        if let Event::Key(key) = event::read()? {
            if let Some(action) = action_for_key(key) {
                if form.apply(action) == FormOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}

fn draw(form: &KeypadForm, out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("Keypad Letter Combinations"),
        SetAttribute(Attribute::Reset),
        MoveToNextLine(1),
        Print("----------------------------------------------"),
        MoveToNextLine(1),
        Print("Type digits 2-9, [Enter] to generate, [Esc] to clear, [Ctrl+C] to quit."),
        MoveToNextLine(2),
        Print(format!("Digits: [{}]", form.input)),
        MoveToNextLine(2)
    )?;

    if let Some(error) = &form.error {
        queue!(out, Print(format!("! {}", error)), MoveToNextLine(2))?;
    }

    if let (Some(view), Some(label)) = (&form.results, form.count_label()) {
        let (width, height) = terminal::size()?;
        queue!(out, Print(label), MoveToNextLine(1))?;

        // Lay items out in columns and stop at the bottom of the screen.
        let cell = view.items.first().map_or(1, |s| s.chars().count() + 2);
        let per_row = (usize::from(width) / cell).max(1);
        let rows = usize::from(height).saturating_sub(12).max(1);
        for (row, chunk) in view.items.chunks(per_row).take(rows).enumerate() {
            let line: String = chunk.iter().map(|s| format!("{:<cell$}", s)).collect();
            queue!(out, Print(line), MoveToNextLine(1))?;
            if row + 1 == rows && view.items.len() > rows * per_row {
                queue!(out, Print("..."), MoveToNextLine(1))?;
            }
        }
        if view.truncated {
            queue!(out, Print(format!("(showing first {})", view.items.len())), MoveToNextLine(1))?;
        }
    }

    // Park the cursor at the end of the input field.
    let column = u16::try_from(9 + form.input.chars().count()).unwrap_or(u16::MAX);
    queue!(out, MoveTo(column, 4))?;
    out.flush()
}
