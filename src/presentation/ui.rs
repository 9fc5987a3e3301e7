use std::io::{self, IsTerminal, Write};

use crossterm::style::{style, StyledContent, Stylize};

use super::input::MenuChoice;

/// Whether console output carries ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    /// Colours only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            color: io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    fn heading(self, text: &str) -> StyledContent<&str> {
        if self.color { style(text).bold() } else { style(text) }
    }

    fn success(self, text: &str) -> StyledContent<&str> {
        if self.color { style(text).green() } else { style(text) }
    }

    fn failure(self, text: &str) -> StyledContent<&str> {
        if self.color { style(text).red() } else { style(text) }
    }
}

pub fn render_menu<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.heading("Phone book"))?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    Ok(())
}

/// Writes a prompt without a line break and flushes so it shows before input is read.
pub fn render_prompt<W: Write>(out: &mut W, theme: Theme, prompt: &str) -> io::Result<()> {
    write!(out, "{}: ", theme.heading(prompt))?;
    out.flush()
}

pub fn render_success<W: Write>(out: &mut W, theme: Theme, message: &str) -> io::Result<()> {
    writeln!(out, "{}", theme.success(message))
}

pub fn render_failure<W: Write>(out: &mut W, theme: Theme, message: &str) -> io::Result<()> {
    writeln!(out, "{}", theme.failure(message))
}

pub fn render_numbers<W: Write>(out: &mut W, theme: Theme, numbers: &[&str]) -> io::Result<()> {
    writeln!(out, "{}", theme.heading("Numbers found:"))?;
    for number in numbers {
        writeln!(out, "  {number}")?;
    }
    Ok(())
}
