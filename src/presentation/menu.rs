//! Interactive text menu driving the phone book.
//!
//! The menu reads from any [`BufRead`] and writes to any [`Write`], so the
//! binary hands it stdin/stdout while tests feed it scripted input.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use tracing::debug;

use crate::application::PhoneBook;
use crate::infrastructure::SnapshotStore;

use super::input::{read_trimmed_line, MenuChoice};
use super::ui::{render_failure, render_menu, render_numbers, render_prompt, render_success, Theme};

pub struct Menu<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Builds a menu with plain, unstyled output.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Runs until the user picks Exit or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn run<S: SnapshotStore>(&mut self, book: &mut PhoneBook<S>) -> io::Result<()> {
        loop {
            render_menu(&mut self.output, self.theme)?;
            let Some(line) = self.ask("Your choice")? else {
                return Ok(());
            };
            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.handle(choice, book)?,
                Err(err) => {
                    debug!(%err, "invalid menu selection");
                    render_failure(&mut self.output, self.theme, &format!("Invalid choice: {err}. Try again."))?;
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                return Ok(());
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn handle<S: SnapshotStore>(
        &mut self,
        choice: MenuChoice,
        book: &mut PhoneBook<S>,
    ) -> io::Result<ControlFlow<()>> {
        match choice {
            MenuChoice::AddSubscriber => {
                let Some(number) = self.ask("Phone number")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(name) = self.ask("Subscriber name")? else {
                    return Ok(ControlFlow::Break(()));
                };
                match book.add(number, name) {
                    Ok(()) => render_success(&mut self.output, self.theme, "Subscriber added.")?,
                    Err(err) => render_failure(&mut self.output, self.theme, &capitalize(&err.to_string()))?,
                }
            }
            MenuChoice::FindByNumber => {
                let Some(number) = self.ask("Phone number")? else {
                    return Ok(ControlFlow::Break(()));
                };
                match book.find_name_by_number(&number) {
                    Some(name) => render_success(&mut self.output, self.theme, &format!("Subscriber name: {name}"))?,
                    None => render_failure(&mut self.output, self.theme, "Subscriber not found.")?,
                }
            }
            MenuChoice::FindByName => {
                let Some(name) = self.ask("Subscriber name")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let numbers = book.find_numbers_by_name(&name);
                if numbers.is_empty() {
                    render_failure(&mut self.output, self.theme, "No subscribers found.")?;
                } else {
                    render_numbers(&mut self.output, self.theme, &numbers)?;
                }
            }
            MenuChoice::DeleteSubscriber => {
                let Some(number) = self.ask("Phone number to delete")? else {
                    return Ok(ControlFlow::Break(()));
                };
                if book.remove(&number) {
                    render_success(&mut self.output, self.theme, "Subscriber deleted.")?;
                } else {
                    render_failure(&mut self.output, self.theme, "Subscriber not found.")?;
                }
            }
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        render_prompt(&mut self.output, self.theme, prompt)?;
        let line = read_trimmed_line(&mut self.input)?;
        if line.is_none() {
            writeln!(self.output)?;
        }
        Ok(line)
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
