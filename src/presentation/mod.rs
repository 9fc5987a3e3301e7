//! Presentation layer handling the text menu and user input.
//!
//! This module prints the menu, parses selections, prompts for subscriber
//! fields and renders results on the console.

pub mod ui;
pub mod input;
pub mod menu;

pub use ui::*;
pub use input::*;
pub use menu::*;
