//! Interactive ANM color editor.
//!
//! Opens an `.anm` file, lists the color records found in it and lets the
//! user browse and recolor them before writing the result back.
//!
//! # Usage
//!
//! ```bash
//! # Start with an empty session and open a file from the menu
//! anm-color
//!
//! # Open a file at startup
//! anm-color EFFECT.anm
//!
//! # Apply every edit to all records sharing the edited color
//! anm-color EFFECT.anm --propagate
//! ```
//!
//! Set `RUST_LOG=debug` to see every record as it is loaded and saved.

use std::{fmt, path::PathBuf};

use anmcolor::prelude::*;
use anyhow::{Context, Result};
use clap::Parser;
use inquire::{Confirm, InquireError, Select, Text};
use log::{error, info, warn};

#[derive(Parser)]
#[command(name = "anm-color")]
#[command(author = "anmcolor project")]
#[command(version)]
#[command(about = "Browse and edit the color records of .anm animation files", long_about = None)]
struct Cli {
	/// Path to an .anm file to open at startup
	#[arg(value_name = "FILE")]
	file: Option<PathBuf>,

	/// Apply each edit to every record sharing the edited color
	#[arg(short, long, env = "ANM_COLOR_PROPAGATE", default_value_t = false)]
	propagate: bool,
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let mut editor = Editor::new(EditorSettings::new(cli.propagate));

	if let Some(path) = cli.file {
		if Session::is_anm_path(&path) {
			editor.open(path);
		} else {
			warn!("Ignoring {}: not an .anm file", path.display());
		}
	}

	editor.run()
}

/// Menu entries offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
	Next,
	Previous,
	GoTo,
	InputColor,
	List,
	TogglePropagate(bool),
	Open,
	Save,
	Exit,
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Next => write!(f, "Next"),
			Self::Previous => write!(f, "Prev"),
			Self::GoTo => write!(f, "Go to color..."),
			Self::InputColor => write!(f, "Input color (#RRGGBB)"),
			Self::List => write!(f, "List colors"),
			Self::TogglePropagate(on) => {
				write!(f, "Change unique colors [{}]", if *on { "on" } else { "off" })
			}
			Self::Open => write!(f, "Open file"),
			Self::Save => write!(f, "Save colors"),
			Self::Exit => write!(f, "Exit"),
		}
	}
}

struct Editor {
	session: Session,
	cursor: usize,
	/// Records changed since the last open or save
	unsaved: usize,
}

impl Editor {
	fn new(settings: EditorSettings) -> Self {
		Self {
			session: Session::new(settings),
			cursor: 0,
			unsaved: 0,
		}
	}

	/// Runs the menu loop until the user exits.
	///
	/// Cancelling a sub-prompt (Esc or Ctrl-C) returns to the menu; cancelling
	/// the menu itself is treated like [`Action::Exit`].
	fn run(&mut self) -> Result<()> {
		loop {
			self.show_current();

			let choice = Select::new("Action:", self.actions()).with_page_size(9).prompt();
			let Some(action) = answered(choice)? else {
				if self.confirm_exit()? {
					return Ok(());
				}
				continue;
			};

			match action {
				Action::Next => self.step(1),
				Action::Previous => self.step(-1),
				Action::GoTo => self.go_to()?,
				Action::InputColor => self.input_color()?,
				Action::List => self.list(),
				Action::TogglePropagate(_) => {
					let on = self.session.toggle_propagate();
					info!("Change unique colors: {}", if on { "on" } else { "off" });
				}
				Action::Open => {
					if let Some(path) = answered(Text::new("Path to .anm file:").prompt())? {
						self.open(PathBuf::from(path.trim()));
					}
				}
				Action::Save => self.save()?,
				Action::Exit => {
					if self.confirm_exit()? {
						return Ok(());
					}
				}
			}
		}
	}

	fn actions(&self) -> Vec<Action> {
		let propagate = Action::TogglePropagate(self.session.settings().propagate);
		if self.color_count() == 0 {
			return vec![Action::Open, propagate, Action::Exit];
		}

		vec![
			Action::Next,
			Action::Previous,
			Action::InputColor,
			Action::GoTo,
			Action::List,
			propagate,
			Action::Save,
			Action::Open,
			Action::Exit,
		]
	}

	fn color_count(&self) -> usize {
		self.session.colors().map_or(0, ColorSet::len)
	}

	fn open(&mut self, path: PathBuf) {
		match self.session.open(&path) {
			Ok(0) => {
				self.cursor = 0;
				self.unsaved = 0;
				warn!("No colors found in {}", path.display());
			}
			Ok(count) => {
				self.cursor = 0;
				self.unsaved = 0;
				info!("Opened {} ({count} colors)", path.display());
			}
			Err(err) => error!("Cannot open {}: {err}", path.display()),
		}
	}

	fn has_unsaved_edits(&self) -> bool {
		self.unsaved > 0
	}

	/// Asks before leaving with unsaved edits; a cancelled answer keeps the editor open.
	fn confirm_exit(&self) -> Result<bool> {
		if !self.has_unsaved_edits() {
			return Ok(true);
		}

		let answer = Confirm::new(&format!("Discard {} unsaved edit(s) and exit?", self.unsaved))
			.with_default(false)
			.prompt();
		Ok(answered(answer)?.unwrap_or(false))
	}

	fn show_current(&self) {
		let Some(colors) = self.session.colors() else {
			println!("\nOpen a .anm file to edit colors");
			return;
		};
		let Some(entry) = colors.get(self.cursor) else {
			println!("\nNo colors loaded");
			return;
		};

		let color = entry.color();
		println!(
			"\n{}  {} / {}  {}  alpha {}  at {}",
			swatch(color),
			self.cursor + 1,
			colors.len(),
			color,
			entry.original().a,
			entry.offset()
		);
	}

	fn step(&mut self, delta: isize) {
		let count = self.color_count();
		if count > 0 {
			self.cursor = self.cursor.saturating_add_signed(delta + count as isize) % count;
		}
	}

	fn go_to(&mut self) -> Result<()> {
		let count = self.color_count();
		let answer = Text::new("Color number:").with_help_message(&format!("1-{count}")).prompt();
		self.apply_go_to(answer)
	}

	fn apply_go_to(&mut self, answer: Result<String, InquireError>) -> Result<()> {
		let Some(input) = answered(answer)? else {
			return Ok(());
		};

		let count = self.color_count();
		match input.trim().parse::<usize>() {
			Ok(number) if (1..=count).contains(&number) => self.cursor = number - 1,
			_ => error!("Please input a number between 1 and {count}"),
		}
		Ok(())
	}

	fn input_color(&mut self) -> Result<()> {
		let answer = Text::new("Input value with format #RRGGBB/RRGGBB:").prompt();
		self.apply_color(answer)
	}

	fn apply_color(&mut self, answer: Result<String, InquireError>) -> Result<()> {
		let Some(input) = answered(answer)? else {
			return Ok(());
		};

		match self.session.set_color(self.cursor, input.trim()) {
			Ok(updated) => {
				self.unsaved += updated;
				info!("Updated {updated} color(s)");
			}
			Err(err) if err.class() == ErrorClass::Validation => {
				error!("Please input a valid color with format: #RRGGBB/RRGGBB");
			}
			Err(err) => error!("{err}"),
		}
		Ok(())
	}

	fn list(&self) {
		let Some(colors) = self.session.colors() else {
			return;
		};
		for (index, entry) in colors.iter().enumerate() {
			let marker = if index == self.cursor { '>' } else { ' ' };
			let modified = if entry.is_modified() { '*' } else { ' ' };
			println!(
				"{marker}{:>4} {} {}{modified} {} [{}]",
				index + 1,
				swatch(entry.color()),
				entry.color(),
				entry.offset(),
				hex::encode_upper(entry.record().to_bytes())
			);
		}
	}

	fn save(&mut self) -> Result<()> {
		let (Some(path), Some(colors)) = (self.session.path(), self.session.colors()) else {
			return Ok(());
		};

		let answer = Confirm::new(&format!(
			"Write {} colors ({} modified) back to {}?",
			colors.len(),
			colors.modified_count(),
			path.display()
		))
		.with_default(true)
		.prompt();
		self.apply_save(answer)
	}

	fn apply_save(&mut self, answer: Result<bool, InquireError>) -> Result<()> {
		if answered(answer)? != Some(true) {
			return Ok(());
		}
		let Some(path) = self.session.path() else {
			return Ok(());
		};

		match self.session.save().with_context(|| format!("Failed to save {}", path.display())) {
			Ok(()) => {
				self.unsaved = 0;
				info!("File saved!");
			}
			Err(err) => error!("{err:#}"),
		}
		Ok(())
	}
}

/// Renders a small block in `color` using 24-bit ANSI escapes.
fn swatch(color: HexColor) -> String {
	format!("\x1b[48;2;{};{};{}m      \x1b[0m", color.r, color.g, color.b)
}

/// Maps a cancelled or interrupted prompt to `None`; other prompt failures are errors.
fn answered<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
	match answer {
		Ok(value) => Ok(Some(value)),
		Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
		Err(err) => Err(err.into()),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use anmcolor::anmcolor_types::file::anm::constants::MARKER;
	use tempfile::TempDir;

	use super::*;

	/// Opens an editor on a file holding two mirrored records of the same color.
	fn loaded_editor(dir: &TempDir) -> Editor {
		let record = ColorRecord::new(10, 20, 30, 255).to_bytes();
		let mut data = vec![0u8; 8];
		for _ in 0..2 {
			let header = data.len();
			data.resize(header + 72, 0);
			data[header..header + 8].copy_from_slice(&MARKER);
			data[header + 8..header + 24].copy_from_slice(&record);
			data[header + 56..header + 72].copy_from_slice(&record);
		}
		data.resize(data.len() + 16, 0);

		let path = dir.path().join("EFFECT.anm");
		fs::write(&path, data).unwrap();

		let mut editor = Editor::new(EditorSettings::new(false));
		editor.open(path);
		assert_eq!(editor.color_count(), 2);
		editor
	}

	#[test]
	fn test_answered_maps_cancel_to_none() {
		assert_eq!(answered(Ok::<_, InquireError>(3)).unwrap(), Some(3));
		assert_eq!(answered::<u8>(Err(InquireError::OperationCanceled)).unwrap(), None);
		assert_eq!(answered::<u8>(Err(InquireError::OperationInterrupted)).unwrap(), None);
		assert!(answered::<u8>(Err(InquireError::NotTTY)).is_err());
	}

	#[test]
	fn test_cancelled_color_input_keeps_edits() {
		let dir = TempDir::new().unwrap();
		let mut editor = loaded_editor(&dir);

		editor.apply_color(Ok("#ff8000".to_string())).unwrap();
		assert_eq!(editor.unsaved, 1);

		editor.step(1);
		editor.apply_color(Err(InquireError::OperationCanceled)).unwrap();
		editor.apply_go_to(Err(InquireError::OperationInterrupted)).unwrap();
		editor.apply_save(Err(InquireError::OperationCanceled)).unwrap();

		let colors = editor.session.colors().unwrap();
		assert_eq!(colors.hex_colors(), vec![HexColor::new(255, 128, 0), HexColor::new(10, 20, 30)]);
		assert_eq!(editor.cursor, 1);
		assert_eq!(editor.unsaved, 1);
		assert!(editor.has_unsaved_edits());
	}

	#[test]
	fn test_confirmed_save_clears_unsaved_edits() {
		let dir = TempDir::new().unwrap();
		let mut editor = loaded_editor(&dir);

		editor.apply_color(Ok("000000".to_string())).unwrap();
		editor.apply_save(Ok(false)).unwrap();
		assert_eq!(editor.unsaved, 1);

		editor.apply_save(Ok(true)).unwrap();
		assert_eq!(editor.unsaved, 0);
		assert!(!editor.has_unsaved_edits());

		let path = editor.session.path().unwrap().to_path_buf();
		editor.open(path);
		assert_eq!(editor.session.list_colors()[0], HexColor::new(0, 0, 0));
	}
}
