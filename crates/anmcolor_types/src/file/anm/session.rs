//! Editing session over a single ANM file.
//!
//! A [`Session`] starts [`SessionState::Empty`] and moves to
//! [`SessionState::Loaded`] when a file is opened. Opening another file
//! replaces the loaded set; nothing carries over between files.

use std::path::{Path, PathBuf};

use crate::file::AnmColorError;

use super::{color::HexColor, colors::ColorSet};

/// File extension accepted by [`Session::open`]
pub const ANM_EXTENSION: &str = "anm";

/// Options controlling how edits are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EditorSettings {
	/// Apply an edit to every record sharing the edited record's color
	pub propagate: bool,
}

impl EditorSettings {
	/// Creates settings with the given propagation flag.
	pub const fn new(propagate: bool) -> Self {
		Self {
			propagate,
		}
	}
}

/// State of a [`Session`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
	/// No file opened yet
	#[default]
	Empty,
	/// A file has been scanned and loaded
	Loaded {
		/// Path of the loaded file
		path: PathBuf,
		/// Colors loaded from `path`
		colors: ColorSet,
	},
}

/// An editing session.
///
/// # Examples
///
/// ```no_run
/// use anmcolor_types::file::anm::{EditorSettings, Session};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut session = Session::new(EditorSettings::new(true));
/// session.open("EFFECT.anm")?;
///
/// // Recolor every record that shares the first record's color
/// session.set_color(0, "#ff8000")?;
/// session.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
	state: SessionState,
	settings: EditorSettings,
}

impl Session {
	/// Creates an empty session.
	pub fn new(settings: EditorSettings) -> Self {
		Self {
			state: SessionState::Empty,
			settings,
		}
	}

	/// Returns `true` if `path` has an `.anm` extension (ASCII case-insensitive).
	pub fn is_anm_path(path: &Path) -> bool {
		path.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case(ANM_EXTENSION))
	}

	/// Scans and loads `path`, replacing whatever was loaded before.
	///
	/// Returns the number of colors found.
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::NotAnmFile`] if `path` does not end in `.anm`,
	/// otherwise see [`ColorSet::open`]. The session is unchanged on error.
	pub fn open(&mut self, path: impl AsRef<Path>) -> Result<usize, AnmColorError> {
		let path = path.as_ref();
		if !Self::is_anm_path(path) {
			return Err(AnmColorError::NotAnmFile {
				path: path.to_path_buf(),
			});
		}

		let colors = ColorSet::open(path)?;
		let count = colors.len();
		self.state = SessionState::Loaded {
			path: path.to_path_buf(),
			colors,
		};
		Ok(count)
	}

	/// Current state
	pub fn state(&self) -> &SessionState {
		&self.state
	}

	/// Returns `true` once a file has been opened.
	pub fn is_loaded(&self) -> bool {
		matches!(self.state, SessionState::Loaded { .. })
	}

	/// Path of the loaded file
	pub fn path(&self) -> Option<&Path> {
		match &self.state {
			SessionState::Loaded {
				path,
				..
			} => Some(path),
			SessionState::Empty => None,
		}
	}

	/// Loaded colors
	pub fn colors(&self) -> Option<&ColorSet> {
		match &self.state {
			SessionState::Loaded {
				colors,
				..
			} => Some(colors),
			SessionState::Empty => None,
		}
	}

	/// Current colors, empty if nothing is loaded.
	pub fn list_colors(&self) -> Vec<HexColor> {
		self.colors().map(ColorSet::hex_colors).unwrap_or_default()
	}

	/// Current settings
	pub fn settings(&self) -> EditorSettings {
		self.settings
	}

	/// Replaces the settings.
	pub fn set_settings(&mut self, settings: EditorSettings) {
		self.settings = settings;
	}

	/// Flips the propagation flag and returns the new value.
	pub fn toggle_propagate(&mut self) -> bool {
		self.settings.propagate = !self.settings.propagate;
		self.settings.propagate
	}

	/// Applies `input` to the color at `index` using the session's propagation flag.
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::NoFileLoaded`] in the empty state, otherwise see
	/// [`ColorSet::set_color`].
	pub fn set_color(&mut self, index: usize, input: &str) -> Result<usize, AnmColorError> {
		let propagate = self.settings.propagate;
		match &mut self.state {
			SessionState::Loaded {
				colors,
				..
			} => colors.set_color(index, input, propagate),
			SessionState::Empty => Err(AnmColorError::NoFileLoaded),
		}
	}

	/// Writes the colors back into the loaded file.
	///
	/// # Errors
	///
	/// Returns [`AnmColorError::NoFileLoaded`] in the empty state, otherwise see
	/// [`ColorSet::save_to`].
	pub fn save(&self) -> Result<(), AnmColorError> {
		match &self.state {
			SessionState::Loaded {
				path,
				colors,
			} => colors.save_to(path),
			SessionState::Empty => Err(AnmColorError::NoFileLoaded),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_session_is_empty() {
		let session = Session::new(EditorSettings::default());
		assert_eq!(session.state(), &SessionState::Empty);
		assert!(!session.is_loaded());
		assert!(session.path().is_none());
		assert!(session.list_colors().is_empty());
	}

	#[test]
	fn test_empty_session_rejects_edits_and_saves() {
		let mut session = Session::default();
		assert!(matches!(session.set_color(0, "#000000"), Err(AnmColorError::NoFileLoaded)));
		assert!(matches!(session.save(), Err(AnmColorError::NoFileLoaded)));
	}

	#[test]
	fn test_open_rejects_other_extensions() {
		let mut session = Session::default();
		let err = session.open("sprite.spr").unwrap_err();
		assert!(matches!(err, AnmColorError::NotAnmFile { .. }));
		assert!(!session.is_loaded());
	}

	#[test]
	fn test_open_missing_file() {
		let mut session = Session::default();
		let err = session.open("definitely/not/here.anm").unwrap_err();
		assert!(matches!(err, AnmColorError::NotFound { .. }));
		assert!(!session.is_loaded());
	}

	#[test]
	fn test_is_anm_path() {
		assert!(Session::is_anm_path(Path::new("a/b/EFFECT.anm")));
		assert!(Session::is_anm_path(Path::new("EFFECT.ANM")));
		assert!(!Session::is_anm_path(Path::new("EFFECT.anm.bak")));
		assert!(!Session::is_anm_path(Path::new("anm")));
	}

	#[test]
	fn test_toggle_propagate() {
		let mut session = Session::new(EditorSettings::new(false));
		assert!(session.toggle_propagate());
		assert!(session.settings().propagate);
		assert!(!session.toggle_propagate());
	}
}
