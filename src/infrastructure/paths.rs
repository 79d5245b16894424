//! Filesystem locations and terminal geometry.

use std::path::PathBuf;

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "portfolio-directory";

/// Fallback terminal size when the real size cannot be queried.
pub const DEFAULT_COLS: usize = 100;
pub const DEFAULT_ROWS: usize = 32;

/// Returns the directory for the persisted store and trace files.
///
/// `$XDG_DATA_HOME/portfolio-directory` on Linux, the platform equivalent
/// elsewhere, or the system temp directory if no data directory is known.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// # Examples
///
/// ```
/// use portfolio_directory::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Queries the terminal size.
///
/// Returns `(rows, cols)`, or the defaults when stdout is not a terminal.
#[must_use]
pub fn terminal_size() -> (usize, usize) {
    size_or_default(crossterm::terminal::size())
}

fn size_or_default(size: std::io::Result<(u16, u16)>) -> (usize, usize) {
    match size {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (usize::from(rows), usize::from(cols)),
        Ok(_) => (DEFAULT_ROWS, DEFAULT_COLS),
        Err(e) => {
            tracing::debug!(error = %e, "terminal size unavailable, using defaults");
            (DEFAULT_ROWS, DEFAULT_COLS)
        }
    }
}
