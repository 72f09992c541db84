use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    DateNotFound(String),
    MenuNotFound(String),
    MalformedEntry(String),
}

impl Error {
    pub fn date_not_found(msg: &str) -> Self {
        Self::DateNotFound(msg.to_string())
    }
    pub fn menu_not_found(msg: &str) -> Self {
        Self::MenuNotFound(msg.to_string())
    }

    /// `entry` is the offending fragment, quoted back to the user as is.
    pub fn malformed_entry(entry: &str) -> Self {
        Self::MalformedEntry(entry.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateNotFound(msg) => write!(f, "Menu date not found: {msg}"),
            Self::MenuNotFound(msg) => write!(f, "Menu not found: {msg}"),
            Self::MalformedEntry(entry) => {
                write!(f, "Menu entry has no price to split off: {entry:?}")
            }
        }
    }
}

impl std::error::Error for Error {}
