use crate::parse;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// the page could not be fetched: transport failure, timeout or an error status
    DocumentUnavailable(reqwest::Error),
    Parse(parse::Error),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::DocumentUnavailable(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::DocumentUnavailable(e) if e.is_timeout() => {
                write!(f, "Menu page unavailable: request timed out ({e})")
            }
            Error::DocumentUnavailable(e) => write!(f, "Menu page unavailable: {e}"),
            Error::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DocumentUnavailable(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
