use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    HttpError(String),
    ParseError(String),
    IoError(std::io::Error),
    ConfigError(String),
    DirectoryUnavailable(String, Box<Error>),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            Error::DirectoryUnavailable(_, cause) => Some(&**cause),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::HttpError(e) => write!(f, "HTTP error: {}", e),
            Error::ParseError(e) => write!(f, "Parse error: {}", e),
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::ConfigError(e) => write!(f, "Config error: {}", e),
            Error::DirectoryUnavailable(ctx, cause) => {
                write!(f, "Zone directory unavailable: {}: {}", ctx, cause)
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::HttpError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Error {
        Error::ParseError(err.to_string())
    }
}
