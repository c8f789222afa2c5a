use std::fmt;

#[derive(Debug)]
pub enum Error {
    ElementNotFound(String),
    CommandError(String),
    ConfigError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ElementNotFound(locator) => write!(f, "Element not found: {}", locator),
            Error::CommandError(e) => write!(f, "Command error: {}", e),
            Error::ConfigError(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
