// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_keep_their_message() {
        let err: Error = std::io::Error::other("settings.toml is a directory").into();
        match err {
            Error::Io(message) => assert!(message.contains("settings.toml")),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn toml_parse_errors_become_config_errors() {
        let parse_error = toml::from_str::<toml::Value>("width = =").unwrap_err();
        assert!(matches!(Error::from(parse_error), Error::Config(_)));
    }

    #[test]
    fn display_labels_each_variant() {
        assert!(Error::Io("denied".into()).to_string().starts_with("I/O Error"));
        assert!(Error::Config("bad field".into())
            .to_string()
            .starts_with("Config Error"));
    }
}
