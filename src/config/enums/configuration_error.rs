use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    ParseError(#[from] toml::de::Error),

    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Default configuration written to {0}, edit it before starting")]
    Created(String),

    #[error("Server address must be specified")]
    MissingServerTopology,

    #[error("Invalid server address '{address}': {reason}")]
    InvalidAddress {
        address: String,
        reason: String,
    },

    #[error("Unknown log level encountered: '{0}'")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_topology_display() {
        assert_eq!(
            format!("{}", ConfigurationError::MissingServerTopology),
            "Server address must be specified"
        );
    }

    #[test]
    fn test_invalid_address_display() {
        let error = ConfigurationError::InvalidAddress {
            address: "host".to_string(),
            reason: "missing port".to_string(),
        };
        assert_eq!(format!("{}", error), "Invalid server address 'host': missing port");
    }

    #[test]
    fn test_io_error_conversion() {
        let error: ConfigurationError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(format!("{}", error), "gone");
    }
}
