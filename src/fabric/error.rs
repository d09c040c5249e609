use thiserror::Error;

/// Failures a discovery call can report. Each carries a stable negative
/// code modeled on the matching errno value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FabricError {
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    #[error("not supported: {0}")]
    NotSupported(String),

    #[error("address not available: {0}")]
    AddrNotAvail(String),
}

impl FabricError {
    /// The negative failure code for this error.
    pub fn code(&self) -> i32 {
        match self {
            FabricError::InvalidArg(_) => -22,
            FabricError::NotSupported(_) => -38,
            FabricError::AddrNotAvail(_) => -99,
        }
    }

    /// The process exit code for this error, the negation of [`code`].
    ///
    /// [`code`]: FabricError::code
    pub fn exit_code(&self) -> u8 {
        (-self.code()) as u8
    }
}

pub type Result<T> = std::result::Result<T, FabricError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FabricError::AddrNotAvail("service 'x' is not a valid port".to_string());
        assert_eq!(
            err.to_string(),
            "address not available: service 'x' is not a valid port"
        );

        let err = FabricError::NotSupported("interface version 9.0".to_string());
        assert_eq!(err.to_string(), "not supported: interface version 9.0");

        let err = FabricError::InvalidArg("node name is empty".to_string());
        assert_eq!(err.to_string(), "invalid argument: node name is empty");
    }

    #[test]
    fn test_error_codes_are_negative() {
        assert_eq!(FabricError::InvalidArg(String::new()).code(), -22);
        assert_eq!(FabricError::NotSupported(String::new()).code(), -38);
        assert_eq!(FabricError::AddrNotAvail(String::new()).code(), -99);
    }

    #[test]
    fn test_exit_code_negates_failure_code() {
        assert_eq!(FabricError::InvalidArg(String::new()).exit_code(), 22);
        assert_eq!(FabricError::NotSupported(String::new()).exit_code(), 38);
        assert_eq!(FabricError::AddrNotAvail(String::new()).exit_code(), 99);
    }
}
