use derive_more::Display;

/// Dashboard error kinds. Caught at the pipeline boundary, never thrown to the UI.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DashboardError {
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    #[display(fmt = "Parse Error: {}", _0)]
    Parse(String),
    #[display(fmt = "Out Of Range Error: volume index {} beyond length {}", index, len)]
    OutOfRange { index: usize, len: usize },
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
}

/// Coarse classification used by logs and the error banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    Network,
    Parse,
    OutOfRange,
    Config,
}

impl DashboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Network(_) => ErrorKind::Network,
            DashboardError::Parse(_) => ErrorKind::Parse,
            DashboardError::OutOfRange { .. } => ErrorKind::OutOfRange,
            DashboardError::Config(_) => ErrorKind::Config,
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Parse(err.to_string())
    }
}

pub type NetworkResult<T> = Result<T, DashboardError>;
pub type DeriveResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_parse_errors() {
        let err: DashboardError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn out_of_range_display() {
        let err = DashboardError::OutOfRange { index: 3, len: 3 };
        assert_eq!(err.to_string(), "Out Of Range Error: volume index 3 beyond length 3");
    }
}
