use std::fmt;
use thiserror::Error;

/// One of the three ordered remote lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Address,
    Location,
    Passes,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Address => "address",
            Stage::Location => "location",
            Stage::Passes => "passes",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum FlyoverError {
    #[error("Transport error: {message}")]
    TransportError { message: String },

    #[error("Service error: {message}")]
    ServiceError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{stage} lookup failed: {source}")]
    StageFailed {
        stage: Stage,
        #[source]
        source: Box<FlyoverError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Data,
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FlyoverError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::ServiceError {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Tags the error with the stage it came from. Already tagged errors keep
    /// their original stage.
    pub fn at_stage(self, stage: Stage) -> Self {
        match self {
            tagged @ Self::StageFailed { .. } => tagged,
            other => Self::StageFailed {
                stage,
                source: Box::new(other),
            },
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The underlying failure with any stage tag removed.
    pub fn root(&self) -> &FlyoverError {
        match self {
            Self::StageFailed { source, .. } => source.root(),
            other => other,
        }
    }

    /// The bare message of the underlying failure, without variant prefix.
    pub fn message(&self) -> String {
        match self.root() {
            Self::TransportError { message }
            | Self::ServiceError { message }
            | Self::ParseError { message }
            | Self::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.root() {
            Self::TransportError { .. } => ErrorCategory::Network,
            Self::ServiceError { .. } => ErrorCategory::Service,
            Self::ParseError { .. } => ErrorCategory::Data,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::StageFailed { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Service => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        let detail = self.message();
        match (self.stage(), self.category()) {
            (Some(stage), ErrorCategory::Network) => {
                format!("Could not reach the {} service: {}", stage, detail)
            }
            (Some(stage), ErrorCategory::Service) => {
                format!("The {} service reported a failure: {}", stage, detail)
            }
            (Some(stage), ErrorCategory::Data) => {
                format!("The {} service returned an unexpected response: {}", stage, detail)
            }
            (Some(stage), _) => format!("The {} lookup failed: {}", stage, detail),
            (None, ErrorCategory::Configuration) => format!("Invalid configuration: {}", self),
            (None, _) => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check your internet connection, or raise --timeout-seconds on a slow link"
            }
            ErrorCategory::Service => "The remote service may be down; try again later",
            ErrorCategory::Data => "The remote service changed its response format",
            ErrorCategory::Validation => {
                "The location service returned an unusable value; try again from another network"
            }
            ErrorCategory::Configuration => "Fix the configuration value named above",
            ErrorCategory::System => "Check file permissions and available resources",
        }
    }
}

impl From<reqwest::Error> for FlyoverError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::parse(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FlyoverError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FlyoverError>;
