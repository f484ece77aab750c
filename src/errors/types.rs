//! # Error Types
//!
//! Error taxonomy for every call made against the Kong admin API, built with `thiserror`.

use std::fmt;

/// Custom result type for kong-access operations
pub type Result<T> = std::result::Result<T, KongError>;

/// Main error type for the admin API client
#[derive(thiserror::Error, Debug)]
pub enum KongError {
    /// No base URL has been configured on the client
    #[error("The connection to the API gateway was not set up")]
    ConnectionNotConfigured,

    /// The admin API port is outside of 1..=65535
    #[error("The port {port} is outside of the supported range (1-65535)")]
    InvalidPort { port: u32 },

    /// A required string argument was empty or whitespace only
    #[error("Empty value supplied for parameter '{parameter}'")]
    EmptyParameter { parameter: &'static str },

    /// A target address did not contain a dotted IPv4 quad
    #[error("Invalid IPv4 address: '{address}'")]
    InvalidAddress { address: String },

    /// Network transport errors (connection refused, DNS, timeout)
    #[error("Transport error: {context}")]
    Transport {
        #[source]
        source: reqwest::Error,
        context: String,
    },

    /// Response body did not match the expected JSON shape
    #[error("Decode error: {context}")]
    Decode {
        #[source]
        source: serde_json::Error,
        context: String,
    },

    /// The gateway rejected the request with 400
    #[error("Bad request sent to the gateway for {resource}: {message}")]
    BadRequest { resource: String, message: String },

    /// The gateway answered 404 for a read or update
    #[error("Resource not found: {resource} '{name}'")]
    ResourceNotFound { resource: String, name: String },

    /// The gateway answered 409 for a create
    #[error("Resource already exists: {resource} '{name}'")]
    ResourceExists { resource: String, name: String },

    /// The create call succeeded but the resource could not be read back
    #[error("Resource not created: {resource} '{name}' is missing after creation")]
    ResourceNotCreated { resource: String, name: String },

    /// The update call succeeded but the new value could not be read back
    #[error("Resource not modified: {resource} '{name}' does not reflect the update")]
    ResourceNotModified { resource: String, name: String },

    /// Any status code the operation does not expect
    #[error("Unexpected HTTP status {status} for {operation}")]
    UnexpectedHttpCode { operation: String, status: u16 },

    /// Environment or configuration parsing errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Fieldless discriminant of [`KongError`] for branching without matching on fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ConnectionNotConfigured,
    InvalidPort,
    EmptyParameter,
    InvalidAddress,
    Transport,
    Decode,
    BadRequest,
    ResourceNotFound,
    ResourceExists,
    ResourceNotCreated,
    ResourceNotModified,
    UnexpectedHttpCode,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::ConnectionNotConfigured => "connection_not_configured",
            ErrorKind::InvalidPort => "invalid_port",
            ErrorKind::EmptyParameter => "empty_parameter",
            ErrorKind::InvalidAddress => "invalid_address",
            ErrorKind::Transport => "transport",
            ErrorKind::Decode => "decode",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::ResourceNotFound => "resource_not_found",
            ErrorKind::ResourceExists => "resource_exists",
            ErrorKind::ResourceNotCreated => "resource_not_created",
            ErrorKind::ResourceNotModified => "resource_not_modified",
            ErrorKind::UnexpectedHttpCode => "unexpected_http_code",
            ErrorKind::Config => "config",
        };
        write!(f, "{}", name)
    }
}

impl KongError {
    /// Create an empty parameter error
    pub fn empty_parameter(parameter: &'static str) -> Self {
        Self::EmptyParameter { parameter }
    }

    /// Create a transport error with context
    pub fn transport<S: Into<String>>(context: S, source: reqwest::Error) -> Self {
        Self::Transport { source, context: context.into() }
    }

    /// Create a decode error with context
    pub fn decode<S: Into<String>>(context: S, source: serde_json::Error) -> Self {
        Self::Decode { source, context: context.into() }
    }

    /// Create a bad request error
    pub fn bad_request<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        Self::BadRequest { resource: resource.into(), message: message.into() }
    }

    /// Create a not found error
    pub fn not_found<R: Into<String>, N: Into<String>>(resource: R, name: N) -> Self {
        Self::ResourceNotFound { resource: resource.into(), name: name.into() }
    }

    /// Create an already-exists error
    pub fn exists<R: Into<String>, N: Into<String>>(resource: R, name: N) -> Self {
        Self::ResourceExists { resource: resource.into(), name: name.into() }
    }

    /// Create a not-created verification error
    pub fn not_created<R: Into<String>, N: Into<String>>(resource: R, name: N) -> Self {
        Self::ResourceNotCreated { resource: resource.into(), name: name.into() }
    }

    /// Create a not-modified verification error
    pub fn not_modified<R: Into<String>, N: Into<String>>(resource: R, name: N) -> Self {
        Self::ResourceNotModified { resource: resource.into(), name: name.into() }
    }

    /// Create an unexpected status code error
    pub fn unexpected_status<S: Into<String>>(operation: S, status: u16) -> Self {
        Self::UnexpectedHttpCode { operation: operation.into(), status }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            KongError::ConnectionNotConfigured => ErrorKind::ConnectionNotConfigured,
            KongError::InvalidPort { .. } => ErrorKind::InvalidPort,
            KongError::EmptyParameter { .. } => ErrorKind::EmptyParameter,
            KongError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            KongError::Transport { .. } => ErrorKind::Transport,
            KongError::Decode { .. } => ErrorKind::Decode,
            KongError::BadRequest { .. } => ErrorKind::BadRequest,
            KongError::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            KongError::ResourceExists { .. } => ErrorKind::ResourceExists,
            KongError::ResourceNotCreated { .. } => ErrorKind::ResourceNotCreated,
            KongError::ResourceNotModified { .. } => ErrorKind::ResourceNotModified,
            KongError::UnexpectedHttpCode { .. } => ErrorKind::UnexpectedHttpCode,
            KongError::Config { .. } => ErrorKind::Config,
        }
    }

    /// HTTP status reported by the gateway, when the error came from one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            KongError::BadRequest { .. } => Some(400),
            KongError::ResourceNotFound { .. } => Some(404),
            KongError::ResourceExists { .. } => Some(409),
            KongError::UnexpectedHttpCode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for KongError {
    fn from(error: serde_json::Error) -> Self {
        Self::decode("JSON decoding failed", error)
    }
}
