//! Error types for netfacts.

use thiserror::Error;

/// Main error type for netfacts operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection-parameter resolution errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Device-session boundary errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Fact dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Connection-parameter resolution errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required connection field is absent (or empty) after the
    /// explicit, provider and ambient tiers have been merged.
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

/// Errors crossing the device-session boundary.
///
/// Session implementations produce these; the dispatcher translates the
/// invoke-time variants into [`DispatchError`] values that name the
/// failing fact.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Session open failed
    #[error("cannot connect to device: {0}")]
    Connect(String),

    /// A getter identifier was registered twice
    #[error("capability '{0}' is already registered")]
    AlreadyRegistered(String),

    /// The getter exists but is not implemented for this device kind
    #[error("not implemented")]
    NotImplemented,

    /// The getter failed for any other reason
    #[error("{0}")]
    Getter(String),

    /// Session close failed
    #[error("cannot close device connection: {0}")]
    Close(String),
}

/// Fact dispatch errors.
///
/// Any of these aborts the whole request; there is no partial result.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The requested filter has no corresponding capability on the session
    #[error("filter not recognized: {0}")]
    UnsupportedFilter(String),

    /// The filter is recognized but its getter is not implemented for
    /// this device kind, and the request did not ask to ignore that
    #[error("filter '{filter}' is not implemented for device kind '{device_kind}' [get_{filter}()]")]
    NotImplemented { filter: String, device_kind: String },

    /// A single fact retrieval failed
    #[error("[{filter}] cannot retrieve device data: {cause}")]
    Device { filter: String, cause: String },
}

/// Result type alias using netfacts' Error.
pub type Result<T> = std::result::Result<T, Error>;
