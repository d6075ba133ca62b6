//! Connection-parameter resolution.
//!
//! Three tiers feed one resolved parameter set: explicit top-level
//! fields, the nested provider overlay and ambient connection context.
//! Per field, the first tier with a present value wins. Presence decides,
//! not truthiness: an explicit `false`, empty string or zero is a real
//! value and is never replaced by a fallback tier.

mod ambient;
mod provider;
pub mod redact;

pub use ambient::AmbientContext;
pub use provider::ProviderOverlay;

use indexmap::IndexMap;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Connection timeout applied when no tier supplies one, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Explicit, top-level connection parameters: the highest precedence tier.
#[derive(Debug, Default, Deserialize)]
pub struct PartialParams {
    /// Target hostname. `host` is accepted as an alias.
    #[serde(alias = "host")]
    pub hostname: Option<String>,

    /// Username for the device connection.
    pub username: Option<String>,

    /// Password for the device connection.
    pub password: Option<SecretString>,

    /// Kind of device being connected to.
    pub device_kind: Option<String>,

    /// Connection timeout in seconds.
    pub timeout: Option<u64>,

    /// Additional arguments forwarded to the transport.
    pub optional_args: Option<IndexMap<String, Value>>,
}

/// Fully resolved connection parameters.
///
/// Built once per invocation and immutable afterwards. Every invocation
/// owns its parameters exclusively; nothing here is shared.
#[derive(Debug)]
pub struct ConnectionParams {
    /// Target hostname. Non-empty.
    pub hostname: String,

    /// Username for the device connection. Non-empty.
    pub username: String,

    /// Password for the device connection. Non-empty, debug-redacted,
    /// never serialized.
    pub password: SecretString,

    /// Kind of device being connected to. Non-empty.
    pub device_kind: String,

    /// Connection timeout in seconds.
    pub timeout: u64,

    /// Additional arguments forwarded to the transport.
    pub optional_args: IndexMap<String, Value>,
}

/// Pick the first present value across the three precedence tiers.
///
/// An explicit `false` (or any other present-but-falsy value) is kept,
/// never replaced by an overlay or ambient fallback.
pub fn resolve_field<T>(explicit: Option<T>, overlay: Option<T>, ambient: Option<T>) -> Option<T> {
    explicit.or(overlay).or(ambient)
}

/// Merge the three tiers and validate the result.
///
/// Required fields are checked in a fixed order (hostname, username,
/// device_kind, password); the first one absent or empty fails with
/// [`ConfigError::MissingField`]. No connection is opened here and
/// nothing is mutated beyond producing the merged structure.
pub fn resolve(
    explicit: PartialParams,
    overlay: Option<&ProviderOverlay>,
    ambient: AmbientContext,
) -> Result<ConnectionParams, ConfigError> {
    let AmbientContext {
        remote_addr,
        connection_user,
        default_remote_user,
        password: ambient_password,
        timeout: ambient_timeout,
    } = ambient;

    let hostname = resolve_field(
        explicit.hostname,
        overlay.and_then(|o| o.hostname().map(str::to_string)),
        remote_addr,
    );
    let username = resolve_field(
        explicit.username,
        overlay.and_then(|o| o.username.clone()),
        connection_user.or(default_remote_user),
    );
    let password = resolve_field(
        explicit.password,
        overlay.and_then(|o| o.password.clone()),
        ambient_password,
    );
    // No ambient tier exists for the device kind or the optional args.
    let device_kind = resolve_field(
        explicit.device_kind,
        overlay.and_then(|o| o.device_kind.clone()),
        None,
    );
    let timeout = resolve_field(
        explicit.timeout,
        overlay.and_then(|o| o.timeout),
        ambient_timeout,
    );
    let optional_args = resolve_field(
        explicit.optional_args,
        overlay.and_then(|o| o.optional_args.clone()),
        None,
    );

    let hostname = required("hostname", hostname)?;
    let username = required("username", username)?;
    let device_kind = required("device_kind", device_kind)?;
    let password = required_secret("password", password)?;

    Ok(ConnectionParams {
        hostname,
        username,
        password,
        device_kind,
        timeout: timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
        optional_args: optional_args.unwrap_or_default(),
    })
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingField { field }),
    }
}

fn required_secret(
    field: &'static str,
    value: Option<SecretString>,
) -> Result<SecretString, ConfigError> {
    match value {
        Some(value) if !value.expose_secret().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingField { field }),
    }
}
