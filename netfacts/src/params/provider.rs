//! Provider overlay: a nested bundle of connection parameters.

use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;

/// A single nested structure bundling connection parameters.
///
/// Overlay values sit between explicit fields and ambient context in
/// precedence: an explicit field always beats its overlay counterpart,
/// and the overlay beats ambient defaults. Within the overlay, `host` is
/// accepted as an alias for `hostname`; when both are present, `hostname`
/// wins. Unrecognized keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderOverlay {
    /// Target hostname.
    pub hostname: Option<String>,

    /// Alias for `hostname`, used only when `hostname` itself is unset.
    pub host: Option<String>,

    /// Username for the device connection.
    pub username: Option<String>,

    /// Password for the device connection.
    pub password: Option<SecretString>,

    /// Secondary secret (e.g. an enable secret). Never part of the
    /// resolved parameters; carried so it can be registered for
    /// redaction.
    pub secret: Option<SecretString>,

    /// Kind of device being connected to.
    pub device_kind: Option<String>,

    /// Connection timeout in seconds.
    pub timeout: Option<u64>,

    /// Additional arguments forwarded to the transport.
    pub optional_args: Option<IndexMap<String, Value>>,
}

impl ProviderOverlay {
    /// Hostname with the `host` alias applied.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref().or(self.host.as_deref())
    }
}
