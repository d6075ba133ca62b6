//! Ambient connection context: the lowest precedence tier.

use secrecy::SecretString;

/// Defaults derived from the orchestration engine's live connection.
///
/// When an engine schedules a fact-gathering run it usually already knows
/// the address it is targeting, the user it connected as and the
/// credentials and timeout of that connection. Those values fill any
/// parameter neither the explicit fields nor the provider overlay
/// supplied. Absent fields simply provide no fallback.
#[derive(Debug, Default)]
pub struct AmbientContext {
    /// Address of the current remote target.
    pub remote_addr: Option<String>,

    /// Username derived from the live connection.
    pub connection_user: Option<String>,

    /// Configured default remote user, consulted when no connection user
    /// is known.
    pub default_remote_user: Option<String>,

    /// Password of the current connection.
    pub password: Option<SecretString>,

    /// Timeout of the current connection, in seconds.
    pub timeout: Option<u64>,
}
