//! Top-level fact gathering invocation.
//!
//! Ties the pieces together: resolve connection parameters, hand the
//! redaction set back to the caller, open a session through the supplied
//! factory, dispatch the requested facts, close the session, and
//! namespace the result.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::dispatch::{self, FactRequest};
use crate::error::{Result, SessionError};
use crate::namespace;
use crate::params::{self, AmbientContext, PartialParams, ProviderOverlay, redact};
use crate::session::{GetterArgs, SessionFactory};

/// One fact-gathering invocation, as handed over by the orchestrator.
///
/// Connection fields sit at the top level next to the request fields,
/// with an optional nested `provider` overlay below them.
#[derive(Debug, Deserialize)]
pub struct FactsInput {
    /// Explicit connection parameters, highest precedence.
    #[serde(flatten)]
    pub params: PartialParams,

    /// Nested provider overlay, beneath the explicit fields.
    pub provider: Option<ProviderOverlay>,

    /// Fact names to retrieve, in order. A single comma-separated string
    /// is accepted and split.
    #[serde(default = "default_filter", deserialize_with = "deserialize_filter")]
    pub filter: Vec<String>,

    /// Per-fact getter arguments.
    #[serde(default)]
    pub args: IndexMap<String, GetterArgs>,

    /// Record facts whose getter is not implemented instead of failing.
    #[serde(default)]
    pub ignore_notimplemented: bool,
}

impl Default for FactsInput {
    fn default() -> Self {
        Self {
            params: PartialParams::default(),
            provider: None,
            filter: default_filter(),
            args: IndexMap::new(),
            ignore_notimplemented: false,
        }
    }
}

fn default_filter() -> Vec<String> {
    vec!["facts".to_string()]
}

fn deserialize_filter<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Filter {
        List(Vec<String>),
        Csv(String),
    }

    match Filter::deserialize(deserializer)? {
        Filter::List(filter) => Ok(filter),
        Filter::Csv(csv) => Ok(csv
            .split(',')
            .map(|fact| fact.trim().to_string())
            .filter(|fact| !fact.is_empty())
            .collect()),
    }
}

/// Result of one fact-gathering invocation.
#[derive(Debug, Serialize)]
pub struct FactsOutput {
    /// Always reported as true.
    pub changed: bool,

    /// Namespaced facts, ready to merge into the orchestrator's fact
    /// store.
    pub ansible_facts: IndexMap<String, Value>,

    /// Facts skipped as not implemented, sorted ascending. Present iff
    /// skipping was requested, even when nothing was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_implemented: Option<Vec<String>>,
}

/// Gather the requested facts from one device.
///
/// Resolution failures abort before any connection is attempted. The
/// redaction set lands in `no_log` as soon as resolution succeeds, so
/// secrets stay suppressible even when a later step fails. After a
/// successful open the session is closed exactly once on every path.
/// A close failure after a clean dispatch is itself fatal; one after a
/// dispatch error is logged, and the dispatch error is surfaced.
pub fn gather_facts(
    factory: &dyn SessionFactory,
    ambient: AmbientContext,
    input: FactsInput,
    no_log: &mut BTreeSet<String>,
) -> Result<FactsOutput> {
    let FactsInput {
        params: explicit,
        provider,
        filter,
        args,
        ignore_notimplemented,
    } = input;

    let resolved = params::resolve(explicit, provider.as_ref(), ambient)?;
    no_log.extend(redact::no_log_values(&resolved, provider.as_ref()));

    debug!(
        "{} device: connecting to {} as {}",
        resolved.device_kind, resolved.hostname, resolved.username
    );
    let mut session = factory.open(&resolved)?;

    let request = FactRequest {
        filter,
        args,
        ignore_notimplemented,
    };
    let dispatched = dispatch::dispatch(session.as_mut(), &resolved.device_kind, &request);
    let closed = session.close();

    let result = match (dispatched, closed) {
        (Ok(result), Ok(())) => result,
        (Ok(_), Err(err)) => return Err(close_error(err).into()),
        (Err(err), Ok(())) => return Err(err.into()),
        (Err(err), Err(close_err)) => {
            warn!("{}", close_error(close_err));
            return Err(err.into());
        }
    };

    let ansible_facts = namespace::namespace_facts(&result.by_fact);
    let not_implemented =
        ignore_notimplemented.then(|| result.not_implemented.into_iter().collect());

    Ok(FactsOutput {
        changed: true,
        ansible_facts,
        not_implemented,
    })
}

fn close_error(err: SessionError) -> SessionError {
    match err {
        err @ SessionError::Close(_) => err,
        other => SessionError::Close(other.to_string()),
    }
}
