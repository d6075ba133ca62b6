//! Fact dispatch over an open device session.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;

use crate::error::{DispatchError, SessionError};
use crate::session::{DeviceSession, GetterArgs, getter_name};

/// One batch of facts to retrieve.
#[derive(Debug, Default)]
pub struct FactRequest {
    /// Fact names in dispatch order. Duplicate entries dispatch once each.
    pub filter: Vec<String>,

    /// Per-fact getter arguments.
    pub args: IndexMap<String, GetterArgs>,

    /// Record not-implemented getters and continue instead of failing.
    pub ignore_notimplemented: bool,
}

/// Retrieved facts plus the getters skipped as not implemented.
#[derive(Debug, Default)]
pub struct FactResult {
    /// Fact name to retrieved value, in first-retrieval order.
    pub by_fact: IndexMap<String, Value>,

    /// Facts skipped because their getter is not implemented for the
    /// device kind. Empty unless skipping was requested.
    pub not_implemented: BTreeSet<String>,
}

/// Walk the requested facts in order, invoking each getter.
///
/// Fail-fast: the first unrecognized filter, non-ignored not-implemented
/// getter or device failure aborts the whole batch and no partial result
/// escapes. The session is left open either way; closing it belongs to
/// the caller.
pub fn dispatch(
    session: &mut dyn DeviceSession,
    device_kind: &str,
    request: &FactRequest,
) -> Result<FactResult, DispatchError> {
    let mut result = FactResult::default();
    let no_args = GetterArgs::new();

    for fact in &request.filter {
        let getter = getter_name(fact);
        if !session.has_capability(&getter) {
            return Err(DispatchError::UnsupportedFilter(fact.clone()));
        }

        let args = request.args.get(fact.as_str()).unwrap_or(&no_args);
        debug!("{} device: invoking {}", device_kind, getter);
        match session.invoke(&getter, args) {
            Ok(value) => {
                result.by_fact.insert(fact.clone(), value);
            }
            Err(SessionError::NotImplemented) if request.ignore_notimplemented => {
                warn!("{} device: {} not implemented, skipping", device_kind, getter);
                result.not_implemented.insert(fact.clone());
            }
            Err(SessionError::NotImplemented) => {
                return Err(DispatchError::NotImplemented {
                    filter: fact.clone(),
                    device_kind: device_kind.to_string(),
                });
            }
            Err(err) => {
                return Err(DispatchError::Device {
                    filter: fact.clone(),
                    cause: err.to_string(),
                });
            }
        }
    }

    Ok(result)
}
