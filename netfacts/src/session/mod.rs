//! Device-session boundary.
//!
//! Connection and retrieval live in an external transport collaborator.
//! This module defines the contract it implements: a [`SessionFactory`]
//! opens a session from resolved parameters, and a [`DeviceSession`]
//! exposes a discoverable set of named getters plus a close operation.
//! The shipped [`CapabilityRegistry`] and [`RegistrySession`] let
//! collaborators register getters explicitly at construction time.

mod registry;

pub use registry::{CapabilityRegistry, RegistrySession};

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SessionError;
use crate::params::ConnectionParams;

/// Prefix joining a fact name to its getter identifier.
pub const GETTER_PREFIX: &str = "get_";

/// Arguments for a single getter invocation.
pub type GetterArgs = IndexMap<String, Value>;

/// Getter identifier for a fact name (`facts` becomes `get_facts`).
pub fn getter_name(fact: &str) -> String {
    format!("{}{}", GETTER_PREFIX, fact)
}

/// An open connection to one device.
///
/// Each session is owned by a single invocation, used sequentially, and
/// closed exactly once by the caller.
pub trait DeviceSession: Send {
    /// Check whether the session exposes the named getter.
    fn has_capability(&self, getter: &str) -> bool;

    /// List every getter the session exposes.
    fn capability_names(&self) -> Vec<String>;

    /// Invoke a getter with its argument mapping.
    ///
    /// A getter the device kind does not support reports
    /// [`SessionError::NotImplemented`]; any other failure reports
    /// [`SessionError::Getter`].
    fn invoke(&mut self, getter: &str, args: &GetterArgs) -> Result<Value, SessionError>;

    /// Close the underlying connection.
    fn close(&mut self) -> Result<(), SessionError>;
}

/// Opens device sessions from resolved connection parameters.
///
/// Which transport backs the sessions is decided once by the embedder,
/// at process start, by picking the factory to pass in.
pub trait SessionFactory: Send + Sync {
    /// Open a session, reporting failure as [`SessionError::Connect`].
    fn open(&self, params: &ConnectionParams) -> Result<Box<dyn DeviceSession>, SessionError>;
}

impl<F> SessionFactory for F
where
    F: Fn(&ConnectionParams) -> Result<Box<dyn DeviceSession>, SessionError> + Send + Sync,
{
    fn open(&self, params: &ConnectionParams) -> Result<Box<dyn DeviceSession>, SessionError> {
        self(params)
    }
}
