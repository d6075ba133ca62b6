//! Explicit capability registry backing a device session.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use super::{DeviceSession, GetterArgs};
use crate::error::SessionError;

/// A registered getter callable.
pub type Capability = Box<dyn FnMut(&GetterArgs) -> Result<Value, SessionError> + Send>;

/// Teardown hook run when a [`RegistrySession`] is closed.
pub type CloseHook = Box<dyn FnOnce() -> Result<(), SessionError> + Send>;

/// Named getters a session exposes.
///
/// Transports populate the registry at session construction time, one
/// entry per supported fact category. Duplicate names are rejected.
#[derive(Default)]
pub struct CapabilityRegistry {
    getters: IndexMap<String, Capability>,
}

impl CapabilityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a getter under its full identifier (e.g. `get_facts`).
    pub fn register<F>(&mut self, name: impl Into<String>, getter: F) -> Result<(), SessionError>
    where
        F: FnMut(&GetterArgs) -> Result<Value, SessionError> + Send + 'static,
    {
        let name = name.into();
        if self.getters.contains_key(&name) {
            return Err(SessionError::AlreadyRegistered(name));
        }
        self.getters.insert(name, Box::new(getter));
        Ok(())
    }

    /// Check if a getter is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.getters.contains_key(name)
    }

    /// List all registered getter names.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.getters.keys()
    }

    /// Invoke a registered getter.
    pub fn invoke(&mut self, name: &str, args: &GetterArgs) -> Result<Value, SessionError> {
        match self.getters.get_mut(name) {
            Some(getter) => getter(args),
            None => Err(SessionError::Getter(format!("unknown getter '{}'", name))),
        }
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("getters", &self.getters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A [`DeviceSession`] backed by a [`CapabilityRegistry`].
///
/// Transports build the registry, optionally attach a close hook that
/// tears down the underlying connection, and hand the boxed session to
/// the invocation.
pub struct RegistrySession {
    registry: CapabilityRegistry,
    close_hook: Option<CloseHook>,
}

impl RegistrySession {
    /// Session over a registry with no teardown work.
    pub fn new(registry: CapabilityRegistry) -> Self {
        Self {
            registry,
            close_hook: None,
        }
    }

    /// Attach a hook run once when the session is closed.
    pub fn with_close_hook<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() -> Result<(), SessionError> + Send + 'static,
    {
        self.close_hook = Some(Box::new(hook));
        self
    }
}

impl DeviceSession for RegistrySession {
    fn has_capability(&self, getter: &str) -> bool {
        self.registry.contains(getter)
    }

    fn capability_names(&self) -> Vec<String> {
        self.registry.names().cloned().collect()
    }

    fn invoke(&mut self, getter: &str, args: &GetterArgs) -> Result<Value, SessionError> {
        self.registry.invoke(getter, args)
    }

    fn close(&mut self) -> Result<(), SessionError> {
        match self.close_hook.take() {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for RegistrySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrySession")
            .field("registry", &self.registry)
            .field("close_hook", &self.close_hook.is_some())
            .finish()
    }
}
