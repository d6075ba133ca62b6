//! # Netfacts
//!
//! Device fact gathering core for network automation orchestrators.
//!
//! Netfacts sits between an orchestration framework (Ansible-style task
//! runners) and the transport library that actually talks to network
//! devices. It resolves connection parameters, registers secret values
//! for output redaction, dispatches requested facts against a device
//! session, and namespaces the results for the orchestrator's fact
//! store. The device session itself is a pluggable collaborator; this
//! crate never opens a socket.
//!
//! ## Features
//!
//! - Three-tier parameter precedence (explicit, provider overlay,
//!   ambient context) where presence decides, not truthiness
//! - Secret collection for caller-side output redaction
//! - Explicit capability registry instead of getter-name probing
//! - Fail-fast fact dispatch with an opt-in skip for getters a device
//!   kind does not implement
//! - `napalm_`-prefixed result namespacing with `facts` flattening
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use netfacts::{
//!     AmbientContext, CapabilityRegistry, ConnectionParams, DeviceSession, FactsInput,
//!     GetterArgs, RegistrySession, SessionError, gather_facts,
//! };
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Transports provide the factory; this one serves canned data.
//!     let factory = |_params: &ConnectionParams| -> Result<Box<dyn DeviceSession>, SessionError> {
//!         let mut registry = CapabilityRegistry::new();
//!         registry.register("get_facts", |_args: &GetterArgs| {
//!             Ok(json!({"os_version": "4.28.0"}))
//!         })?;
//!         Ok(Box::new(RegistrySession::new(registry)))
//!     };
//!
//!     let input: FactsInput = serde_json::from_value(json!({
//!         "hostname": "192.0.2.1",
//!         "username": "admin",
//!         "password": "hunter2",
//!         "device_kind": "eos",
//!     }))?;
//!
//!     let mut no_log = BTreeSet::new();
//!     let output = gather_facts(&factory, AmbientContext::default(), input, &mut no_log)?;
//!
//!     assert_eq!(output.ansible_facts["napalm_os_version"], json!("4.28.0"));
//!     assert!(no_log.contains("hunter2"));
//!     Ok(())
//! }
//! ```

pub mod dispatch;
pub mod error;
pub mod facts;
pub mod namespace;
pub mod params;
pub mod session;

// Re-export main types for convenience
pub use error::{ConfigError, DispatchError, Error, Result, SessionError};
pub use facts::{FactsInput, FactsOutput, gather_facts};
pub use params::{AmbientContext, ConnectionParams, PartialParams, ProviderOverlay};
pub use session::{CapabilityRegistry, DeviceSession, GetterArgs, RegistrySession, SessionFactory};
