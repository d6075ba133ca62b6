//! Gather facts from a simulated device.
//!
//! netfacts never talks to a device itself; a transport collaborator
//! hands it sessions. This example wires an in-memory transport with a
//! few canned getters into one gathering invocation, end to end.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example gather
//! cargo run --example gather -- facts,interfaces
//! cargo run --example gather -- environment,facts
//! ```

use std::collections::BTreeSet;
use std::env;

use netfacts::{
    AmbientContext, CapabilityRegistry, ConnectionParams, DeviceSession, FactsInput, GetterArgs,
    RegistrySession, SessionError, gather_facts,
};
use serde_json::json;

fn open_demo_session(params: &ConnectionParams) -> Result<Box<dyn DeviceSession>, SessionError> {
    println!(
        "[transport] opening {} session to {} as {} (timeout {}s)",
        params.device_kind, params.hostname, params.username, params.timeout
    );

    let mut registry = CapabilityRegistry::new();
    registry.register("get_facts", |_args: &GetterArgs| {
        Ok(json!({
            "hostname": "sw1",
            "vendor": "arista",
            "os_version": "4.28.0",
            "uptime": 86400,
        }))
    })?;
    registry.register("get_interfaces", |_args: &GetterArgs| {
        Ok(json!({
            "Ethernet1": {"is_up": true, "speed": 10000},
            "Ethernet2": {"is_up": false, "speed": 10000},
        }))
    })?;
    // Not every getter exists for every device kind.
    registry.register("get_environment", |_args: &GetterArgs| {
        Err(SessionError::NotImplemented)
    })?;

    let session = RegistrySession::new(registry).with_close_hook(|| {
        println!("[transport] closing session");
        Ok(())
    });
    Ok(Box::new(session))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let filter = env::args().nth(1).unwrap_or_else(|| "facts".to_string());

    let input: FactsInput = serde_json::from_value(json!({
        "hostname": "192.0.2.10",
        "username": "admin",
        "password": "hunter2",
        "device_kind": "eos",
        "filter": filter,
        "ignore_notimplemented": true,
    }))?;

    let mut no_log = BTreeSet::new();
    let output = gather_facts(&open_demo_session, AmbientContext::default(), input, &mut no_log)?;

    println!("suppressing {} secret value(s) in echoed output", no_log.len());
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
