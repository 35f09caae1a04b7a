//! # Reader Configuration
//!
//! Wires the dependencies a [`RangeReader`](crate::RangeReader) needs.
//!
//! ## Overview
//!
//! The configuration system uses a builder to construct a [`ReaderConfig`]
//! holding the injected plugin bridge. It enforces fail-fast validation:
//! `build()` errors with an actionable message when no bridge is provided
//! and no default is available, instead of deferring the failure to the
//! first `read`.
//!
//! When the `host-shims` feature is enabled and the builder runs inside a
//! Tokio runtime, an in-process `bridge_host::HostBridge` over an empty
//! registry is injected automatically if no bridge was set.
//! Reads against that default fail host-side until a plugin named
//! `RangeReader` is registered, which is the same observable behavior as
//! invoking an unregistered host capability.
//!
//! ## Usage
//!
//! ```ignore
//! use range_reader::{RangeReader, ReaderConfig};
//! use std::sync::Arc;
//!
//! let config = ReaderConfig::builder()
//!     .bridge(Arc::new(MyTransport))
//!     .build()?;
//! let reader = RangeReader::from_config(config);
//! # Ok::<(), range_reader::Error>(())
//! ```

use crate::error::{Error, Result};
use bridge_traits::PluginBridge;
use std::sync::Arc;

/// Configuration for constructing a [`RangeReader`](crate::RangeReader).
#[derive(Clone)]
pub struct ReaderConfig {
    /// Transport every invocation is issued through.
    pub bridge: Arc<dyn PluginBridge>,
}

impl std::fmt::Debug for ReaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderConfig")
            .field("bridge", &"PluginBridge { ... }")
            .finish()
    }
}

impl ReaderConfig {
    /// Creates a new builder for constructing a `ReaderConfig`.
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

#[cfg(feature = "host-shims")]
fn provide_default_bridge() -> Result<Arc<dyn PluginBridge>> {
    use bridge_host::{HostBridge, PluginRegistry};

    let registry = Arc::new(PluginRegistry::new());
    let bridge = HostBridge::new(registry).map_err(|e| {
        Error::Config(format!("Failed to initialize default HostBridge: {}", e))
    })?;
    let bridge: Arc<dyn PluginBridge> = Arc::new(bridge);
    Ok(bridge)
}

#[cfg(not(feature = "host-shims"))]
fn provide_default_bridge() -> Result<Arc<dyn PluginBridge>> {
    Err(Error::CapabilityMissing {
        capability: "PluginBridge".to_string(),
        message: "No plugin bridge implementation provided. \
                 In-process hosts: enable the 'host-shims' feature to default to HostBridge. \
                 Other hosts: inject a platform transport with .bridge()."
            .to_string(),
    })
}

/// Builder for [`ReaderConfig`] instances.
#[derive(Default)]
pub struct ReaderConfigBuilder {
    bridge: Option<Arc<dyn PluginBridge>>,
}

impl ReaderConfigBuilder {
    /// Sets the plugin bridge implementation.
    ///
    /// If not provided, the in-process default is used when the
    /// `host-shims` feature is enabled.
    pub fn bridge(mut self, bridge: Arc<dyn PluginBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Builds the final `ReaderConfig` instance.
    ///
    /// Returns an error when no bridge was set and no default is available,
    /// or when the default cannot be constructed (e.g. no Tokio runtime in
    /// scope for the in-process shim).
    pub fn build(self) -> Result<ReaderConfig> {
        let bridge = match self.bridge {
            Some(bridge) => bridge,
            None => provide_default_bridge()?,
        };

        Ok(ReaderConfig { bridge })
    }
}
