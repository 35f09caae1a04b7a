//! # Host Bridge Traits
//!
//! Contract between client code and the host-provided plugin mechanism.
//!
//! ## Overview
//!
//! This crate defines both sides of the bridge boundary. Client code holds a
//! [`PluginBridge`](plugin::PluginBridge) and issues
//! [`InvocationRequest`](plugin::InvocationRequest)s naming a plugin and an
//! action; host code publishes capabilities by implementing
//! [`HostPlugin`](plugin::HostPlugin). Neither side sees the other's types
//! beyond this crate.
//!
//! Completion is single-shot and callback-driven: an invocation carries a
//! [`SuccessCallback`](platform::SuccessCallback) and an optional
//! [`ErrorCallback`](platform::ErrorCallback), and a conforming bridge
//! delivers to at most one of them, at most once. The result payload is an
//! opaque [`serde_json::Value`] owned by the answering plugin.
//!
//! ## Dependency Injection
//!
//! The bridge is always passed in explicitly (`Arc<dyn PluginBridge>`), never
//! reached through a process-wide global. Construction sites decide which
//! transport a component talks to, and tests substitute a recording bridge
//! without touching ambient state:
//!
//! ```ignore
//! use bridge_traits::{InvocationRequest, PluginBridge};
//! use std::sync::Arc;
//!
//! struct Device {
//!     bridge: Arc<dyn PluginBridge>,
//! }
//!
//! impl Device {
//!     fn new(bridge: Arc<dyn PluginBridge>) -> Self {
//!         Self { bridge }
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Host
//! plugins should:
//!
//! - Convert capability-specific failures to `BridgeError`
//! - Signal an unknown action with `BridgeError::InvalidAction`
//! - Provide actionable error messages
//!
//! ## Thread Safety
//!
//! Trait and callback bounds require `Send + Sync` on native targets so
//! bridges can be shared across async tasks. WebAssembly hosts are
//! single-threaded and hold non-thread-safe browser objects, so the bounds
//! relax there; see [`platform`].

pub mod error;
pub mod platform;
pub mod plugin;

pub use error::BridgeError;

// Re-export commonly used types
pub use platform::{ErrorCallback, SuccessCallback};
pub use plugin::{HostPlugin, InvocationId, InvocationRequest, PluginBridge};
