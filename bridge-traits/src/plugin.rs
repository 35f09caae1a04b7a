//! Plugin Invocation Contract
//!
//! Defines the generic mechanism through which core code reaches named host
//! capabilities, and the contract host capabilities implement on the other
//! side of that boundary.
//!
//! An invocation is identified by a plugin name and an action name, carries a
//! list of JSON arguments, and completes asynchronously through single-shot
//! callbacks. The payload stays an opaque [`serde_json::Value`]; its shape is
//! owned by whichever host capability answers the call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::error::Result;
use crate::platform::{ErrorCallback, PlatformSendSync, SuccessCallback};

/// Identifier correlating one invocation with its eventual callback delivery.
///
/// Bridge implementations include this id in their dispatch logs so a dropped
/// or delayed delivery can be traced back to the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationId(Uuid);

impl InvocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One request across the bridge: which plugin, which action, which arguments.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    pub id: InvocationId,
    pub plugin: String,
    pub action: String,
    pub args: Vec<Value>,
}

impl InvocationRequest {
    /// Creates a request with no arguments.
    pub fn new(plugin: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: InvocationId::new(),
            plugin: plugin.into(),
            action: action.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, value: Value) -> Self {
        self.args.push(value);
        self
    }
}

/// The generic plugin-invocation mechanism.
///
/// Implementations route a request to the host capability named by
/// `request.plugin` and deliver the outcome through the supplied callbacks.
/// The original host mechanism is an ambient global; here it is an injected
/// dependency so callers can swap transports and tests can observe traffic.
///
/// # Contract
///
/// - `invoke` returns immediately; completion is entirely callback-driven.
/// - At most one of the two callbacks is invoked, at most once.
/// - With `on_error` set to `None`, a host-side failure is dropped at the
///   bridge boundary. Implementations should log the drop; they must not
///   panic or reroute it to `on_success`.
/// - No retry, caching, cancellation, timeout, or ordering guarantees. A
///   caller whose invocation never completes has no way to detect that from
///   this layer.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::{InvocationRequest, PluginBridge};
///
/// fn query(bridge: &dyn PluginBridge) {
///     let request = InvocationRequest::new("RangeReader", "allRangeData");
///     bridge.invoke(
///         request,
///         Box::new(|value| println!("host answered: {value}")),
///         None,
///     );
/// }
/// ```
pub trait PluginBridge: PlatformSendSync {
    /// Dispatches `request` to the host capability it names.
    fn invoke(
        &self,
        request: InvocationRequest,
        on_success: SuccessCallback,
        on_error: Option<ErrorCallback>,
    );
}

/// A host capability reachable through a [`PluginBridge`].
///
/// One implementation answers every action published under its plugin name.
/// Unknown actions are signalled with
/// [`BridgeError::InvalidAction`](crate::BridgeError::InvalidAction) rather
/// than a panic, since action names arrive from the far side of the bridge.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait HostPlugin: PlatformSendSync {
    /// Plugin name this capability is registered under.
    fn name(&self) -> &str;

    /// Executes one action and returns its payload.
    async fn execute(&self, action: &str, args: &[Value]) -> Result<Value>;
}
