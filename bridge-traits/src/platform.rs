//! Helper abstractions that keep trait and callback bounds aligned with the
//! threading guarantees of each target.
//!
//! Native targets require `Send + Sync` so that bridge implementations can be
//! shared freely across async tasks. WebAssembly hosts run the bridge on a
//! single thread and hold browser-provided objects that are not thread-safe,
//! so the same bounds cannot be satisfied there. The items below make the
//! bounds conditional without duplicating every trait and alias definition.

use serde_json::Value;

use crate::error::BridgeError;

/// Marker trait that applies `Send + Sync` on native targets while becoming a
/// no-op on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// Marker trait equivalent to `Send` on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSend for T where T: Send {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSend {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSend for T {}

/// Success callback delivered by a bridge implementation.
///
/// `FnOnce` is deliberate: the box is consumed on delivery, so an
/// implementation cannot invoke the same callback twice.
#[cfg(not(target_arch = "wasm32"))]
pub type SuccessCallback = Box<dyn FnOnce(Value) + Send + 'static>;

#[cfg(target_arch = "wasm32")]
pub type SuccessCallback = Box<dyn FnOnce(Value) + 'static>;

/// Error callback delivered by a bridge implementation.
///
/// An invocation may decline the error channel entirely by passing `None`,
/// in which case host-side failures stop at the bridge boundary.
#[cfg(not(target_arch = "wasm32"))]
pub type ErrorCallback = Box<dyn FnOnce(BridgeError) + Send + 'static>;

#[cfg(target_arch = "wasm32")]
pub type ErrorCallback = Box<dyn FnOnce(BridgeError) + 'static>;
