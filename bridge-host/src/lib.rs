//! # In-Process Host Bridge
//!
//! Implementation of the plugin bridge for hosts whose capabilities live in
//! the same process as the client code.
//!
//! ## Overview
//!
//! This crate provides the host-side half of the bridge contract:
//! - [`PluginRegistry`] holds named [`HostPlugin`](bridge_traits::HostPlugin)
//!   implementations
//! - [`HostBridge`] implements
//!   [`PluginBridge`](bridge_traits::PluginBridge), spawning one Tokio task
//!   per invocation and delivering the outcome to the caller's callbacks at
//!   most once
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_host::{HostBridge, PluginRegistry};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = Arc::new(PluginRegistry::new());
//!     registry.register(Arc::new(MyPlugin)).await;
//!
//!     let bridge = HostBridge::new(registry).expect("inside runtime");
//!     // Hand `Arc::new(bridge)` to client-side components.
//! }
//! ```

mod bridge;
mod registry;

pub use bridge::HostBridge;
pub use registry::PluginRegistry;
