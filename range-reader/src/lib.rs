//! # Range Reader
//!
//! Client for the host capability that produces range data.
//!
//! ## Overview
//!
//! The host publishes a plugin named `RangeReader` whose `allRangeData`
//! action returns every range record it currently holds. This crate wraps
//! that capability behind [`RangeReader`], a stateless one-shot relay: each
//! [`read`](RangeReader::read) issues exactly one invocation through an
//! injected [`PluginBridge`](bridge_traits::PluginBridge) and hands the
//! host's payload to the caller's callback, unmodified.
//!
//! The payload shape is owned by the host side; it arrives here as an opaque
//! [`serde_json::Value`].
//!
//! ## Usage
//!
//! ```ignore
//! use range_reader::{RangeReader, ReaderConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ReaderConfig::builder()
//!         .bridge(Arc::new(my_transport))
//!         .build()
//!         .expect("Failed to build config");
//!
//!     let reader = RangeReader::from_config(config);
//!     reader.read(|data| println!("ranges: {data}"));
//! }
//! ```
//!
//! ## Error Handling
//!
//! `read` registers no error callback: a host-side failure is logged by the
//! bridge and dropped, and the caller's callback simply never fires. This
//! mirrors the capability's original contract; see the notes on
//! [`RangeReader::read`].
//!
//! ## Feature Flags
//!
//! - `host-shims`: default [`ReaderConfig`] construction to an in-process
//!   `bridge_host::HostBridge` when no transport is injected.

pub mod config;
pub mod error;
pub mod logging;
pub mod reader;

pub use config::ReaderConfig;
pub use error::{Error, Result};
pub use reader::{RangeReader, ACTION_ALL_RANGE_DATA, PLUGIN_NAME};
