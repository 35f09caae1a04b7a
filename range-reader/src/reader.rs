//! Client for the host's `RangeReader` capability.

use bridge_traits::{InvocationRequest, PluginBridge};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::config::ReaderConfig;

/// Plugin name the host publishes its range capability under.
pub const PLUGIN_NAME: &str = "RangeReader";

/// Action returning every range record the host currently holds.
pub const ACTION_ALL_RANGE_DATA: &str = "allRangeData";

/// Stateless client relaying range data from the host.
///
/// One instance wraps one injected transport and exposes a single
/// operation, [`read`](RangeReader::read). There is no connection state,
/// no caching, and no coordination between calls; every `read` is an
/// independent one-shot invocation.
pub struct RangeReader {
    bridge: Arc<dyn PluginBridge>,
}

impl RangeReader {
    /// Creates a reader over the given transport.
    pub fn new(bridge: Arc<dyn PluginBridge>) -> Self {
        Self { bridge }
    }

    /// Creates a reader from a built [`ReaderConfig`].
    pub fn from_config(config: ReaderConfig) -> Self {
        Self::new(config.bridge)
    }

    /// Requests all range data from the host.
    ///
    /// Issues exactly one `allRangeData` invocation, with no arguments, and
    /// returns immediately. The host's payload reaches `on_result` at most
    /// once, unmodified, some time later on the bridge's completion context.
    ///
    /// Host-side failures never reach `on_result`: the error channel is left
    /// unregistered, so a failed invocation is indistinguishable from one
    /// that never completes. Callers needing delivery guarantees must get
    /// them from the surrounding system, not from this layer.
    pub fn read<F>(&self, on_result: F)
    where
        F: FnOnce(Value) + Send + 'static,
    {
        let request = InvocationRequest::new(PLUGIN_NAME, ACTION_ALL_RANGE_DATA);
        debug!(id = %request.id, "requesting all range data");
        self.bridge.invoke(request, Box::new(on_result), None);
    }
}

impl std::fmt::Debug for RangeReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeReader")
            .field("bridge", &"PluginBridge { ... }")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::platform::{ErrorCallback, SuccessCallback};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    type Recorded = (InvocationRequest, SuccessCallback, Option<ErrorCallback>);

    /// Bridge that records traffic and lets the test play the host's part.
    #[derive(Default)]
    struct RecordingBridge {
        invocations: Mutex<Vec<Recorded>>,
    }

    impl RecordingBridge {
        fn take_all(&self) -> Vec<Recorded> {
            std::mem::take(&mut *self.invocations.lock().unwrap())
        }
    }

    impl PluginBridge for RecordingBridge {
        fn invoke(
            &self,
            request: InvocationRequest,
            on_success: SuccessCallback,
            on_error: Option<ErrorCallback>,
        ) {
            self.invocations
                .lock()
                .unwrap()
                .push((request, on_success, on_error));
        }
    }

    fn reader_with_recorder() -> (RangeReader, Arc<RecordingBridge>) {
        let bridge = Arc::new(RecordingBridge::default());
        (RangeReader::new(bridge.clone()), bridge)
    }

    #[test]
    fn test_read_issues_exactly_one_invocation() {
        let (reader, bridge) = reader_with_recorder();

        reader.read(|_| {});

        let invocations = bridge.take_all();
        assert_eq!(invocations.len(), 1);
        let (request, _, _) = &invocations[0];
        assert_eq!(request.plugin, PLUGIN_NAME);
        assert_eq!(request.action, ACTION_ALL_RANGE_DATA);
        assert!(request.args.is_empty());
    }

    #[test]
    fn test_read_leaves_error_channel_unregistered() {
        let (reader, bridge) = reader_with_recorder();

        reader.read(|_| {});

        let (_, _, on_error) = bridge.take_all().pop().unwrap();
        assert!(on_error.is_none());
    }

    #[test]
    fn test_read_returns_before_delivery() {
        let (reader, bridge) = reader_with_recorder();
        let calls = Arc::new(AtomicUsize::new(0));

        let observed = calls.clone();
        reader.read(move |_| {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        // read has returned; nothing was delivered yet.
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let (_, on_success, _) = bridge.take_all().pop().unwrap();
        on_success(json!(null));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_host_payload_arrives_unmodified() {
        let (reader, bridge) = reader_with_recorder();
        let delivered = Arc::new(Mutex::new(None));

        let slot = delivered.clone();
        reader.read(move |value| {
            *slot.lock().unwrap() = Some(value);
        });

        let (_, on_success, _) = bridge.take_all().pop().unwrap();
        on_success(json!({"ranges": [[0, 10]]}));

        assert_eq!(
            delivered.lock().unwrap().take().unwrap(),
            json!({"ranges": [[0, 10]]})
        );
    }

    #[test]
    fn test_reads_are_independent_invocations() {
        let (reader, bridge) = reader_with_recorder();

        reader.read(|_| {});
        reader.read(|_| {});

        let invocations = bridge.take_all();
        assert_eq!(invocations.len(), 2);
        assert_ne!(invocations[0].0.id, invocations[1].0.id);
    }
}
