//! Invocation dispatch onto the Tokio runtime.

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::platform::{ErrorCallback, SuccessCallback};
use bridge_traits::{HostPlugin, InvocationRequest, PluginBridge};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::registry::PluginRegistry;

/// In-process [`PluginBridge`] backed by a [`PluginRegistry`].
///
/// Each invocation runs as its own task on the runtime whose handle was
/// captured at construction, so `invoke` returns to the caller before the
/// plugin executes. Delivery is at most once per invocation: the callbacks
/// are consumed when fired, and exactly one of them is fired per outcome.
pub struct HostBridge {
    registry: Arc<PluginRegistry>,
    handle: Handle,
}

impl HostBridge {
    /// Creates a bridge dispatching on the ambient Tokio runtime.
    ///
    /// Fails when no runtime is in scope; use [`HostBridge::with_handle`] to
    /// target an explicit runtime from synchronous code.
    pub fn new(registry: Arc<PluginRegistry>) -> Result<Self> {
        let handle = Handle::try_current().map_err(|_| {
            BridgeError::OperationFailed(
                "HostBridge::new requires a running Tokio runtime; \
                 use HostBridge::with_handle to supply one explicitly"
                    .to_string(),
            )
        })?;
        Ok(Self::with_handle(registry, handle))
    }

    /// Creates a bridge dispatching on the runtime behind `handle`.
    pub fn with_handle(registry: Arc<PluginRegistry>, handle: Handle) -> Self {
        Self { registry, handle }
    }

    /// The registry this bridge routes through.
    pub fn registry(&self) -> &Arc<PluginRegistry> {
        &self.registry
    }

    /// Convenience passthrough to [`PluginRegistry::register`].
    pub async fn register(&self, plugin: Arc<dyn HostPlugin>) {
        self.registry.register(plugin).await;
    }
}

impl PluginBridge for HostBridge {
    fn invoke(
        &self,
        request: InvocationRequest,
        on_success: SuccessCallback,
        on_error: Option<ErrorCallback>,
    ) {
        let registry = self.registry.clone();
        self.handle.spawn(async move {
            let id = request.id;
            match registry.dispatch(&request).await {
                Ok(value) => {
                    debug!(%id, "invocation completed");
                    on_success(value);
                }
                Err(err) => match on_error {
                    Some(on_error) => {
                        debug!(%id, error = %err, "invocation failed");
                        on_error(err);
                    }
                    None => {
                        warn!(
                            %id,
                            error = %err,
                            "invocation failed with no error callback registered; dropping"
                        );
                    }
                },
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::{mpsc, oneshot};

    struct AnswerPlugin;

    #[async_trait]
    impl HostPlugin for AnswerPlugin {
        fn name(&self) -> &str {
            "Answer"
        }

        async fn execute(&self, _action: &str, _args: &[Value]) -> Result<Value> {
            Ok(json!({"answer": 42}))
        }
    }

    struct FailingPlugin {
        executed: std::sync::Mutex<Option<oneshot::Sender<()>>>,
    }

    #[async_trait]
    impl HostPlugin for FailingPlugin {
        fn name(&self) -> &str {
            "Failing"
        }

        async fn execute(&self, _action: &str, _args: &[Value]) -> Result<Value> {
            if let Some(tx) = self.executed.lock().unwrap().take() {
                let _ = tx.send(());
            }
            Err(BridgeError::OperationFailed("probe disconnected".to_string()))
        }
    }

    async fn bridge_with(plugin: Arc<dyn HostPlugin>) -> HostBridge {
        let registry = Arc::new(PluginRegistry::new());
        registry.register(plugin).await;
        HostBridge::new(registry).unwrap()
    }

    #[tokio::test]
    async fn test_success_is_delivered_exactly_once() {
        let bridge = bridge_with(Arc::new(AnswerPlugin)).await;
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let observed = calls.clone();
        bridge.invoke(
            InvocationRequest::new("Answer", "anything"),
            Box::new(move |value| {
                observed.fetch_add(1, Ordering::SeqCst);
                let _ = tx.send(value);
            }),
            None,
        );

        let value = rx.recv().await.unwrap();
        assert_eq!(value, json!({"answer": 42}));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_failure_reaches_error_callback() {
        let bridge = bridge_with(Arc::new(FailingPlugin {
            executed: std::sync::Mutex::new(None),
        }))
        .await;
        let (err_tx, err_rx) = oneshot::channel();

        bridge.invoke(
            InvocationRequest::new("Failing", "read"),
            Box::new(|_| panic!("success callback must not fire on failure")),
            Some(Box::new(move |err| {
                let _ = err_tx.send(err);
            })),
        );

        let err = err_rx.await.unwrap();
        assert!(matches!(err, BridgeError::OperationFailed(_)));
    }

    #[tokio::test]
    async fn test_failure_without_error_callback_is_dropped() {
        let (executed_tx, executed_rx) = oneshot::channel();
        let bridge = bridge_with(Arc::new(FailingPlugin {
            executed: std::sync::Mutex::new(Some(executed_tx)),
        }))
        .await;
        let success_calls = Arc::new(AtomicUsize::new(0));

        let observed = success_calls.clone();
        bridge.invoke(
            InvocationRequest::new("Failing", "read"),
            Box::new(move |_| {
                observed.fetch_add(1, Ordering::SeqCst);
            }),
            None,
        );

        executed_rx.await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(success_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_plugin_takes_error_path() {
        let bridge = HostBridge::new(Arc::new(PluginRegistry::new())).unwrap();
        let (err_tx, err_rx) = oneshot::channel();

        bridge.invoke(
            InvocationRequest::new("Nobody", "read"),
            Box::new(|_| panic!("success callback must not fire")),
            Some(Box::new(move |err| {
                let _ = err_tx.send(err);
            })),
        );

        let err = err_rx.await.unwrap();
        assert!(matches!(err, BridgeError::NotAvailable(name) if name == "Nobody"));
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let result = HostBridge::new(Arc::new(PluginRegistry::new()));

        assert!(matches!(result, Err(BridgeError::OperationFailed(_))));
    }

    #[test]
    fn test_invoke_from_synchronous_code_with_explicit_handle() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let registry = Arc::new(PluginRegistry::new());
        runtime.block_on(registry.register(Arc::new(AnswerPlugin)));
        let bridge = HostBridge::with_handle(registry, runtime.handle().clone());
        let (tx, rx) = std::sync::mpsc::channel();

        // Caller is not inside the runtime; invoke must still return at once.
        bridge.invoke(
            InvocationRequest::new("Answer", "anything"),
            Box::new(move |value| {
                let _ = tx.send(value);
            }),
            None,
        );

        let value = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(value, json!({"answer": 42}));
    }

    mod mocked {
        use super::*;

        mockall::mock! {
            Plugin {}

            #[async_trait]
            impl HostPlugin for Plugin {
                fn name(&self) -> &str;
                async fn execute(&self, action: &str, args: &[Value]) -> Result<Value>;
            }
        }

        #[tokio::test]
        async fn test_dispatch_passes_action_and_args_through() {
            let mut plugin = MockPlugin::new();
            plugin.expect_name().return_const("RangeReader".to_owned());
            plugin
                .expect_execute()
                .withf(|action, args| action == "allRangeData" && args.is_empty())
                .times(1)
                .returning(|_, _| Ok(json!({"ranges": [[0, 10]]})));

            let bridge = bridge_with(Arc::new(plugin)).await;
            let (tx, rx) = oneshot::channel();

            bridge.invoke(
                InvocationRequest::new("RangeReader", "allRangeData"),
                Box::new(move |value| {
                    let _ = tx.send(value);
                }),
                None,
            );

            assert_eq!(rx.await.unwrap(), json!({"ranges": [[0, 10]]}));
        }
    }
}
