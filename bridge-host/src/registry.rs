//! Name-keyed plugin registry.

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::{HostPlugin, InvocationRequest};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Collection of host plugins, keyed by plugin name.
///
/// Registration may happen at any point in the host's lifetime; invocations
/// racing with registration see whichever state the registry holds when the
/// lookup runs.
pub struct PluginRegistry {
    plugins: RwLock<HashMap<String, Arc<dyn HostPlugin>>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `plugin` under its own name.
    ///
    /// Re-registering a name replaces the previous plugin.
    pub async fn register(&self, plugin: Arc<dyn HostPlugin>) {
        let name = plugin.name().to_string();
        let mut plugins = self.plugins.write().await;
        if plugins.insert(name.clone(), plugin).is_some() {
            warn!(plugin = %name, "replacing previously registered plugin");
        }
    }

    /// Removes the plugin registered under `name`, if any.
    pub async fn unregister(&self, name: &str) -> Option<Arc<dyn HostPlugin>> {
        let mut plugins = self.plugins.write().await;
        plugins.remove(name)
    }

    pub async fn contains(&self, name: &str) -> bool {
        let plugins = self.plugins.read().await;
        plugins.contains_key(name)
    }

    /// Routes one request to the plugin it names.
    ///
    /// An unregistered plugin name yields [`BridgeError::NotAvailable`];
    /// everything past the lookup is the plugin's own answer.
    pub async fn dispatch(&self, request: &InvocationRequest) -> Result<Value> {
        let plugin = {
            let plugins = self.plugins.read().await;
            plugins.get(&request.plugin).cloned()
        };

        let plugin = match plugin {
            Some(plugin) => plugin,
            None => return Err(BridgeError::NotAvailable(request.plugin.clone())),
        };

        debug!(
            id = %request.id,
            plugin = %request.plugin,
            action = %request.action,
            "dispatching invocation"
        );
        plugin.execute(&request.action, &request.args).await
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
