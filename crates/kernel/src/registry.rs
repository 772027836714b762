use anyhow::Context;
use std::sync::Arc;

use estante_db::Migration;

use crate::module::{InitCtx, Module};

/// Module registry for managing module lifecycle
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module with the registry
    pub fn register(&mut self, module: Arc<dyn Module>) {
        self.modules.push(module);
    }

    /// Get all registered modules in registration order
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    /// Get a module by name
    pub fn get_module(&self, name: &str) -> Option<&Arc<dyn Module>> {
        self.modules.iter().find(|module| module.name() == name)
    }

    /// Collect migrations from all modules, in registration order
    pub fn migrations(&self) -> Vec<Migration> {
        self.modules
            .iter()
            .flat_map(|module| module.migrations())
            .collect()
    }

    /// Initialize all modules in registration order
    pub async fn init_all(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for module in &self.modules {
            tracing::info!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Start all modules after migrations have been applied
    pub async fn start_all(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        for module in &self.modules {
            tracing::info!(module = module.name(), "starting module");

            module
                .start(ctx)
                .await
                .with_context(|| format!("failed to start module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Stop all modules in reverse registration order
    pub async fn stop_all(&self) -> anyhow::Result<()> {
        for module in self.modules.iter().rev() {
            tracing::info!(module = module.name(), "stopping module");

            module
                .stop()
                .await
                .with_context(|| format!("failed to stop module '{}'", module.name()))?;
        }

        Ok(())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopModule;

    #[async_trait::async_trait]
    impl Module for NoopModule {
        fn name(&self) -> &'static str {
            "noop"
        }
    }

    #[test]
    fn registered_modules_are_discoverable_by_name() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(NoopModule));

        assert_eq!(registry.modules().len(), 1);
        assert!(registry.get_module("noop").is_some());
        assert!(registry.get_module("missing").is_none());
    }

    #[test]
    fn modules_without_migrations_contribute_none() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(NoopModule));

        assert!(registry.migrations().is_empty());
    }
}
