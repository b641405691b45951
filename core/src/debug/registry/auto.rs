//! Scoped command group registration
//!
//! Registers a group for as long as a guard value lives. Typically held in a
//! host subsystem so its groups disappear when the subsystem shuts down.

use std::sync::Arc;

use super::CommandGroupRegistry;
use crate::debug::group::GroupHandle;

/// Keeps a command group registered until dropped
///
/// If the name was already registered, the guard adopts the existing group
/// and will unregister it on drop just the same.
pub struct AutoCommandGroup {
    registry: Arc<CommandGroupRegistry>,
    handle: GroupHandle,
}

impl AutoCommandGroup {
    /// Register `name` in `registry` and tie its lifetime to the returned guard
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty, like [`CommandGroupRegistry::register`].
    pub fn new(
        registry: Arc<CommandGroupRegistry>,
        name: &str,
        enable_commands: &[String],
        disable_commands: &[String],
    ) -> Self {
        let handle = registry.register(name, enable_commands, disable_commands);
        Self { registry, handle }
    }

    /// Handle to the guarded group
    pub fn handle(&self) -> &GroupHandle {
        &self.handle
    }
}

impl Drop for AutoCommandGroup {
    fn drop(&mut self) {
        self.registry.unregister_handle(&self.handle);
    }
}
