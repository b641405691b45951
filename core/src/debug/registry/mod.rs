//! Console command group registry
//!
//! Maps group names to [`CommandGroup`]s and dispatches their command lists to a
//! caller-supplied [`CommandExecutor`].
//!
//! Every lookup and mutation runs under one mutex. Enabling or disabling a group
//! only holds the lock long enough to find it; the commands themselves run
//! after the lock is released, so executors may take as long as they like.
//! Executors must still not call back into the registry from `run`.

mod auto;

pub use auto::AutoCommandGroup;

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use hashbrown::{HashMap, HashSet};

use super::group::{CommandGroup, GroupHandle};
use crate::console::CommandExecutor;

/// Which of a group's command lists to dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Enable,
    Disable,
}

/// Thread-safe registry of console command groups
///
/// The registry exclusively owns every group it holds; callers get
/// [`GroupHandle`]s that stop resolving once the group is unregistered.
#[derive(Default)]
pub struct CommandGroupRegistry {
    groups: Mutex<HashMap<String, Arc<CommandGroup>>>,
}

impl CommandGroupRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared process-wide registry
    ///
    /// Created on first access. Concurrent first accesses still produce a
    /// single instance. Prefer passing an explicit registry around; this exists
    /// for hosts that want one logical registry without threading it through.
    pub fn global() -> Arc<CommandGroupRegistry> {
        static GLOBAL: OnceLock<Arc<CommandGroupRegistry>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Arc::new(CommandGroupRegistry::new()))
            .clone()
    }

    fn groups(&self) -> MutexGuard<'_, HashMap<String, Arc<CommandGroup>>> {
        self.groups.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a group, or return the existing one under the same name
    ///
    /// Registering a name twice does not overwrite: the first group wins, the
    /// new command lists are discarded and a warning is logged.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn register(
        &self,
        name: &str,
        enable_commands: &[String],
        disable_commands: &[String],
    ) -> GroupHandle {
        self.register_new(name, enable_commands, disable_commands).0
    }

    /// Like [`register`](Self::register), but also reports whether this call
    /// created the group
    ///
    /// The lookup and the insert happen under the same lock, so when several
    /// threads race on one name exactly one of them sees `true`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn register_new(
        &self,
        name: &str,
        enable_commands: &[String],
        disable_commands: &[String],
    ) -> (GroupHandle, bool) {
        assert!(!name.is_empty(), "command group name must not be empty");

        let mut groups = self.groups();
        if let Some(existing) = groups.get(name) {
            tracing::warn!(
                "command group '{}' already exists but is being registered again - keeping the existing group",
                name
            );
            return (GroupHandle::new(existing), false);
        }

        let group = Arc::new(CommandGroup::new(name, enable_commands, disable_commands));
        let handle = GroupHandle::new(&group);
        groups.insert(name.to_string(), group);
        tracing::debug!(
            "registered command group '{}' ({} enable, {} disable commands)",
            name,
            enable_commands.len(),
            disable_commands.len()
        );
        (handle, true)
    }

    /// Remove a group by name
    ///
    /// Returns `false` if no group had that name.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.groups().remove(name);
        match removed {
            Some(_) => {
                tracing::debug!("unregistered command group '{}'", name);
                true
            }
            None => false,
        }
    }

    /// Remove the group a handle refers to
    ///
    /// Resolves the handle to its current name by scanning every entry (O(n)),
    /// then removes it within the same critical section. Returns `false` if the
    /// group is no longer registered.
    pub fn unregister_handle(&self, handle: &GroupHandle) -> bool {
        let mut groups = self.groups();
        let Some(name) = Self::name_of(&groups, handle) else {
            return false;
        };
        groups.remove(&name);
        tracing::debug!("unregistered command group '{}'", name);
        true
    }

    /// Reverse lookup: the name under which a handle's group is registered
    ///
    /// Linear in the number of registered groups.
    pub fn find_name(&self, handle: &GroupHandle) -> Option<String> {
        Self::name_of(&self.groups(), handle)
    }

    fn name_of(
        groups: &HashMap<String, Arc<CommandGroup>>,
        handle: &GroupHandle,
    ) -> Option<String> {
        groups
            .iter()
            .find(|(_, group)| handle.points_to(group))
            .map(|(name, _)| name.clone())
    }

    /// Look up a group by name
    pub fn find(&self, name: &str) -> Option<GroupHandle> {
        self.groups().get(name).map(GroupHandle::new)
    }

    /// Check if a group with this name is registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.groups().contains_key(name)
    }

    /// Snapshot of every registered group name, in no particular order
    pub fn all_names(&self) -> HashSet<String> {
        self.groups().keys().cloned().collect()
    }

    /// Number of registered groups
    pub fn len(&self) -> usize {
        self.groups().len()
    }

    /// Check if no groups are registered
    pub fn is_empty(&self) -> bool {
        self.groups().is_empty()
    }

    /// Unregister and release every group
    pub fn clear(&self) {
        let mut groups = self.groups();
        if !groups.is_empty() {
            tracing::debug!("releasing {} command groups", groups.len());
        }
        groups.clear();
    }

    /// Run a group's enable commands through `executor`
    ///
    /// Each command is run once, in list order, with history enabled. Returns
    /// `false` (and runs nothing) if the group isn't registered.
    pub fn enable<E>(&self, name: &str, executor: &mut E) -> bool
    where
        E: CommandExecutor + ?Sized,
    {
        self.dispatch(name, Toggle::Enable, executor)
    }

    /// Run a group's disable commands through `executor`
    ///
    /// Same ordering and not-found behavior as [`enable`](Self::enable).
    pub fn disable<E>(&self, name: &str, executor: &mut E) -> bool
    where
        E: CommandExecutor + ?Sized,
    {
        self.dispatch(name, Toggle::Disable, executor)
    }

    fn dispatch<E>(&self, name: &str, toggle: Toggle, executor: &mut E) -> bool
    where
        E: CommandExecutor + ?Sized,
    {
        // Clone the Arc so the lock is released before any command runs
        let Some(group) = self.groups().get(name).cloned() else {
            return false;
        };

        let commands = match toggle {
            Toggle::Enable => group.enable_commands(),
            Toggle::Disable => group.disable_commands(),
        };
        tracing::debug!(
            "{:?} command group '{}': {} commands",
            toggle,
            name,
            commands.len()
        );
        for command in commands {
            executor.run(command, true);
        }
        true
    }
}
