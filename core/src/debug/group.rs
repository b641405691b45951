//! Console command groups
//!
//! A group is a named pair of command lists that are toggled together: one
//! list runs when the group is enabled, the other when it is disabled.

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// A named set of console commands toggled as a unit
///
/// Command lists are fixed at construction. Only the help text can change
/// afterwards.
#[derive(Debug)]
pub struct CommandGroup {
    /// Registry key, never empty
    name: String,
    /// Commands run in order when the group is enabled
    enable_commands: Vec<String>,
    /// Commands run in order when the group is disabled
    disable_commands: Vec<String>,
    /// Free-form description, may span multiple lines
    help: Mutex<String>,
}

impl CommandGroup {
    pub(crate) fn new(name: &str, enable_commands: &[String], disable_commands: &[String]) -> Self {
        Self {
            name: name.to_string(),
            enable_commands: enable_commands.to_vec(),
            disable_commands: disable_commands.to_vec(),
            help: Mutex::new(String::new()),
        }
    }

    /// Group name (the registry key)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Commands run when the group is enabled
    pub fn enable_commands(&self) -> &[String] {
        &self.enable_commands
    }

    /// Commands run when the group is disabled
    pub fn disable_commands(&self) -> &[String] {
        &self.disable_commands
    }

    /// Current help text (empty unless set)
    pub fn help(&self) -> String {
        self.help
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the help text
    pub fn set_help(&self, help: impl Into<String>) {
        *self.help.lock().unwrap_or_else(PoisonError::into_inner) = help.into();
    }
}

/// Non-owning reference to a registered [`CommandGroup`]
///
/// The registry is the only owner of its groups. A handle stops resolving
/// once the group has been unregistered and released, so stale handles are
/// detected by [`GroupHandle::upgrade`] returning `None`.
#[derive(Debug, Clone)]
pub struct GroupHandle {
    group: Weak<CommandGroup>,
}

impl GroupHandle {
    pub(crate) fn new(group: &Arc<CommandGroup>) -> Self {
        Self {
            group: Arc::downgrade(group),
        }
    }

    /// Resolve the handle to its group, if the group is still alive
    pub fn upgrade(&self) -> Option<Arc<CommandGroup>> {
        self.group.upgrade()
    }

    /// Whether the referenced group is still alive
    pub fn is_alive(&self) -> bool {
        self.group.strong_count() > 0
    }

    /// Whether this handle refers to exactly `group`
    pub fn points_to(&self, group: &Arc<CommandGroup>) -> bool {
        std::ptr::eq(self.group.as_ptr(), Arc::as_ptr(group))
    }

    /// Identity comparison between two handles
    pub fn ptr_eq(&self, other: &GroupHandle) -> bool {
        Weak::ptr_eq(&self.group, &other.group)
    }
}

impl PartialEq for GroupHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for GroupHandle {}
