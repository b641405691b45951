//! Command groups every host gets out of the box

use std::sync::Arc;

use super::registry::{AutoCommandGroup, CommandGroupRegistry};

/// Toggles the frame rate and frame timing overlays together
pub const STAT_FPS_AND_UNIT: &str = "CCGStatFPSAndUNIT";

/// Register the built-in groups
///
/// The groups stay registered for as long as the returned guards live.
pub fn register_builtins(registry: &Arc<CommandGroupRegistry>) -> Vec<AutoCommandGroup> {
    // `stat` commands toggle, so enabling and disabling send the same commands
    let stats = ["stat fps".to_string(), "stat unit".to_string()];
    let guard = AutoCommandGroup::new(registry.clone(), STAT_FPS_AND_UNIT, &stats, &stats);
    if let Some(group) = guard.handle().upgrade() {
        group.set_help("Toggle the FPS counter and frame/game/draw/GPU timings");
    }

    vec![guard]
}
