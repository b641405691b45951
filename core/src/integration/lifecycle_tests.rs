//! Host lifecycle tests (config → startup → toggles → shutdown)

use std::sync::Arc;

use crate::app::config::{self, CONFIG_FILE_NAME};
use crate::bindings::DebugBindings;
use crate::debug::STAT_FPS_AND_UNIT;
use crate::debug::print::PrintRequest;
use crate::debug::registry::CommandGroupRegistry;
use crate::test_utils::{RecordingExecutor, RecordingSink};

const CONFIG: &str = r#"
[print]
filter = "Gameplay"

[[groups]]
name = "Perf"
enable = ["stat fps", "stat unit"]
disable = ["stat fps", "stat unit"]
help = "Frame rate and timings"

[[groups]]
name = "Wireframe"
enable = ["viewmode wireframe"]
disable = ["viewmode lit"]
"#;

#[test]
fn test_startup_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, CONFIG).unwrap();

    let config = config::load_from_path(&path).unwrap();
    let registry = Arc::new(CommandGroupRegistry::new());
    let mut bindings = DebugBindings::from_config(registry.clone(), &config).unwrap();

    assert_eq!(
        bindings.all_group_names(),
        [STAT_FPS_AND_UNIT, "Perf", "Wireframe"]
    );

    let mut exec = RecordingExecutor::default();
    assert!(bindings.enable_group("Wireframe", Some(&mut exec)));
    assert!(bindings.disable_group("Wireframe", Some(&mut exec)));
    assert_eq!(exec.commands(), ["viewmode wireframe", "viewmode lit"]);

    // Print gate comes from the file
    let mut sink = RecordingSink::default();
    assert!(bindings.print(&PrintRequest::new("jump").category("gameplay"), &mut sink));
    assert!(!bindings.print(&PrintRequest::new("path").category("AI"), &mut sink));
    assert_eq!(sink.console.len(), 1);

    // Dropping the bindings releases the built-in groups only
    drop(bindings);
    let mut remaining: Vec<String> = registry.all_names().into_iter().collect();
    remaining.sort();
    assert_eq!(remaining, ["Perf", "Wireframe"]);
}

#[test]
fn test_builtins_can_be_disabled() {
    let config: config::Config = toml::from_str("[builtins]\nenabled = false\n").unwrap();
    let registry = Arc::new(CommandGroupRegistry::new());
    let bindings = DebugBindings::from_config(registry, &config).unwrap();
    assert!(bindings.all_group_names().is_empty());
}

#[test]
fn test_perf_toggle_scenario() {
    let registry = Arc::new(CommandGroupRegistry::new());
    let mut bindings = DebugBindings::new(registry.clone());
    let stats = vec!["stat fps".to_string(), "stat unit".to_string()];

    assert!(bindings.register_group("Perf", &stats, &stats));
    assert!(bindings.all_group_names().contains(&"Perf".to_string()));

    let mut exec = RecordingExecutor::default();
    bindings.enable_group("Perf", Some(&mut exec));
    bindings.disable_group("Perf", Some(&mut exec));
    assert_eq!(
        exec.calls,
        vec![
            ("stat fps".to_string(), true),
            ("stat unit".to_string(), true),
            ("stat fps".to_string(), true),
            ("stat unit".to_string(), true),
        ]
    );

    assert!(bindings.unregister_group("Perf"));
    assert!(!registry.is_registered("Perf"));

    // Toggling a removed group is silent
    exec.calls.clear();
    assert!(!bindings.enable_group("Perf", Some(&mut exec)));
    assert!(exec.calls.is_empty());
}
