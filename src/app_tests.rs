use super::*;
use std::path::Path;

fn app_on(section: Section) -> ExplorerApp {
    ExplorerApp::with_settings(
        Settings {
            active_section: section,
            ..Settings::default()
        },
        None,
    )
}

fn scratch_settings(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("clawdbot-explorer-app-{}-{}", std::process::id(), name))
        .join("settings.json")
}

fn remove_scratch(path: &Path) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn starts_on_persisted_section() {
    let mut app = app_on(Section::Features);
    let frame = app.sync_mounted(1.0);
    assert_eq!(frame.section, Section::Features);
    assert!(app.visualization.is_none());
}

#[test]
fn overview_mounts_idle_visualization() {
    let mut app = app_on(Section::Overview);
    app.sync_mounted(0.0);
    let viz = app.visualization.as_ref().expect("mounted on overview");
    assert!(!viz.is_running());
    assert_eq!(viz.simulator().message_count(), 0);
}

#[test]
fn simulate_on_launch_starts_running() {
    let mut app = ExplorerApp::with_settings(
        Settings {
            simulate_on_launch: true,
            ..Settings::default()
        },
        None,
    );
    app.sync_mounted(0.0);
    assert!(app.visualization.as_ref().unwrap().is_running());
}

#[test]
fn selecting_section_marks_settings_dirty() {
    let mut app = app_on(Section::Overview);
    app.select_section(Section::Demo, 1.0);
    assert!(app.settings_dirty);
    assert_eq!(app.settings.active_section, Section::Demo);
    assert_eq!(app.switcher.active(), Section::Demo);
}

#[test]
fn reselecting_active_section_changes_nothing() {
    let mut app = app_on(Section::Architecture);
    app.select_section(Section::Architecture, 1.0);
    assert!(!app.settings_dirty);
}

#[test]
fn visualization_survives_exit_phase_then_unmounts() {
    let mut app = app_on(Section::Overview);
    app.sync_mounted(0.0);
    app.select_section(Section::Integration, 1.0);

    // Still exiting: overview keeps rendering
    let exiting = app.sync_mounted(1.1);
    assert_eq!(exiting.section, Section::Overview);
    assert!(app.visualization.is_some());

    let entering = app.sync_mounted(1.4);
    assert_eq!(entering.section, Section::Integration);
    assert!(app.visualization.is_none());
}

#[test]
fn returning_to_overview_starts_fresh() {
    let mut app = app_on(Section::Overview);
    app.sync_mounted(0.0);
    {
        let viz = app.visualization.as_mut().unwrap();
        viz.toggle(Duration::ZERO);
        viz.toggle_node("gateway", Duration::ZERO);
        viz.step(Duration::from_secs(2));
        assert_eq!(viz.simulator().message_count(), 2);
    }

    app.select_section(Section::Demo, 1.0);
    app.sync_mounted(2.0);
    assert!(app.visualization.is_none());

    app.select_section(Section::Overview, 3.0);
    app.sync_mounted(4.0);
    let viz = app.visualization.as_ref().unwrap();
    assert!(!viz.is_running());
    assert_eq!(viz.simulator().message_count(), 0);
    assert!(viz.view().selected_node.is_none());
}

#[test]
fn out_of_range_settings_are_clamped_on_startup() {
    let app = ExplorerApp::with_settings(
        Settings {
            transition_secs: 99.0,
            ..Settings::default()
        },
        None,
    );
    assert_eq!(app.settings.transition_secs, 2.0);
}

#[test]
fn save_waits_for_two_quiet_seconds() {
    assert!(!settings_save_due(false, Duration::from_secs(10)));
    assert!(!settings_save_due(true, Duration::from_millis(1_999)));
    assert!(settings_save_due(true, Duration::from_secs(2)));
}

#[test]
fn dirty_settings_are_saved_after_debounce() {
    let path = scratch_settings("debounce");
    let mut app = app_on(Section::Overview);
    app.settings_path = Some(path.clone());
    let start = app.last_settings_save;

    assert!(!app.maybe_save_settings(start + Duration::from_secs(5)));

    app.select_section(Section::Demo, 1.0);
    assert!(!app.maybe_save_settings(start + Duration::from_secs(1)));
    assert!(!path.exists());

    assert!(app.maybe_save_settings(start + Duration::from_secs(2)));
    assert!(!app.settings_dirty);
    assert_eq!(Settings::load_from(&path).unwrap().active_section, Section::Demo);

    // The debounce window restarts from the last save
    app.select_section(Section::Features, 2.0);
    assert!(!app.maybe_save_settings(start + Duration::from_secs(3)));
    assert!(app.maybe_save_settings(start + Duration::from_secs(4)));

    remove_scratch(&path);
}

#[test]
fn exit_flushes_pending_changes_immediately() {
    let path = scratch_settings("exit");
    let mut app = app_on(Section::Overview);
    app.settings_path = Some(path.clone());

    assert!(!app.flush_settings());
    assert!(!path.exists());

    app.select_section(Section::Integration, 0.5);
    assert!(app.flush_settings());
    assert!(!app.settings_dirty);
    assert_eq!(Settings::load_from(&path).unwrap().active_section, Section::Integration);
    assert!(!app.flush_settings());

    remove_scratch(&path);
}
