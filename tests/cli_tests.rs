mod common;

use common::utils::file_edit_menu;
use menu_mirror::cli::commands::format_tree;
use menu_mirror::cli::config::load_config;
use menu_mirror::menu::session::MenuSession;
use menu_mirror::trace::logger::TraceLogger;

// ============================================================================
// Config loading
// ============================================================================

#[test]
fn missing_config_file_yields_defaults() {
    let config = load_config(Some("/definitely/not/here.yaml"));

    assert!(config.snapshot.is_none());
    assert!(config.pid.is_none());
    assert!(config.trace.path.is_none());
    assert_eq!(config.show.format, "console");
}

#[test]
fn malformed_config_file_yields_defaults() {
    let path = std::env::temp_dir().join("menu_mirror_malformed_config.yaml");
    std::fs::write(&path, ":: not yaml ::").expect("temp file writes");

    let config = load_config(path.to_str());
    assert_eq!(config.show.format, "console", "Malformed config degrades to defaults");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn partial_config_defaults_remaining_fields() {
    let path = std::env::temp_dir().join("menu_mirror_partial_config.yaml");
    std::fs::write(&path, "snapshot: custom.yaml\n").expect("temp file writes");

    let config = load_config(path.to_str());
    assert_eq!(config.snapshot.as_deref(), Some("custom.yaml"));
    assert_eq!(config.show.format, "console", "Unset sections keep their defaults");

    let _ = std::fs::remove_file(&path);
}

// ============================================================================
// Tree rendering
// ============================================================================

#[test]
fn format_tree_renders_indented_surface() {
    let provider = file_edit_menu();
    let mut session = MenuSession::new();
    session.build(&provider, 0, &TraceLogger::disabled());

    let rendered = format_tree(&session.tree);

    assert!(rendered.contains("File\n"), "Top-level group at depth 0");
    assert!(rendered.contains("  Open\n"), "Leaves indent under their group");
    assert!(rendered.contains("  ──────\n"), "Separators render as a rule");
    assert!(rendered.contains("  Save (disabled)\n"));
}

#[test]
fn format_tree_skips_hidden_groups() {
    let provider = file_edit_menu();
    let mut session = MenuSession::new();
    let tracer = TraceLogger::disabled();
    session.build(&provider, 0, &tracer);
    session.filter("open", &tracer);

    let rendered = format_tree(&session.tree);

    assert!(
        !rendered.contains("  Copy\n"),
        "Hidden groups drop out of the rendered surface"
    );
    assert!(rendered.contains("Open\n"), "Injected match renders at the top level");
}
