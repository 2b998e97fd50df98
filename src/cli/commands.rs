use crate::menu::builder::TriggerOutcome;
use crate::menu::menu_model::{MenuNode, MenuTree};
use crate::menu::search::matching_entries;
use crate::menu::session::MenuSession;
use crate::provider::snapshot::SnapshotProvider;
use crate::trace::logger::TraceLogger;

// ============================================================================
// show subcommand
// ============================================================================

pub fn cmd_show(
    snapshot_path: &str,
    pid: Option<i32>,
    format: &str,
    verbose: u8,
    trace_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = SnapshotProvider::load(snapshot_path)?;
    let pid = resolve_pid(pid, &provider);
    let tracer = build_tracer(trace_path);

    if verbose > 0 {
        eprintln!("Mirroring menu bar of pid {} from {}...", pid, snapshot_path);
    }

    let mut session = MenuSession::new();
    let report = session.build(&provider, pid, &tracer);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&session.tree)?),
        _ => print!("{}", format_tree(&session.tree)),
    }

    println!(
        "{} top-level menus, {} indexed items ({:?})",
        report.top_level_count, report.indexed, report.phase
    );
    if verbose > 0 {
        eprintln!("fingerprint: {}", report.fingerprint);
    }

    Ok(())
}

// ============================================================================
// search subcommand
// ============================================================================

pub fn cmd_search(
    snapshot_path: &str,
    pid: Option<i32>,
    keyword: &str,
    verbose: u8,
    trace_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = SnapshotProvider::load(snapshot_path)?;
    let pid = resolve_pid(pid, &provider);
    let tracer = build_tracer(trace_path);

    let mut session = MenuSession::new();
    session.build(&provider, pid, &tracer);
    let results = session.filter(keyword, &tracer);

    for entry in matching_entries(&session.index, keyword) {
        println!("{}", entry.path);
    }

    if verbose > 0 {
        eprintln!(
            "{} of {} items match \"{}\"",
            results.len(),
            session.index.len(),
            keyword
        );
    }

    Ok(())
}

// ============================================================================
// trigger subcommand
// ============================================================================

/// Trigger a leaf by path label. Returns whether the item was activated.
pub fn cmd_trigger(
    snapshot_path: &str,
    pid: Option<i32>,
    path: &str,
    verbose: u8,
    trace_path: Option<&str>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let provider = SnapshotProvider::load(snapshot_path)?;
    let pid = resolve_pid(pid, &provider);
    let tracer = build_tracer(trace_path);

    if verbose > 0 {
        eprintln!("Triggering \"{}\" on pid {}...", path, pid);
    }

    let mut session = MenuSession::new();
    let outcome = session.trigger(&provider, pid, path, &tracer);

    match outcome {
        TriggerOutcome::Activated => {
            println!("activated: {}", path);
            Ok(true)
        }
        TriggerOutcome::NotFound => {
            eprintln!("no menu item matches \"{}\"", path);
            Ok(false)
        }
        TriggerOutcome::ActivationFailed(code) => {
            eprintln!("activation failed for \"{}\" (code {})", path, code);
            Ok(false)
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Resolve the target pid: CLI > snapshot's pinned pid > 0.
fn resolve_pid(cli_pid: Option<i32>, provider: &SnapshotProvider) -> i32 {
    cli_pid.or(provider.pid()).unwrap_or(0)
}

fn build_tracer(trace_path: Option<&str>) -> TraceLogger {
    match trace_path {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    }
}

/// Format the visible surface of a mirrored tree for terminal output.
///
/// Produces output like:
/// ```text
/// File
///   Open
///   ──────
///   Save (disabled)
/// ```
pub fn format_tree(tree: &MenuTree) -> String {
    let mut out = String::new();
    for item in &tree.items {
        if item.hidden {
            continue;
        }
        format_node(item, 0, &mut out);
    }
    out
}

fn format_node(node: &MenuNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);

    if node.is_separator {
        out.push_str(&format!("{}──────\n", indent));
    } else {
        let title = if node.title.is_empty() {
            "(untitled)"
        } else {
            node.title.as_str()
        };
        if node.is_enabled {
            out.push_str(&format!("{}{}\n", indent, title));
        } else {
            out.push_str(&format!("{}{} (disabled)\n", indent, title));
        }
    }

    for child in &node.children {
        format_node(child, depth + 1, out);
    }
}
