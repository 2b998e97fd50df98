use menu_mirror::provider::snapshot::{MenuSnapshot, SnapshotNode, SnapshotProvider};

// ============================================================================
// Snapshot graph builders shared across test files
// ============================================================================

/// Titled, enabled element with a position.
pub fn leaf(title: &str) -> SnapshotNode {
    SnapshotNode {
        title: Some(title.to_string()),
        enabled: Some(true),
        position: Some([0.0, 0.0]),
        children: vec![],
    }
}

/// Titled, positioned element with enabled = false.
pub fn disabled_leaf(title: &str) -> SnapshotNode {
    SnapshotNode {
        title: Some(title.to_string()),
        enabled: Some(false),
        position: Some([0.0, 0.0]),
        children: vec![],
    }
}

/// Untitled element with a position; mirrors as a separator.
pub fn separator() -> SnapshotNode {
    SnapshotNode {
        title: None,
        enabled: None,
        position: Some([0.0, 0.0]),
        children: vec![],
    }
}

/// Element without a position, i.e. not yet resolved onscreen.
pub fn unresolved(title: &str) -> SnapshotNode {
    SnapshotNode {
        title: Some(title.to_string()),
        enabled: Some(true),
        position: None,
        children: vec![],
    }
}

/// Untitled submenu container holding leaf items.
pub fn group(children: Vec<SnapshotNode>) -> SnapshotNode {
    SnapshotNode {
        title: None,
        enabled: None,
        position: None,
        children,
    }
}

/// Top-level menu with a single submenu container.
pub fn menu(title: &str, items: Vec<SnapshotNode>) -> SnapshotNode {
    SnapshotNode {
        title: Some(title.to_string()),
        enabled: None,
        position: None,
        children: vec![group(items)],
    }
}

/// Enabled leaf whose terminal item expands one further level.
pub fn expandable_leaf(title: &str, items: Vec<SnapshotNode>) -> SnapshotNode {
    SnapshotNode {
        title: Some(title.to_string()),
        enabled: Some(true),
        position: Some([0.0, 0.0]),
        children: vec![group(items)],
    }
}

pub fn provider_from(menus: Vec<SnapshotNode>) -> SnapshotProvider {
    SnapshotProvider::from_snapshot(MenuSnapshot { pid: None, menus })
}

/// The graph used across builder, search and trigger tests:
/// File → [Open, separator, Save (disabled)], Edit → [Copy, Paste].
pub fn file_edit_menu() -> SnapshotProvider {
    provider_from(vec![
        menu("File", vec![leaf("Open"), separator(), disabled_leaf("Save")]),
        menu("Edit", vec![leaf("Copy"), leaf("Paste")]),
    ])
}
