use serde::Serialize;

use crate::provider::provider::Element;

/// Separator glyph joining ancestor titles into a path label. Part of the
/// wire contract with external callers supplying stored shortcuts; must be
/// reproduced exactly.
pub const PATH_SEPARATOR: &str = "→";

/// Join a parent path and a leaf title into a path label.
pub fn join_path(parent: &str, title: &str) -> String {
    format!("{}{}{}", parent, PATH_SEPARATOR, title)
}

/// A single mirrored menu entry.
///
/// Top-level groups hold submenus in `children`; an untitled positioned
/// element mirrors as a separator; everything else is a leaf action. A leaf
/// may additionally carry children when its terminal item expands one
/// synthetic level (a recent-items style list).
#[derive(Debug, Clone, Serialize)]
pub struct MenuNode {
    pub title: String,
    pub children: Vec<MenuNode>,
    pub is_separator: bool,
    pub is_enabled: bool,

    /// Hidden from the visible surface while a search is active.
    pub hidden: bool,

    /// Non-owning back-reference into the provider's graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
}

impl MenuNode {
    /// Top-level group. An empty title renders as a visual placeholder.
    pub fn group(title: &str) -> Self {
        Self {
            title: title.to_string(),
            children: Vec::new(),
            is_separator: false,
            is_enabled: true,
            hidden: false,
            element: None,
        }
    }

    pub fn leaf(title: &str, enabled: bool, element: Element) -> Self {
        Self {
            title: title.to_string(),
            children: Vec::new(),
            is_separator: false,
            is_enabled: enabled,
            hidden: false,
            element: Some(element),
        }
    }

    pub fn separator() -> Self {
        Self {
            title: String::new(),
            children: Vec::new(),
            is_separator: true,
            is_enabled: false,
            hidden: false,
            element: None,
        }
    }
}

/// Mirrored menu tree.
///
/// `items` is the visible surface: the top-level groups first, then any
/// search results injected by the filter. `top_level_count` is recorded
/// once at build time and never recomputed; the filter uses it to know how
/// many groups to hide and where injected entries start.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuTree {
    pub items: Vec<MenuNode>,
    pub top_level_count: usize,
}

impl MenuTree {
    pub fn clear(&mut self) {
        self.items.clear();
        self.top_level_count = 0;
    }

    /// Resolve an index path (as stored in the flat index) to a node.
    pub fn node_at(&self, path: &[usize]) -> Option<&MenuNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.items.get(*first)?;
        for index in rest {
            node = node.children.get(*index)?;
        }
        Some(node)
    }
}
