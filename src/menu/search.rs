use crate::menu::flat_index::{FlatEntry, FlatIndex};
use crate::menu::menu_model::{MenuNode, MenuTree};

/// Live search state: the active keyword and snapshots of the matching
/// nodes. Results are structural copies; the originals stay addressable in
/// their unfiltered positions so the view can be restored.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub keyword: String,
    pub results: Vec<MenuNode>,
}

impl SearchState {
    pub fn reset(&mut self) {
        self.keyword.clear();
        self.results.clear();
    }
}

/// Index entries whose title contains `keyword` as a case-insensitive
/// substring, in index (pre-order) insertion order. Matching is against the
/// leaf title only, never the full path.
pub fn matching_entries<'a>(index: &'a FlatIndex, keyword: &str) -> Vec<&'a FlatEntry> {
    let needle = keyword.to_lowercase();
    index
        .entries()
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .collect()
}

/// Re-project the visible tree surface for `keyword`.
///
/// An empty keyword restores the unfiltered view: every top-level group is
/// unhidden and previously injected results are removed. A non-empty
/// keyword hides the top-level groups, replaces any previous injection, and
/// appends a structural copy of each matching indexed leaf to the visible
/// surface. The canonical tree is never destroyed; only its visible surface
/// is swapped.
pub fn apply_filter(
    tree: &mut MenuTree,
    index: &FlatIndex,
    state: &mut SearchState,
    keyword: &str,
) -> Vec<MenuNode> {
    let hidden = !keyword.is_empty();
    for item in tree.items.iter_mut().take(tree.top_level_count) {
        item.hidden = hidden;
    }
    tree.items.truncate(tree.top_level_count);

    if keyword.is_empty() {
        state.reset();
        return Vec::new();
    }

    state.keyword = keyword.to_string();
    state.results.clear();

    for entry in matching_entries(index, keyword) {
        let Some(node) = tree.node_at(&entry.node_path) else {
            continue;
        };
        let copy = node.clone();
        state.results.push(copy.clone());
        tree.items.push(copy);
    }

    state.results.clone()
}
