use crate::menu::flat_index::{FlatEntry, FlatIndex};
use crate::menu::menu_model::{MenuNode, MenuTree, join_path};
use crate::provider::provider::{AccessibilityProvider, Element};
use crate::provider::reader::AccessibilityReader;

/// The OS-reserved system menu title. Blanked at the top level so the UI
/// layer treats it as a visual placeholder; the same literal anywhere else
/// is rendered verbatim.
const APPLE_MENU_TITLE: &str = "Apple";

// ============================================================================
// Walk state machine
// ============================================================================

/// Phases of the menu walk.
///
/// A build moves `Idle → TopLevel → Submenu → Leaf` (optionally `ExtraLeaf`)
/// and ends in `Done`. `Triggered` absorbs the walk from any building phase
/// when trigger mode finds its target; `PartiallyBuilt` is the graceful end
/// when the provider yields no menu bar or no top-level elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Idle,
    TopLevel,
    Submenu,
    Leaf,
    ExtraLeaf,
    Done,
    Triggered,
    PartiallyBuilt,
}

/// Outcome of a path trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Activated,
    NotFound,
    ActivationFailed(i32),
}

/// Result of one walk: the mirrored tree, the flat leaf index, the terminal
/// phase, and the trigger outcome when the walk ran in trigger mode.
#[derive(Debug)]
pub struct BuildResult {
    pub tree: MenuTree,
    pub index: FlatIndex,
    pub phase: BuildPhase,
    pub trigger: Option<TriggerOutcome>,
}

// ============================================================================
// Builder
// ============================================================================

/// Walks the provider's element graph exactly three logical levels deep
/// (top-level menu, submenu, leaf) and mirrors it into a `MenuTree`,
/// indexing every actionable leaf as it goes.
///
/// In trigger mode the same walk compares each constructed path label
/// against a target; on an exact match it activates the element and aborts
/// the whole walk: no further siblings, no further descent. The activated
/// element may invalidate its siblings, so the walk never resumes after an
/// activation.
pub struct MenuBuilder<'a> {
    reader: AccessibilityReader<'a>,
    target: Option<String>,
    phase: BuildPhase,
    tree: MenuTree,
    index: FlatIndex,
    trigger_result: Option<TriggerOutcome>,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(provider: &'a dyn AccessibilityProvider) -> Self {
        Self {
            reader: AccessibilityReader::new(provider),
            target: None,
            phase: BuildPhase::Idle,
            tree: MenuTree::default(),
            index: FlatIndex::default(),
            trigger_result: None,
        }
    }

    /// Trigger mode: abort the walk and activate as soon as a constructed
    /// path label equals `target`.
    pub fn with_target(provider: &'a dyn AccessibilityProvider, target: &str) -> Self {
        let mut builder = Self::new(provider);
        builder.target = Some(target.to_string());
        builder
    }

    pub fn build(mut self, pid: i32) -> BuildResult {
        self.tree.clear();
        self.index.clear();

        let Some(menu_bar) = self.reader.root_menu_bar(pid) else {
            self.phase = BuildPhase::PartiallyBuilt;
            return self.finish();
        };

        let top_elements = self.reader.children(menu_bar);
        if top_elements.is_empty() {
            self.phase = BuildPhase::PartiallyBuilt;
            return self.finish();
        }

        self.tree.top_level_count = top_elements.len();
        self.build_top_level(&top_elements);

        if self.trigger_result.is_none() {
            self.phase = BuildPhase::Done;
        }
        self.finish()
    }

    fn finish(self) -> BuildResult {
        let trigger = match (&self.target, self.trigger_result) {
            (Some(_), Some(outcome)) => Some(outcome),
            (Some(_), None) => Some(TriggerOutcome::NotFound),
            (None, _) => None,
        };

        BuildResult {
            tree: self.tree,
            index: self.index,
            phase: self.phase,
            trigger,
        }
    }

    fn matched(&self) -> bool {
        self.trigger_result.is_some()
    }

    fn build_top_level(&mut self, elements: &[Element]) {
        for element in elements {
            self.phase = BuildPhase::TopLevel;

            let mut title = self.reader.title(*element);
            if title == APPLE_MENU_TITLE {
                title = String::new();
            }

            let top_index = self.tree.items.len();
            self.tree.items.push(MenuNode::group(&title));

            self.build_submenu(*element, top_index, &title);
            if self.matched() {
                return;
            }
        }
    }

    /// Every submenu group under a top-level element flattens into that
    /// element's single child list.
    fn build_submenu(&mut self, element: Element, top_index: usize, parent: &str) {
        self.phase = BuildPhase::Submenu;
        let groups = self.reader.children(element);
        for group in groups {
            let items = self.reader.children(group);
            self.build_leaf_items(&items, top_index, parent);
            if self.matched() {
                return;
            }
        }
    }

    fn build_leaf_items(&mut self, elements: &[Element], top_index: usize, parent: &str) {
        for element in elements {
            self.phase = BuildPhase::Leaf;

            if !self.reader.has_position(*element) {
                continue;
            }

            let title = self.reader.title(*element);
            if title.is_empty() {
                self.tree.items[top_index].children.push(MenuNode::separator());
                continue;
            }

            let enabled = self.reader.enabled(*element);
            if !enabled {
                // Rendered but not actionable: no path label, no index entry.
                self.tree.items[top_index]
                    .children
                    .push(MenuNode::leaf(&title, false, *element));
                continue;
            }

            let path = join_path(parent, &title);
            if self.try_trigger(&path, *element) {
                return;
            }

            let leaf_index = self.tree.items[top_index].children.len();
            self.tree.items[top_index]
                .children
                .push(MenuNode::leaf(&title, true, *element));
            self.index.push(FlatEntry {
                path: path.clone(),
                title,
                element: *element,
                node_path: vec![top_index, leaf_index],
            });

            // A terminal item may itself expand (a recent-items style list).
            // Only the first child is inspected; its children become one
            // extra leaf level.
            let expandable = self.reader.children(*element);
            if let Some(first) = expandable.first() {
                self.build_extra_leaf(*first, &[top_index, leaf_index], &path);
                if self.matched() {
                    return;
                }
            }
        }
    }

    /// Same skip/separator/enabled rules as the leaf level, one synthetic
    /// level down. Does not recurse further.
    fn build_extra_leaf(&mut self, container: Element, parent_node: &[usize], parent: &str) {
        let elements = self.reader.children(container);
        for element in elements {
            self.phase = BuildPhase::ExtraLeaf;

            if !self.reader.has_position(element) {
                continue;
            }

            let title = self.reader.title(element);
            if title.is_empty() {
                self.node_children_mut(parent_node).push(MenuNode::separator());
                continue;
            }

            let enabled = self.reader.enabled(element);
            if !enabled {
                self.node_children_mut(parent_node)
                    .push(MenuNode::leaf(&title, false, element));
                continue;
            }

            let path = join_path(parent, &title);
            if self.try_trigger(&path, element) {
                return;
            }

            let child_index = self.node_children_mut(parent_node).len();
            self.node_children_mut(parent_node)
                .push(MenuNode::leaf(&title, true, element));

            let mut node_path = parent_node.to_vec();
            node_path.push(child_index);
            self.index.push(FlatEntry {
                path,
                title,
                element,
                node_path,
            });
        }
    }

    /// Trigger-mode check at a point where a path label was computed. On an
    /// exact match the element is activated and the walk is absorbed; the
    /// activation is never retried.
    fn try_trigger(&mut self, path: &str, element: Element) -> bool {
        let Some(target) = &self.target else {
            return false;
        };
        if target != path {
            return false;
        }

        let outcome = match self.reader.activate(element) {
            Ok(()) => TriggerOutcome::Activated,
            Err(error) => {
                eprintln!("failed to activate {}: code {}", path, error.code);
                TriggerOutcome::ActivationFailed(error.code)
            }
        };

        self.trigger_result = Some(outcome);
        self.phase = BuildPhase::Triggered;
        true
    }

    fn node_children_mut(&mut self, path: &[usize]) -> &mut Vec<MenuNode> {
        let mut node = &mut self.tree.items[path[0]];
        for index in &path[1..] {
            node = &mut node.children[*index];
        }
        &mut node.children
    }
}
