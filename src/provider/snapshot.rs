use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::provider::error::MenuError;
use crate::provider::provider::{
    ATTR_ENABLED, ATTR_POSITION, ATTR_TITLE, AccessibilityProvider, ActivationError, AttrValue,
    Element,
};

// ============================================================================
// Snapshot file model (YAML)
// ============================================================================

/// One element of a snapshot graph. Absent fields map to `AttrValue::Absent`;
/// an element without a position is treated as not yet resolved onscreen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotNode {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub position: Option<[f32; 2]>,

    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

/// A serialized menu-bar graph: the top-level menus, optionally pinned to a
/// process id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuSnapshot {
    #[serde(default)]
    pub pid: Option<i32>,

    #[serde(default)]
    pub menus: Vec<SnapshotNode>,
}

// ============================================================================
// Snapshot-backed provider
// ============================================================================

struct StoredElement {
    title: Option<String>,
    enabled: Option<bool>,
    position: Option<[f32; 2]>,
    children: Vec<Element>,
}

/// `AccessibilityProvider` backed by a YAML-described element graph.
///
/// Stands in for the platform facility wherever one is not available: it is
/// the CLI's data source and the injectable provider used by tests. Every
/// `children` query and activation attempt is recorded so callers can
/// observe how far a walk progressed, and activations can be made to fail
/// per title to exercise failure paths.
pub struct SnapshotProvider {
    pid: Option<i32>,
    elements: Vec<StoredElement>,
    activations: RefCell<Vec<Element>>,
    children_queries: Cell<usize>,
    fail_codes: HashMap<String, i32>,
}

impl SnapshotProvider {
    /// Element 0 is the synthetic menu bar owning the top-level menus.
    pub fn from_snapshot(snapshot: MenuSnapshot) -> Self {
        let mut elements = vec![StoredElement {
            title: None,
            enabled: None,
            position: None,
            children: Vec::new(),
        }];

        let menus = snapshot
            .menus
            .iter()
            .map(|node| intern(&mut elements, node))
            .collect();
        elements[0].children = menus;

        Self {
            pid: snapshot.pid,
            elements,
            activations: RefCell::new(Vec::new()),
            children_queries: Cell::new(0),
            fail_codes: HashMap::new(),
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        let snapshot: MenuSnapshot = serde_yaml::from_str(text)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn load(path: &str) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path).map_err(|e| MenuError::SnapshotRead {
            path: path.to_string(),
            source: e,
        })?;
        let snapshot: MenuSnapshot =
            serde_yaml::from_str(&content).map_err(|e| MenuError::SnapshotParse {
                path: path.to_string(),
                source: e,
            })?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Process id the snapshot is pinned to, if any.
    pub fn pid(&self) -> Option<i32> {
        self.pid
    }

    /// Make activation of every element titled `title` fail with `code`.
    pub fn fail_activation(&mut self, title: &str, code: i32) {
        self.fail_codes.insert(title.to_string(), code);
    }

    /// Titles of every element an activation was attempted on, in order.
    pub fn activated_titles(&self) -> Vec<String> {
        self.activations
            .borrow()
            .iter()
            .map(|element| self.title_of(*element))
            .collect()
    }

    pub fn activation_count(&self) -> usize {
        self.activations.borrow().len()
    }

    /// Number of `children` queries answered so far. A trigger that
    /// short-circuits leaves this well below a full build's count.
    pub fn children_query_count(&self) -> usize {
        self.children_queries.get()
    }

    fn title_of(&self, element: Element) -> String {
        self.elements
            .get(element.0 as usize)
            .and_then(|stored| stored.title.clone())
            .unwrap_or_default()
    }
}

fn intern(elements: &mut Vec<StoredElement>, node: &SnapshotNode) -> Element {
    let id = Element(elements.len() as u32);
    elements.push(StoredElement {
        title: node.title.clone(),
        enabled: node.enabled,
        position: node.position,
        children: Vec::new(),
    });

    let children = node
        .children
        .iter()
        .map(|child| intern(elements, child))
        .collect();
    elements[id.0 as usize].children = children;

    id
}

impl AccessibilityProvider for SnapshotProvider {
    fn root_menu_bar(&self, pid: i32) -> Option<Element> {
        match self.pid {
            Some(pinned) if pinned != pid => None,
            _ => Some(Element(0)),
        }
    }

    fn children(&self, element: Element) -> Vec<Element> {
        self.children_queries.set(self.children_queries.get() + 1);
        self.elements
            .get(element.0 as usize)
            .map(|stored| stored.children.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, element: Element, name: &str) -> AttrValue {
        let Some(stored) = self.elements.get(element.0 as usize) else {
            return AttrValue::Absent;
        };

        match name {
            ATTR_TITLE => stored
                .title
                .clone()
                .map(AttrValue::Text)
                .unwrap_or(AttrValue::Absent),
            ATTR_ENABLED => stored
                .enabled
                .map(AttrValue::Flag)
                .unwrap_or(AttrValue::Absent),
            ATTR_POSITION => stored
                .position
                .map(|p| AttrValue::Point(p[0], p[1]))
                .unwrap_or(AttrValue::Absent),
            _ => AttrValue::Absent,
        }
    }

    fn activate(&self, element: Element) -> Result<(), ActivationError> {
        self.activations.borrow_mut().push(element);

        let title = self.title_of(element);
        match self.fail_codes.get(&title) {
            Some(code) => Err(ActivationError { code: *code }),
            None => Ok(()),
        }
    }
}
