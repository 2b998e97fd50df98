use crate::provider::provider::Element;

/// One indexed actionable leaf.
#[derive(Debug, Clone)]
pub struct FlatEntry {
    /// "→"-joined path label uniquely identifying the leaf within one build.
    pub path: String,

    /// Leaf title, the part search matches against.
    pub title: String,

    /// Provider element behind the leaf.
    pub element: Element,

    /// Index path of the referenced node inside `MenuTree::items`.
    pub node_path: Vec<usize>,
}

/// Insertion-ordered index of every actionable leaf discovered during a
/// build.
///
/// Populated only by the builder and cleared at the start of every build,
/// so no cross-build staleness. Entries reference tree nodes by index path;
/// the index never owns nodes. Separators and disabled leaves are not
/// indexed.
#[derive(Debug, Clone, Default)]
pub struct FlatIndex {
    entries: Vec<FlatEntry>,
}

impl FlatIndex {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push(&mut self, entry: FlatEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }
}

/// SHA-1 digest over the ordered path labels of a build.
///
/// Two builds of an unchanged menu bar produce the same fingerprint; a
/// retitled, added or removed actionable leaf changes it. Used to detect
/// that an application's menus moved between runs.
pub fn menu_fingerprint(index: &FlatIndex) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    for entry in index.entries() {
        hasher.update(entry.path.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}
