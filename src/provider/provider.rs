use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute names understood at the provider boundary.
pub const ATTR_TITLE: &str = "title";
pub const ATTR_ENABLED: &str = "enabled";
pub const ATTR_POSITION: &str = "position";

/// Opaque handle into the provider's element graph.
///
/// The graph is live and externally owned: a handle is a non-owning
/// identifier, never assumed valid across builds, and the element it names
/// may be invalidated by an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element(pub u32);

/// Loosely typed attribute lookup result.
///
/// Providers answer attribute queries with whatever shape they hold; a
/// variant of the wrong kind for a given attribute is treated the same as
/// `Absent` by `AccessibilityReader`, so consumers only ever see defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
    Point(f32, f32),
    Absent,
}

/// Activation failure reported by the provider, carrying its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationError {
    pub code: i32,
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "provider activation failed with code {}", self.code)
    }
}

impl std::error::Error for ActivationError {}

/// The only boundary between the core and the platform accessibility
/// facility.
///
/// All queries are synchronous reads; the walk trusts the provider's child
/// ordering within one build. Activation is the single mutating call and
/// is never retried: accessibility actions are not assumed idempotent.
pub trait AccessibilityProvider {
    /// Menu-bar root for a running process, or `None` if the process has no
    /// menu bar (or is unknown to the provider).
    fn root_menu_bar(&self, pid: i32) -> Option<Element>;

    /// Ordered children of an element. Empty on missing data or error.
    fn children(&self, element: Element) -> Vec<Element>;

    /// Attribute lookup by name (`title`, `enabled`, `position`).
    fn attribute(&self, element: Element, name: &str) -> AttrValue;

    /// Perform the activation action on an element.
    fn activate(&self, element: Element) -> Result<(), ActivationError>;
}
