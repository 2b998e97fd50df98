use crate::provider::provider::{
    ATTR_ENABLED, ATTR_POSITION, ATTR_TITLE, AccessibilityProvider, ActivationError, AttrValue,
    Element,
};

/// Total, default-driven reads over an `AccessibilityProvider`.
///
/// Every lookup degrades to a defined default instead of propagating an
/// error: a missing or wrong-typed title becomes the empty string, a
/// missing enabled flag becomes false, and a missing position marks the
/// element as not yet resolved onscreen. The only failure a caller can
/// observe through this layer is an activation that does not succeed.
pub struct AccessibilityReader<'a> {
    provider: &'a dyn AccessibilityProvider,
}

impl<'a> AccessibilityReader<'a> {
    pub fn new(provider: &'a dyn AccessibilityProvider) -> Self {
        Self { provider }
    }

    pub fn root_menu_bar(&self, pid: i32) -> Option<Element> {
        self.provider.root_menu_bar(pid)
    }

    pub fn children(&self, element: Element) -> Vec<Element> {
        self.provider.children(element)
    }

    pub fn title(&self, element: Element) -> String {
        match self.provider.attribute(element, ATTR_TITLE) {
            AttrValue::Text(title) => title,
            _ => String::new(),
        }
    }

    pub fn enabled(&self, element: Element) -> bool {
        match self.provider.attribute(element, ATTR_ENABLED) {
            AttrValue::Flag(enabled) => enabled,
            _ => false,
        }
    }

    /// Whether the element has been resolved onscreen. Elements without a
    /// position are transient or decorative and contribute nothing.
    pub fn has_position(&self, element: Element) -> bool {
        matches!(
            self.provider.attribute(element, ATTR_POSITION),
            AttrValue::Point(_, _)
        )
    }

    pub fn activate(&self, element: Element) -> Result<(), ActivationError> {
        self.provider.activate(element)
    }
}
