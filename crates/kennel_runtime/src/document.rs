//! Mounted button elements of one page

use kennel_theme::{
    data_attributes, ButtonSize, ButtonVariant, RenderContext, ResolvedButtonStyle,
};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct ButtonId;
}

/// What a page asks for when it renders a button
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub context: RenderContext,
    /// Per-instance preset override
    pub preset_slug: Option<String>,
}

impl ButtonProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn admin(mut self) -> Self {
        self.context = RenderContext::Admin;
        self
    }

    pub fn preset(mut self, slug: impl Into<String>) -> Self {
        self.preset_slug = Some(slug.into());
        self
    }

    /// Slug this button references in public rendering, if any
    pub fn instance_slug(&self) -> Option<&str> {
        match self.context {
            RenderContext::Public => self.preset_slug.as_deref().filter(|s| !s.is_empty()),
            RenderContext::Admin => None,
        }
    }
}

/// A mounted button and its current inline style snapshot
#[derive(Clone, Debug)]
pub struct ButtonElement {
    pub props: ButtonProps,
    pub style: ResolvedButtonStyle,
    pub attributes: Vec<(&'static str, String)>,
}

impl ButtonElement {
    fn new(props: ButtonProps) -> Self {
        let attributes = data_attributes(props.context, props.variant, props.instance_slug());
        Self {
            props,
            style: ResolvedButtonStyle::framework(),
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Button elements currently mounted on the page
#[derive(Default)]
pub struct Document {
    buttons: SlotMap<ButtonId, ButtonElement>,
    route: String,
}

impl Document {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            buttons: SlotMap::with_key(),
            route: route.into(),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn insert(&mut self, props: ButtonProps) -> ButtonId {
        self.buttons.insert(ButtonElement::new(props))
    }

    pub fn remove(&mut self, id: ButtonId) -> Option<ButtonElement> {
        self.buttons.remove(id)
    }

    pub fn get(&self, id: ButtonId) -> Option<&ButtonElement> {
        self.buttons.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: ButtonId) -> Option<&mut ButtonElement> {
        self.buttons.get_mut(id)
    }

    pub fn ids(&self) -> Vec<ButtonId> {
        self.buttons.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Whether any mounted element still carries this instance slug
    pub fn references_slug(&self, slug: &str) -> bool {
        self.buttons
            .values()
            .any(|b| b.props.instance_slug() == Some(slug))
    }

    /// Unmount everything and switch to a new route
    pub(crate) fn replace_route(&mut self, route: impl Into<String>) -> Vec<ButtonElement> {
        self.route = route.into();
        self.buttons.drain().map(|(_, b)| b).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_buttons_never_reference_slugs() {
        let mut doc = Document::new("/admin");
        let id = doc.insert(ButtonProps::new("Save").admin().preset("bold"));
        assert!(!doc.references_slug("bold"));
        assert_eq!(doc.get(id).unwrap().attribute("data-admin-button"), Some("true"));
        assert_eq!(doc.get(id).unwrap().attribute("data-button-preset-slug"), None);
    }

    #[test]
    fn test_references_slug_tracks_removal() {
        let mut doc = Document::new("/");
        let a = doc.insert(ButtonProps::new("A").preset("bold"));
        let b = doc.insert(ButtonProps::new("B").preset("bold"));
        doc.remove(a);
        assert!(doc.references_slug("bold"));
        doc.remove(b);
        assert!(!doc.references_slug("bold"));
    }

    #[test]
    fn test_replace_route_unmounts_all() {
        let mut doc = Document::new("/");
        doc.insert(ButtonProps::new("A"));
        doc.insert(ButtonProps::new("B").variant(ButtonVariant::Secondary));
        let removed = doc.replace_route("/about");
        assert_eq!(removed.len(), 2);
        assert!(doc.is_empty());
        assert_eq!(doc.route(), "/about");
    }
}
