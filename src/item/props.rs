// Item Props
// Callback shapes a caller plugs into a tab item

use std::rc::Rc;

use view_components::Node;

use crate::core::Scene;

/// Result of the label-text lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LabelContent {
    /// Plain text, styled by the default label renderer
    Text(String),
    /// A pre-built node, passed through unchanged
    Node(Node),
}

impl LabelContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LabelContent::Text(text) => Some(text),
            LabelContent::Node(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            LabelContent::Text(text) => Some(text),
            LabelContent::Node(_) => None,
        }
    }
}

impl From<&str> for LabelContent {
    fn from(text: &str) -> Self {
        LabelContent::Text(text.to_string())
    }
}

impl From<String> for LabelContent {
    fn from(text: String) -> Self {
        LabelContent::Text(text)
    }
}

impl From<Node> for LabelContent {
    fn from(node: Node) -> Self {
        LabelContent::Node(node)
    }
}

/// Arguments handed to icon and label strategies
#[derive(Debug)]
pub struct RenderProps<'a, R> {
    pub route: &'a R,
    /// Which variant is being produced
    pub focused: bool,
    pub color: &'a str,
}

impl<R> Clone for RenderProps<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RenderProps<'_, R> {}

/// Renders one visual variant of an icon or label
///
/// Returning `None` means "nothing for this variant"; a missing strategy on the
/// item means the feature is disabled altogether.
pub trait RenderStrategy<R> {
    fn render(&self, props: RenderProps<'_, R>) -> Option<Node>;
}

impl<R, F> RenderStrategy<R> for F
where
    F: Fn(RenderProps<'_, R>) -> Option<Node>,
{
    fn render(&self, props: RenderProps<'_, R>) -> Option<Node> {
        self(props)
    }
}

/// Scene-parameterised lookup (label text, accessibility, test id)
pub type Lookup<R, T> = Rc<dyn Fn(&Scene<'_, R>) -> Option<T>>;

/// Badge renderer; badges have no focused/unfocused variants
pub type BadgeRenderer<R> = Rc<dyn Fn(&Scene<'_, R>) -> Option<Node>>;
