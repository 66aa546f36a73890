// Node Tree
// The renderable output of a component: views, text, and touchable regions

use serde::Serialize;

use super::touchable::Touchable;
use crate::core::{PointerEvents, Style};

/// A non-interactive container that stacks its children
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct View {
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    pub pointer_events: PointerEvents,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A run of styled text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Text {
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    pub content: String,
}

/// One node of a rendered tree
///
/// Equality is structural. Callbacks held by touchables compare by identity,
/// so forwarding the same callback into two renders yields equal trees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    View(View),
    Text(Text),
    Touchable(Touchable),
}

impl Node {
    /// Plain container with default pointer handling
    pub fn view(style: Style, children: Vec<Node>) -> Self {
        Node::View(View {
            style,
            pointer_events: PointerEvents::Auto,
            children,
        })
    }

    /// Container wrapping a single child
    pub fn wrap(child: Node) -> Self {
        Node::view(Style::default(), vec![child])
    }

    pub fn text(content: impl Into<String>, style: Style) -> Self {
        Node::Text(Text {
            style,
            content: content.into(),
        })
    }

    /// Direct children of this node
    pub fn children(&self) -> &[Node] {
        match self {
            Node::View(view) => &view.children,
            Node::Text(_) => &[],
            Node::Touchable(touchable) => std::slice::from_ref(touchable.child.as_ref()),
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Node::View(view) => Some(&view.style),
            Node::Text(text) => Some(&text.style),
            Node::Touchable(touchable) => touchable.style.as_ref(),
        }
    }

    pub fn as_view(&self) -> Option<&View> {
        match self {
            Node::View(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_touchable(&self) -> Option<&Touchable> {
        match self {
            Node::Touchable(touchable) => Some(touchable),
            _ => None,
        }
    }

    /// Depth-first, pre-order walk over this node and all descendants
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// First node (pre-order) matching the predicate
    pub fn find(&self, predicate: impl Fn(&Node) -> bool) -> Option<&Node> {
        self.descendants().into_iter().find(|node| predicate(node))
    }

    /// Whether `needle` appears anywhere in this tree (including the root)
    pub fn contains(&self, needle: &Node) -> bool {
        self.descendants().into_iter().any(|node| node == needle)
    }

    /// All text contents in paint order
    pub fn texts(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|node| node.as_text().map(|text| text.content.as_str()))
            .collect()
    }
}
