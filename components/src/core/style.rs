// Style System
// Style records, composable style descriptions, and flattening
//
// Usage:
//   let prop = StyleProp::from(vec![base.into(), StyleProp::None, overrides.into()]);
//   let resolved = prop.flatten();
//   if resolved.width.is_some() { ... }

use serde::{Deserialize, Serialize};

/// Positioning scheme for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Laid out in the normal flow of its parent
    #[default]
    Relative,
    /// Taken out of flow and anchored by `top` / `right`
    Absolute,
}

/// Cross-axis / main-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
}

/// Whether an element (and its subtree) receives touch input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvents {
    /// Element and children receive input
    #[default]
    Auto,
    /// Neither the element nor its children receive input
    None,
    /// Only children receive input
    BoxNone,
    /// Only the element itself receives input
    BoxOnly,
}

/// A single resolved style record
///
/// Every field is optional; an unset field means "not specified here" so that
/// records can be merged left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_min_height(mut self, min_height: f32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_margin_top(mut self, margin_top: f32) -> Self {
        self.margin_top = Some(margin_top);
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_align_items(mut self, align: Align) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn with_justify_content(mut self, align: Align) -> Self {
        self.justify_content = Some(align);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Overlay `other` on top of this style: every field set in `other` wins
    pub fn merge(&mut self, other: &Style) {
        fn overlay<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
            if let Some(value) = source {
                *target = Some(value.clone());
            }
        }

        overlay(&mut self.flex, &other.flex);
        overlay(&mut self.width, &other.width);
        overlay(&mut self.height, &other.height);
        overlay(&mut self.min_height, &other.min_height);
        overlay(&mut self.margin, &other.margin);
        overlay(&mut self.margin_top, &other.margin_top);
        overlay(&mut self.padding, &other.padding);
        overlay(&mut self.align_items, &other.align_items);
        overlay(&mut self.justify_content, &other.justify_content);
        overlay(&mut self.position, &other.position);
        overlay(&mut self.top, &other.top);
        overlay(&mut self.right, &other.right);
        overlay(&mut self.color, &other.color);
        overlay(&mut self.background_color, &other.background_color);
    }

    /// Returns true when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    pub fn is_absolute(&self) -> bool {
        self.position == Some(Position::Absolute)
    }
}

/// A style description as callers write it: a record, a list of
/// descriptions (possibly containing absent entries), or nothing at all
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StyleProp {
    #[default]
    None,
    Style(Style),
    List(Vec<StyleProp>),
}

impl StyleProp {
    /// Merge the description into a single record, left to right
    ///
    /// Later entries override earlier ones field by field; `None` entries are
    /// skipped at any nesting depth.
    pub fn flatten(&self) -> Style {
        let mut resolved = Style::default();
        self.flatten_into(&mut resolved);
        resolved
    }

    fn flatten_into(&self, target: &mut Style) {
        match self {
            StyleProp::None => {}
            StyleProp::Style(style) => target.merge(style),
            StyleProp::List(entries) => {
                for entry in entries {
                    entry.flatten_into(target);
                }
            }
        }
    }
}

impl From<Style> for StyleProp {
    fn from(style: Style) -> Self {
        StyleProp::Style(style)
    }
}

impl From<Option<Style>> for StyleProp {
    fn from(style: Option<Style>) -> Self {
        style.map(StyleProp::Style).unwrap_or(StyleProp::None)
    }
}

impl From<Vec<StyleProp>> for StyleProp {
    fn from(entries: Vec<StyleProp>) -> Self {
        StyleProp::List(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_set_fields_only() {
        let mut base = Style::new().with_margin(4.0).with_color("red");
        base.merge(&Style::new().with_color("blue"));

        assert_eq!(base.margin, Some(4.0));
        assert_eq!(base.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_flatten_none_is_empty() {
        assert!(StyleProp::None.flatten().is_empty());
    }

    #[test]
    fn test_flatten_nested_list() {
        let prop = StyleProp::from(vec![
            Style::new().with_height(48.0).into(),
            StyleProp::None,
            StyleProp::from(vec![
                StyleProp::None,
                Style::new().with_width(120.0).into(),
            ]),
        ]);

        let style = prop.flatten();
        assert_eq!(style.width, Some(120.0));
        assert_eq!(style.height, Some(48.0));
    }

    #[test]
    fn test_flatten_later_entries_win() {
        let prop = StyleProp::from(vec![
            Style::new().with_width(80.0).into(),
            Style::new().with_width(120.0).into(),
        ]);

        assert_eq!(prop.flatten().width, Some(120.0));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(StyleProp::from(None), StyleProp::None);
        assert_eq!(
            StyleProp::from(Some(Style::new().with_flex(1.0))),
            StyleProp::Style(Style::new().with_flex(1.0))
        );
    }
}
