// Terminal Painter
// Lays a node tree out on a cell grid and records touchable regions for click detection
//
// Spacing values (margin, padding) are expressed in points and have no cell
// equivalent, so they are not painted. Absolute children are anchored to the
// top-right corner of their parent using `top` / `right` as cell offsets.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style as CellStyle,
};
use unicode_width::UnicodeWidthStr;

use crate::core::{parse_color, Align, Style};
use crate::elements::{Node, TouchHandlers};

/// Screen region owned by a touchable after painting
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub bounds: Rect,
    pub test_id: Option<String>,
    pub handlers: TouchHandlers,
}

impl HitRegion {
    /// Check if a coordinate (x, y) is within this region
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.bounds.x
            && x < self.bounds.x.saturating_add(self.bounds.width)
            && y >= self.bounds.y
            && y < self.bounds.y.saturating_add(self.bounds.height)
    }
}

/// Intrinsic size of a node in cells: (width, height)
pub fn measure(node: &Node) -> (u16, u16) {
    match node {
        Node::Text(text) => (cell_width(&text.content), 1),
        Node::Touchable(touchable) => measure(&touchable.child),
        Node::View(view) => view
            .children
            .iter()
            .filter(|child| !is_absolute(child))
            .map(measure)
            .fold((0, 0), |(w, h), (cw, ch)| (w.max(cw), h.saturating_add(ch))),
    }
}

/// Paint `node` into `area`, appending a hit region for every touchable
///
/// Regions are appended in paint order, so later entries sit on top.
pub fn paint_node(buf: &mut Buffer, node: &Node, area: Rect, regions: &mut Vec<HitRegion>) {
    let area = area.intersection(buf.area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    match node {
        Node::Text(text) => {
            let width = cell_width(&text.content).min(area.width);
            let x = area.x + (area.width - width) / 2;
            buf.set_stringn(x, area.y, &text.content, width as usize, cell_style(&text.style));
        }
        Node::Touchable(touchable) => {
            paint_node(buf, &touchable.child, area, regions);
            tracing::trace!(?area, test_id = ?touchable.test_id, "registered touchable region");
            regions.push(HitRegion {
                bounds: area,
                test_id: touchable.test_id.clone(),
                handlers: touchable.handlers.clone(),
            });
        }
        Node::View(view) => {
            let (_, flow_height) = measure(node);
            let mut y = match view.style.justify_content {
                Some(Align::Center) => area.y + area.height.saturating_sub(flow_height) / 2,
                Some(Align::End) => area.y + area.height.saturating_sub(flow_height),
                _ => area.y,
            };
            let bottom = area.y + area.height;

            for child in view.children.iter().filter(|child| !is_absolute(child)) {
                if y >= bottom {
                    break;
                }
                let (_, height) = measure(child);
                let child_area = Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height: height.min(bottom - y),
                };
                paint_node(buf, child, child_area, regions);
                y = y.saturating_add(height);
            }

            // Overlays paint last so they sit above flow content
            for child in view.children.iter().filter(|child| is_absolute(child)) {
                let style = child.style().cloned().unwrap_or_default();
                let (width, height) = measure(child);
                let width = width.min(area.width);
                let y = area.y.saturating_add(cells(style.top));
                if y >= bottom {
                    continue;
                }
                let child_area = Rect {
                    x: (area.x + area.width)
                        .saturating_sub(width.saturating_add(cells(style.right)))
                        .max(area.x),
                    y,
                    width,
                    height: height.min(bottom - y),
                };
                paint_node(buf, child, child_area, regions);
            }
        }
    }
}

/// Horizontal constraint for `node` laid out as one slot of a row
///
/// An explicit width gives a fixed slot and `flex` fills the remaining space.
/// A touchable without either defers to its child. Anything else takes its
/// measured width.
pub fn slot_constraint(node: &Node) -> Constraint {
    let style = node.style();
    if let Some(width) = style.and_then(|style| style.width) {
        return Constraint::Length(cells(Some(width)));
    }
    if let Some(flex) = style.and_then(|style| style.flex) {
        return Constraint::Fill(cells(Some(flex)).max(1));
    }
    match node {
        Node::Touchable(touchable) => slot_constraint(&touchable.child),
        _ => Constraint::Length(measure(node).0),
    }
}

/// Find the topmost region containing (x, y)
pub fn hit_test(regions: &[HitRegion], x: u16, y: u16) -> Option<&HitRegion> {
    regions.iter().rev().find(|region| region.contains(x, y))
}

fn is_absolute(node: &Node) -> bool {
    node.style().map(Style::is_absolute).unwrap_or(false)
}

/// Display width in terminal cells; wide glyphs take two
fn cell_width(content: &str) -> u16 {
    u16::try_from(content.width()).unwrap_or(u16::MAX)
}

fn cells(points: Option<f32>) -> u16 {
    points.map(|value| value.max(0.0) as u16).unwrap_or(0)
}

fn cell_style(style: &Style) -> CellStyle {
    let mut cell = CellStyle::default();
    if let Some(color) = &style.color {
        cell = cell.fg(parse_color(color));
    }
    if let Some(background) = &style.background_color {
        cell = cell.bg(parse_color(background));
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::elements::{Callback, Touchable};
    use ratatui::style::Color;
    use std::cell::Cell;
    use std::rc::Rc;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_measure_ignores_absolute_children() {
        let badge = Node::view(
            Style::new().with_position(Position::Absolute),
            vec![Node::text("99", Style::default())],
        );
        let tree = Node::view(
            Style::default(),
            vec![
                Node::text("*", Style::default()),
                Node::text("Home", Style::default()),
                badge,
            ],
        );

        assert_eq!(measure(&tree), (4, 2));
    }

    #[test]
    fn test_paint_centers_text_with_color() {
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        let mut regions = Vec::new();

        paint_node(
            &mut buf,
            &Node::text("Home", Style::new().with_color("red")),
            area,
            &mut regions,
        );

        assert_eq!(row(&buf, 0), "  Home  ");
        assert_eq!(buf[(2, 0)].fg, Color::Red);
        assert!(regions.is_empty());
    }

    #[test]
    fn test_badge_anchored_top_right() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        let mut regions = Vec::new();
        let tree = Node::view(
            Style::new().with_justify_content(Align::End),
            vec![
                Node::text("Feed", Style::default()),
                Node::view(
                    Style::new()
                        .with_position(Position::Absolute)
                        .with_top(0.0)
                        .with_right(0.0),
                    vec![Node::text("3", Style::default())],
                ),
            ],
        );

        paint_node(&mut buf, &tree, area, &mut regions);

        assert_eq!(row(&buf, 0), "         3");
        assert_eq!(row(&buf, 1), "   Feed   ");
    }

    #[test]
    fn test_wide_glyphs_measured_in_cells() {
        assert_eq!(measure(&Node::text("📥", Style::default())), (2, 1));

        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        paint_node(&mut buf, &Node::text("📥", Style::default()), area, &mut Vec::new());
        assert_eq!(buf[(2, 0)].symbol(), "📥");

        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        paint_node(&mut buf, &Node::text("设置", Style::default()), area, &mut Vec::new());
        assert_eq!(buf[(2, 0)].symbol(), "设");
        assert_eq!(buf[(4, 0)].symbol(), "置");
    }

    #[test]
    fn test_overlay_with_huge_offsets_stays_in_parent() {
        let overlay = |top: f32, right: f32| {
            Node::view(
                Style::new()
                    .with_position(Position::Absolute)
                    .with_top(top)
                    .with_right(right),
                vec![Node::text("9", Style::default())],
            )
        };
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        let tree = Node::view(
            Style::default(),
            vec![overlay(0.0, 1e6), overlay(1e6, 0.0)],
        );

        paint_node(&mut buf, &tree, area, &mut Vec::new());

        assert_eq!(row(&buf, 0), "9     ");
        assert_eq!(row(&buf, 1), "      ");
    }

    #[test]
    fn test_overlay_height_clipped_to_parent() {
        let buffer_area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(buffer_area);
        let tall = Node::view(
            Style::new().with_position(Position::Absolute),
            vec![
                Node::text("a", Style::default()),
                Node::text("b", Style::default()),
                Node::text("c", Style::default()),
            ],
        );
        let tree = Node::view(Style::default(), vec![tall]);

        paint_node(&mut buf, &tree, Rect::new(0, 0, 4, 2), &mut Vec::new());

        assert_eq!(row(&buf, 0), "   a");
        assert_eq!(row(&buf, 1), "   b");
        assert_eq!(row(&buf, 2), "    ");
    }

    #[test]
    fn test_slot_constraint_follows_node_styles() {
        let content = Node::view(
            Style::new().with_flex(1.0).with_width(14.0),
            vec![Node::text("Settings", Style::default())],
        );
        let mut fixed = Touchable::new(content);
        fixed.style = None;
        assert_eq!(slot_constraint(&Node::Touchable(fixed)), Constraint::Length(14));

        let mut flexible = Touchable::new(Node::view(Style::default(), vec![]));
        flexible.style = Some(Style::new().with_flex(1.0));
        assert_eq!(slot_constraint(&Node::Touchable(flexible)), Constraint::Fill(1));

        assert_eq!(
            slot_constraint(&Node::text("Home", Style::default())),
            Constraint::Length(4)
        );
    }

    #[test]
    fn test_touchable_registers_region_and_hit_test() {
        let pressed = Rc::new(Cell::new(false));
        let mut touchable = Touchable::new(Node::text("Tab", Style::default()));
        touchable.test_id = Some("tab-home".to_string());
        touchable.handlers.on_press = Some(Callback::new({
            let pressed = Rc::clone(&pressed);
            move |_: ()| pressed.set(true)
        }));

        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        let mut regions = Vec::new();
        paint_node(&mut buf, &Node::Touchable(touchable), Rect::new(5, 0, 6, 3), &mut regions);

        assert_eq!(regions.len(), 1);
        assert!(hit_test(&regions, 4, 1).is_none());
        let hit = hit_test(&regions, 10, 2).unwrap();
        assert_eq!(hit.test_id.as_deref(), Some("tab-home"));
        hit.handlers.press();
        assert!(pressed.get());
    }
}
