// Tab Item Demo
// Interactive tab bar built from tab items, painted with ratatui

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing_subscriber::EnvFilter;

use tab_item::config::TabBarConfig;
use tab_item::config_validation::load_and_validate_config;
use tab_item::item::{build_accessibility, is_focused};
use tab_item::{BasicRoute, NavigationState, RenderProps, Scene, TabBarItem};
use view_components::{hit_test, paint_node, slot_constraint, Callback, HitRegion, Node, Style};

const LOG_FILE: &str = "tab-item-demo.log";
const BAR_HEIGHT: u16 = 4;

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                   DEMO STATE                                                     │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Shared cells the item callbacks write into between frames
#[derive(Default)]
struct DemoEvents {
    pending_press: Rc<Cell<Option<usize>>>,
    status: Rc<RefCell<String>>,
}

struct Demo {
    tab_bar: TabBarConfig,
    nav: NavigationState<BasicRoute>,
    events: DemoEvents,
    regions: Vec<HitRegion>,
    /// Region of each item's own touchable, by route index
    item_regions: Vec<Option<HitRegion>>,
    last_bounds: Vec<Option<Rect>>,
}

impl Demo {
    fn new(tab_bar: TabBarConfig) -> Self {
        let nav = tab_bar.navigation_state();
        let last_bounds = vec![None; nav.len()];
        Self {
            tab_bar,
            nav,
            events: DemoEvents::default(),
            regions: Vec::new(),
            item_regions: Vec::new(),
            last_bounds,
        }
    }

    fn item(&self, index: usize) -> TabBarItem<'_, BasicRoute> {
        let route = &self.nav.routes[index];
        let mut item = TabBarItem::new(route, &self.nav, index)
            .with_render_icon(glyph_icon)
            .with_render_badge(count_badge)
            .on_press(Callback::new({
                let pending = Rc::clone(&self.events.pending_press);
                move |_: ()| pending.set(Some(index))
            }))
            .on_long_press(Callback::new({
                let status = Rc::clone(&self.events.status);
                let key = route.key.clone();
                move |_: ()| *status.borrow_mut() = format!("long press on '{key}'")
            }))
            .on_layout(Callback::new({
                let key = route.key.clone();
                move |bounds: Rect| tracing::info!(route = %key, ?bounds, "tab item layout")
            }));

        if let Some(color) = &self.tab_bar.active_color {
            item = item.with_active_color(color.clone());
        }
        if let Some(color) = &self.tab_bar.inactive_color {
            item = item.with_inactive_color(color.clone());
        }
        if let Some(color) = &self.tab_bar.press_color {
            item = item.with_press_color(color.clone());
        }
        if let Some(opacity) = self.tab_bar.press_opacity {
            item = item.with_press_opacity(opacity);
        }
        if let Some(width) = self.tab_bar.width_of(&route.key) {
            item = item.with_style(Style::new().with_width(width));
        }
        item
    }

    fn focus_step(&mut self, forward: bool) {
        let len = self.nav.len();
        if len == 0 {
            return;
        }
        self.nav.index = if forward {
            (self.nav.index + 1) % len
        } else {
            (self.nav.index + len - 1) % len
        };
        tracing::debug!(index = self.nav.index, "focus moved");
    }

    fn apply_pending_press(&mut self) {
        if let Some(index) = self.events.pending_press.take() {
            self.nav.index = index;
            *self.events.status.borrow_mut() = format!("pressed '{}'", self.nav.routes[index].key);
        }
    }


    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        let bar = Block::default().borders(Borders::ALL).title(" Tabs ");
        let bar_inner = bar.inner(chunks[0]);
        f.render_widget(bar, chunks[0]);

        let nodes: Vec<Node> = (0..self.nav.len()).map(|index| self.item(index).render()).collect();
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(nodes.iter().map(slot_constraint))
            .split(bar_inner);

        let mut regions = Vec::new();
        let mut item_regions = Vec::with_capacity(nodes.len());
        for (node, slot) in nodes.iter().zip(slots.iter()) {
            let first = regions.len();
            paint_node(f.buffer_mut(), node, *slot, &mut regions);
            // The item's touchable registers after any touchable nested inside it
            item_regions.push(regions[first..].last().cloned());
        }
        self.regions = regions;
        self.item_regions = item_regions;

        f.render_widget(
            Paragraph::new(self.focused_details())
                .block(Block::default().borders(Borders::ALL).title(" Accessibility ")),
            chunks[1],
        );

        let status = format!(
            " ←/→ focus · click press · right-click long press · q quit │ {}",
            self.events.status.borrow()
        );
        f.render_widget(Paragraph::new(status), chunks[2]);
    }

    /// YAML dump of the focused item's accessibility descriptor
    fn focused_details(&self) -> String {
        let Some(route) = self.nav.focused_route() else {
            return "no focused route".to_string();
        };
        let item = self.item(self.nav.index);
        let descriptor = build_accessibility(&item, &Scene::new(route), is_focused(&self.nav, route));
        serde_yaml::to_string(&descriptor).unwrap_or_else(|e| format!("unserializable: {e}"))
    }
}

/// Fire `on_layout` for items whose painted bounds changed
///
/// Both slices are indexed by route; an item that was not painted has no region.
fn notify_layout_changes(last_bounds: &mut [Option<Rect>], item_regions: &[Option<HitRegion>]) {
    for (last, region) in last_bounds.iter_mut().zip(item_regions) {
        let bounds = region.as_ref().map(|region| region.bounds);
        if *last == bounds {
            continue;
        }
        *last = bounds;
        if let Some(region) = region {
            region.handlers.layout(region.bounds);
        }
    }
}

fn glyph_icon(props: RenderProps<'_, BasicRoute>) -> Option<Node> {
    let glyph = props.route.icon.as_ref()?;
    Some(Node::text(glyph.clone(), Style::new().with_color(props.color)))
}

fn count_badge(scene: &Scene<'_, BasicRoute>) -> Option<Node> {
    let count = scene.route.badge.as_ref()?;
    Some(Node::text(
        format!(" {count} "),
        Style::new().with_color("white").with_background_color("red"),
    ))
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_tracing()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let app_config = load_and_validate_config(config_path).context("loading tab bar configuration")?;
    let mut demo = Demo::new(app_config.tab_bar);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut demo);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn init_tracing() -> Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tab_item=debug,view_components=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run<B: Backend>(terminal: &mut Terminal<B>, demo: &mut Demo) -> Result<()> {
    loop {
        terminal.draw(|f| demo.draw(f))?;
        notify_layout_changes(&mut demo.last_bounds, &demo.item_regions);

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Left => demo.focus_step(false),
                    KeyCode::Right | KeyCode::Tab => demo.focus_step(true),
                    _ => {}
                }
            }
            Event::Mouse(mouse_event) => {
                let hit = hit_test(&demo.regions, mouse_event.column, mouse_event.row);
                match (mouse_event.kind, hit) {
                    (MouseEventKind::Down(MouseButton::Left), Some(region)) => region.handlers.press(),
                    (MouseEventKind::Down(MouseButton::Right), Some(region)) => {
                        region.handlers.long_press()
                    }
                    _ => {}
                }
            }
            // Terminal resize - handled on next draw
            _ => {}
        }

        demo.apply_pending_press();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use view_components::TouchHandlers;

    fn region(bounds: Rect, layouts: &Rc<RefCell<Vec<Rect>>>) -> HitRegion {
        let layouts = Rc::clone(layouts);
        HitRegion {
            bounds,
            test_id: None,
            handlers: TouchHandlers {
                on_layout: Some(Callback::new(move |bounds: Rect| layouts.borrow_mut().push(bounds))),
                ..TouchHandlers::default()
            },
        }
    }

    #[test]
    fn test_layout_fires_only_on_change() {
        let layouts = Rc::new(RefCell::new(Vec::new()));
        let first = Rect::new(0, 0, 10, 2);
        let mut last_bounds = vec![None];

        notify_layout_changes(&mut last_bounds, &[Some(region(first, &layouts))]);
        notify_layout_changes(&mut last_bounds, &[Some(region(first, &layouts))]);
        assert_eq!(*layouts.borrow(), vec![first]);

        let moved = Rect::new(0, 0, 12, 2);
        notify_layout_changes(&mut last_bounds, &[Some(region(moved, &layouts))]);
        assert_eq!(*layouts.borrow(), vec![first, moved]);
    }

    #[test]
    fn test_unpainted_item_keeps_neighbours_aligned() {
        let a = Rc::new(RefCell::new(Vec::new()));
        let c = Rc::new(RefCell::new(Vec::new()));
        let a_bounds = Rect::new(0, 0, 5, 2);
        let c_bounds = Rect::new(5, 0, 5, 2);
        let mut last_bounds = vec![None; 3];

        notify_layout_changes(
            &mut last_bounds,
            &[Some(region(a_bounds, &a)), None, Some(region(c_bounds, &c))],
        );
        notify_layout_changes(
            &mut last_bounds,
            &[Some(region(a_bounds, &a)), None, Some(region(c_bounds, &c))],
        );

        assert_eq!(*a.borrow(), vec![a_bounds]);
        assert_eq!(*c.borrow(), vec![c_bounds]);
        assert_eq!(last_bounds, vec![Some(a_bounds), None, Some(c_bounds)]);
    }
}
