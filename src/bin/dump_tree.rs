// Debug script to print the rendered node tree of every configured tab item
//
// Usage: dump-tree [config.yaml] [focused-index]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tab_item::config_validation::load_and_validate_config;
use tab_item::core::ItemDefaults;
use tab_item::{BasicRoute, RenderProps, Scene, TabBarItem};
use tracing_subscriber::EnvFilter;
use view_components::{Node, Style};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().filter(|arg| arg != "-").map(PathBuf::from);
    let focused = args
        .next()
        .map(|arg| arg.parse::<usize>().with_context(|| format!("invalid focused index '{arg}'")))
        .transpose()?;

    let config = load_and_validate_config(config_path).context("loading tab bar configuration")?;
    let tab_bar = &config.tab_bar;
    let mut nav = tab_bar.navigation_state();
    if let Some(index) = focused {
        if index >= nav.len() {
            bail!("focused index {index} out of range for {} routes", nav.len());
        }
        nav.index = index;
    }

    println!("=== NAVIGATION STATE ===");
    println!("Focused index: {}", nav.index);
    println!("Routes: {}", nav.len());
    let defaults = ItemDefaults::default();
    println!(
        "Compiled defaults: active={} inactive={} metrics={:?}",
        defaults.active_color, defaults.inactive_color, defaults.metrics
    );
    println!();

    for (index, route) in nav.routes.iter().enumerate() {
        let mut item = TabBarItem::new(route, &nav, index)
            .with_render_icon(glyph_icon)
            .with_render_badge(count_badge);
        if let Some(color) = &tab_bar.active_color {
            item = item.with_active_color(color.clone());
        }
        if let Some(color) = &tab_bar.inactive_color {
            item = item.with_inactive_color(color.clone());
        }
        if let Some(color) = &tab_bar.press_color {
            item = item.with_press_color(color.clone());
        }
        if let Some(opacity) = tab_bar.press_opacity {
            item = item.with_press_opacity(opacity);
        }
        if let Some(width) = tab_bar.width_of(&route.key) {
            item = item.with_style(Style::new().with_width(width));
        }

        let tree = item.render();
        println!("=== [{index}] {} ===", route.key);
        print!("{}", serde_yaml::to_string(&tree).context("serializing node tree")?);
        println!();
    }

    Ok(())
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
