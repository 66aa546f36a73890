// Build script - reads config.yaml at compile time and generates item defaults
// This allows changing default colors and base metrics without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const DEFAULT_ACTIVE_COLOR: &str = {active_color:?};
pub const DEFAULT_INACTIVE_COLOR: &str = {inactive_color:?};

pub const LABEL_MARGIN: f32 = {label_margin:?};
pub const ICON_MARGIN: f32 = {icon_margin:?};
pub const ITEM_PADDING: f32 = {item_padding:?};
pub const ITEM_MIN_HEIGHT: f32 = {item_min_height:?};
"#,
        active_color = config.active_color,
        inactive_color = config.inactive_color,
        label_margin = config.label_margin,
        icon_margin = config.icon_margin,
        item_padding = config.item_padding,
        item_min_height = config.item_min_height,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    active_color: String,
    inactive_color: String,
    label_margin: f32,
    icon_margin: f32,
    item_padding: f32,
    item_min_height: f32,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            active_color: "rgba(255, 255, 255, 1)".to_string(),
            inactive_color: "rgba(255, 255, 255, 0.7)".to_string(),
            label_margin: 4.0,
            icon_margin: 2.0,
            item_padding: 10.0,
            item_min_height: 48.0,
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_defaults = false;
    let mut in_metrics = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level keys switch sections; anything else at column 0 ends them
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_defaults = trimmed.starts_with("defaults:");
            in_metrics = trimmed.starts_with("metrics:");
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_defaults {
                match key {
                    "active_color" => config.active_color = unquote(value).to_string(),
                    "inactive_color" => config.inactive_color = unquote(value).to_string(),
                    _ => {}
                }
            } else if in_metrics {
                match key {
                    "label_margin" => config.label_margin = parse_f32(value, 4.0),
                    "icon_margin" => config.icon_margin = parse_f32(value, 2.0),
                    "item_padding" => config.item_padding = parse_f32(value, 10.0),
                    "item_min_height" => config.item_min_height = parse_f32(value, 48.0),
                    _ => {}
                }
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    // Find the colon separator
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments (only when # is preceded by a space)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}

fn parse_f32(s: &str, fallback: f32) -> f32 {
    unquote(s).parse().unwrap_or(fallback)
}
