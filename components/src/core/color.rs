// Color parsing
// Converts style color strings into terminal colors

use ratatui::style::Color;

/// Parse a style color string
///
/// Accepts named colors, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
/// Alpha is premultiplied against a black terminal background, so
/// `rgba(255, 255, 255, 0.7)` paints as a light grey.
/// Unrecognised strings fall back to white.
pub fn parse_color(color: &str) -> Color {
    let normalized = color.trim().to_lowercase();

    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(Color::White);
    }
    if let Some(args) = function_args(&normalized, "rgba") {
        return parse_channels(args, true).unwrap_or(Color::White);
    }
    if let Some(args) = function_args(&normalized, "rgb") {
        return parse_channels(args, false).unwrap_or(Color::White);
    }

    match normalized.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "transparent" => Color::Reset,
        // CSS dark shades as explicit RGB
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" | "darkgoldenrod" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => Color::White,
    }
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn parse_channels(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let r: u8 = parts[0].parse().ok()?;
    let g: u8 = parts[1].parse().ok()?;
    let b: u8 = parts[2].parse().ok()?;
    let alpha: f32 = if with_alpha {
        parts[3].parse::<f32>().ok()?.clamp(0.0, 1.0)
    } else {
        1.0
    };

    let scale = |channel: u8| (f32::from(channel) * alpha).round() as u8;
    Some(Color::Rgb(scale(r), scale(g), scale(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("cyan"), Color::Cyan);
        assert_eq!(parse_color("Grey"), Color::Gray);
    }

    #[test]
    fn test_dark_shades() {
        assert_eq!(parse_color("dark_yellow"), Color::Rgb(184, 134, 11));
        assert_eq!(parse_color("darkMagenta"), Color::Rgb(139, 0, 139));
        assert_eq!(parse_color("dark_cyan"), Color::Rgb(0, 139, 139));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(parse_color("#1a2a2a"), Color::Rgb(0x1a, 0x2a, 0x2a));
        assert_eq!(parse_color("#12"), Color::White);
    }

    #[test]
    fn test_rgba_premultiplies_alpha() {
        assert_eq!(parse_color("rgba(255, 255, 255, 1)"), Color::Rgb(255, 255, 255));
        assert_eq!(parse_color("rgba(200, 100, 50, 0.5)"), Color::Rgb(100, 50, 25));
        assert_eq!(parse_color("rgb(10,20,30)"), Color::Rgb(10, 20, 30));
    }

    #[test]
    fn test_malformed_falls_back_to_white() {
        assert_eq!(parse_color("rgba(1, 2)"), Color::White);
        assert_eq!(parse_color("chartreuse-ish"), Color::White);
    }
}
