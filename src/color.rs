use ggez::graphics::Color;

/// Parses a CSS-style color string: a handful of named colors or `#rrggbb`.
pub fn parse_color(s: &str) -> Option<Color> {
    parse_rgb8(s).map(|(r, g, b)| Color::from_rgb(r, g, b))
}

/// Same as [`parse_color`] but as 8-bit channels, for the egui overlay.
pub fn parse_rgb8(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let (r, g, b) = match s.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        // css green is half intensity, lime is the full one
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "orange" => (255, 165, 0),
        "yellow" => (255, 255, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "pink" => (255, 192, 203),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        _ => return None,
    };
    Some((r, g, b))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
