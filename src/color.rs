use serde::{Deserialize, Serialize};

/// Color of a map element.
///
/// Attribute values accept either HEX6/HEX8 notation (`#RRGGBB`, `#RRGGBBAA`) or one of the
/// basic CSS color names the renderer understands. On the wire a color is always a HEX8 string.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::try_parse(&value).unwrap_or(Color::BLACK)
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Red color: `#FF0000FF`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Green color: `#00FF00FF`
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    /// Blue color: `#0000FFFF`
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black color: `#000000FF`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Gray color: `#AAAAAAFF`
    pub const GRAY: Color = Color::rgba(170, 170, 170, 255);
    /// Orange color: `#FFA500FF`
    pub const ORANGE: Color = Color::rgba(255, 165, 0, 255);
    /// Purple color: `#800080FF`
    pub const PURPLE: Color = Color::rgba(128, 0, 128, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8
    /// (`#RRGGBBAA`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        if hex_string.len() != 7 && hex_string.len() != 9 || hex_string.chars().next()? != '#' {
            return None;
        }

        let r = u8::from_str_radix(&hex_string[1..3], 16).ok()?;
        let g = u8::from_str_radix(&hex_string[3..5], 16).ok()?;
        let b = u8::from_str_radix(&hex_string[5..7], 16).ok()?;
        let a = if hex_string.len() == 9 {
            u8::from_str_radix(&hex_string[7..9], 16).ok()?
        } else {
            255
        };

        Some(Self { r, g, b, a })
    }

    /// Parses a color from a basic CSS color name. Names are matched case-insensitively.
    pub fn try_from_name(name: &str) -> Option<Self> {
        const NAMED: [(&str, Color); 9] = [
            ("transparent", Color::TRANSPARENT),
            ("red", Color::RED),
            ("green", Color::GREEN),
            ("blue", Color::BLUE),
            ("white", Color::WHITE),
            ("black", Color::BLACK),
            ("gray", Color::GRAY),
            ("orange", Color::ORANGE),
            ("purple", Color::PURPLE),
        ];

        NAMED
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    /// Parses a color from either hex notation or a CSS color name.
    pub fn try_parse(value: &str) -> Option<Self> {
        Self::try_from_hex(value).or_else(|| Self::try_from_name(value))
    }

    /// Red component of the color in RGBA space.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the color in RGBA space.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the color in RGBA space.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Opacity component of the color.
    pub fn a(&self) -> u8 {
        self.a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_serialization() {
        let hex = "#FF1000AA";
        let color = Color::try_from_hex(hex).unwrap();
        assert_eq!(&color.to_hex(), hex);
    }

    #[test]
    fn hex6_defaults_to_opaque() {
        assert_eq!(Color::try_from_hex("#FFA500"), Some(Color::ORANGE));
    }

    #[test]
    fn named_colors() {
        assert_eq!(Color::try_from_name("Orange"), Some(Color::ORANGE));
        assert_eq!(Color::try_from_name("WHITE"), Some(Color::WHITE));
        assert_eq!(Color::try_from_name("chartreuse"), None);
    }

    #[test]
    fn parse_accepts_both_notations() {
        assert_eq!(Color::try_parse("Red"), Some(Color::RED));
        assert_eq!(Color::try_parse("#FF0000FF"), Some(Color::RED));
        assert_eq!(Color::try_parse("not a color"), None);
    }

    #[test]
    fn unparsable_string_falls_back_to_black() {
        assert_eq!(Color::from("not a color".to_owned()), Color::BLACK);
    }
}
