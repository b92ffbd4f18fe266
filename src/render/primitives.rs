use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS hex string (`#rrggbb`, or `#rrggbbaa` when translucent);
/// deserialized through [`Color::parse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses any color a canvas stroke style commonly carries: hex,
    /// `rgb()`/`rgba()` with 0..=255 channels and 0..=1 alpha, or one of the
    /// basic CSS color names.
    pub fn parse(input: &str) -> PlotResult<Self> {
        let trimmed = input.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_function(input, args);
        }
        if let Some(color) = named_color(&lower) {
            return Ok(color);
        }
        Self::from_hex(trimmed)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(input: &str) -> PlotResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(PlotError::InvalidColor(format!(
                "`{input}` contains non-hex characters"
            )));
        }

        let channels: Vec<u8> = match digits.len() {
            3 => digits
                .chars()
                .map(|ch| {
                    let nibble = ch.to_digit(16).unwrap_or(0) as u8;
                    nibble * 17
                })
                .collect(),
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|start| u8::from_str_radix(&digits[start..start + 2], 16).unwrap_or(0))
                .collect(),
            _ => {
                return Err(PlotError::InvalidColor(format!(
                    "`{input}` must have 3, 6 or 8 hex digits"
                )));
            }
        };

        let alpha = channels.get(3).map_or(1.0, |value| f64::from(*value) / 255.0);
        let mut color = Self::from_rgb8(channels[0], channels[1], channels[2]);
        color.alpha = alpha;
        Ok(color)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let [red, green, blue, alpha] =
            [self.red, self.green, self.blue, self.alpha].map(channel_to_u8);
        if alpha == u8::MAX {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidColor(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_rgb_function(input: &str, args: &str) -> PlotResult<Color> {
    let invalid = || PlotError::InvalidColor(format!("`{input}` is not a valid rgb() color"));
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(invalid());
    }

    let mut channels = [0.0; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        let value: f64 = part.parse().map_err(|_| invalid())?;
        if !(0.0..=255.0).contains(&value) {
            return Err(invalid());
        }
        *channel = value / 255.0;
    }
    let alpha = match parts.get(3) {
        Some(part) => part.parse::<f64>().map_err(|_| invalid())?,
        None => 1.0,
    };

    let color = Color::rgba(channels[0], channels[1], channels[2], alpha);
    color.validate()?;
    Ok(color)
}

fn named_color(name: &str) -> Option<Color> {
    let [red, green, blue] = match name {
        "black" => [0x00, 0x00, 0x00],
        "silver" => [0xc0, 0xc0, 0xc0],
        "gray" | "grey" => [0x80, 0x80, 0x80],
        "white" => [0xff, 0xff, 0xff],
        "maroon" => [0x80, 0x00, 0x00],
        "red" => [0xff, 0x00, 0x00],
        "purple" => [0x80, 0x00, 0x80],
        "fuchsia" | "magenta" => [0xff, 0x00, 0xff],
        "green" => [0x00, 0x80, 0x00],
        "lime" => [0x00, 0xff, 0x00],
        "olive" => [0x80, 0x80, 0x00],
        "yellow" => [0xff, 0xff, 0x00],
        "navy" => [0x00, 0x00, 0x80],
        "blue" => [0x00, 0x00, 0xff],
        "teal" => [0x00, 0x80, 0x80],
        "aqua" | "cyan" => [0x00, 0xff, 0xff],
        "orange" => [0xff, 0xa5, 0x00],
        "transparent" => return Some(Color::rgba(0.0, 0.0, 0.0, 0.0)),
        _ => return None,
    };
    Some(Color::from_rgb8(red, green, blue))
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorVisitor;

        impl Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a CSS color string such as `#1fcd38` or `red`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
                Color::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(
            Color::from_hex("#1fcd38").expect("long hex"),
            Color::from_rgb8(0x1f, 0xcd, 0x38)
        );
        assert_eq!(
            Color::from_hex("#fff").expect("short hex"),
            Color::WHITE
        );
        assert_eq!(Color::from_hex("000000").expect("no hash"), Color::BLACK);
    }

    #[test]
    fn parses_alpha_channel() {
        let color = Color::from_hex("#ff000080").expect("rgba hex");
        assert!((color.alpha - 128.0 / 255.0).abs() <= 1e-12);
        assert_eq!(color.to_hex(), "#ff000080");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("##fff").is_err());
    }

    #[test]
    fn parses_css_names_and_rgb_functions() {
        assert_eq!(Color::parse("red").expect("name"), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::parse(" Navy ").expect("name"), Color::from_rgb8(0, 0, 0x80));
        assert_eq!(
            Color::parse("rgb(31, 205, 56)").expect("rgb"),
            Color::from_rgb8(0x1f, 0xcd, 0x38)
        );
        let translucent = Color::parse("rgba(255,0,0,0.5)").expect("rgba");
        assert_eq!(translucent.alpha, 0.5);
        assert_eq!(Color::parse("#fff").expect("hex"), Color::WHITE);
    }

    #[test]
    fn rejects_unknown_css_colors() {
        assert!(Color::parse("reddish").is_err());
        assert!(Color::parse("rgb(300, 0, 0)").is_err());
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("rgba(0, 0, 0, 2)").is_err());
    }

    #[test]
    fn hex_output_is_lowercase_rrggbb() {
        assert_eq!(Color::from_rgb8(0xe6, 0x1a, 0x3f).to_hex(), "#e61a3f");
    }
}
