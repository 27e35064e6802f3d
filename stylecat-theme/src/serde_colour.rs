//! Serde support for [`Colour`].
//!
//! Colours serialize as colour resource values (`"r, g, b"` or
//! `"r, g, b, opacity"`). Deserialization also accepts `#rrggbb` and
//! `#rrggbbaa` hex strings.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::colour::Colour;

impl Serialize for Colour {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_rgb_string())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.trim_start().starts_with('#') {
            parse_hex_colour(text.trim()).map_err(Error::custom)
        } else {
            Colour::parse_rgb(&text).map_err(Error::custom)
        }
    }
}

fn parse_hex_colour(hex: &str) -> Result<Colour, String> {
    let hex = hex.trim_start_matches('#');
    let byte = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| format!("Invalid hex colour '#{hex}'"))
    };
    match hex.len() {
        6 => Ok(Colour::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Ok(Colour::rgba(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            f64::from(byte(6..8)?) / 255.0,
        )),
        _ => Err("Hex colour must be 6 or 8 digits".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Serialize)]
    struct Entry {
        colour: Colour,
    }

    #[test]
    fn test_deserialize_both_forms() {
        let entry: Entry = toml::from_str(r#"colour = "10, 20, 30, 0.5""#).unwrap();
        assert_eq!(entry.colour, Colour::rgba(10, 20, 30, 0.5));

        let entry: Entry = toml::from_str("colour = \"#ff8000\"").unwrap();
        assert_eq!(entry.colour, Colour::rgb(255, 128, 0));

        assert!(toml::from_str::<Entry>("colour = \"#ff80\"").is_err());
        assert!(toml::from_str::<Entry>(r#"colour = "1, 2, 3, 4, 5""#).is_err());
    }

    #[test]
    fn test_serialize_as_rgb_string() {
        let text = toml::to_string(&Entry {
            colour: Colour::rgb(1, 2, 3),
        })
        .unwrap();
        assert_eq!(text.trim(), r#"colour = "1, 2, 3""#);
    }
}
