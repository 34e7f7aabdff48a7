//! Deserializer for the Color type.

use std::fmt;
use std::str::FromStr;

use css_color_parser::Color as CssColor;
use serde::de::{self, Deserialize, Visitor};
use thiserror::Error;

use super::super::Color;


const FIELDS: &'static [&'static str] = &["r", "g", "b", "a"];
const EXPECTING_MSG: &'static str = "CSS color string or array/map of RGB(A) values";

/// How many channels are required, at the very least.
const REQUIRED_CHANNELS: usize = 3;


impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;
impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let color = Color::from_str(v).map_err(|e| {
            warn!("Failed to parse color `{}`: {}", v, e);
            E::custom(e)
        })?;
        Ok(color)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: de::SeqAccess<'de>
    {
        // Preemptively check for length.
        if let Some(size) = seq.size_hint() {
            if size < REQUIRED_CHANNELS || size > FIELDS.len() {
                return Err(de::Error::invalid_length(size, &"3 or 4"));
            }
        }

        let mut channels = Vec::with_capacity(FIELDS.len());
        while let Some(elem) = seq.next_element::<u8>()? {
            channels.push(elem);

            // Immediately signal any length errors.
            if channels.len() > FIELDS.len() {
                return Err(de::Error::invalid_length(channels.len(), &"3 or 4"));
            }
        }
        match channels[..] {
            [r, g, b] => Ok(Color::rgb(r, g, b)),
            [r, g, b, a] => Ok(Color(r, g, b, a)),
            _ => Err(de::Error::invalid_length(channels.len(), &"3 or 4")),
        }
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where A: de::MapAccess<'de>
    {
        // Preemptively check for length.
        if let Some(size) = map.size_hint() {
            if size < REQUIRED_CHANNELS || size > FIELDS.len() {
                return Err(de::Error::invalid_length(size, &"3 or 4"));
            }
        }

        let (mut r, mut g, mut b, mut a) = (None, None, None, None);
        while let Some(key) = map.next_key::<String>()? {
            let key = key.trim().to_lowercase();
            match key.as_str() {
                "r" | "red" => {
                    if r.is_some() {
                        return Err(de::Error::duplicate_field("r"));
                    }
                    r = Some(map.next_value()?);
                }
                "g" | "green" => {
                    if g.is_some() {
                        return Err(de::Error::duplicate_field("g"));
                    }
                    g = Some(map.next_value()?);
                }
                "b" | "blue" => {
                    if b.is_some() {
                        return Err(de::Error::duplicate_field("b"));
                    }
                    b = Some(map.next_value()?);
                }
                "a" | "alpha" => {
                    if a.is_some() {
                        return Err(de::Error::duplicate_field("a"));
                    }
                    a = Some(map.next_value()?);
                }
                key => return Err(de::Error::unknown_field(key, FIELDS)),
            }
        }

        let r = r.ok_or_else(|| de::Error::missing_field("r"))?;
        let g = g.ok_or_else(|| de::Error::missing_field("g"))?;
        let b = b.ok_or_else(|| de::Error::missing_field("b"))?;
        Ok(Color(r, g, b, a.unwrap_or(0xff)))
    }
}


impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        // Prep the string, most notably replacing all other possible hex prefixes
        // with the standard CSS one.
        let mut s = v.trim().to_lowercase();
        let mut had_hex_prefix = false;
        for &prefix in ["#", "0x", "$"].iter() {
            if s.starts_with(prefix) {
                s = s.trim_start_matches(prefix).to_owned();

                // If a prefix other than the standard CSS one is used,
                // the color has to be a full 24-bit hex number.
                if prefix != "#" && s.len() != 6 {
                    return Err(ColorParseError::Syntax(v.to_owned()));
                }

                had_hex_prefix = true;
                break;
            }
        }
        if had_hex_prefix {
            // CSS parser doesn't know about the #rrggbbaa form.
            if s.len() == 8 {
                return parse_hex_rgba(&s).ok_or_else(|| ColorParseError::Syntax(v.to_owned()));
            }
            s = format!("#{}", s);
        }

        let css_color: CssColor = s.parse()
            .map_err(|_| ColorParseError::Syntax(v.to_owned()))?;
        if !(0.0..=1.0).contains(&css_color.a) {
            return Err(ColorParseError::Alpha(css_color.a));
        }
        let alpha = (css_color.a * 255.0).round() as u8;
        Ok(Color(css_color.r, css_color.g, css_color.b, alpha))
    }
}

fn parse_hex_rgba(s: &str) -> Option<Color> {
    let channel = |i: usize| s.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
    Some(Color(channel(0)?, channel(2)?, channel(4)?, channel(6)?))
}


/// Error that may occur while deserializing the Color.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColorParseError {
    /// Error while trying to parse a string as CSS color.
    #[error("invalid CSS color syntax: `{0}`")]
    Syntax(String),
    /// Error for when the color's alpha channel is out of range.
    #[error("color transparency out of range: {0}")]
    Alpha(f32),
}
