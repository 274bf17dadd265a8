use crate::utils::error::{ResumeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 24-bit color. Serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(swatch) = Swatch::by_name(trimmed) {
            return Ok(swatch.color);
        }

        let invalid = |reason: &str| ResumeError::InvalidConfigValueError {
            field: "color".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| invalid("Expected a palette name or #RRGGBB"))?;
        if hex.len() != 6 {
            return Err(invalid("Hex colors need exactly six digits"));
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid("Invalid hex digits"))?;
        Ok(Rgb::from_hex(value))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ResumeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// One entry of the picker palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Rgb,
}

impl Swatch {
    pub fn by_name(name: &str) -> Option<Swatch> {
        PALETTE
            .iter()
            .copied()
            .find(|swatch| swatch.name.eq_ignore_ascii_case(name))
    }
}

pub const PALETTE: [Swatch; 12] = [
    Swatch { name: "Black", color: Rgb::from_hex(0x000000) },
    Swatch { name: "White", color: Rgb::from_hex(0xFFFFFF) },
    Swatch { name: "Gray", color: Rgb::from_hex(0x888888) },
    Swatch { name: "LightGray", color: Rgb::from_hex(0xCCCCCC) },
    Swatch { name: "Red", color: Rgb::from_hex(0xFF0000) },
    Swatch { name: "Green", color: Rgb::from_hex(0x00FF00) },
    Swatch { name: "Blue", color: Rgb::from_hex(0x0000FF) },
    Swatch { name: "Cyan", color: Rgb::from_hex(0x00FFFF) },
    Swatch { name: "Magenta", color: Rgb::from_hex(0xFF00FF) },
    Swatch { name: "Yellow", color: Rgb::from_hex(0xFFFF00) },
    Swatch { name: "Purple", color: Rgb::from_hex(0x6A1B9A) },
    Swatch { name: "Orange", color: Rgb::from_hex(0xFF9800) },
];

pub const DEFAULT_FONT_COLOR: Rgb = Rgb::from_hex(0xFFFFFF);
pub const DEFAULT_BACKGROUND: Rgb = Rgb::from_hex(0xB2FFB2);
