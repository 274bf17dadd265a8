use crate::utils::error::{ResumeError, Result};
use crate::utils::validation::validate_range;
use std::fmt;

pub const MIN_FONT_SIZE: f32 = 12.0;
pub const MAX_FONT_SIZE: f32 = 40.0;
pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const FONT_SIZE_STEP: f32 = 1.0;
/// Headings render this much larger than body text.
pub const HEADING_SIZE_BONUS: f32 = 2.0;

/// Text size in `sp`, always within `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FontSize(f32);

impl FontSize {
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE))
    }

    /// Strict constructor for user-supplied values: out-of-range or NaN is an
    /// error rather than being clamped.
    pub fn try_new(field_name: &str, value: f32) -> Result<Self> {
        if value.is_nan() {
            return Err(ResumeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value must be a number".to_string(),
            });
        }
        validate_range(field_name, value, MIN_FONT_SIZE, MAX_FONT_SIZE)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn heading(&self) -> f32 {
        self.0 + HEADING_SIZE_BONUS
    }

    pub fn set(&mut self, value: f32) {
        *self = Self::new(value);
    }

    pub fn increase(&mut self) {
        self.set(self.0 + FONT_SIZE_STEP);
    }

    pub fn decrease(&mut self) {
        self.set(self.0 - FONT_SIZE_STEP);
    }

    /// Position of the control in `[0.0, 1.0]`.
    pub fn ratio(&self) -> f64 {
        ((self.0 - MIN_FONT_SIZE) / (MAX_FONT_SIZE - MIN_FONT_SIZE)) as f64
    }

    /// Blank rows rendered after each body line. Terminal cells have a fixed
    /// glyph size, so larger text is expressed as looser line spacing.
    pub fn line_gap(&self) -> usize {
        gap_for(self.0)
    }

    /// Blank rows after a section heading, from the larger heading size.
    pub fn heading_gap(&self) -> usize {
        gap_for(self.heading())
    }
}

fn gap_for(size: f32) -> usize {
    ((size - MIN_FONT_SIZE) / 10.0) as usize
}

impl Default for FontSize {
    fn default() -> Self {
        Self(DEFAULT_FONT_SIZE)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Font Size: {}sp", self.0 as i32)
    }
}
