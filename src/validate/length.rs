//! CSS length grammar for font-size tokens.
//!
//! Values are validated here but stored verbatim in the document, so a
//! serialized config always reproduces the exact text the user wrote.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NUMBER_WITH_UNIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)([a-zA-Z%]*)$")
        .expect("Invalid length regex")
});

static MATH_FUNCTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:calc|clamp|min|max|var)\(").expect("Invalid math function regex")
});

/// Units accepted in a length value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    Percent,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Svh,
    Lvh,
    Dvh,
    Ch,
    Ex,
    Pt,
    Pc,
    Cm,
    Mm,
    In,
    Q,
}

impl LengthUnit {
    /// Parse a unit suffix. CSS units are case-insensitive.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "px" => Self::Px,
            "rem" => Self::Rem,
            "em" => Self::Em,
            "%" => Self::Percent,
            "vw" => Self::Vw,
            "vh" => Self::Vh,
            "vmin" => Self::Vmin,
            "vmax" => Self::Vmax,
            "svh" => Self::Svh,
            "lvh" => Self::Lvh,
            "dvh" => Self::Dvh,
            "ch" => Self::Ch,
            "ex" => Self::Ex,
            "pt" => Self::Pt,
            "pc" => Self::Pc,
            "cm" => Self::Cm,
            "mm" => Self::Mm,
            "in" => Self::In,
            "q" => Self::Q,
            _ => return None,
        };
        Some(unit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Percent => "%",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Svh => "svh",
            Self::Lvh => "lvh",
            Self::Dvh => "dvh",
            Self::Ch => "ch",
            Self::Ex => "ex",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Q => "Q",
        }
    }
}

/// A numeric CSS length such as `1.25rem`, `14px` or the bare `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssLength {
    pub value: f64,
    /// `None` only for a unitless zero.
    pub unit: Option<LengthUnit>,
}

impl CssLength {
    /// Parse a plain numeric length. Math functions are not handled here;
    /// see [`is_length`].
    pub fn parse(input: &str) -> Option<Self> {
        let caps = NUMBER_WITH_UNIT_REGEX.captures(input.trim())?;
        let value: f64 = caps[1].parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        let suffix = &caps[2];
        if suffix.is_empty() {
            // Only zero may omit its unit.
            return (value == 0.0).then_some(Self { value, unit: None });
        }

        let unit = LengthUnit::from_suffix(suffix)?;
        Some(Self {
            value,
            unit: Some(unit),
        })
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{}{}", self.value, unit.as_str()),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Returns true if `input` is a numeric length or a balanced math function
/// (`calc()`, `clamp()`, `min()`, `max()`, `var()`).
pub fn is_length(input: &str) -> bool {
    let input = input.trim();
    CssLength::parse(input).is_some() || is_math_function(input)
}

fn is_math_function(input: &str) -> bool {
    if !MATH_FUNCTION_REGEX.is_match(input) || !input.ends_with(')') {
        return false;
    }

    let Some(open) = input.find('(') else {
        return false;
    };
    if input[open + 1..input.len() - 1].trim().is_empty() {
        return false;
    }

    let mut depth: i32 = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                // The outer call must close exactly at the end.
                if depth < 0 || (depth == 0 && i != input.len() - 1) {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Validate a font size: a non-negative length.
pub fn validate_font_size(input: &str) -> Result<(), String> {
    if let Some(length) = CssLength::parse(input) {
        if length.is_negative() {
            return Err(format!("font size '{}' must not be negative", input));
        }
        return Ok(());
    }
    if is_math_function(input.trim()) {
        return Ok(());
    }
    Err(format!("'{}' is not a valid CSS length", input))
}

/// Validate a line height: a unitless non-negative number or a length.
pub fn validate_line_height(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<f64>() {
        if number.is_finite() && number >= 0.0 {
            return Ok(());
        }
        return Err(format!("line height '{}' must be a non-negative number", input));
    }
    validate_font_size(input).map_err(|_| format!("'{}' is not a valid line height", input))
}

/// Validate a letter spacing: any length, negative values included.
pub fn validate_letter_spacing(input: &str) -> Result<(), String> {
    if is_length(input) {
        Ok(())
    } else {
        Err(format!("'{}' is not a valid letter spacing", input))
    }
}
