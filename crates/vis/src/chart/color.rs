use std::collections::HashMap;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;
use serde::Serializer;

/// An RGBA color, serialized as a CSS `rgba(...)` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Rgba {
        Self { r, g, b, a }
    }

    /// The same color with a different alpha channel.
    pub const fn with_alpha(self, a: f64) -> Rgba {
        Self { a, ..self }
    }

    /// The same color, fully opaque.
    pub const fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

pub const FILL_ALPHA: f64 = 0.7;

pub const RED: Rgba = Rgba::new(255, 99, 132, FILL_ALPHA);
pub const BLUE: Rgba = Rgba::new(54, 162, 235, FILL_ALPHA);
pub const YELLOW: Rgba = Rgba::new(255, 206, 86, FILL_ALPHA);
pub const TEAL: Rgba = Rgba::new(75, 192, 192, FILL_ALPHA);
pub const PURPLE: Rgba = Rgba::new(153, 102, 255, FILL_ALPHA);
pub const ORANGE: Rgba = Rgba::new(255, 159, 64, FILL_ALPHA);
pub const GREY: Rgba = Rgba::new(199, 199, 199, FILL_ALPHA);
pub const INDIGO: Rgba = Rgba::new(83, 102, 255, FILL_ALPHA);
pub const GREEN: Rgba = Rgba::new(102, 255, 83, FILL_ALPHA);

/// Used for categories the palette has no color for.
pub const FALLBACK: Rgba = Rgba::new(201, 203, 207, FILL_ALPHA);

/// The palette of categorical bar charts, cycled by index.
pub const CATEGORICAL: [Rgba; 6] = [RED, BLUE, YELLOW, TEAL, PURPLE, ORANGE];

/// The palette of genres, assigned in first-seen order.
pub const GENRES: [Rgba; 9] = [
    RED, BLUE, YELLOW, TEAL, PURPLE, ORANGE, GREY, INDIGO, GREEN,
];

/// Maps categories to palette colors in the order the categories are first seen.
///
/// The palette is cycled when there are more categories than colors.
#[derive(Debug)]
pub struct ColorMap {
    colors: HashMap<String, Rgba>,
}

impl ColorMap {
    pub fn new<'c, I>(palette: &[Rgba], categories: I) -> ColorMap
    where
        I: IntoIterator<Item = &'c str>,
    {
        let mut colors: HashMap<String, Rgba> = HashMap::new();

        if !palette.is_empty() {
            for category in categories {
                let next = palette[colors.len() % palette.len()];
                colors.entry(category.to_owned()).or_insert(next);
            }
        }

        Self { colors }
    }

    pub fn get(&self, category: &str) -> Rgba {
        self.colors.get(category).copied().unwrap_or(FALLBACK)
    }
}
