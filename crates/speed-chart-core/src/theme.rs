// File: crates/speed-chart-core/src/theme.rs
// Summary: Light/Dark theming for backgrounds, text and axis strokes.

use std::fmt;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    /// Text: tick labels, titles, legend labels.
    pub foreground: Rgba,
    /// Axis domain lines and ticks.
    pub axis_line: Rgba,
    /// Outline drawn around bars and legend swatches.
    pub outline: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            foreground: Rgba::rgb(10, 10, 20),
            axis_line: Rgba::rgb(10, 10, 20).with_alpha(77), // 0.3
            outline: Rgba::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(10, 10, 12),
            foreground: Rgba::rgb(250, 250, 250),
            axis_line: Rgba::rgb(250, 250, 250).with_alpha(77),
            outline: Rgba::WHITE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
