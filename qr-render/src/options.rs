//! Render options and palette types

/// RGB palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// CSS hex form, e.g. `#000000`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Options controlling how a payload is drawn onto a surface
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Target square size in pixels
    pub size: u32,
    /// Quiet-zone width in modules on each side
    pub margin: u32,
    /// Module (foreground) color
    pub dark: Rgb,
    /// Background color
    pub light: Rgb,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 200,
            margin: 2,
            dark: Rgb::BLACK,
            light: Rgb::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form_is_lowercase_hex() {
        assert_eq!(Rgb::BLACK.to_css(), "#000000");
        assert_eq!(Rgb::WHITE.to_css(), "#ffffff");
        assert_eq!(Rgb(219, 39, 119).to_css(), "#db2777");
    }
}
