// Simple color struct, created from an unsigned 32 representing RRGGBB.
// Canvas styles want rgba() strings, so translucency is supplied at
// formatting time rather than stored.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    pub fn css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        let c = Color::from_u32(0x6366f1);
        assert_eq!(c, Color { r: 99, g: 102, b: 241 });
    }

    #[test]
    fn css_carries_alpha() {
        let c = Color::from_u32(0x6366f1);
        assert_eq!(c.css(0.5), "rgba(99, 102, 241, 0.5)");
    }
}
