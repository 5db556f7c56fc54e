/// Straight (non-premultiplied) RGBA color with `f32` channels in `[0, 1]`.
///
/// Values are passed to the GPU unchanged; no sRGB encoding is applied.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Converts to the `f64` color wgpu uses for clear values.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(0.1, 0.2, 0.3), Color::rgba(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn wgpu_conversion_keeps_channels() {
        let c = Color::rgba(0.07, 0.13, 0.17, 1.0).to_wgpu();
        assert_eq!(c.r, 0.07f32 as f64);
        assert_eq!(c.g, 0.13f32 as f64);
        assert_eq!(c.b, 0.17f32 as f64);
        assert_eq!(c.a, 1.0);
    }
}
