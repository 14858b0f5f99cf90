//! Glyph width oracle.
//!
//! The layout engine never touches fonts. Whoever owns the font (and the
//! current zoom) answers "how many pixels wide is this run" through
//! [`GlyphMetrics`].

/// Pixel width of a text run at the current font size.
pub trait GlyphMetrics {
    fn width(&self, text: &str) -> f32;
}

impl<F> GlyphMetrics for F
where
    F: Fn(&str) -> f32,
{
    fn width(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Every rune has the same advance. Used by the headless binary and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance: f32,
}

impl MonospaceMetrics {
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }

    /// Advance for a typical monospace face at `font_size` px
    pub fn for_font_size(font_size: f32) -> Self {
        Self::new((font_size * 0.6).round())
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_counts_runes_not_bytes() {
        let m = MonospaceMetrics::new(10.0);
        assert_eq!(m.width("a"), 10.0);
        assert_eq!(m.width("é"), 10.0);
        assert_eq!(m.width("->"), 20.0);
    }

    #[test]
    fn test_closure_is_an_oracle() {
        let wide_w = |text: &str| if text == "w" { 15.0 } else { 8.0 };
        assert_eq!(wide_w.width("w"), 15.0);
        assert_eq!(wide_w.width("i"), 8.0);
    }

    #[test]
    fn test_for_font_size() {
        assert_eq!(MonospaceMetrics::for_font_size(28.0).advance, 17.0);
    }
}
