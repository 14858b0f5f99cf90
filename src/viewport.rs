//! Viewport state: size, zoom, smooth scrolling and pointer scaling.
//!
//! Nothing here touches the document. Changing the size or zoom only
//! matters because it invalidates the session's layout.

use crate::config::{EditorConfig, Margins};
use crate::editable::Point;
use crate::layout::LayoutParams;

pub const ZOOM_STEP: f32 = 0.5;
pub const MIN_ZOOM: f32 = 0.5;

/// Eased vertical scrolling.
///
/// Wheel input moves a target offset; [`SmoothScroll::tick`] moves the
/// displayed offset a fixed fraction of the remaining distance each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    target: f32,
    actual: f32,
    /// Pixels per wheel notch
    pub speed: f32,
    /// Fraction of the remaining distance covered per tick
    pub lerp: f32,
}

impl SmoothScroll {
    pub fn new(speed: f32, lerp: f32) -> Self {
        Self {
            target: 0.0,
            actual: 0.0,
            speed,
            lerp: lerp.clamp(0.0, 1.0),
        }
    }

    /// Positive notches scroll down (content moves up). Never above the top.
    /// Input that would leave the target non-finite is dropped.
    pub fn scroll_by(&mut self, notches: f32) {
        let target = self.target + notches * self.speed;
        if !target.is_finite() {
            return;
        }
        self.target = target.max(0.0);
    }

    /// Advance one animation frame. Returns true while still moving.
    pub fn tick(&mut self) -> bool {
        let before = self.offset();
        self.actual += (self.target - self.actual) * self.lerp;
        if (self.target - self.actual).abs() < 0.5 {
            self.actual = self.target;
        }
        before != self.offset() || self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.actual != self.target
    }

    /// Jump straight to the target
    pub fn settle(&mut self) {
        self.actual = self.target;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whole-pixel offset, rounded half up
    pub fn offset(&self) -> f32 {
        (self.actual + 0.5).floor()
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(100.0, 0.1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Renderer width in pixels
    pub width: f32,
    /// Renderer height in pixels
    pub height: f32,
    pub zoom: f32,
    pub base_font_size: u32,
    pub margins: Margins,
    pub ligatures: bool,
    pub scroll: SmoothScroll,
}

impl ViewState {
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_config(&EditorConfig::default(), width, height)
    }

    pub fn from_config(config: &EditorConfig, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            zoom: config.zoom.max(MIN_ZOOM),
            base_font_size: config.font_size,
            margins: config.margins,
            ligatures: config.ligatures,
            scroll: SmoothScroll::new(config.scroll_speed, config.scroll_lerp),
        }
    }

    /// Font size in whole pixels at the current zoom
    pub fn font_size(&self) -> u32 {
        (self.base_font_size as f32 * self.zoom).floor() as u32
    }

    /// Glyph height plus a third for leading
    pub fn line_height(&self) -> f32 {
        let size = self.font_size();
        (size + size / 3) as f32
    }

    pub fn zoom_in(&mut self) {
        self.zoom += ZOOM_STEP;
    }

    /// Returns false if already at the minimum zoom
    pub fn zoom_out(&mut self) -> bool {
        let zoomed = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
        let changed = zoomed != self.zoom;
        self.zoom = zoomed;
        changed
    }

    /// Returns false if the size did not change
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams::new(self.width, self.line_height())
            .with_margins(self.margins.left, self.margins.top, self.margins.right)
            .with_ligatures(self.ligatures)
    }
}

/// Map a pointer position from window coordinates to renderer pixels.
///
/// On HiDPI displays the renderer has more pixels than the window reports.
/// A zero-sized window leaves the point unscaled.
pub fn scale_to_render(x: f32, y: f32, window: (u32, u32), render: (u32, u32)) -> Point {
    let scale = |pos: f32, win: u32, ren: u32| {
        if win == 0 {
            pos
        } else {
            (pos * ren as f32 / win as f32).trunc()
        }
    };
    Point::new(scale(x, window.0, render.0), scale(y, window.1, render.1))
}
