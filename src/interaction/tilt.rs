/// Maximum rotation on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 5.0;
pub const HOVER_SCALE: f64 = 1.02;

/// Client-space rectangle of the tilted element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TiltTransform {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// Map a pointer position to a tilt relative to the element centre.
    /// Degenerate bounds produce no tilt.
    pub fn from_pointer(bounds: Bounds, x: f64, y: f64) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::NEUTRAL;
        }
        let half_w = bounds.width / 2.0;
        let half_h = bounds.height / 2.0;
        let dx = (x - (bounds.left + half_w)) / half_w;
        let dy = (y - (bounds.top + half_h)) / half_h;
        Self {
            rotate_x: -dy.clamp(-1.0, 1.0) * MAX_TILT_DEG,
            rotate_y: dx.clamp(-1.0, 1.0) * MAX_TILT_DEG,
            scale: HOVER_SCALE,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "rotateX({:.2}deg) rotateY({:.2}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}
