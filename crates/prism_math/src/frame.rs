// Camera coordinate frames.
//
// A frame is an origin plus a right-handed orthonormal basis (u, v, w) where
// w points backwards, away from what the camera looks at.

use glam::DVec3;

/// An origin and an orthonormal basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: DVec3,
    pub u: DVec3,
    pub v: DVec3,
    pub w: DVec3,
}

impl Frame {
    /// The world frame: origin at zero, axes aligned with X, Y and Z.
    pub const WORLD: Frame = Frame {
        origin: DVec3::ZERO,
        u: DVec3::X,
        v: DVec3::Y,
        w: DVec3::Z,
    };

    /// Create a frame from an origin and three basis vectors.
    pub fn new(origin: DVec3, u: DVec3, v: DVec3, w: DVec3) -> Self {
        Self { origin, u, v, w }
    }

    /// Build a viewing frame at `position` looking at `focus`.
    ///
    /// Returns `None` when `position == focus` or `up` is parallel to the
    /// viewing direction, since no basis can be built from those.
    pub fn look_at(position: DVec3, focus: DVec3, up: DVec3) -> Option<Self> {
        let w = (position - focus).try_normalize()?;
        let u = up.cross(w).try_normalize()?;
        let v = w.cross(u);
        Some(Self::new(position, u, v, w))
    }

    /// Convert a point expressed in this frame's coordinates to world coordinates.
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.origin + local.x * self.u + local.y * self.v + local.z * self.w
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::WORLD
    }
}
