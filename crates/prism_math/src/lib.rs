// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod frame;
mod interval;
mod ray;

pub use frame::Frame;
pub use interval::Interval;
pub use ray::Ray;

/// Distance used to push points off a surface before casting secondary rays.
pub const EPSILON: f64 = 1.0e-5;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approximately_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if `a` is within [`EPSILON`] of zero.
#[inline]
pub fn approximately_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Move a point a small distance along `direction`.
///
/// Used to lift an intersection point off its surface (pass the normal) or to
/// push it through the surface (pass the negated normal).
#[inline]
pub fn move_point_off_surface(point: DVec3, direction: DVec3) -> DVec3 {
    point + EPSILON * direction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximately_equal() {
        assert!(approximately_equal(1.0, 1.0 + 1.0e-7));
        assert!(!approximately_equal(1.0, 1.001));
        assert!(approximately_zero(-1.0e-8));
        assert!(!approximately_zero(-9.0));
    }

    #[test]
    fn test_move_point_off_surface() {
        let p = move_point_off_surface(DVec3::ZERO, DVec3::Y);
        assert_eq!(p, DVec3::new(0.0, EPSILON, 0.0));

        let q = move_point_off_surface(DVec3::ZERO, -DVec3::Y);
        assert_eq!(q, DVec3::new(0.0, -EPSILON, 0.0));
    }
}
