//! Circle-overlap collision predicate
//!
//! Every entity in the field is a circle for collision purposes. Two circles
//! collide when their centers are strictly closer than the sum of their
//! radii; touching exactly at the radius sum does not count.

use glam::Vec2;

/// Strict circle-overlap test on raw centers and radii
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circles_collide() {
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(15.0, 0.0),
            10.0
        ));
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        // Centers exactly radius_a + radius_b apart: strict `<` says no hit
        assert!(!circles_overlap(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(25.0, 0.0),
            15.0
        ));
    }

    #[test]
    fn test_barely_overlapping_circles_collide() {
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(24.99, 0.0),
            15.0
        ));
    }

    #[test]
    fn test_predicate_is_symmetric() {
        let a = (Vec2::new(3.0, 4.0), 7.5);
        let b = (Vec2::new(-2.0, 9.0), 3.25);
        assert_eq!(
            circles_overlap(a.0, a.1, b.0, b.1),
            circles_overlap(b.0, b.1, a.0, a.1)
        );
    }

    #[test]
    fn test_distant_circles_miss() {
        assert!(!circles_overlap(
            Vec2::new(0.0, 0.0),
            5.0,
            Vec2::new(400.0, 300.0),
            40.0
        ));
    }
}
