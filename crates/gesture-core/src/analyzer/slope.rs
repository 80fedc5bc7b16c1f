//! Line slope between two joints, with sentinels for near-vertical lines.
//!
//! When the horizontal distance is 0.001 or less the ratio would explode, so
//! a fixed `±999` is returned instead of infinity: `+999` when the second
//! point is below the first (y grows downward), `-999` otherwise.  A
//! zero-length segment falls into the `-999` branch because the test on `dy`
//! is strict.

use super::landmarks::Point;

/// Horizontal distance at or below which a segment counts as vertical.
pub const VERTICAL_EPSILON: f32 = 1e-3;

/// Returned for a vertical segment pointing down the image.
pub const SLOPE_VERTICAL_DOWN: f64 = 999.0;

/// Returned for a vertical segment pointing up the image (or no movement).
pub const SLOPE_VERTICAL_UP: f64 = -999.0;

/// Slope of the segment from `p1` to `p2`.
pub fn calc_slope(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx.abs() > VERTICAL_EPSILON {
        return f64::from(dy / dx);
    }
    if dy > 0.0 {
        SLOPE_VERTICAL_DOWN
    } else {
        SLOPE_VERTICAL_UP
    }
}

/// Coordinate form of [`calc_slope`].
pub fn calc_slope_xy(x1: f32, y1: f32, x2: f32, y2: f32) -> f64 {
    calc_slope(Point::new(x1, y1), Point::new(x2, y2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_has_unit_slope() {
        assert_eq!(calc_slope_xy(0.0, 0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_vertical_down_returns_positive_sentinel() {
        assert_eq!(calc_slope_xy(0.0, 0.0, 0.0, 5.0), 999.0);
    }

    #[test]
    fn test_vertical_up_returns_negative_sentinel() {
        assert_eq!(calc_slope_xy(0.0, 0.0, 0.0, -5.0), -999.0);
    }

    #[test]
    fn test_horizontal_is_zero() {
        assert_eq!(calc_slope_xy(0.0, 0.0, 2.0, 0.0), 0.0);
    }

    #[test]
    fn test_degenerate_segment_is_negative_sentinel() {
        assert_eq!(calc_slope_xy(0.0, 0.0, 0.0, 0.0), -999.0);
    }

    #[test]
    fn test_dx_at_epsilon_still_counts_as_vertical() {
        assert_eq!(calc_slope_xy(0.0, 0.0, 0.001, 0.5), SLOPE_VERTICAL_DOWN);
    }

    #[test]
    fn test_dx_just_over_epsilon_divides() {
        let slope = calc_slope_xy(0.0, 0.0, 0.002, 0.001);
        assert!((slope - 0.5).abs() < 1e-4, "got {slope}");
    }

    #[test]
    fn test_reversed_points_give_same_slope() {
        let forward = calc_slope_xy(0.2, 0.4, 0.6, 0.3);
        let backward = calc_slope_xy(0.6, 0.3, 0.2, 0.4);
        assert!((forward - backward).abs() < 1e-6);
        assert!(forward < 0.0);
    }
}
