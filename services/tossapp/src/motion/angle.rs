/// Fold any angle into `[0, 360)`
pub fn normalize_degrees(degrees: f32) -> f32 {
    let angle = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Signed rotation in `(-180, 180]` that carries `from` onto `to`
///
/// A half-turn tie resolves forward (+180).
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    let delta = normalize_degrees(to - from);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(1890.0), 90.0);
    }

    #[test]
    fn test_shortest_delta() {
        assert_eq!(shortest_delta(0.0, 90.0), 90.0);
        assert_eq!(shortest_delta(0.0, 270.0), -90.0);
        assert_eq!(shortest_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_delta(1440.0, 180.0), 180.0);
        assert_eq!(shortest_delta(1440.0, 0.0), 0.0);
        assert_eq!(shortest_delta(10.0, 350.0), -20.0);
    }
}
