use num_traits::Float;

#[inline]
pub fn lerp<T>(delta: T, start: T, end: T) -> T
where
    T: Float,
{
    start + delta * (end - start)
}

pub fn lerp2(delta_x: f64, delta_y: f64, x0y0: f64, x1y0: f64, x0y1: f64, x1y1: f64) -> f64 {
    lerp(
        delta_y,
        lerp(delta_x, x0y0, x1y0),
        lerp(delta_x, x0y1, x1y1),
    )
}

/// Blends the eight corners of a unit cube: four lerps along x, two along y, one along z.
#[allow(clippy::too_many_arguments)]
pub fn lerp3(
    delta_x: f64,
    delta_y: f64,
    delta_z: f64,
    x0y0z0: f64,
    x1y0z0: f64,
    x0y1z0: f64,
    x1y1z0: f64,
    x0y0z1: f64,
    x1y0z1: f64,
    x0y1z1: f64,
    x1y1z1: f64,
) -> f64 {
    lerp(
        delta_z,
        lerp2(delta_x, delta_y, x0y0z0, x1y0z0, x0y1z0, x1y1z0),
        lerp2(delta_x, delta_y, x0y0z1, x1y0z1, x0y1z1, x1y1z1),
    )
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`. First and second derivatives vanish at 0 and 1.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6f64 - 15f64) + 10f64)
}

#[cfg(test)]
mod test {
    use super::{fade, lerp, lerp3};

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0f64, 3f64, 7f64), 3f64);
        assert_eq!(lerp(1f64, 3f64, 7f64), 7f64);
        assert_eq!(lerp(0.5f64, -2f64, 2f64), 0f64);
    }

    #[test]
    fn fade_fixed_points() {
        assert_eq!(fade(0f64), 0f64);
        assert_eq!(fade(1f64), 1f64);
        assert_eq!(fade(0.5f64), 0.5f64);
    }

    #[test]
    fn fade_is_flat_at_the_ends() {
        let eps = 1e-4f64;
        assert!(fade(eps) < 2e-11);
        assert!(1f64 - fade(1f64 - eps) < 2e-11);
    }

    #[test]
    fn lerp3_picks_corners() {
        let corners = [1f64, 2f64, 3f64, 4f64, 5f64, 6f64, 7f64, 8f64];
        let sample = |dx, dy, dz| {
            lerp3(
                dx, dy, dz, corners[0], corners[1], corners[2], corners[3], corners[4],
                corners[5], corners[6], corners[7],
            )
        };

        assert_eq!(sample(0f64, 0f64, 0f64), 1f64);
        assert_eq!(sample(1f64, 0f64, 0f64), 2f64);
        assert_eq!(sample(0f64, 1f64, 0f64), 3f64);
        assert_eq!(sample(1f64, 1f64, 0f64), 4f64);
        assert_eq!(sample(0f64, 0f64, 1f64), 5f64);
        assert_eq!(sample(1f64, 1f64, 1f64), 8f64);
        assert_eq!(sample(0.5f64, 0.5f64, 0.5f64), 4.5f64);
    }
}
