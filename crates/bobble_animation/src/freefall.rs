//! Free-fall kinematics for the launch/rebound arc
//!
//! The bouncing ball leaves the cord with a fixed upward speed and follows
//! `h(t) = v₀·t − ½·g·t²` until it lands. With `g = 10` and an apex of 50
//! units, the launch speed is `√(2·g·50) = 10·√10` and the ball is airborne
//! for `2·√10` units of parameter time.

/// Gravitational acceleration used by the arc.
pub const GRAVITY: f32 = 10.0;

/// Height of the arc's apex above the launch point.
pub const APEX_HEIGHT: f32 = 50.0;

/// Upward speed at launch.
pub fn launch_speed() -> f32 {
    (2.0 * GRAVITY * APEX_HEIGHT).sqrt()
}

/// Total parameter time from launch to landing.
pub fn flight_time() -> f32 {
    2.0 * launch_speed() / GRAVITY
}

/// Vertical displacement above the launch point at parameter time `t`.
pub fn displacement(t: f32) -> f32 {
    launch_speed() * t - 0.5 * GRAVITY * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounded_at_endpoints() {
        assert!(displacement(0.0).abs() < 1e-4);
        assert!(displacement(flight_time()).abs() < 1e-3);
    }

    #[test]
    fn test_apex_at_midpoint() {
        let apex_time = flight_time() / 2.0;
        assert!((displacement(apex_time) - APEX_HEIGHT).abs() < 1e-3);
    }

    #[test]
    fn test_parabola_is_symmetric() {
        let half = flight_time() / 2.0;
        for frac in [0.1, 0.25, 0.4] {
            let dt = half * frac;
            let rising = displacement(half - dt);
            let falling = displacement(half + dt);
            assert!((rising - falling).abs() < 1e-3);
        }
    }

    #[test]
    fn test_flight_time_matches_derivation() {
        // v₀ = 10·√10, so the round trip takes 2·√10
        assert!((flight_time() - 2.0 * 10.0_f32.sqrt()).abs() < 1e-4);
    }
}
