/// Standard gravitational acceleration at sea level.
pub const STANDARD_GRAVITY_MPS2: f64 = 9.80665;
/// Drag coefficient of a smooth sphere.
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;
pub const SEA_LEVEL_AIR_DENSITY_KGPM3: f64 = 1.225;
pub const DEFAULT_CROSS_SECTION_M2: f64 = 0.01;

/// Physical constants a simulation runs under.
///
/// The drag fields only matter when drag is enabled on the parameters. None of
/// these values are validated; unit mass is assumed by the drag model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub gravity_mps2: f64,
    pub drag_coefficient: f64,
    pub air_density_kgpm3: f64,
    pub cross_section_m2: f64,
}

impl Environment {
    /// Standard Earth environment with the given gravity.
    pub fn with_gravity(gravity_mps2: f64) -> Self {
        Self {
            gravity_mps2,
            ..Self::default()
        }
    }

    /// `0.5 * Cd * rho * A`: multiply by `v^2` to get the drag force on a unit mass.
    pub fn drag_factor(&self) -> f64 {
        0.5 * self.drag_coefficient * self.air_density_kgpm3 * self.cross_section_m2
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity_mps2: STANDARD_GRAVITY_MPS2,
            drag_coefficient: SPHERE_DRAG_COEFFICIENT,
            air_density_kgpm3: SEA_LEVEL_AIR_DENSITY_KGPM3,
            cross_section_m2: DEFAULT_CROSS_SECTION_M2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sea_level_sphere() {
        let env = Environment::default();
        assert_eq!(env.gravity_mps2, STANDARD_GRAVITY_MPS2);
        assert_eq!(env.drag_coefficient, 0.47);
        assert_eq!(env.air_density_kgpm3, 1.225);
        assert_eq!(env.cross_section_m2, 0.01);
    }

    #[test]
    fn drag_factor_combines_constants() {
        let env = Environment::default();
        let expected = 0.5 * 0.47 * 1.225 * 0.01;
        assert!((env.drag_factor() - expected).abs() < 1e-15);
    }

    #[test]
    fn with_gravity_keeps_drag_defaults() {
        let moon = Environment::with_gravity(1.62);
        assert_eq!(moon.gravity_mps2, 1.62);
        assert_eq!(moon.drag_coefficient, SPHERE_DRAG_COEFFICIENT);
    }
}
