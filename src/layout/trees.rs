use rand::Rng;
use thiserror::Error;

use crate::config::LayoutConfig;

const PREALLOCATED_TREES: usize = 4096;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("layout parameter `{name}` must be {expected}, got {value}")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
        value: f32,
    },
    #[error("the {zone} exclusion zone covers the whole sampling area (area_limit={area_limit})")]
    AreaExcluded { zone: &'static str, area_limit: f32 },
    #[error("cannot place {requested} trees within {max_attempts} attempts")]
    CountExceedsAttempts { requested: usize, max_attempts: u64 },
    #[error("placed only {placed} of {requested} trees after {attempts} attempts")]
    AttemptsExhausted {
        placed: usize,
        requested: usize,
        attempts: u64,
    },
}

/// Ground position of one tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreePosition {
    pub x: f32,
    pub z: f32,
}

impl TreePosition {
    pub fn distance_to(&self, x: f32, z: f32) -> f32 {
        ((self.x - x).powi(2) + (self.z - z).powi(2)).sqrt()
    }
}

/// Rejection-sampling parameters for tree placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeLayoutParams {
    pub count: usize,
    pub area_limit: f32,
    pub safe_zone_radius: f32,
    /// (x, z)
    pub court_center: (f32, f32),
    pub court_safe_radius: f32,
    pub max_attempts: u64,
}

impl TreeLayoutParams {
    pub fn new(
        count: usize,
        area_limit: f32,
        safe_zone_radius: f32,
        court_center: (f32, f32),
        court_safe_radius: f32,
    ) -> Self {
        Self {
            count,
            area_limit,
            safe_zone_radius,
            court_center,
            court_safe_radius,
            max_attempts: LayoutConfig::default().max_attempts,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Both exclusion constraints hold for the point
    pub fn accepts(&self, x: f32, z: f32) -> bool {
        let (cx, cz) = self.court_center;
        let to_origin = (x * x + z * z).sqrt();
        let to_court = ((x - cx).powi(2) + (z - cz).powi(2)).sqrt();
        to_origin > self.safe_zone_radius && to_court > self.court_safe_radius
    }

    fn validate(&self) -> Result<(), LayoutError> {
        // Every accepted tree costs at least one draw
        if self.count as u64 > self.max_attempts {
            return Err(LayoutError::CountExceedsAttempts {
                requested: self.count,
                max_attempts: self.max_attempts,
            });
        }

        let invalid = |name, expected, value| LayoutError::InvalidParameter { name, expected, value };

        // The sampling range spans 2 * area_limit
        if !(self.area_limit > 0.0 && (2.0 * self.area_limit).is_finite()) {
            return Err(invalid("area_limit", "positive with a finite span", self.area_limit));
        }
        for (name, value) in [
            ("safe_zone_radius", self.safe_zone_radius),
            ("court_safe_radius", self.court_safe_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(name, "finite and non-negative", value));
            }
        }
        for (name, value) in [("court_center.x", self.court_center.0), ("court_center.z", self.court_center.1)] {
            if !value.is_finite() {
                return Err(invalid(name, "finite", value));
            }
        }

        // A disc swallows the square when its farthest corner is inside it
        let a = self.area_limit;
        if self.safe_zone_radius >= farthest_corner(a, 0.0, 0.0) {
            return Err(LayoutError::AreaExcluded { zone: "safe", area_limit: a });
        }
        let (cx, cz) = self.court_center;
        if self.court_safe_radius >= farthest_corner(a, cx, cz) {
            return Err(LayoutError::AreaExcluded { zone: "court", area_limit: a });
        }
        Ok(())
    }
}

impl From<&LayoutConfig> for TreeLayoutParams {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            count: config.tree_count,
            area_limit: config.area_limit,
            safe_zone_radius: config.safe_zone_radius,
            court_center: (config.court_center[0], config.court_center[1]),
            court_safe_radius: config.court_safe_radius,
            max_attempts: config.max_attempts,
        }
    }
}

fn farthest_corner(a: f32, cx: f32, cz: f32) -> f32 {
    let dx = cx.abs() + a;
    let dz = cz.abs() + a;
    (dx * dx + dz * dz).sqrt()
}

/// Place `params.count` trees uniformly in the square, skipping the safe zone
/// around the origin and the zone around the court.
///
/// Positions are returned in acceptance order. Gives up with
/// [`LayoutError::AttemptsExhausted`] after `params.max_attempts` draws.
pub fn generate_tree_positions<R: Rng + ?Sized>(
    params: &TreeLayoutParams,
    rng: &mut R,
) -> Result<Vec<TreePosition>, LayoutError> {
    if params.count == 0 {
        return Ok(Vec::new());
    }
    params.validate()?;

    let a = params.area_limit;
    let mut positions = Vec::with_capacity(params.count.min(PREALLOCATED_TREES));
    let mut attempts = 0u64;

    while positions.len() < params.count {
        if attempts >= params.max_attempts {
            return Err(LayoutError::AttemptsExhausted {
                placed: positions.len(),
                requested: params.count,
                attempts,
            });
        }
        attempts += 1;

        let x = rng.random_range(-a..=a);
        let z = rng.random_range(-a..=a);
        if params.accepts(x, z) {
            positions.push(TreePosition { x, z });
        }
    }

    log::debug!(
        "placed {} trees in {} attempts (acceptance {:.1}%)",
        positions.len(),
        attempts,
        100.0 * positions.len() as f64 / attempts as f64
    );
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_count_needs_no_sampling() {
        let params = TreeLayoutParams::new(0, 0.0, 100.0, (0.0, 0.0), 100.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_tree_positions(&params, &mut rng), Ok(Vec::new()));
    }

    #[test]
    fn accepts_respects_both_zones() {
        let params = TreeLayoutParams::new(1, 60.0, 10.0, (30.0, 0.0), 10.0);
        assert!(!params.accepts(0.0, 5.0));
        assert!(!params.accepts(30.0, 5.0));
        assert!(!params.accepts(10.0, 0.0));
        assert!(params.accepts(-20.0, 20.0));
    }

    #[test]
    fn same_seed_same_layout() {
        let params = TreeLayoutParams::new(20, 60.0, 10.0, (30.0, 0.0), 10.0);
        let a = generate_tree_positions(&params, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_tree_positions(&params, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unreachable_count_rejected_before_allocating() {
        let params = TreeLayoutParams::new(usize::MAX, 60.0, 10.0, (30.0, 0.0), 10.0);
        let err = generate_tree_positions(&params, &mut StdRng::seed_from_u64(4)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::CountExceedsAttempts {
                requested: usize::MAX,
                max_attempts: 1_000_000,
            }
        );
    }

    #[test]
    fn area_span_must_be_finite() {
        let params = TreeLayoutParams::new(5, 3.0e38, 10.0, (30.0, 0.0), 10.0);
        let err = generate_tree_positions(&params, &mut StdRng::seed_from_u64(5)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidParameter { name: "area_limit", .. }));

        let widest = TreeLayoutParams::new(1, f32::MAX / 4.0, 10.0, (30.0, 0.0), 10.0);
        assert_eq!(generate_tree_positions(&widest, &mut StdRng::seed_from_u64(5)).map(|t| t.len()), Ok(1));
    }

    #[test]
    fn court_zone_covering_square_fails_fast() {
        let params = TreeLayoutParams::new(5, 10.0, 0.0, (0.0, 0.0), 20.0);
        let err = generate_tree_positions(&params, &mut StdRng::seed_from_u64(3)).unwrap_err();
        assert_eq!(err, LayoutError::AreaExcluded { zone: "court", area_limit: 10.0 });
    }
}
