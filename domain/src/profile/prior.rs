//! Synthetic prior likelihoods
//!
//! When the prior is fixed rather than elicited, it is drawn uniformly from a
//! band that depends on the voter's affiliation and then written into the
//! voter's persona.

use super::entities::Affiliation;
use crate::likelihood::VoteLikelihood;
use rand::Rng;
use std::collections::HashMap;

/// Inclusive-exclusive percentage band `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}

/// Sampling bands for one affiliation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorBands {
    pub target: Band,
    pub turnout: Band,
}

/// Per-affiliation prior distribution
#[derive(Debug, Clone)]
pub struct PriorDistribution {
    bands: HashMap<Affiliation, PriorBands>,
}

impl PriorDistribution {
    pub fn new(bands: HashMap<Affiliation, PriorBands>) -> Self {
        Self { bands }
    }

    pub fn bands(&self, affiliation: Affiliation) -> PriorBands {
        self.bands
            .get(&affiliation)
            .copied()
            .unwrap_or_else(|| default_bands(affiliation))
    }

    /// Draw a prior for the given affiliation, rounded to whole percents
    pub fn sample<R: Rng + ?Sized>(&self, affiliation: Affiliation, rng: &mut R) -> VoteLikelihood {
        let bands = self.bands(affiliation);
        VoteLikelihood::new(draw(rng, bands.target), draw(rng, bands.turnout))
    }
}

impl Default for PriorDistribution {
    fn default() -> Self {
        Self::new(
            Affiliation::ALL
                .iter()
                .map(|a| (*a, default_bands(*a)))
                .collect(),
        )
    }
}

fn default_bands(affiliation: Affiliation) -> PriorBands {
    match affiliation {
        Affiliation::Democrat => PriorBands {
            target: Band::new(70.0, 95.0),
            turnout: Band::new(55.0, 90.0),
        },
        Affiliation::Republican => PriorBands {
            target: Band::new(5.0, 30.0),
            turnout: Band::new(55.0, 90.0),
        },
        Affiliation::Swing => PriorBands {
            target: Band::new(35.0, 65.0),
            turnout: Band::new(30.0, 70.0),
        },
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, band: Band) -> f64 {
    let value: f64 = rng.random_range(band.low..band.high);
    value.floor().max(band.low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_samples_stay_in_band() {
        let distribution = PriorDistribution::default();
        let mut rng = StdRng::seed_from_u64(11);
        for affiliation in Affiliation::ALL {
            let bands = distribution.bands(affiliation);
            for _ in 0..100 {
                let prior = distribution.sample(affiliation, &mut rng);
                assert!(bands.target.contains(prior.target), "{prior:?}");
                assert!(bands.turnout.contains(prior.turnout), "{prior:?}");
                assert_eq!(prior.target.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_affiliations_are_ordered() {
        let distribution = PriorDistribution::default();
        let dem = distribution.bands(Affiliation::Democrat).target;
        let rep = distribution.bands(Affiliation::Republican).target;
        assert!(rep.high <= dem.low);
    }

    #[test]
    fn test_missing_affiliation_falls_back() {
        let distribution = PriorDistribution::new(HashMap::new());
        assert_eq!(
            distribution.bands(Affiliation::Swing),
            default_bands(Affiliation::Swing)
        );
    }
}
