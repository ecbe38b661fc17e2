//! Random voter persona generation

use super::entities::{Affiliation, Education, Gender, Issue, VoterProfile};
use rand::Rng;

const WOMEN_NAMES: &[&str] = &[
    "Natalie", "Maria", "Keisha", "Emily", "Priya", "Linda", "Rosa", "Hannah", "Grace", "Tanya",
];

const MEN_NAMES: &[&str] = &[
    "James", "Carlos", "Darnell", "Ethan", "Raj", "Michael", "Luis", "Tom", "Kevin", "Samuel",
];

const SURNAMES: &[&str] = &[
    "Hendricks", "Garcia", "Johnson", "Nguyen", "Patel", "Miller", "Okafor", "Kowalski",
    "Rivera", "Thompson", "Anderson", "Brooks",
];

const STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire",
    "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
    "Wisconsin", "Wyoming",
];

/// Minimum and maximum voter age (inclusive)
pub const AGE_RANGE: (u8, u8) = (18, 85);

/// Builds randomized voter personas.
///
/// The generator owns no RNG; callers pass one in so a seeded
/// `StdRng` yields reproducible experiments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileGenerator;

impl ProfileGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> VoterProfile {
        let gender = pick(rng, &Gender::ALL);
        let first = match gender {
            Gender::Man => pick(rng, MEN_NAMES),
            Gender::Woman => pick(rng, WOMEN_NAMES),
        };
        let name = format!("{} {}", first, pick(rng, SURNAMES));
        let age = rng.random_range(AGE_RANGE.0..=AGE_RANGE.1);

        VoterProfile::new(
            name,
            age,
            gender,
            pick(rng, &Education::ALL),
            pick(rng, STATES),
            pick(rng, &Affiliation::ALL),
            pick_two_issues(rng),
        )
    }
}

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// Two distinct issues, uniformly
fn pick_two_issues<R: Rng + ?Sized>(rng: &mut R) -> [Issue; 2] {
    let n = Issue::ALL.len();
    let first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n - 1);
    if second >= first {
        second += 1;
    }
    [Issue::ALL[first], Issue::ALL[second]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_same_seed_same_profile() {
        let generator = ProfileGenerator::new();
        let a = generator.generate(&mut StdRng::seed_from_u64(7));
        let b = generator.generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_profile_fields_in_range() {
        let generator = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let profile = generator.generate(&mut rng);
            assert!((AGE_RANGE.0..=AGE_RANGE.1).contains(&profile.age()));
            assert_ne!(profile.issues()[0], profile.issues()[1]);
            assert!(STATES.contains(&profile.state()));
            let first = profile.name().split(' ').next().unwrap();
            match profile.gender() {
                Gender::Man => assert!(MEN_NAMES.contains(&first)),
                Gender::Woman => assert!(WOMEN_NAMES.contains(&first)),
            }
        }
    }
}
