//! Voter persona domain
//!
//! - [`entities::VoterProfile`] — the generated persona of one run
//! - [`generator::ProfileGenerator`] — seedable random persona source
//! - [`prior::PriorDistribution`] — synthetic prior likelihoods per affiliation

pub mod entities;
pub mod generator;
pub mod prior;

pub use entities::{Affiliation, Education, Gender, Issue, VoterProfile};
pub use generator::ProfileGenerator;
pub use prior::PriorDistribution;
