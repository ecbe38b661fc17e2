//! Vote likelihood domain
//!
//! The mark reports two percentages in the fixed `ANSWER: X%, Y%` format:
//! how likely it is to vote for the canvassed party over the other, and
//! how likely it is to vote at all.

pub mod parsing;
pub mod value_objects;

pub use parsing::{ANSWER_FORMAT, parse_answer};
pub use value_objects::{PriorSource, VoteLikelihood};
