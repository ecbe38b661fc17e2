//! Answer parsing for the `ANSWER: X%, Y%` format.
//!
//! Pure text matching, no I/O. The model-assisted fallback lives in the
//! application layer's extraction use case.

use super::value_objects::VoteLikelihood;
use regex::Regex;
use std::sync::LazyLock;

/// Literal format the mark and the summary model are asked to answer in
pub const ANSWER_FORMAT: &str = "ANSWER: X%, Y%";

static ANSWER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ANSWER:\s*([0-9]+(?:\.[0-9]+)?)%,\s*([0-9]+(?:\.[0-9]+)?)%")
        .expect("static regex")
});

/// Extract the last `ANSWER: X%, Y%` occurrence from free text.
///
/// Returns `None` when the text holds no well-formed answer, or when the
/// last answer has a percentage above 100.
///
/// ```
/// use canvass_domain::likelihood::parse_answer;
///
/// let answer = parse_answer("I think... ANSWER: 42%, 7%").unwrap();
/// assert_eq!((answer.target, answer.turnout), (42.0, 7.0));
/// ```
pub fn parse_answer(text: &str) -> Option<VoteLikelihood> {
    let captures = ANSWER_PATTERN.captures_iter(text).last()?;
    let target = captures.get(1)?.as_str().parse().ok()?;
    let turnout = captures.get(2)?.as_str().parse().ok()?;
    VoteLikelihood::checked(target, turnout).ok()
}
