//! Textual signals embedded in model output.
//!
//! These are the only wire-level contracts between the simulation and the
//! models: the withdrawal token, the `[OPEN]` marker separating private
//! reasoning from spoken text, and the disclosure phrase that betrays a
//! broken persona.
//!
//! | Signal | Detector |
//! |--------|----------|
//! | `[WITHDRAW]` anywhere in a mark turn | [`contains_withdraw`] |
//! | disclosure phrase after `[OPEN]` | [`violation::broke_character`] |
//! | trailing `[OPEN]` with nothing after | [`violation::output_empty_tags`] |

pub mod violation;

pub use violation::{ViolationCounts, broke_character, output_empty_tags};

/// Token a party emits to end the call early
pub const WITHDRAW_TOKEN: &str = "[WITHDRAW]";

/// Marker separating private reasoning from the spoken reply
pub const OPEN_MARKER: &str = "[OPEN]";

/// Phrase indicating the model dropped its persona
pub const DISCLOSURE_PHRASE: &str = "AI language model";

/// Check whether a turn asks to end the call
pub fn contains_withdraw(text: &str) -> bool {
    text.contains(WITHDRAW_TOKEN)
}
