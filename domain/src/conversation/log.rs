//! Per-party conversation logs and the copy-and-relabel handoff

use super::entities::{Message, Party, Utterance};

/// One party's private, append-only view of the call
///
/// The owner's own utterances are stored as `assistant` messages; the other
/// party's utterances and harness prompts are stored as `user` messages.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    owner: Party,
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new(owner: Party) -> Self {
        Self {
            owner,
            messages: Vec::new(),
        }
    }

    pub fn owner(&self) -> Party {
        self.owner
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append an utterance, labelled relative to this log's owner
    pub fn push_utterance(&mut self, speaker: Party, text: impl Into<String>) {
        let message = if speaker == self.owner {
            Message::assistant(text)
        } else {
            Message::user(text)
        };
        self.messages.push(message);
    }

    /// Append a harness prompt addressed to the owner
    pub fn push_prompt(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    /// Drop the last `n` messages.
    ///
    /// Only used to strip the prior-likelihood elicitation exchange.
    pub fn truncate_last(&mut self, n: usize) {
        let keep = self.messages.len().saturating_sub(n);
        self.messages.truncate(keep);
    }
}

/// The two private logs of a single simulated call
#[derive(Debug, Clone)]
pub struct Conversation {
    canvasser: ConversationLog,
    mark: ConversationLog,
    transcript: Vec<Utterance>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            canvasser: ConversationLog::new(Party::Canvasser),
            mark: ConversationLog::new(Party::Mark),
            transcript: Vec::new(),
        }
    }

    /// Record an utterance spoken on the call.
    ///
    /// Appended to the speaker's log as `assistant` and copied into the
    /// listener's log as `user`.
    pub fn record(&mut self, speaker: Party, text: &str) {
        self.canvasser.push_utterance(speaker, text);
        self.mark.push_utterance(speaker, text);
        self.transcript.push(Utterance {
            party: speaker,
            text: text.to_string(),
        });
    }

    pub fn view(&self, party: Party) -> &ConversationLog {
        match party {
            Party::Canvasser => &self.canvasser,
            Party::Mark => &self.mark,
        }
    }

    pub fn view_mut(&mut self, party: Party) -> &mut ConversationLog {
        match party {
            Party::Canvasser => &mut self.canvasser,
            Party::Mark => &mut self.mark,
        }
    }

    /// Utterances exchanged on the call, excluding harness prompts and
    /// elicitation answers
    pub fn transcript(&self) -> &[Utterance] {
        &self.transcript
    }

    /// Whether the mark has sent the withdrawal token at any point
    pub fn mark_withdrew(&self) -> bool {
        self.transcript
            .iter()
            .any(|u| u.party == Party::Mark && crate::signals::contains_withdraw(&u.text))
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
