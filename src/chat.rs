//! Chat Transcript
//!
//! The append-only message log behind the chat page. Seeded from the
//! provider's chat history, it accepts user submissions for the lifetime
//! of the session and never persists. No assistant replies are generated
//! here; model inference belongs to an external collaborator whose
//! interface is deliberately left undefined.

use crate::model::ChatMessage;

/// Ordered, session-scoped chat message log.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Seed a transcript from provider history, in provider order.
    pub fn seeded(history: Vec<ChatMessage>) -> Self {
        Self { messages: history }
    }

    /// Submit user input.
    ///
    /// Input that is empty after trimming is a no-op and returns `None`.
    /// Otherwise exactly one user message with the submitted text
    /// verbatim, no citations and no confidence is appended, and a copy
    /// of it is returned.
    pub fn submit(&mut self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        let message = ChatMessage::user(text);
        self.messages.push(message.clone());
        Some(message)
    }

    /// The transcript in order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
