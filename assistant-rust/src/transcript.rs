use catalog_sdk::{Message, Role};

pub const DEFAULT_GREETING: &str = "Hi! Tell me your goals, budget, and preferred city.";
pub const DEFAULT_FALLBACK_TEXT: &str =
    "Sorry, I'm having trouble connecting. Please try again later.";

/// Canned questions offered next to the chat input.
pub const QUICK_REPLIES: [&str; 3] = [
    "I want top-5 universities",
    "IT programs in Astana",
    "Dormitory availability",
];

/// Ordered, append-only conversation history of the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// A transcript holding only the assistant greeting.
    pub fn seeded(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
        }
    }

    /// Append a user message and return the history that preceded it.
    /// Blank text is rejected and leaves the transcript untouched.
    pub fn append_user_turn(&mut self, text: &str) -> Option<Vec<Message>> {
        if text.trim().is_empty() {
            return None;
        }
        let history = self.messages.clone();
        self.messages.push(Message::user(text));
        Some(history)
    }

    pub fn append_assistant_turn(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
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

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages sent by `role`.
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}
