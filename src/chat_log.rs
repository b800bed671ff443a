use std::rc::Rc;
use yew::prelude::*;

use crate::types::{ChatMessage, OutgoingMessage};

/// In-memory message store backing the demo chat.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    /// Accepted messages, oldest first
    pub messages: Vec<ChatMessage>,
    /// ID handed to the next accepted message
    pub next_id: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    pub fn append(&mut self, message: OutgoingMessage) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::from_outgoing(id, message));
        &self.messages[self.messages.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

pub enum ChatLogAction {
    Append(OutgoingMessage),
}

impl Reducible for ChatLog {
    type Action = ChatLogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut log = (*self).clone();
        match action {
            ChatLogAction::Append(message) => {
                log.append(message);
            }
        }
        Rc::new(log)
    }
}
