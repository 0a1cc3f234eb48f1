use std::rc::Rc;

use yew::functional::Reducible;

use crate::seed::SeedMessage;
use crate::types::{Message, Sender};

/// Whitespace-only drafts are never sent.
pub fn is_sendable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Append-only conversation history. Ids follow insertion order starting at 1.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn seeded(seed: &[SeedMessage]) -> Self {
        let mut store = Self::default();
        for message in seed {
            store.append(&message.text, message.sender);
        }
        store
    }

    /// Appends `text` as sent. Returns `None` and leaves the store untouched when
    /// the text is blank.
    pub fn append(&mut self, text: &str, sender: Sender) -> Option<&Message> {
        if !is_sendable(text) {
            return None;
        }
        let id = self.messages.len() as u32 + 1;
        self.messages.push(Message {
            id,
            text: text.to_string(),
            sender,
        });
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

pub enum ChatAction {
    Append { text: String, sender: Sender },
}

impl Reducible for MessageStore {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ChatAction::Append { text, sender } => {
                if !is_sendable(&text) {
                    // same Rc, so the list is not re-rendered
                    return self;
                }
                let mut next = (*self).clone();
                next.append(&text, sender);
                Rc::new(next)
            }
        }
    }
}
