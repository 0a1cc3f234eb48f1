pub mod reply;
pub mod store;
pub mod timer;

pub use reply::ReplyScheduler;
pub use store::{is_sendable, ChatAction, MessageStore};
pub use timer::{BrowserTimer, Timer, TimerHandle};

use yew::functional::UseReducerDispatcher;

use crate::types::Sender;

/// Where sent and replied messages end up.
pub trait MessageSink: Clone + 'static {
    fn push(&self, text: String, sender: Sender);
}

impl MessageSink for UseReducerDispatcher<MessageStore> {
    fn push(&self, text: String, sender: Sender) {
        self.dispatch(ChatAction::Append { text, sender });
    }
}
