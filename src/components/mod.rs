pub mod bubble;
pub mod card_item;
pub mod chat_container;
pub mod chat_input;
pub mod listing;

pub use bubble::{ResponseBubble, SenderBubble};
pub use card_item::CardItem;
pub use chat_container::ChatContainer;
pub use chat_input::ChatInput;
pub use listing::Listing;
