use std::rc::Rc;

use yew::prelude::*;

use crate::chat::{BrowserTimer, MessageStore, ReplyScheduler};
use crate::components::{ChatInput, ResponseBubble, SenderBubble};
use crate::config::Config;
use crate::seed::SeedMessage;
use crate::types::Sender;

#[derive(Properties, PartialEq)]
pub struct ChatContainerProps {
    pub seed: Rc<Vec<SeedMessage>>,
    pub config: Config,
}

#[function_component(ChatContainer)]
pub fn chat_container(props: &ChatContainerProps) -> Html {
    let store = {
        let seed = props.seed.clone();
        use_reducer(move || MessageStore::seeded(&seed))
    };
    let scheduler = {
        let config = props.config.clone();
        use_mut_ref(move || ReplyScheduler::new(BrowserTimer, &config))
    };

    // Pending replies must not outlive the panel.
    {
        let scheduler = scheduler.clone();
        use_effect_with((), move |_| {
            move || {
                scheduler.borrow_mut().cancel_all();
            }
        });
    }

    let on_send = {
        let dispatcher = store.dispatcher();
        let scheduler = scheduler.clone();
        Callback::from(move |text: String| {
            if scheduler.borrow_mut().submit(&text, &dispatcher) {
                tracing::info!(chars = text.chars().count(), "message sent");
            }
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; height:100vh; width:25rem; background:#014532;">
            <div style="flex:1; overflow-y:auto; padding:1em; display:flex; flex-direction:column; gap:1em;">
                { for store.iter().map(|message| match message.sender {
                    Sender::User => html! { <SenderBubble key={message.id} text={message.text.clone()} /> },
                    Sender::Bot => html! { <ResponseBubble key={message.id} text={message.text.clone()} /> },
                })}
            </div>
            <ChatInput {on_send} />
        </div>
    }
}
