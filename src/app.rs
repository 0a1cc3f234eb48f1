use std::rc::Rc;

use yew::prelude::*;

use crate::components::{ChatContainer, Listing};
use crate::config::Config;
use crate::seed::Seed;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub seed: Rc<Seed>,
    pub config: Config,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let seed_messages = use_memo(props.seed.clone(), |seed| seed.messages.clone());

    html! {
        <div style="display:flex; flex-direction:row; height:100vh; font-family:Arial,sans-serif;">
            <div style="flex:1; overflow-y:auto;">
                <Listing heading={props.seed.heading.clone()} cards={props.seed.cards.clone()} />
            </div>
            <ChatContainer seed={seed_messages} config={props.config.clone()} />
        </div>
    }
}
