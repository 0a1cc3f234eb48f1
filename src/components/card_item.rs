use yew::prelude::*;

use crate::types::Card;

#[derive(Properties, PartialEq)]
pub struct CardItemProps {
    pub card: Card,
}

#[function_component(CardItem)]
pub fn card_item(props: &CardItemProps) -> Html {
    let card = &props.card;

    html! {
        <div style="max-width:24rem; background:#62BB46; border-radius:16px; box-shadow:0 4px 6px rgba(0,0,0,0.1); overflow:hidden;">
            <div style="padding:1.5em; text-align:left;">
                <h2 style="margin:0; font-size:0.875em; font-weight:600; color:#000;">{ &card.title }</h2>
                <p style="margin:0.5em 0 0 0; color:#000;">{ &card.address }</p>
                { match card.link() {
                    Some((text, href)) => html! {
                        <a href={href.to_string()} target="_blank" rel="noopener noreferrer">{ text }</a>
                    },
                    None => html! {},
                }}
            </div>
        </div>
    }
}
