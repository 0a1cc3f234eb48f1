use yew::prelude::*;

use crate::components::CardItem;
use crate::disclosure::Disclosure;
use crate::types::Card;

#[derive(Properties, PartialEq)]
pub struct ListingProps {
    pub heading: String,
    pub cards: Vec<Card>,
}

#[function_component(Listing)]
pub fn listing(props: &ListingProps) -> Html {
    let panel = use_state(Disclosure::default);

    let on_toggle = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| {
            let next = panel.toggled();
            tracing::debug!(open = next.is_open(), "listing toggled");
            panel.set(next);
        })
    };

    html! {
        <div>
            <button
                onclick={on_toggle}
                style="position:relative; display:flex; align-items:center; gap:0.5em; padding:1em; background:#014532; border:none; cursor:pointer;"
            >
                <svg width="24" height="24" viewBox="0 0 30 30" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M20 12.5L15 17.5L10 12.5" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                </svg>
                <svg width="32" height="32" viewBox="0 0 32 32" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M21 13.5L16 18.5L11 13.5" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                    <path d="M16 0.5C24.5604 0.5 31.5 7.43959 31.5 16C31.5 24.5604 24.5604 31.5 16 31.5C7.43959 31.5 0.5 24.5604 0.5 16C0.5 7.43959 7.43959 0.5 16 0.5Z" stroke="black"/>
                </svg>
                <span>{ &props.heading }</span>
            </button>
            { if panel.is_open() {
                html! {
                    <div style="display:flex; flex-direction:column; gap:1.5em; padding:1.5em; background:#DCEAAB;">
                        { for props.cards.iter().map(|card| html! { <CardItem card={card.clone()} /> }) }
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
