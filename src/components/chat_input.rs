use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chat::is_sendable;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub on_send: Callback<String>,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let draft = use_state(String::new);

    let send = {
        let draft = draft.clone();
        let on_send = props.on_send.clone();
        Callback::from(move |_: ()| {
            if !is_sendable(&draft) {
                return;
            }
            on_send.emit((*draft).clone());
            draft.set(String::new());
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            draft.set(target.value());
        })
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                send.emit(());
            }
        })
    };

    let on_click = send.reform(|_: MouseEvent| ());

    html! {
        <div style="display:flex; padding:1em; background:#013F2D; border-top:1px solid #374151;">
            <input
                type="text"
                value={(*draft).clone()}
                oninput={on_input}
                onkeydown={on_keydown}
                placeholder="Type your message..."
                style="flex:1; padding:0.75em; border:none; border-radius:12px; background:#01563E; color:white; outline:none;"
            />
            <button
                onclick={on_click}
                style="display:flex; align-items:center; justify-content:center; padding:0.75em; margin-left:0.5em; background:#62BB46; border:none; border-radius:9999px; cursor:pointer;"
            >
                <svg width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                    <path d="M12 19V5M12 5L5 12M12 5L19 12" />
                </svg>
            </button>
        </div>
    }
}
