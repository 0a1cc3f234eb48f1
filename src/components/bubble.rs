use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BubbleProps {
    pub text: String,
}

/// A message typed by the user, pinned to the right.
#[function_component(SenderBubble)]
pub fn sender_bubble(props: &BubbleProps) -> Html {
    html! {
        <div style="
            max-width:20rem;
            padding:0.75em;
            border-radius:16px;
            background:#62BB46;
            color:white;
            box-shadow:0 10px 15px rgba(0,0,0,0.2);
            margin-left:3em;
            overflow-wrap:break-word;
            text-align:left;
            align-self:flex-end;
        ">
            <p style="margin:0;">{ &props.text }</p>
        </div>
    }
}

#[function_component(ResponseBubble)]
pub fn response_bubble(props: &BubbleProps) -> Html {
    html! {
        <div style="
            max-width:20rem;
            padding:0.75em;
            border-radius:16px;
            border:1px solid #d1d5db;
            background:#366B5D;
            color:white;
            box-shadow:0 10px 15px rgba(0,0,0,0.2);
            overflow-wrap:break-word;
            text-align:left;
            align-self:flex-start;
        ">
            <p style="margin:0;">{ &props.text }</p>
        </div>
    }
}
