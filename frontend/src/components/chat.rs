use contoso_chat::{Message, Role};
use contoso_chat::format::render_html;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::state::AppState;

const PLACEHOLDER: &str = "Ask a question...";

/// Transcript, typing indicator and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let messages = state.messages;
    let pending = state.pending;
    let error = state.error;

    // Keep the newest entry in view.
    let end_ref = NodeRef::<Div>::new();
    Effect::new(move |_| {
        messages.track();
        if let Some(end) = end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    view! {
        <div class="chat-container">
            // Error banner
            {move || {
                error.get().map(|err| {
                    view! {
                        <div class="error-banner">{err}</div>
                    }
                })
            }}

            // Messages
            <div class="chat-messages">
                <Show when=move || messages.with(Vec::is_empty)>
                    <div class="message-content">{PLACEHOLDER}</div>
                </Show>
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, message)| view! { <MessageBubble message=message /> }
                />
                <Show when=move || pending.get()>
                    <p class="message">"System is typing..."</p>
                </Show>
                <div node_ref=end_ref />
            </div>

            // Input area
            <ChatInput />
        </div>
    }
}

/// A single transcript entry with its markdown body.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = match message.role {
        Role::User => "message-user",
        Role::System => "message-agent",
    };
    let body = render_html(&message.content);

    view! {
        <div class=css_class tabindex="0">
            <div class="message">
                <h3 class="message-header">{message.role.as_str()}</h3>
                <div class="message-content" inner_html=body></div>
            </div>
        </div>
    }
}

/// Chat input form; disabled while a round trip is outstanding.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let pending = state.pending;
    let (input, set_input) = signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        if text.trim().is_empty() || pending.get_untracked() {
            return;
        }
        set_input.set(String::new());
        state.send_message(text);
    };

    view! {
        <form class="chat-input-form" aria-label="Chat Input Form" on:submit=on_submit>
            <input
                class="chat-input"
                type="text"
                name="input"
                placeholder="Type your message..."
                prop:value=input
                on:input=move |ev| {
                    set_input.set(event_target_value(&ev));
                }
                disabled=move || pending.get()
            />
            <button class="chat-submit-button" type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Sending…" } else { "Send" }}
            </button>
        </form>
    }
}
