mod api;
mod components;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    AppState::provide();

    view! {
        <div>
            <h1>"Contoso Outdoors GenAI Chat:"</h1>
            <div class="chat-disclaimer">
                "Disclaimer: This chat application uses AI to generate responses. Please verify the information provided."
            </div>
            <ChatArea />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
