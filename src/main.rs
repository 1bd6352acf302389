mod terminal;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use contoso_chat::{ChatConfig, ChatController, HttpChatBackend, TracingDiagnostics, TranscriptStore};

use crate::terminal::TerminalPrinter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contoso_chat=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let config = ChatConfig::from_env();
    let backend = HttpChatBackend::new(&config)?;
    info!("Chat endpoint: {}", backend.endpoint());

    let store = TranscriptStore::new();
    let controller = ChatController::new(store.clone(), backend, TracingDiagnostics);
    let mut updates = store.subscribe();

    // ── Conversation loop ─────────────────────────────────────────────────────
    let mut printer = TerminalPrinter::new(std::io::stdout());
    printer.banner()?;
    printer.render(&store.current_state())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        printer.prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let send = controller.send_message(&line);
        tokio::pin!(send);
        loop {
            tokio::select! {
                _ = &mut send => break,
                Ok(()) = updates.changed() => {
                    printer.render(&updates.borrow_and_update())?;
                }
            }
        }
        printer.render(&updates.borrow_and_update())?;
    }

    info!("Conversation ended");
    Ok(())
}
