//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::text::render_update;
use std::error::Error;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging and plain-text panel rendering
/// 2. Ctrl+C shutdown handling
/// 3. Event loop management
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting(
        "headless",
        session.kind.name(),
        &session.settings.environment.api_url(),
    );

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Event loop: print region writes and events until shutdown
    loop {
        tokio::select! {
            Some(update) = session.update_receiver.recv() => {
                println!("{}", render_update(&update));
            }
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    // The loop received the same shutdown signal
    print_session_shutdown();
    session.refresh_loop.join().await;
    print_session_exit_success();

    Ok(())
}
