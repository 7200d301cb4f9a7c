//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::logging::display_threshold;
use std::error::Error;

/// Prints query events until Ctrl+C, failures on stderr.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);
    let threshold = display_threshold();

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            maybe_event = session.event_receiver.recv() => {
                match maybe_event {
                    Some(event) if event.should_display_at(threshold) => {
                        if event.is_failure() {
                            eprintln!("{}", event);
                        } else {
                            println!("{}", event);
                        }
                    }
                    Some(_) => {}
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.scheduler.shutdown();
    drop(session.subscriptions);
    print_session_exit_success();

    Ok(())
}
