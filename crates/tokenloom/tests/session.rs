//! Session Protocol Integration Tests
//!
//! Queue commands, run a session to completion against the in-memory host,
//! and assert on the exact event sequence the UI would see.

use tokenloom::{Command, Event, MemoryHost, Session, existing_theme_variables};
use tokio::sync::mpsc;

async fn run_session(host: &MemoryHost, commands: Vec<Command>) -> Vec<Event> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    for command in commands {
        command_tx.send(command).unwrap();
    }
    drop(command_tx);

    Session::new(host, command_rx, event_tx).run().await;

    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }
    events
}

fn progress(message: &str) -> Event {
    Event::Progress {
        message: message.to_string(),
    }
}

#[tokio::test]
async fn test_blank_css_generates_the_default_theme() {
    let host = MemoryHost::new();
    let events = run_session(
        &host,
        vec![Command::GenerateTheme {
            css: "   ".to_string(),
        }],
    )
    .await;

    assert_eq!(
        events,
        vec![
            progress("Parsing CSS theme..."),
            progress("Found 55 light mode variables, 32 dark mode variables"),
            progress("Creating Figma variables..."),
            progress("Created 49 variables"),
            progress("Generating style guide..."),
            progress("Done!"),
            Event::GenerationComplete { variable_count: 49 },
        ]
    );

    assert_eq!(existing_theme_variables(&host).await.unwrap().len(), 49);
    assert!(host.focused().is_some());
}

#[tokio::test]
async fn test_css_without_theme_blocks_reports_an_error() {
    let host = MemoryHost::new();
    let events = run_session(
        &host,
        vec![Command::GenerateTheme {
            css: "body { color: red; }".to_string(),
        }],
    )
    .await;

    assert_eq!(
        events,
        vec![
            progress("Parsing CSS theme..."),
            Event::GenerationError {
                error: "No valid CSS variables found. Make sure your CSS includes \
                        :root { } or .dark { } blocks."
                    .to_string(),
            },
        ]
    );

    // Nothing was written to the document.
    assert!(host.ops().is_empty());
}

#[tokio::test]
async fn test_second_session_announces_existing_variables() {
    let host = MemoryHost::new();
    run_session(
        &host,
        vec![Command::GenerateTheme { css: String::new() }],
    )
    .await;

    let events = run_session(&host, vec![]).await;
    assert_eq!(events, vec![Event::ExistingVariables { count: 49 }]);
}

#[tokio::test]
async fn test_cancel_stops_the_session_but_keeps_tokens() {
    let host = MemoryHost::new();
    let events = run_session(
        &host,
        vec![
            Command::GenerateTheme { css: String::new() },
            Command::Cancel,
            Command::GenerateTheme { css: String::new() },
        ],
    )
    .await;

    // The generate queued behind the cancel never runs.
    assert_eq!(events.len(), 7);
    assert!(matches!(
        events.last(),
        Some(Event::GenerationComplete { variable_count: 49 })
    ));
    assert_eq!(existing_theme_variables(&host).await.unwrap().len(), 49);
}

#[tokio::test]
async fn test_cancel_alone_emits_no_events() {
    let host = MemoryHost::new();
    let events = run_session(&host, vec![Command::Cancel]).await;
    assert!(events.is_empty());
}
