//! The session protocol and command loop.
//!
//! A [`Session`] sits between a command stream (what a plugin UI would send)
//! and an event stream (what it would display), driving the parse, token
//! batch, and style guide stages against an injected host. On the wire both
//! sides are tagged JSON: `{"type":"GENERATE_THEME","css":"..."}` in,
//! `{"type":"GENERATION_COMPLETE","variableCount":49}` out.

use serde::{Deserialize, Serialize};
use themecss::{DEFAULT_THEME_CSS, parse_theme_css};
use tokio::sync::mpsc;

use crate::error::PipelineError;
use crate::host::DesignHost;
use crate::style_guide::generate_style_guide;
use crate::variables::{create_variables_from_theme, existing_theme_variables};

/// Inbound commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    #[serde(rename = "GENERATE_THEME")]
    GenerateTheme { css: String },

    #[serde(rename = "CANCEL")]
    Cancel,
}

impl Command {
    /// Decode a wire command.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Outbound events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "PROGRESS")]
    Progress { message: String },

    #[serde(rename = "GENERATION_COMPLETE", rename_all = "camelCase")]
    GenerationComplete { variable_count: usize },

    #[serde(rename = "GENERATION_ERROR")]
    GenerationError { error: String },

    #[serde(rename = "EXISTING_VARIABLES")]
    ExistingVariables { count: usize },
}

impl Event {
    /// Wire-encode for the host UI.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Drives the pipeline from a command stream, reporting progress as events.
pub struct Session<'a> {
    host: &'a dyn DesignHost,
    commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<Event>,
}

impl<'a> Session<'a> {
    pub fn new(
        host: &'a dyn DesignHost,
        commands: mpsc::UnboundedReceiver<Command>,
        events: mpsc::UnboundedSender<Event>,
    ) -> Self {
        Self {
            host,
            commands,
            events,
        }
    }

    /// Process commands until the stream closes or a `Cancel` arrives.
    ///
    /// Commands run one at a time, so a cancel queued behind a generate takes
    /// effect only once that generation has finished; tokens it created stay.
    pub async fn run(mut self) {
        self.announce_existing().await;

        while let Some(command) = self.commands.recv().await {
            match command {
                Command::GenerateTheme { css } => self.generate(&css).await,
                Command::Cancel => break,
            }
        }
    }

    /// Tell the UI up front when a Theme collection is already populated.
    async fn announce_existing(&self) {
        match existing_theme_variables(self.host).await {
            Ok(existing) if !existing.is_empty() => {
                self.send(Event::ExistingVariables {
                    count: existing.len(),
                });
            }
            Ok(_) => {}
            Err(err) => log::error!("Failed to inspect existing variables: {}", err),
        }
    }

    async fn generate(&self, css: &str) {
        match self.try_generate(css).await {
            Ok(variable_count) => self.send(Event::GenerationComplete { variable_count }),
            Err(err) => {
                log::error!("Theme generation failed: {}", err);
                self.send(Event::GenerationError {
                    error: err.to_string(),
                });
            }
        }
    }

    async fn try_generate(&self, css: &str) -> Result<usize, PipelineError> {
        self.progress("Parsing CSS theme...");

        // Fall back to the built-in theme when the input is blank.
        let trimmed = css.trim();
        let css = if trimmed.is_empty() {
            DEFAULT_THEME_CSS
        } else {
            trimmed
        };

        let theme = parse_theme_css(css);
        if theme.is_empty() {
            return Err(PipelineError::EmptyTheme);
        }

        self.progress(format!(
            "Found {} light mode variables, {} dark mode variables",
            theme.light.len(),
            theme.dark.len()
        ));

        self.progress("Creating Figma variables...");
        let batch = create_variables_from_theme(self.host, &theme).await?;
        self.progress(format!("Created {} variables", batch.variable_count));

        self.progress("Generating style guide...");
        generate_style_guide(self.host, &theme, &batch.binding).await?;

        self.progress("Done!");
        Ok(batch.variable_count)
    }

    fn progress(&self, message: impl Into<String>) {
        self.send(Event::Progress {
            message: message.into(),
        });
    }

    fn send(&self, event: Event) {
        // A closed event stream just means nobody is listening anymore.
        let _ = self.events.send(event);
    }
}
