//! Speech output — optional audible rendering of the recommendation text.
//!
//! Fire-and-forget: the pipeline never consumes a completion signal, and a
//! failing synthesizer only produces a warning.

use std::process::Stdio;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::warn;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str) -> Result<()>;
}

/// Pipes the text to an external synthesizer command's stdin.
pub struct CommandSpeech {
    command: String,
}

impl CommandSpeech {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for CommandSpeech {
    async fn speak(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn speech command '{}'", self.command))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .context("Failed to write text to speech command")?;
        }

        let status = child
            .wait()
            .await
            .context("Failed to wait for speech command")?;
        if !status.success() {
            anyhow::bail!("Speech command '{}' exited with {status}", self.command);
        }
        Ok(())
    }
}

/// No-op synthesizer used when no speech command is configured.
pub struct DisabledSpeech;

#[async_trait]
impl SpeechSynthesizer for DisabledSpeech {
    async fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

pub fn provider_from_config(speech_command: Option<&str>) -> Arc<dyn SpeechSynthesizer> {
    match speech_command {
        Some(command) => Arc::new(CommandSpeech::new(command)),
        None => Arc::new(DisabledSpeech),
    }
}

/// Dispatches speech without blocking the page render. Errors are logged
/// and otherwise dropped.
pub fn speak_in_background(provider: Arc<dyn SpeechSynthesizer>, text: String) {
    tokio::spawn(async move {
        if let Err(e) = provider.speak(&text).await {
            warn!("Speech output failed: {e}");
        }
    });
}
