//! Classifier backed by an external program.
//!
//! The program is spawned once per image with `{image}` and `{arch}`
//! substituted into its arguments; whatever it prints on stdout is the label.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

use super::provider::Classifier;
use crate::config::CommandConfig;
use crate::error::ClassifyError;
use crate::types::Architecture;

pub struct CommandClassifier {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandClassifier {
    pub fn new(config: &CommandConfig, timeout: Duration) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            timeout,
        }
    }

    /// Arguments for one call, placeholders filled in.
    fn render_args(&self, image: &Path, arch: Architecture) -> Vec<String> {
        let image = image.to_string_lossy();
        self.args
            .iter()
            .map(|arg| arg.replace("{image}", &image).replace("{arch}", arch.as_str()))
            .collect()
    }
}

#[async_trait]
impl Classifier for CommandClassifier {
    fn name(&self) -> &str {
        "command"
    }

    async fn classify(&self, image: &Path, arch: Architecture) -> Result<String, ClassifyError> {
        if !image.exists() {
            return Err(ClassifyError::ImageNotFound(image.to_path_buf()));
        }

        let args = self.render_args(image, arch);
        tracing::trace!("Running {} {:?}", self.program, args);

        let mut command = Command::new(&self.program);
        command.args(&args).kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| ClassifyError::Timeout {
                path: image.to_path_buf(),
                timeout_ms: self.timeout.as_millis() as u64,
            })?
            .map_err(|e| ClassifyError::Command {
                path: image.to_path_buf(),
                message: format!("failed to run {}: {e}", self.program),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClassifyError::Command {
                path: image.to_path_buf(),
                message: format!("{} exited with {}: {}", self.program, output.status, stderr.trim()),
            });
        }

        let label = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if label.is_empty() {
            return Err(ClassifyError::NoLabel {
                path: image.to_path_buf(),
            });
        }
        Ok(label)
    }
}
