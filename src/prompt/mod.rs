//! Sequential line-based prompting for the deployment fields.

use crate::config::Preset;
use crate::error::Result;
use crate::params::DeployParams;
use std::io::{BufRead, Write};


pub const REGION_PROMPT: &str = "Enter the AWS region (e.g., us-east-2): ";
pub const ACCOUNT_ID_PROMPT: &str = "Enter the AWS Account ID: ";
pub const FUNCTION_NAME_PROMPT: &str = "Enter the Lambda function name: ";
pub const REPO_NAME_PROMPT: &str = "Enter the ECR repo name: ";
pub const IMAGE_TAG_PROMPT: &str = "Enter the Docker image tag (e.g., latest): ";
pub const DOCKERFILE_PATH_PROMPT: &str = "Enter the path to your Dockerfile (default: .): ";
pub const ROLE_NAME_PROMPT: &str = "Enter the Lambda execution role name (e.g., lambda-role): ";

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` (no newline) and read one answer line.
    ///
    /// Exactly one trailing `\n` or `\r\n` is removed. End of input yields an
    /// empty answer.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        self.output.write_all(label.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            tracing::debug!(prompt = label.trim_end(), "input closed, treating as empty answer");
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Return the pre-filled value if there is one, otherwise ask.
    fn answer(&mut self, field: &str, prefilled: Option<String>, label: &str) -> Result<String> {
        match prefilled {
            Some(value) => {
                tracing::debug!(field, "using pre-filled value");
                Ok(value)
            }
            None => self.ask(label),
        }
    }

    /// Collect all seven fields in order, skipping those already in `preset`.
    pub fn collect(&mut self, preset: Preset) -> Result<DeployParams> {
        let region = self.answer("region", preset.region, REGION_PROMPT)?;
        let account_id = self.answer("account_id", preset.account_id, ACCOUNT_ID_PROMPT)?;
        let function_name =
            self.answer("function_name", preset.function_name, FUNCTION_NAME_PROMPT)?;
        let repo_name = self.answer("repo_name", preset.repo_name, REPO_NAME_PROMPT)?;
        let image_tag = self.answer("image_tag", preset.image_tag, IMAGE_TAG_PROMPT)?;
        let dockerfile_path = self.answer(
            "dockerfile_path",
            preset.dockerfile_path,
            DOCKERFILE_PATH_PROMPT,
        )?;
        let role_name = self.answer("role_name", preset.role_name, ROLE_NAME_PROMPT)?;

        Ok(DeployParams::new(
            region,
            account_id,
            function_name,
            repo_name,
            image_tag,
            dockerfile_path,
            role_name,
        ))
    }

    /// Give back the output sink, e.g. to inspect what was written in tests.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
