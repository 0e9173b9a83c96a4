//! CLI argument parsing for lambdeploy.
//!
//! Every flag is optional. Run with no arguments, the tool prompts for all
//! seven fields.

use crate::config::Preset;
use clap::Parser;
use std::path::PathBuf;

/// Print the docker and aws CLI commands that build a container image, push
/// it to ECR, and deploy it as a Lambda function with a public URL.
///
/// Nothing is executed; copy the printed commands into a shell.
#[derive(Parser, Debug)]
#[command(name = "lambdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// AWS region (e.g., us-east-2).
    #[arg(long)]
    pub region: Option<String>,

    /// AWS account ID.
    #[arg(long)]
    pub account_id: Option<String>,

    /// Lambda function name.
    #[arg(long)]
    pub function_name: Option<String>,

    /// ECR repository name.
    #[arg(long)]
    pub repo_name: Option<String>,

    /// Docker image tag (e.g., latest).
    #[arg(long)]
    pub image_tag: Option<String>,

    /// Docker build context path (default: .).
    #[arg(long = "context", value_name = "PATH")]
    pub dockerfile_path: Option<String>,

    /// Lambda execution role name (e.g., lambda-role).
    #[arg(long)]
    pub role_name: Option<String>,

    /// YAML file pre-filling any of the fields above. Flags take precedence.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit the steps as a JSON array instead of text.
    #[arg(long)]
    pub json: bool,

    /// Shell-quote values before inserting them into the commands.
    #[arg(long)]
    pub quote_values: bool,

    /// Print debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Fields supplied on the command line.
    pub fn preset(&self) -> Preset {
        Preset {
            region: self.region.clone(),
            account_id: self.account_id.clone(),
            function_name: self.function_name.clone(),
            repo_name: self.repo_name.clone(),
            image_tag: self.image_tag.clone(),
            dockerfile_path: self.dockerfile_path.clone(),
            role_name: self.role_name.clone(),
        }
    }
}
