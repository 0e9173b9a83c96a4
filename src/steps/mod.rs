//! Rendering of the eight deployment steps.
//!
//! Each step is a fixed template filled from [`DeployParams`]. Rendering is a
//! pure function of the parameters: the same input always produces the same
//! bytes.

mod templates;

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::params::DeployParams;
use crate::template::{render_template, vars};
use serde::Serialize;
use std::collections::HashMap;

use templates::STEPS;

/// Header printed before the first step in text mode.
pub const HEADER: &str = "\n# Generated Commands\n\n";

/// A step with every placeholder filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedStep {
    pub title: String,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Options that change how operator values are inserted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Shell-quote each operator value before substitution.
    pub quote_values: bool,
}

/// Variables available to every template.
fn template_vars(params: &DeployParams) -> HashMap<String, String> {
    vars([
        ("region", params.region.clone()),
        ("account_id", params.account_id.clone()),
        ("function_name", params.function_name.clone()),
        ("repo_name", params.repo_name.clone()),
        ("image_tag", params.image_tag.clone()),
        ("dockerfile_path", params.dockerfile_path.clone()),
        ("role_name", params.role_name.clone()),
        ("role_arn", params.role_arn()),
        ("registry", params.registry_host()),
        ("local_image", params.local_image()),
        ("image_uri", params.image_uri()),
    ])
}

/// Render all steps, in output order.
pub fn render_steps(params: &DeployParams, options: RenderOptions) -> Result<Vec<RenderedStep>> {
    let variables = if options.quote_values {
        template_vars(&params.shell_quoted())
    } else {
        template_vars(params)
    };

    let steps = STEPS
        .iter()
        .map(|step| -> Result<RenderedStep> {
            Ok(RenderedStep {
                title: step.title.to_string(),
                command: render_template(step.command, &variables)?,
                note: step
                    .note
                    .map(|note| render_template(note, &variables))
                    .transpose()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = steps.len(), quoted = options.quote_values, "rendered steps");
    Ok(steps)
}

/// Human-readable layout: a header, then `title:\ncommand\n\n` per step,
/// with any note printed on its own line after its step.
pub fn render_text(steps: &[RenderedStep]) -> String {
    let mut out = String::from(HEADER);
    for step in steps {
        out.push_str(&step.title);
        out.push_str(":\n");
        out.push_str(&step.command);
        out.push_str("\n\n");
        if let Some(note) = &step.note {
            out.push_str(note);
            out.push('\n');
        }
    }
    out
}

/// JSON array of steps, pretty-printed, with a trailing newline.
pub fn render_json(steps: &[RenderedStep]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(steps)?;
    out.push('\n');
    Ok(out)
}
