//! The generate command: gather parameters, render the steps, print them.

use crate::cli::Cli;
use crate::config::Preset;
use crate::error::Result;
use crate::params::DeployParams;
use crate::prompt::Prompter;
use crate::steps::{RenderOptions, render_json, render_steps, render_text};
use std::io::{self, BufRead, Write};


/// Run against the real terminal.
///
/// Prompts go to stdout, as they would for any interactive script, except in
/// JSON mode where they go to stderr so stdout stays parseable.
pub fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    if cli.json {
        generate(cli, stdin, io::stderr().lock(), &mut stdout)
    } else {
        // Prompts and output share stdout; the prompter borrows it first.
        let params = {
            let prompter = Prompter::new(stdin, &mut stdout);
            collect(cli, prompter)?
        };
        emit(cli, &params, &mut stdout)
    }
}

/// Gather parameters with `input`/`prompt_out`, then write the result to `out`.
pub fn generate<R, P, W>(cli: &Cli, input: R, prompt_out: P, out: &mut W) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let params = collect(cli, Prompter::new(input, prompt_out))?;
    emit(cli, &params, out)
}

fn collect<R: BufRead, P: Write>(
    cli: &Cli,
    mut prompter: Prompter<R, P>,
) -> Result<DeployParams> {
    let base = match &cli.config {
        Some(path) => Preset::load(path)?,
        None => Preset::default(),
    };
    let preset = base.overlay(cli.preset());
    tracing::debug!(prefilled = preset.filled_count(), "collecting parameters");
    prompter.collect(preset)
}

fn emit<W: Write>(cli: &Cli, params: &DeployParams, out: &mut W) -> Result<()> {
    let options = RenderOptions {
        quote_values: cli.quote_values,
    };
    let steps = render_steps(params, options)?;
    let rendered = if cli.json {
        render_json(&steps)?
    } else {
        render_text(&steps)
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
