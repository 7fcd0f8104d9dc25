use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{Instrument, info, info_span};

use flood_cli::input::{assignment_edits, build_form, resolve_submit_config};
use flood_form::{FormError, FormSession};
use flood_submit::{Receipt, SubmissionEvent, SubmissionId, SubmitConfig};
use flood_validate::ValidationResult;

use crate::cli::{FormArgs, SubmitArgs};
use crate::summary::{print_fields, print_import_summary, print_transition};

/// How a `submit` run ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The form went through sending and success back to idle.
    Completed {
        id: SubmissionId,
        receipt: Option<Receipt>,
    },
    /// Validation blocked the submission.
    Rejected { errors: Vec<String> },
    /// The transport reported an error.
    Failed { message: String },
}

pub fn run_fields() {
    print_fields();
}

pub fn run_preview(args: &FormArgs) -> Result<()> {
    let (form, summary) = build_form(args.file.as_deref(), &args.set)?;
    if let (Some(path), Some(summary)) = (&args.file, &summary) {
        print_import_summary(path, summary);
    }
    let json = form.preview().context("render preview")?;
    println!("{json}");
    Ok(())
}

pub fn run_validate(args: &FormArgs) -> Result<ValidationResult> {
    let (form, summary) = build_form(args.file.as_deref(), &args.set)?;
    if let (Some(path), Some(summary)) = (&args.file, &summary) {
        print_import_summary(path, summary);
    }
    Ok(form.validate())
}

pub fn run_submit(args: &SubmitArgs) -> Result<SubmitOutcome> {
    let config = resolve_submit_config(
        args.config.as_deref(),
        args.send_delay_ms,
        args.reset_delay_ms,
    )?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let span = info_span!(
        "submit",
        send_delay_ms = config.send_delay_ms,
        reset_delay_ms = config.reset_delay_ms
    );
    runtime.block_on(submit_form(args, config).instrument(span))
}

async fn submit_form(args: &SubmitArgs, config: SubmitConfig) -> Result<SubmitOutcome> {
    let mut session = FormSession::simulated(config);
    if let Some(path) = &args.form.file {
        let summary = session
            .import_file(path)
            .await
            .with_context(|| format!("import {}", path.display()))?;
        print_import_summary(path, &summary);
    }
    session.set_fields(assignment_edits(&args.form.set));

    print_transition(session.state().submission_state(), None);
    let id = match session.submit() {
        Ok(id) => id,
        Err(FormError::ValidationFailed { errors }) => {
            return Ok(SubmitOutcome::Rejected { errors });
        }
        Err(error) => return Err(error).context("start submission"),
    };
    print_transition(session.state().submission_state(), None);

    let spinner = sending_spinner()?;
    while let Some(event) = session.next_event().await {
        match event {
            SubmissionEvent::Succeeded { .. } => {
                spinner.finish_and_clear();
                print_transition(session.state().submission_state(), None);
            }
            SubmissionEvent::Failed { message, .. } => {
                spinner.finish_and_clear();
                return Ok(SubmitOutcome::Failed { message });
            }
            SubmissionEvent::Reset { .. } => {
                print_transition(session.state().submission_state(), Some("ready"));
            }
        }
    }

    info!(submission = %id, "submit command finished");
    Ok(SubmitOutcome::Completed {
        id,
        receipt: session.state().last_receipt().cloned(),
    })
}

fn sending_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} ({elapsed})").context("spinner style")?,
    );
    spinner.set_message("Sending");
    spinner.enable_steady_tick(Duration::from_millis(120));
    Ok(spinner)
}
