use std::path::Path;

use anyhow::Context;
use lab_config::LabConfig;
use lab_core::entities::LabVersion;
use lab_core::enums::TestSuiteKind;
use lab_editor::gate::violations;
use lab_editor::{EditBuffer, EditorDefaults, EditorSession, authoring};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DraftCommands;
use crate::context::AppContext;
use crate::draft_file::DraftFile;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RowErrors {
    suite: &'static str,
    index: usize,
    messages: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    publishable: bool,
    violations: Vec<String>,
    row_errors: Vec<RowErrors>,
}

impl CheckReport {
    fn of(buffer: &EditBuffer) -> Self {
        let violations = violations(buffer)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        let row_errors = [TestSuiteKind::Sample, TestSuiteKind::Hidden]
            .into_iter()
            .flat_map(|kind| {
                buffer
                    .tests
                    .error_rows(kind)
                    .into_iter()
                    .map(move |index| RowErrors {
                        suite: kind.as_str(),
                        index,
                        messages: buffer.tests.errors(kind, index).to_vec(),
                    })
            })
            .collect();
        Self {
            publishable: violations.is_empty(),
            violations,
            row_errors,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewDraftResponse {
    created: bool,
    version: LabVersion,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveResponse<'a> {
    lab_id: &'a str,
    version_id: &'a str,
    created: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PublishResponse<'a> {
    lab_id: &'a str,
    published_version_id: &'a str,
    recreated: bool,
}

/// Handle `labctl draft check`. Runs offline.
pub fn check(file: &Path, config: &LabConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let buffer = DraftFile::read(file)?.to_buffer(&EditorDefaults::from(&config.editor));
    let report = CheckReport::of(&buffer);
    output(&report, flags.format)?;

    if let Some(first) = report.violations.first() {
        anyhow::bail!("{} is not publishable: {first}", file.display());
    }
    Ok(())
}

/// Handle the networked `labctl draft` commands.
pub async fn handle(
    action: &DraftCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DraftCommands::New { lab } => {
            let outcome = authoring::create_new_draft(ctx.backend().as_ref(), lab, ctx.actor()).await?;
            output(
                &NewDraftResponse {
                    created: outcome.was_created(),
                    version: outcome.version().clone(),
                },
                flags.format,
            )
        }
        DraftCommands::Show { lab } => {
            let overview = authoring::overview(ctx.backend().as_ref(), lab).await?;
            let Some(draft) = overview.draft else {
                anyhow::bail!("lab {lab} has no draft; run `labctl draft new {lab}` first");
            };
            let version = ctx.client.get_version(lab, draft.entity_id()).await?;
            let buffer = EditBuffer::from_version(&version, &ctx.editor_defaults());
            output(&DraftFile::from_buffer(&buffer), flags.format)
        }
        DraftCommands::Check { file } => check(file, &ctx.config, flags),
        DraftCommands::Save { lab, file } => {
            let mut session = open_with_file(ctx, lab, file).await?;
            let saved = session
                .save()
                .await
                .with_context(|| format!("failed to save draft of lab {lab}"))?;
            output(
                &SaveResponse {
                    lab_id: lab,
                    version_id: saved.version_id(),
                    created: saved.created,
                },
                flags.format,
            )
        }
        DraftCommands::Publish { lab, file } => {
            let mut session = open_with_file(ctx, lab, file).await?;
            let published = session
                .publish()
                .await
                .with_context(|| format!("failed to publish draft of lab {lab}"))?;
            output(
                &PublishResponse {
                    lab_id: lab,
                    published_version_id: published.published.entity_id(),
                    recreated: published.saved.created,
                },
                flags.format,
            )
        }
    }
}

async fn open_with_file(ctx: &AppContext, lab: &str, file: &Path) -> anyhow::Result<EditorSession> {
    let defaults = ctx.editor_defaults();
    let buffer = DraftFile::read(file)?.to_buffer(&defaults);

    let mut session = EditorSession::open(ctx.backend(), lab, ctx.actor(), &defaults)
        .await
        .with_context(|| format!("failed to open draft of lab {lab}"))?;
    session.on_event(|event| tracing::debug!(?event, "session event"));
    *session.buffer_mut() = buffer;
    Ok(session)
}
