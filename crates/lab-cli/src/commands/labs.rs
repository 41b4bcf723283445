use lab_core::entities::{Lab, LabVersion};
use lab_core::enums::{LabDifficulty, LabStatus};
use lab_core::requests::{CreateLabDto, LabUpdateBuilder, ListLabsQuery};
use lab_core::text::{normalize_tags, slugify};
use lab_editor::authoring;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LabCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OverviewResponse {
    lab: Lab,
    draft: Option<LabVersion>,
    current_published: Option<LabVersion>,
    versions: Vec<LabVersion>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArchiveResponse<'a> {
    archived: &'a str,
    archived_by: &'a str,
}

/// Handle `labctl labs`.
pub async fn handle(action: &LabCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LabCommands::List {
            workshop,
            status,
            tag,
            query,
            limit,
            skip,
        } => {
            let query = ListLabsQuery {
                workshop_id: workshop.clone(),
                status: parse_optional_enum::<LabStatus>(status.as_deref(), "status")?,
                tag: tag.clone(),
                q: query.clone(),
                limit: Some(effective_limit(
                    *limit,
                    flags.limit,
                    ctx.config.general.default_limit,
                )),
                skip: *skip,
            };
            let labs = ctx.client.list_labs(&query).await?;
            output_rows(&labs, flags.format)
        }
        LabCommands::Get { lab } => output(&ctx.client.get_lab(lab).await?, flags.format),
        LabCommands::Overview { lab } => {
            let overview = authoring::overview(ctx.backend().as_ref(), lab).await?;
            output(
                &OverviewResponse {
                    lab: overview.lab,
                    draft: overview.draft,
                    current_published: overview.current_published,
                    versions: overview.versions,
                },
                flags.format,
            )
        }
        LabCommands::Create {
            workshop,
            title,
            slug,
            summary,
            tag,
            difficulty,
            minutes,
        } => {
            let dto = CreateLabDto {
                workshop_id: workshop.trim().to_string(),
                slug: slug
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map_or_else(|| slugify(title), String::from),
                title: title.trim().to_string(),
                summary: summary.clone().filter(|s| !s.trim().is_empty()),
                tags: normalize_tags(tag),
                difficulty: parse_optional_enum::<LabDifficulty>(
                    difficulty.as_deref(),
                    "difficulty",
                )?
                .unwrap_or_default(),
                estimated_minutes: *minutes,
                created_by: ctx.actor().to_string(),
            };
            if dto.title.is_empty() {
                anyhow::bail!("lab title must not be blank");
            }
            let lab = authoring::create_lab_with_draft(ctx.backend().as_ref(), &dto).await?;
            output(&lab, flags.format)
        }
        LabCommands::Update {
            lab,
            title,
            slug,
            summary,
            difficulty,
            minutes,
            tag,
        } => {
            let mut builder = LabUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title.trim());
            }
            if let Some(slug) = slug {
                builder = builder.slug(slug.trim());
            }
            if let Some(summary) = summary {
                builder = builder.summary(summary.as_str());
            }
            if let Some(difficulty) =
                parse_optional_enum::<LabDifficulty>(difficulty.as_deref(), "difficulty")?
            {
                builder = builder.difficulty(difficulty);
            }
            if let Some(minutes) = minutes {
                builder = builder.estimated_minutes(*minutes);
            }
            if !tag.is_empty() {
                builder = builder.tags(normalize_tags(tag));
            }

            let update = builder.updated_by(ctx.actor()).build();
            if update.is_empty() {
                anyhow::bail!("nothing to update: pass at least one field");
            }
            output(&ctx.client.update_lab(lab, &update).await?, flags.format)
        }
        LabCommands::Archive { lab, by } => {
            let by = by.as_deref().map(str::trim).filter(|b| !b.is_empty());
            authoring::archive(ctx.backend().as_ref(), lab, by, ctx.actor()).await?;
            output(
                &ArchiveResponse {
                    archived: lab,
                    archived_by: by.unwrap_or_else(|| ctx.actor()),
                },
                flags.format,
            )
        }
    }
}
