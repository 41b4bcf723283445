use lab_core::entities::{Lab, LabEmbed, LabVersion};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Column, ColumnKind};

/// Compact column set used when a list is printed as a table.
pub trait Columns {
    const COLUMNS: &'static [Column];

    fn cells(&self) -> Vec<String>;
}

fn opt(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

impl Columns for Lab {
    const COLUMNS: &'static [Column] = &[
        Column::new("id", ColumnKind::Id),
        Column::new("slug", ColumnKind::Slug),
        Column::new("title", ColumnKind::Text),
        Column::new("status", ColumnKind::Status),
        Column::new("difficulty", ColumnKind::Plain),
        Column::new("draft", ColumnKind::Id),
        Column::new("published", ColumnKind::Id),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.entity_id().to_string(),
            opt(self.slug.as_deref()),
            self.display_title().to_string(),
            self.status().as_str().to_string(),
            self.difficulty.map_or_else(|| "-".to_string(), |d| d.as_str().to_string()),
            opt(self.current_draft_version_id.as_deref()),
            opt(self.latest_published_version_id.as_deref()),
        ]
    }
}

impl Columns for LabVersion {
    const COLUMNS: &'static [Column] = &[
        Column::new("id", ColumnKind::Id),
        Column::new("number", ColumnKind::Number),
        Column::new("state", ColumnKind::Status),
        Column::new("language", ColumnKind::Plain),
        Column::new("created", ColumnKind::Timestamp),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.entity_id().to_string(),
            self.version_number
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            if self.is_draft { "draft" } else { "published" }.to_string(),
            self.language.map_or_else(|| "-".to_string(), |l| l.as_str().to_string()),
            opt(self.created_at.as_deref()),
        ]
    }
}

impl Columns for LabEmbed {
    const COLUMNS: &'static [Column] = &[
        Column::new("id", ColumnKind::Id),
        Column::new("lab", ColumnKind::Id),
        Column::new("workshop", ColumnKind::Id),
        Column::new("document", ColumnKind::Id),
        Column::new("created", ColumnKind::Timestamp),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.entity_id().to_string(),
            opt(self.lab_id.as_deref()),
            opt(self.workshop_id.as_deref()),
            opt(self.workshop_document_id.as_deref()),
            opt(self.created_at.as_deref()),
        ]
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a list, using the compact columns for tables.
pub fn render_rows<T: Serialize + Columns>(rows: &[T], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&rows, format);
    }
    if rows.is_empty() {
        return Ok(String::from("(no rows)"));
    }
    let cells = rows.iter().map(Columns::cells).collect::<Vec<_>>();
    Ok(table::render(T::COLUMNS, &cells, table_options()))
}

/// Print a list, using the compact columns for tables.
pub fn output_rows<T: Serialize + Columns>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_rows(rows, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

const KEY: Column = Column::new("key", ColumnKind::Plain);
const VALUE: Column = Column::new("value", ColumnKind::Text);

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) => {
            let rows = items
                .iter()
                .map(|item| vec![value_to_cell(item)])
                .collect::<Vec<_>>();
            Ok(table::render(&[VALUE], &rows, table_options()))
        }
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render(&[KEY, VALUE], &rows, table_options()))
        }
        scalar => Ok(table::render(
            &[VALUE],
            &[vec![value_to_cell(&scalar)]],
            table_options(),
        )),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
