//! Column-typed tables for lab, version, and embed listings.
//!
//! Each column declares what it holds. Identifiers are copied into follow-up
//! commands, so only free text and slugs give up width on a narrow terminal.

const SEPARATOR: &str = "  ";
const ELLIPSIS: char = '…';
/// Narrowest a shrinkable column may get, header permitting.
const MIN_SHRUNK: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Entity ids. Never shortened.
    Id,
    /// Shortened from the middle so the distinguishing tail stays visible.
    Slug,
    /// Titles and free values. Shortened from the end, and first to shrink.
    Text,
    /// Lifecycle state, coloured when colour is on.
    Status,
    /// Small fixed vocabularies such as difficulty or language.
    Plain,
    /// Right-aligned.
    Number,
    /// Stored timestamps, shown to the minute.
    Timestamp,
}

impl ColumnKind {
    const fn shrinks(self) -> bool {
        matches!(self, Self::Slug | Self::Text)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub header: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    #[must_use]
    pub const fn new(header: &'static str, kind: ColumnKind) -> Self {
        Self { header, kind }
    }

    fn min_width(self) -> usize {
        self.header.chars().count().max(MIN_SHRUNK)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `columns`. Missing cells print as `-`.
#[must_use]
pub fn render(columns: &[Column], rows: &[Vec<String>], options: TableOptions) -> String {
    let cells = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| display_value(column.kind, row.get(index).map(String::as_str)))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut widths = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            cells
                .iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(column.header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();
    if let Some(max_width) = options.max_width {
        shrink(&mut widths, columns, max_width);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| pad(column.kind, column.header, width))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let rule_width = widths.iter().sum::<usize>() + SEPARATOR.len() * widths.len().saturating_sub(1);
    lines.push(header.trim_end().to_string());
    lines.push("-".repeat(rule_width));

    for row in &cells {
        let line = columns
            .iter()
            .zip(&widths)
            .zip(row)
            .map(|((column, &width), value)| {
                let fitted = fit(column.kind, value, width);
                let padded = pad(column.kind, &fitted, width);
                if options.color && column.kind == ColumnKind::Status {
                    paint_status(&fitted, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn display_value(kind: ColumnKind, value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    if kind == ColumnKind::Timestamp
        && value.len() >= 16
        && value.as_bytes()[10] == b'T'
        && let Some(minute) = value.get(..16)
    {
        return minute.replacen('T', " ", 1);
    }
    value.to_string()
}

/// Take width from the widest text column first, then slugs, until the
/// table fits or nothing can shrink further.
fn shrink(widths: &mut [usize], columns: &[Column], max_width: usize) {
    let separators = SEPARATOR.len() * widths.len().saturating_sub(1);
    for kind in [ColumnKind::Text, ColumnKind::Slug] {
        while widths.iter().sum::<usize>() + separators > max_width {
            let widest = columns
                .iter()
                .enumerate()
                .filter(|(index, column)| column.kind == kind && widths[*index] > column.min_width())
                .max_by_key(|(index, _)| widths[*index])
                .map(|(index, _)| index);
            let Some(index) = widest else {
                break;
            };
            widths[index] -= 1;
        }
    }
}

fn fit(kind: ColumnKind, value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width || !kind.shrinks() {
        return value.to_string();
    }
    if width <= 1 {
        return ELLIPSIS.to_string();
    }

    let keep = width - 1;
    if kind == ColumnKind::Slug {
        let head = keep / 2;
        let tail = keep - head;
        let mut out = value.chars().take(head).collect::<String>();
        out.push(ELLIPSIS);
        out.extend(value.chars().skip(len - tail));
        out
    } else {
        let mut out = value.chars().take(keep).collect::<String>();
        out.push(ELLIPSIS);
        out
    }
}

fn pad(kind: ColumnKind, value: &str, width: usize) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if kind == ColumnKind::Number {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Published green, draft yellow, archived red. Padding stays outside the
/// escape codes so alignment is unaffected.
fn paint_status(value: &str, padded: &str) -> String {
    let code = match value {
        "published" => "32",
        "draft" => "33",
        "archived" => "31",
        _ => return padded.to_string(),
    };
    let fill = &padded[value.len()..];
    format!("\u{1b}[{code}m{value}\u{1b}[0m{fill}")
}
