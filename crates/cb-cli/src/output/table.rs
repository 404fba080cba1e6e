//! Plain aligned tables for `--format table`.

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render string rows under `headers`, numbers right-aligned.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .chain([display_len(header), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(display_len(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    lines.extend(rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(cell, *width);
                let padded = pad(&text, *width, is_number(&text));
                if options.color {
                    colorize(padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }));
    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the row fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > display_len(headers[*index]).max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

/// Cut `value` to `width` characters. Paths keep their tail, since the file
/// name is the part worth reading; everything else keeps its head.
fn truncate_text(value: &str, width: usize) -> String {
    let len = display_len(value);
    if len <= width {
        return value.to_string();
    }
    let keep = width.saturating_sub(1);
    if value.contains(['/', '\\']) {
        let tail: String = value.chars().skip(len - keep).collect();
        format!("…{tail}")
    } else {
        let head: String = value.chars().take(keep).collect();
        format!("{head}…")
    }
}

/// Cells from `value_to_cell`: plain integers and fixed-point ratios.
fn is_number(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn pad(value: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_len(value)));
    if right {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Dim the `-` placeholder so missing SDO figures stand apart from zeros.
fn colorize(padded: String, text: &str) -> String {
    if text == "-" {
        format!("\u{1b}[2m{padded}\u{1b}[0m")
    } else {
        padded
    }
}
