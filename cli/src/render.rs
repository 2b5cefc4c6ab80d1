//! Plain-text views of the employee table.

use roster_core::{FieldErrors, Record, RecordTable, TableView, EMPTY_MESSAGE};

/// `1200.5` -> `$1,200.50`.
pub fn format_salary(salary: f64) -> String {
    let fixed = format!("{:.2}", salary.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if salary < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// The load failure to show instead of acting on rows that never arrived.
pub fn load_error(table: &RecordTable) -> Option<String> {
    match table.view() {
        TableView::Failed { message } => Some(load_failure(message)),
        _ => None,
    }
}

fn load_failure(message: &str) -> String {
    format!("Error loading employees: {message}")
}

pub fn table(table: &RecordTable) -> String {
    match table.view() {
        TableView::Loading => "Loading employees...".to_string(),
        TableView::Failed { message } => load_failure(message),
        TableView::Empty => EMPTY_MESSAGE.to_string(),
        TableView::Rows(records) => rows(&table.summary(), records),
    }
}

fn rows(summary: &str, records: &[Record]) -> String {
    let cells: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.name.clone(),
                format_salary(r.salary),
                r.city.clone(),
            ]
        })
        .collect();

    let header = ["ID", "Name", "Salary", "City"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!("{summary}\n");
    let mut line = |cells: [&str; 4]| {
        let text = format!(
            "{:>w0$}  {:<w1$}  {:>w2$}  {:<w3$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        out.push_str(text.trim_end());
        out.push('\n');
    };
    line(header);
    for row in &cells {
        line([&row[0], &row[1], &row[2], &row[3]]);
    }
    out
}

pub fn record(record: &Record) -> String {
    format!(
        "ID:     {}\nName:   {}\nSalary: {}\nCity:   {}",
        record.id,
        record.name,
        format_salary(record.salary),
        record.city
    )
}

/// One line per invalid field.
pub fn field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|err| format!("  {}: {err}", err.field()))
        .collect::<Vec<_>>()
        .join("\n")
}
