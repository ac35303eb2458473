use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "move" => Colour::Cyan,
        "email" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// "operation (target)", truncated to the column width.
fn op_target(entry: &LogEntry) -> String {
    let full = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if full.chars().count() > MAX_OP_WIDTH {
        let mut s: String = full.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        full
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(&LogEntry, String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (e, date, op_target(e))
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered.iter().map(|(_, d, _)| d.len()).max().unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, _, o)| o.chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, date, op_target) in rendered {
            let color = color_for_operation(&entry.operation);

            // only the operation word is coloured
            let (op, rest) = match op_target.split_once(' ') {
                Some((op, rest)) => (op.to_string(), format!(" {}", rest)),
                None => (op_target.clone(), String::new()),
            };
            let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                entry.id,
                date,
                color.paint(op),
                rest,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
