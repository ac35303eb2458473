use super::parse_optional_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{Filter, sort_for_display};
use crate::core::store::RecordStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::interview::Interview;
use crate::ui::messages::info;
use crate::utils::colors::{color_for_type, paint};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date,
        candidate,
        interviewer,
        json,
    } = cmd
    {
        let filter = Filter {
            date: parse_optional_date(date.as_ref())?,
            candidate: candidate.clone(),
            interviewer: interviewer.clone(),
        };

        let store = RecordStore::load(DbPool::open(&cfg.database)?)?;
        let mut rows = filter.apply(store.list());
        sort_for_display(&mut rows);

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            if filter.is_empty() {
                info("No interviews scheduled.");
            } else {
                info("No interviews match the filter.");
            }
            return Ok(());
        }

        print_table(&rows, &cfg.date_format);
        println!("{} interview(s)", rows.len());
    }

    Ok(())
}

fn print_table(rows: &[&Interview], date_format: &str) {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("DATE"),
        Column::new("TIME"),
        Column::new("LENGTH"),
        Column::new("CANDIDATE"),
        Column::new("INTERVIEWER"),
        Column::new("TYPE"),
    ]);

    for iv in rows {
        table.add_row(vec![
            iv.id.clone(),
            iv.date.format(date_format).to_string(),
            iv.slot_label(),
            format_minutes(iv.duration_minutes()),
            one_line(&iv.candidate),
            one_line(&iv.interviewer),
            iv.interview_type.to_string(),
        ]);
    }

    // colour is applied after padding so widths stay correct
    let rendered = table.render();
    let type_col = table.columns[..6].iter().map(|c| c.width + 1).sum::<usize>();
    for (i, line) in rendered.lines().enumerate() {
        if i < 2 {
            println!("{}", line);
            continue;
        }
        match rows.get(i - 2) {
            Some(iv) => {
                let (head, tail) = split_at_column(line, type_col);
                println!("{}{}", head, paint(color_for_type(iv.interview_type), tail));
            }
            None => println!("{}", line),
        }
    }
}

/// Control characters (newlines from older records) flattened to spaces,
/// so every record renders on exactly one line.
fn one_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Split a rendered line after `width` display columns.
fn split_at_column(line: &str, width: usize) -> (&str, &str) {
    use unicode_width::UnicodeWidthChar;

    let mut seen = 0;
    for (idx, ch) in line.char_indices() {
        if seen >= width {
            return line.split_at(idx);
        }
        seen += ch.width().unwrap_or(0);
    }
    (line, "")
}
