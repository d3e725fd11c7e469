use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_appointments, load_for_client};
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::Appointment;
use crate::models::client::{client_key, validate_name};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_placeholder, color_for_status};
use crate::utils::date;
use crate::utils::money::format_brl;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Agenda {
        period,
        today,
        client,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let now = date::today();

        let (title, loaded) = if let Some(name) = client {
            let name = validate_name(name)?;
            (
                format!("Agenda of {name}"),
                load_for_client(&pool.conn, &client_key(&name))?,
            )
        } else if *today {
            (
                format!("Agenda for {}", date::format_br(&now)),
                load_appointments(&pool.conn, Some((now, now)))?,
            )
        } else if let Some(p) = period {
            let bounds = parse_range(p)?;
            (
                format!(
                    "Agenda {} - {}",
                    date::format_br(&bounds.0),
                    date::format_br(&bounds.1)
                ),
                load_appointments(&pool.conn, Some(bounds))?,
            )
        } else {
            let mut all = load_appointments(&pool.conn, None)?;
            all.records.retain(|a| a.date >= now);
            ("Upcoming appointments".to_string(), all)
        };

        loaded.report();
        header(&title);

        if loaded.records.is_empty() {
            info("No appointments found.");
            return Ok(());
        }

        print_table(&loaded.records, cfg.separator());
    }
    Ok(())
}

fn print_table(rows: &[Appointment], separator: char) {
    let mut table = Table::new(vec![
        Column::new("Data", 10),
        Column::new("Hora", 5),
        Column::new("Duração", 8),
        Column::new("Cliente", 28),
        Column::new("Contato", 16),
        Column::new("Valor", 14),
        Column::new("Status", 10),
    ]);

    for a in rows {
        table.add_row(vec![
            a.date_br(),
            a.time_str(),
            format_minutes(a.duration_min),
            a.client_name.clone(),
            a.contact.clone(),
            a.amount().map(format_brl).unwrap_or_else(|| "-".into()),
            a.status.label().to_string(),
        ]);
    }

    let status_col = table.columns.len() - 1;
    print!(
        "{}",
        table.render_styled(separator, |col, cell| {
            if col == status_col {
                color_for_status(cell)
            } else {
                color_for_placeholder(cell)
            }
        })
    );
    println!("{} appointment(s)", rows.len());
}
