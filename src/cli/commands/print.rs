use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::print::PrintLogic;
use crate::db::pool::DbPool;
use crate::db::queries::distinct_clients;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};
use crate::utils::date::{format_br, parse_date};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Print {
        client,
        date,
        file,
        format,
        clients,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *clients {
            return list_clients(&pool, cfg);
        }

        let (Some(client), Some(file)) = (client, file) else {
            return Ok(());
        };

        let day = match date {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };

        let path = Path::new(file);
        let appt = PrintLogic::print(&pool, cfg, client, day, *format, path)?;

        success(format!(
            "Evaluation sheet of {} ({}) written to {}",
            appt.client_name,
            appt.date_br(),
            path.display()
        ));
    }
    Ok(())
}

fn list_clients(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    let clients = distinct_clients(&pool.conn)?;

    header("Clients");
    if clients.is_empty() {
        info("No clients yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Cliente", 40),
        Column::new("Registros", 9),
        Column::new("Última data", 11),
    ]);
    for (name, count, last) in clients {
        let last = parse_date(&last).map(|d| format_br(&d)).unwrap_or(last);
        table.add_row(vec![name, count.to_string(), last]);
    }
    print!("{}", table.render(cfg.separator()));
    Ok(())
}
