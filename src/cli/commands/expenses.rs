use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::expenses::load_expenses;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::ui::messages::{header, info};
use crate::utils::date::{current_month, format_br, month_bounds};
use crate::utils::money::format_cents;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Expenses { period } = cmd {
        let bounds = match period {
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
            None => {
                let (y, m) = current_month();
                Some(month_bounds(y, m).ok_or_else(|| AppError::InvalidDate(format!("{y}-{m}")))?)
            }
        };

        let pool = DbPool::new(&cfg.database)?;
        let loaded = load_expenses(&pool.conn, bounds)?;
        loaded.report();

        match bounds {
            Some((from, to)) => header(format!("Expenses {} - {}", format_br(&from), format_br(&to))),
            None => header("Expenses"),
        }

        if loaded.records.is_empty() {
            info("No expenses found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Data", 10),
            Column::new("Descrição", 40),
            Column::new("Categoria", 10),
            Column::new("Valor", 14),
        ]);

        for e in &loaded.records {
            table.add_row(vec![
                e.date_br(),
                e.description.clone(),
                e.category.clone(),
                e.amount_str(),
            ]);
        }
        print!("{}", table.render(cfg.separator()));

        let total: i64 = loaded.records.iter().map(|e| e.amount_cents).sum();
        println!("Total: R$ {}", format_cents(total));
    }
    Ok(())
}
