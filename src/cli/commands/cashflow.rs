use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cashflow::MonthlySummary;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{BOLD, GREEN, RED, RESET, color_for_balance};
use crate::utils::date::{current_month, month_name};
use crate::utils::money::{format_cents, from_cents};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cashflow { month, year } = cmd {
        let (cur_y, cur_m) = current_month();
        let year = year.unwrap_or(cur_y);
        let month = month.unwrap_or(cur_m);

        if !(1..=12).contains(&month) {
            return Err(AppError::Validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }

        let pool = DbPool::new(&cfg.database)?;
        let (summary, warnings) = MonthlySummary::load(&pool.conn, year, month)?;

        for w in &warnings {
            warning(w);
        }

        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(s: &MonthlySummary) {
    header(format!("Cash flow {} {}", month_name(s.month), s.year));

    let profit = s.profit_cents();

    println!(
        "Income   : {}R$ {:>14}{}  ({} appointments)",
        GREEN,
        format_cents(s.income_cents),
        RESET,
        s.appointments
    );
    println!(
        "Expenses : {}R$ {:>14}{}  ({} entries)",
        RED,
        format_cents(s.expense_cents),
        RESET,
        s.expenses
    );
    println!(
        "{}Profit   : {}R$ {:>14}{}",
        BOLD,
        color_for_balance(from_cents(profit)),
        format_cents(profit),
        RESET
    );

    if s.unpriced > 0 {
        println!();
        warning(format!(
            "{} appointment(s) without a readable amount counted as R$ 0,00",
            s.unpriced
        ));
    }
}
