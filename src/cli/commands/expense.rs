use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::expense::ExpenseLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{self, parse_date};
use crate::utils::money::{format_brl, parse_amount};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Expense {
        amount,
        desc,
        category,
        date: day,
    } = cmd
    {
        let value = parse_amount(amount).ok_or_else(|| AppError::InvalidAmount(amount.clone()))?;

        let day = match day {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let expense = ExpenseLogic::record(
            &mut pool,
            day,
            desc.as_deref().unwrap_or(""),
            *category,
            value,
        )?;

        success(format!(
            "Recorded {} ({}) on {}",
            format_brl(expense.amount()),
            expense.category,
            expense.date_br()
        ));
    }
    Ok(())
}
