use crate::db::expenses::insert_expense;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Expense, ExpenseCategory};
use crate::utils::money::{MAX_AMOUNT, checked_cents, format_amount, format_brl};
use chrono::NaiveDate;

pub struct ExpenseLogic;

impl ExpenseLogic {
    pub fn record(
        pool: &mut DbPool,
        date: NaiveDate,
        description: &str,
        category: ExpenseCategory,
        amount: f64,
    ) -> AppResult<Expense> {
        let cents = checked_cents(amount).ok_or_else(|| {
            AppError::InvalidAmount(format!(
                "expense amount must be between 0 and {}, got {amount}",
                format_amount(MAX_AMOUNT)
            ))
        })?;

        let mut expense = Expense::new(date, description, category.label(), cents);

        let tx = pool.immediate()?;
        expense.id = insert_expense(&tx, &expense)?;
        audit(
            &tx,
            "expense",
            category.label(),
            &format!(
                "{} {} on {}",
                format_brl(amount),
                expense.description,
                expense.date_br()
            ),
        )?;
        tx.commit()?;

        Ok(expense)
    }
}
