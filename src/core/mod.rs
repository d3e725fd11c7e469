pub mod backup;
pub mod cashflow;
pub mod expense;
pub mod import;
pub mod intake;
pub mod log;
pub mod photo;
pub mod print;
pub mod schedule;
