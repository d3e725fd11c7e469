pub mod appointment;
pub mod client;
pub mod expense;
pub mod photo;
pub mod status;

pub use appointment::Appointment;
pub use expense::{Expense, ExpenseCategory};
pub use photo::Photo;
pub use status::Status;
