pub mod colors;
pub mod date;
pub mod formatting;
pub mod money;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::yes_no;
pub use money::{format_amount, format_brl, parse_amount};
