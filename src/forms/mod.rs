//! Form answers and the text they are flattened into before storage.

pub mod checkbox;
pub mod intake;
pub mod options;

pub use checkbox::{NOTHING_SELECTED, parse_selection, serialize_checkboxes, serialize_labels};
pub use intake::IntakeForm;
