//! Display formatting helpers shared by pages.

mod case;
mod date;

pub use case::{TextCase, UnknownTextCase};
pub use date::{current_date, format_timestamp, DateFormat};
