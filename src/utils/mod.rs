pub mod date_window;

pub use date_window::{month_window, parse_date_window};
