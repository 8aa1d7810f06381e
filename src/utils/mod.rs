pub mod time;

pub use time::current_date_line;
