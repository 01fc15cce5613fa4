pub mod check;
pub mod select;

pub use check::check_command;
pub use select::select_command;
