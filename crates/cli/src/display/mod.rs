pub mod formatter;

pub use formatter::{describe_selection, format_request, redirect_lines};
