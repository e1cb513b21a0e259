//! Line rendering is split by concern: template parsing, line assembly, console colors.

mod color;
mod line;
mod template;

pub use color::{Color, colorize_level, level_color};
pub use line::LineFormatter;
pub use template::{FormatTemplate, Placeholder, Segment, TemplateKind};
