mod draw;
pub mod style;

pub use draw::{draw, highlight_spans, info_line};
