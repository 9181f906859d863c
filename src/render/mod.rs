mod templates;
mod text;

pub use text::{OutputFormat, TextRenderer};
