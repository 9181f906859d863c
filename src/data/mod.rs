mod loader;
mod sample;

pub use loader::{load_items, load_list};
pub use sample::sample_items;
