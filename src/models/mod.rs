mod item;
mod item_list;

pub use item::{Item, ItemId, ItemState};
pub use item_list::ItemList;
