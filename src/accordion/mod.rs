mod list;
mod view;

pub use list::ExpandableList;
pub use view::ListView;
