pub mod check;
pub mod common;
pub mod show;
pub mod view;
