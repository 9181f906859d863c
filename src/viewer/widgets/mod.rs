mod accordion_view;
mod help_modal;

pub use accordion_view::AccordionView;
pub use help_modal::HelpModal;
