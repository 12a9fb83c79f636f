pub mod buttons;
pub mod panel;
