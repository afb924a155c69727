//! Presentation surfaces the controllers talk to: modal dialogs and view
//! navigation.

pub mod modal;
pub mod navigation;
