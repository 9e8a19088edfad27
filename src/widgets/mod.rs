pub mod resize_dialog;

pub use resize_dialog::{DialogOutcome, ResizeDialog};
