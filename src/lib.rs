#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod board;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod panels;
pub mod resize;
pub mod tools;
pub mod widgets;

pub use app::SketchApp;
pub use board::SketchBoard;
pub use config::SketchConfig;
pub use error::{ColorParseError, ConfigError, GridSizeError};
pub use grid::{Cell, Grid};
pub use input::HoverTracker;
pub use resize::{ResizeRequest, ResizeValidation, parse_grid_size};
pub use tools::{Tool, ToolButton, ToolSelection};
