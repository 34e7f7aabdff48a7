//! Module implementing the text overlay.

mod config;
mod error;
mod fit;
mod layout;
mod output;
mod renderer;
mod task;


pub use self::config::Config as RendererConfig;
pub use self::error::CaptionError;
pub use self::fit::{fit_text, wrap_width};
pub use self::layout::{place_lines, PlacedLine};
pub use self::output::CaptionOutput;
pub use self::renderer::TextOverlayRenderer;
