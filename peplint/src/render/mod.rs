//! Output formats, dispatched through the [`Renderer`] trait.

pub mod json;
pub mod text;

use crate::report::Report;
use anyhow::{anyhow, Result};

/// Trait for rendering one document's report in a specific output format.
pub trait Renderer {
    fn render(&self, report: &Report) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}
