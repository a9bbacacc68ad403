//! JSON renderer for tooling integration.
//!
//! Emits one JSON object per document on its own line.

use crate::render::Renderer;
use crate::report::Report;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        match serde_json::to_string(report) {
            Ok(json) => json + "\n",
            Err(e) => {
                tracing::error!(path = %report.path, error = %e, "failed to serialize report");
                String::new()
            }
        }
    }
}
