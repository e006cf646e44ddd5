//! Renderer module — a document set into an HTML page plus stylesheet.

pub mod css;
pub mod html;

use crate::error::DocError;
use crate::model::DocumentSet;
use chrono::{DateTime, Local};

/// File name the page's `<link>` points at; the stylesheet is written
/// alongside the page under this name.
pub const STYLESHEET_NAME: &str = "luadoc.css";

/// Settings that shape the rendered page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    /// Shown in the page footer
    pub generated: DateTime<Local>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            generated: Local::now(),
        }
    }
}

/// The two outputs of one render.
#[derive(Debug)]
pub struct Rendered {
    pub html: String,
    pub stylesheet: String,
}

/// Render every record of `set`, in the set's current order.
pub fn render(set: &DocumentSet, options: &RenderOptions) -> Result<Rendered, DocError> {
    Ok(Rendered {
        html: html::render_page(set.records(), options)?,
        stylesheet: css::STYLESHEET.to_string(),
    })
}
