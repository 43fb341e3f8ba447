pub mod annotated;
pub mod style;
pub mod table;

use anyhow::Result;

use crate::model::InterfaceSnapshot;

pub use annotated::render_annotated;
pub use style::{ColorMode, StyleTable};
pub use table::{TableSpec, render_table};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Annotated,
    Table,
    Json,
}

/// Rendering strategy chosen once per run.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    pub mode: RenderMode,
    pub table: TableSpec,
    pub styles: StyleTable,
}

impl Renderer {
    /// Renders a filtered, sorted snapshot. `raw` is the untouched status output, which the
    /// annotated view re-emits line by line.
    pub fn render(&self, raw: &str, snapshot: &InterfaceSnapshot) -> Result<String> {
        match self.mode {
            RenderMode::Annotated => render_annotated(raw, snapshot, &self.styles),
            RenderMode::Table => render_table(snapshot, &self.table, &self.styles),
            RenderMode::Json => render_json(snapshot),
        }
    }
}

pub fn render_json(snapshot: &InterfaceSnapshot) -> Result<String> {
    let mut content = serde_json::to_string_pretty(snapshot)?;
    content.push('\n');
    Ok(content)
}
