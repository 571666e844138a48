//! Presentation-mode selection for the assets/liabilities view.

use serde::Serialize;

/// How the client should lay out the balance rows. Changes the shape of
/// the rendering only; the row content is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Table,
    Accordion,
}

/// Wide viewports get the table, narrow (or unreported) viewports the
/// accordion list.
pub fn select_layout(viewport_px: Option<u32>, breakpoint_px: u32) -> LayoutMode {
    match viewport_px {
        Some(width) if width > breakpoint_px => LayoutMode::Table,
        _ => LayoutMode::Accordion,
    }
}
