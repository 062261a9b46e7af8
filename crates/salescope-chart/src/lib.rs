//! Raster chart rendering for the sales-operations backend.
//!
//! Draws bar and pie charts into an in-memory RGBA buffer, encodes the
//! result as PNG, and returns it wrapped as an image data-URI. No font or
//! plotting library is involved; text is rasterized from a built-in 5x7
//! glyph set the same way shapes are.

pub mod canvas;
pub mod dashboard;
pub mod error;
mod glyphs;
pub mod renderer;

pub use dashboard::render_dashboard;
pub use error::ChartError;
pub use renderer::{ChartKind, ChartRenderer, DATA_URI_PREFIX, PALETTE};
