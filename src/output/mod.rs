//! Output encoders (PNG, SVG).

mod png_writer;
mod svg;

pub use png_writer::PngWriter;
pub use svg::{SvgDocument, SvgShape, TextAnchor};
