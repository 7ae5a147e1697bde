//! # Recuento
//!
//! Histogramming, binning, and plot-definition toolkit for data analysis.
//!
//! Recuento centers on small definition structs: binnings, histogram and
//! graph specs, style bundles, and pad/canvas layouts. Definitions are
//! cheap to clone, stamp out native histogram objects, and render
//! through a built-in raster and SVG substrate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use recuento::prelude::*;
//!
//! // Define binning and histogram
//! let spec = HistSpec::new("h_energy")
//!     .with_axis_titles(&["E [GeV]", "counts"])
//!     .with_bins(Axis::X, Binning::uniform(50, 0.0, 100.0)?);
//!
//! let mut hist = spec.build_1d()?;
//! for value in data {
//!     hist.fill(value);
//! }
//!
//! // Render to SVG
//! let mut canvas = Canvas::single("c_energy", 800, 600)?;
//! canvas.pad_mut(0).unwrap().draw_hist(hist, PlotStyle::new(), HistDrawMode::Bars);
//! canvas.save_svg("energy.svg")?;
//! ```
//!
//! ## Modules
//!
//! - Binning math and named bin registries ([`binning`], [`registry`])
//! - Histogram and graph definitions ([`hist`], [`graph`], [`book`])
//! - Styles and plot composition ([`style`], [`plot`])
//! - Regression-model bookkeeping ([`model`])
//! - PNG/SVG output ([`output`])

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Bin-edge generation and binning definitions.
pub mod binning;

/// Centralized database of named binnings.
pub mod registry;

/// Histogram definitions and native histogram objects.
pub mod hist;

/// Graph points and graph definitions.
pub mod graph;

/// Histogram book: managed grids of repeated histograms.
pub mod book;

// ============================================================================
// Style & Composition Modules
// ============================================================================

/// Style definitions for plotted objects.
pub mod style;

/// Plot composition: legends, text boxes, pads, and canvases.
pub mod plot;

/// Display colors and series palettes.
pub mod color;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Raster surface for canvas rendering.
pub mod surface;

/// Primitive raster drawing.
pub mod render;

/// Data-to-pixel axis mapping.
pub mod scale;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Model Modules
// ============================================================================

/// Regression-model bookkeeping.
pub mod model;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for recuento operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use recuento::prelude::*;
/// ```
pub mod prelude {
    pub use crate::binning::{bin_edges, log_bin_edges, Axis, Binning};
    pub use crate::book::{BinIndex, CellIndex, HistBook};
    pub use crate::color::{Palette, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::graph::{GraphPoint, GraphSpec};
    pub use crate::hist::{Hist1D, Hist2D, Hist3D, HistSpec};
    pub use crate::model::{
        ModelParameters, Reader, RowBuffer, Trainer, VariableRole, VariableSet,
    };
    pub use crate::plot::{
        Canvas, GraphDrawMode, HistDrawMode, Legend, Margins, Pad, PadOptions, TextBox, Vertices,
    };
    pub use crate::registry::BinRegistry;
    pub use crate::style::{
        FillStyle, LabelStyle, LineStyle, MarkerStyle, PlotStyle, TextStyle, TitleStyle,
    };
    pub use crate::surface::Surface;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #[test]
    fn test_prelude_compiles() {
        use crate::prelude::*;
        let _ = Binning::uniform(1, 0.0, 1.0);
    }
}
