//! Tour rendering.
//!
//! Draws a tour against its instance coordinates. Consumes solver output
//! only; no search logic lives here.

mod svg;

pub use svg::{render_files, render_svg, RenderOptions};
