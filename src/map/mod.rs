//! Choropleth rendering: projection, district categories and SVG/PNG output.

mod category;
mod proj;
mod render;

pub use category::DisplayCategory;
pub use proj::AlbersUsa;
pub use render::{render, render_svg, ImageFormat, RenderOptions};
