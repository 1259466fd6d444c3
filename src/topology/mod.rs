//! TopoJSON reading: shared arcs, per-feature geometry, and boundary meshes.

mod feature;
mod mesh;
mod topology;

pub use feature::Feature;
pub use topology::{FeatureId, Geometry, Shape, Topology};
