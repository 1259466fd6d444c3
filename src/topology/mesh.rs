use geo::{LineString, MultiLineString};

use crate::{Error, Result, topology::{Geometry, Shape, Topology}};

impl Topology {
    /// Extract the arcs of a named object as boundary lines.
    ///
    /// For every arc, `filter(a, b)` is called with the first and last geometries that reference
    /// it. Arcs on the exterior belong to a single geometry, so `a` and `b` are the same object;
    /// use `!std::ptr::eq(a, b)` to keep only interior boundaries. Arcs are emitted in index order.
    pub fn mesh(&self, object: &str, filter: impl Fn(&Geometry, &Geometry) -> bool) -> Result<MultiLineString<f64>> {
        let mut leaves: Vec<&Geometry> = Vec::new();
        collect_leaves(self.object(object)?, &mut leaves);

        // arc index -> indices into `leaves` referencing it, without consecutive duplicates
        let mut owners: Vec<Vec<usize>> = vec![Vec::new(); self.arc_count()];
        for (leaf, geometry) in leaves.iter().enumerate() {
            let mut out_of_range = None;
            geometry.for_each_arc(&mut |index| {
                let arc = if index < 0 { !index as usize } else { index as usize };
                match owners.get_mut(arc) {
                    Some(list) if list.last() != Some(&leaf) => list.push(leaf),
                    Some(_) => {}
                    None => out_of_range = Some(arc),
                }
            });
            if let Some(arc) = out_of_range {
                return Err(Error::Topology(format!("arc index {arc} out of range ({} arcs)", self.arc_count())));
            }
        }

        let mut lines = Vec::new();
        for (arc, list) in owners.iter().enumerate() {
            let (Some(&first), Some(&last)) = (list.first(), list.last()) else { continue };
            if filter(leaves[first], leaves[last]) {
                lines.push(LineString::from(self.arc(arc)?.to_vec()));
            }
        }

        Ok(MultiLineString(lines))
    }
}

/// Flatten nested collections into their member geometries.
fn collect_leaves<'a>(geometry: &'a Geometry, out: &mut Vec<&'a Geometry>) {
    match &geometry.shape {
        Shape::GeometryCollection(children) => children.iter().for_each(|child| collect_leaves(child, out)),
        _ => out.push(geometry),
    }
}
