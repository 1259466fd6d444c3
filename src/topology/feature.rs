use geo::{Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::{Result, topology::{FeatureId, Geometry, Shape, Topology}};

/// A geometry object resolved to coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: Option<FeatureId>,
    pub geometry: Option<geo::Geometry<f64>>,
}

impl Topology {
    /// Convert a named object into features: one per member for collections, otherwise one.
    pub fn features(&self, object: &str) -> Result<Vec<Feature>> {
        match self.object(object)? {
            Geometry { shape: Shape::GeometryCollection(children), .. } => {
                children.iter().map(|child| self.feature(child)).collect()
            }
            geometry => Ok(vec![self.feature(geometry)?]),
        }
    }

    /// Resolve one geometry's arcs into a feature.
    pub fn feature(&self, geometry: &Geometry) -> Result<Feature> {
        Ok(Feature { id: geometry.id.clone(), geometry: self.resolve(&geometry.shape)? })
    }

    /// Union (by concatenation) of every polygon under a named object, e.g. the national land outline.
    pub fn merge_polygons(&self, object: &str) -> Result<MultiPolygon<f64>> {
        let mut polygons = Vec::new();
        self.collect_polygons(self.object(object)?, &mut polygons)?;
        Ok(MultiPolygon(polygons))
    }

    fn collect_polygons(&self, geometry: &Geometry, out: &mut Vec<Polygon<f64>>) -> Result<()> {
        match &geometry.shape {
            Shape::GeometryCollection(children) => {
                for child in children { self.collect_polygons(child, out)? }
            }
            Shape::Polygon(rings) => out.push(self.polygon(rings)?),
            Shape::MultiPolygon(polygons) => {
                for rings in polygons { out.push(self.polygon(rings)?) }
            }
            _ => {}
        }
        Ok(())
    }

    fn resolve(&self, shape: &Shape) -> Result<Option<geo::Geometry<f64>>> {
        let geometry = match shape {
            Shape::Null => return Ok(None),
            Shape::GeometryCollection(children) => {
                let members = children.iter()
                    .filter_map(|child| self.resolve(&child.shape).transpose())
                    .collect::<Result<Vec<_>>>()?;
                geo::Geometry::GeometryCollection(geo::GeometryCollection(members))
            }
            Shape::Point(position) => Point(self.point(*position)).into(),
            Shape::MultiPoint(positions) => {
                MultiPoint(positions.iter().map(|&p| Point(self.point(p))).collect()).into()
            }
            Shape::LineString(arcs) => self.line(arcs)?.into(),
            Shape::MultiLineString(lines) => {
                MultiLineString(lines.iter().map(|arcs| self.line(arcs)).collect::<Result<_>>()?).into()
            }
            Shape::Polygon(rings) => self.polygon(rings)?.into(),
            Shape::MultiPolygon(polygons) => {
                MultiPolygon(polygons.iter().map(|rings| self.polygon(rings)).collect::<Result<_>>()?).into()
            }
        };
        Ok(Some(geometry))
    }

    fn line(&self, arcs: &[i64]) -> Result<LineString<f64>> {
        Ok(LineString(self.stitch(arcs)?))
    }

    /// First ring is the exterior, the rest are holes. Rings are closed by `Polygon::new`.
    fn polygon(&self, rings: &[Vec<i64>]) -> Result<Polygon<f64>> {
        let mut rings = rings.iter().map(|arcs| self.stitch(arcs).map(LineString::<f64>::from));
        let exterior = rings.next().transpose()?.unwrap_or_else(|| LineString::new(Vec::<Coord<f64>>::new()));
        let interiors = rings.collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, interiors))
    }
}
