use std::{collections::BTreeMap, fmt, fs::File, io::BufReader, path::Path};

use geo::Coord;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Feature identifier as stored in the topology; numeric in the census-derived files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(i64),
    Text(String),
}

impl FeatureId {
    /// Non-negative integer value of the id, parsing text ids like "3701".
    pub fn as_number(&self) -> Option<u64> {
        match self {
            FeatureId::Number(n) => u64::try_from(*n).ok(),
            FeatureId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{n}"),
            FeatureId::Text(s) => f.write_str(s),
        }
    }
}

/// Arc-referencing geometry. Arc index `i < 0` means arc `!i` traversed in reverse.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Null,
    GeometryCollection(Vec<Geometry>),
    Point([f64; 2]),
    MultiPoint(Vec<[f64; 2]>),
    LineString(Vec<i64>),
    MultiLineString(Vec<Vec<i64>>),
    Polygon(Vec<Vec<i64>>),
    MultiPolygon(Vec<Vec<Vec<i64>>>),
}

/// One geometry object of a topology.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct Geometry {
    pub id: Option<FeatureId>,
    pub properties: Option<Map<String, Value>>,
    pub shape: Shape,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    ty: Option<String>,
    #[serde(default)]
    id: Option<FeatureId>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    arcs: Option<Value>,
    #[serde(default)]
    coordinates: Option<Value>,
    #[serde(default)]
    geometries: Option<Vec<Geometry>>,
}

impl TryFrom<RawGeometry> for Geometry {
    type Error = String;

    fn try_from(raw: RawGeometry) -> Result<Self, String> {
        fn field<T: serde::de::DeserializeOwned>(value: Option<Value>, ty: &str, name: &str) -> Result<T, String> {
            let value = value.ok_or_else(|| format!("{ty} is missing \"{name}\""))?;
            serde_json::from_value(value).map_err(|e| format!("{ty} has invalid \"{name}\": {e}"))
        }

        let shape = match raw.ty.as_deref() {
            None => Shape::Null,
            Some("GeometryCollection") => Shape::GeometryCollection(raw.geometries.unwrap_or_default()),
            Some(ty @ "Point") => Shape::Point(field(raw.coordinates, ty, "coordinates")?),
            Some(ty @ "MultiPoint") => Shape::MultiPoint(field(raw.coordinates, ty, "coordinates")?),
            Some(ty @ "LineString") => Shape::LineString(field(raw.arcs, ty, "arcs")?),
            Some(ty @ "MultiLineString") => Shape::MultiLineString(field(raw.arcs, ty, "arcs")?),
            Some(ty @ "Polygon") => Shape::Polygon(field(raw.arcs, ty, "arcs")?),
            Some(ty @ "MultiPolygon") => Shape::MultiPolygon(field(raw.arcs, ty, "arcs")?),
            Some(other) => return Err(format!("unknown geometry type {other:?}")),
        };

        Ok(Self { id: raw.id, properties: raw.properties, shape })
    }
}

impl Geometry {
    /// Visit every arc index this geometry references, in order.
    pub(crate) fn for_each_arc(&self, f: &mut impl FnMut(i64)) {
        match &self.shape {
            Shape::Null | Shape::Point(_) | Shape::MultiPoint(_) => {}
            Shape::GeometryCollection(children) => children.iter().for_each(|g| g.for_each_arc(f)),
            Shape::LineString(arcs) => arcs.iter().copied().for_each(&mut *f),
            Shape::MultiLineString(lines) | Shape::Polygon(lines) => {
                lines.iter().flatten().copied().for_each(&mut *f)
            }
            Shape::MultiPolygon(polygons) => {
                polygons.iter().flatten().flatten().copied().for_each(&mut *f)
            }
        }
    }
}

/// Quantization transform: position = quantized * scale + translate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

impl Transform {
    #[inline]
    fn apply(&self, x: f64, y: f64) -> Coord<f64> {
        Coord { x: x * self.scale[0] + self.translate[0], y: y * self.scale[1] + self.translate[1] }
    }
}

#[derive(Deserialize)]
struct RawTopology {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    transform: Option<Transform>,
    #[serde(default)]
    arcs: Vec<Vec<Vec<f64>>>,
    objects: BTreeMap<String, Geometry>,
}

/// A decoded TopoJSON topology: absolute arc coordinates plus named geometry objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawTopology")]
pub struct Topology {
    transform: Option<Transform>,
    arcs: Vec<Vec<Coord<f64>>>,
    objects: BTreeMap<String, Geometry>,
}

impl TryFrom<RawTopology> for Topology {
    type Error = String;

    fn try_from(raw: RawTopology) -> Result<Self, String> {
        if raw.ty != "Topology" {
            return Err(format!("expected type \"Topology\", found {:?}", raw.ty));
        }

        let arcs = raw.arcs.iter().enumerate()
            .map(|(i, arc)| decode_arc(arc, raw.transform.as_ref()).map_err(|e| format!("arc {i}: {e}")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { transform: raw.transform, arcs, objects: raw.objects })
    }
}

/// Delta-decode (if quantized) and transform one arc into absolute coordinates.
fn decode_arc(arc: &[Vec<f64>], transform: Option<&Transform>) -> Result<Vec<Coord<f64>>, String> {
    let (mut x, mut y) = (0.0, 0.0);
    arc.iter()
        .map(|position| {
            let (&px, &py) = match position.as_slice() {
                [px, py, ..] => (px, py),
                _ => return Err(format!("position {position:?} has fewer than two values")),
            };
            Ok(match transform {
                Some(t) => {
                    x += px;
                    y += py;
                    t.apply(x, y)
                }
                None => Coord { x: px, y: py },
            })
        })
        .collect()
}

impl Topology {
    /// Read a topology file. Any failure (missing file, bad JSON, bad arcs) is an input error.
    pub fn read(path: &Path) -> Result<Self> {
        let input_err = |reason: String| Error::Input { path: path.to_path_buf(), reason };

        let file = File::open(path).map_err(|e| input_err(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| input_err(e.to_string()))
    }

    /// Parse a topology from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::Topology(e.to_string()))
    }

    /// Names of the geometry objects, in sorted order.
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Look up a named geometry object.
    pub fn object(&self, name: &str) -> Result<&Geometry> {
        self.objects.get(name)
            .ok_or_else(|| Error::Topology(format!("no object named {name:?}")))
    }

    #[inline] pub fn arc_count(&self) -> usize { self.arcs.len() }

    /// Decoded coordinates of arc `index` (non-negative).
    pub(crate) fn arc(&self, index: usize) -> Result<&[Coord<f64>]> {
        self.arcs.get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::Topology(format!("arc index {index} out of range ({} arcs)", self.arcs.len())))
    }

    /// Concatenate arcs into one line, dropping the duplicated joint coordinate.
    pub(crate) fn stitch(&self, indices: &[i64]) -> Result<Vec<Coord<f64>>> {
        let mut points: Vec<Coord<f64>> = Vec::new();
        for &index in indices {
            if !points.is_empty() { points.pop(); }
            if index < 0 {
                points.extend(self.arc(!index as usize)?.iter().rev().copied());
            } else {
                points.extend_from_slice(self.arc(index as usize)?);
            }
        }
        Ok(points)
    }

    /// Apply the quantization transform (if any) to a point position.
    pub(crate) fn point(&self, position: [f64; 2]) -> Coord<f64> {
        match &self.transform {
            Some(t) => t.apply(position[0], position[1]),
            None => Coord { x: position[0], y: position[1] },
        }
    }
}
