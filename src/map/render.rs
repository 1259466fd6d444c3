use std::path::Path;

use geo::MultiPolygon;
use tracing::{debug, info};

use crate::{
    common::{multilinestring_to_path, multipolygon_to_path, SvgStringWriter},
    map::{category::stylesheet, AlbersUsa, DisplayCategory},
    topology::{FeatureId, Geometry, Topology},
    votes::{DistrictKey, VoteMapping},
    Error, Result,
};

/// Canvas size, projection scale and the topology object names to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    /// National topology object merged into the land outline (clip path).
    pub land_object: String,
    /// National topology object whose shared arcs become state boundaries.
    pub states_object: String,
    /// District topology object, one geometry per district.
    pub districts_object: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 960,
            height: 500,
            scale: 1000.0,
            land_object: "land".into(),
            states_object: "states".into(),
            districts_object: "districts".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(ImageFormat::Svg),
            Some("png") => Ok(ImageFormat::Png),
            _ => Err(Error::Output {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput,
                    "unsupported output format (expected .svg or .png)"),
            }),
        }
    }
}

/// Render the vote map in the requested format.
pub fn render(mapping: &VoteMapping, national: &Topology, districts: &Topology, options: &RenderOptions,
    format: ImageFormat) -> Result<Vec<u8>>
{
    let svg = render_svg(mapping, national, districts, options)?;
    match format {
        ImageFormat::Svg => Ok(svg.into_bytes()),
        ImageFormat::Png => rasterize(&svg),
    }
}

/// Render the vote map as a self-contained SVG document: every district filled by its
/// category, district and state boundaries on top, all clipped to the national land outline.
pub fn render_svg(mapping: &VoteMapping, national: &Topology, districts: &Topology, options: &RenderOptions)
    -> Result<String>
{
    let albers = AlbersUsa::new(options.scale,
        [f64::from(options.width) / 2.0, f64::from(options.height) / 2.0])?;
    let project = |line: &geo::LineString<f64>| albers.project_line(line);

    let land = national.merge_polygons(&options.land_object)?;
    let features = districts.features(&options.districts_object)?;
    let district_lines = districts.mesh(&options.districts_object,
        |a, b| !std::ptr::eq(a, b) && state_of(a) == state_of(b))?;
    let state_lines = national.mesh(&options.states_object, |a, b| !std::ptr::eq(a, b))?;

    info!(districts = features.len(), records = mapping.len(), "rendering map");

    let mut writer = SvgStringWriter::new();
    let mut emit = || -> std::io::Result<()> {
        writer.write_header(options.width, options.height)?;
        writer.write_defs(&stylesheet(), &multipolygon_to_path(&land, &project))?;
        writer.write_land_clip(options.width, options.height)?;
        writer.open_clipped_group()?;

        let mut missing = 0usize;
        for feature in &features {
            let key = feature.id.as_ref().and_then(FeatureId::as_number).map(DistrictKey::from_feature_id);
            let category = DisplayCategory::classify(key, mapping);
            if category == DisplayCategory::NoData { missing += 1 }

            let shape = feature.geometry.as_ref().map_or_else(|| MultiPolygon(Vec::new()), polygons);
            writer.write_path(category.css_class(), &multipolygon_to_path(&shape, &project))?;
        }
        debug!(missing, "districts without a vote record");

        writer.write_path("district-boundaries", &multilinestring_to_path(&district_lines, &project))?;
        writer.write_path("state-boundaries", &multilinestring_to_path(&state_lines, &project))?;
        writer.close_group()?;
        writer.write_footer()
    };
    emit().map_err(|e| Error::Render(e.to_string()))?;

    Ok(writer.into_string())
}

/// Derived state code of a district geometry, from its numeric id.
fn state_of(geometry: &Geometry) -> Option<u32> {
    geometry.id.as_ref().and_then(FeatureId::as_number).map(|id| DistrictKey::from_feature_id(id).state)
}

/// Polygonal parts of a geometry; anything else draws nothing.
fn polygons(geometry: &geo::Geometry<f64>) -> MultiPolygon<f64> {
    match geometry {
        geo::Geometry::Polygon(polygon) => MultiPolygon(vec![polygon.clone()]),
        geo::Geometry::MultiPolygon(multi) => multi.clone(),
        geo::Geometry::GeometryCollection(collection) => {
            MultiPolygon(collection.iter().flat_map(|member| polygons(member).0).collect())
        }
        _ => MultiPolygon(Vec::new()),
    }
}

#[cfg(feature = "png")]
fn rasterize(svg: &str) -> Result<Vec<u8>> {
    use resvg::{tiny_skia, usvg};

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| Error::Render(format!("cannot parse SVG: {e}")))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| Error::Render(format!("cannot allocate a {}x{} pixmap", size.width(), size.height())))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap.encode_png().map_err(|e| Error::Render(format!("cannot encode PNG: {e}")))
}

#[cfg(not(feature = "png"))]
fn rasterize(_svg: &str) -> Result<Vec<u8>> {
    Err(Error::Render("PNG output requires the `png` feature".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::votes::{BallotDecision, Party, VoteRecord};

    /// Two districts of NC side by side, plus a national file with one state and its land.
    const DISTRICTS: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[-80, 35], [-80, 36]],
            [[-80, 36], [-81, 36], [-81, 35], [-80, 35]],
            [[-80, 35], [-79, 35], [-79, 36], [-80, 36]]
        ],
        "objects": {
            "districts": { "type": "GeometryCollection", "geometries": [
                { "type": "Polygon", "id": 3701, "arcs": [[0, 1]] },
                { "type": "Polygon", "id": 3702, "arcs": [[2, -1]] },
                { "type": null, "id": 3703 }
            ]}
        }
    }"#;

    const NATIONAL: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[-82, 34], [-78, 34], [-78, 37], [-82, 37], [-82, 34]]
        ],
        "objects": {
            "land": { "type": "Polygon", "arcs": [[0]] },
            "states": { "type": "GeometryCollection", "geometries": [
                { "type": "Polygon", "id": 37, "arcs": [[0]] }
            ]}
        }
    }"#;

    fn topologies() -> (Topology, Topology) {
        (Topology::from_slice(NATIONAL.as_bytes()).unwrap(), Topology::from_slice(DISTRICTS.as_bytes()).unwrap())
    }

    fn district_classes(svg: &str) -> Vec<&str> {
        svg.lines()
            .filter_map(|line| line.strip_prefix(r#"<path class=""#))
            .filter_map(|rest| rest.split('"').next())
            .filter(|class| class.starts_with("district-") && !class.ends_with("boundaries"))
            .collect()
    }

    #[test]
    fn districts_take_their_category_class() {
        let (national, districts) = topologies();
        let mapping: VoteMapping = [
            VoteRecord { key: DistrictKey::from_feature_id(3701), decision: BallotDecision::Yea, party: Party::Republican },
            VoteRecord { key: DistrictKey::from_feature_id(3702), decision: BallotDecision::Nay, party: Party::Democrat },
        ].into_iter().collect();

        let svg = render_svg(&mapping, &national, &districts, &RenderOptions::default()).unwrap();
        assert_eq!(district_classes(&svg), ["district-rep-yes", "district-dem-no", "district-none"]);
    }

    #[test]
    fn document_structure() {
        let (national, districts) = topologies();
        let svg = render_svg(&VoteMapping::new(), &national, &districts, &RenderOptions::default()).unwrap();

        assert!(svg.contains(r#"<path id="land" d="M"#));
        assert!(svg.contains(r#"<clipPath id="clip-land">"#));
        assert!(svg.contains(r#"<g clip-path="url(#clip-land)">"#));
        assert!(!svg.contains("clippath"));

        // the shared edge is a district boundary; the single state has no interior edges
        assert!(svg.contains(r#"<path class="district-boundaries" d="M"#));
        assert!(svg.contains(r#"<path class="state-boundaries" d=""/>"#));

        let group = svg.find("<g clip-path").unwrap();
        let first_district = svg.find(r#"class="district-none""#).unwrap();
        assert!(group < first_district);
    }

    #[test]
    fn missing_object_is_an_error() {
        let (national, districts) = topologies();
        let options = RenderOptions { districts_object: "cd114".into(), ..RenderOptions::default() };
        assert!(render_svg(&VoteMapping::new(), &national, &districts, &options).is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("out/map.svg")).unwrap(), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("map.PNG")).unwrap(), ImageFormat::Png);
        assert!(ImageFormat::from_path(Path::new("map.gif")).is_err());
        assert!(ImageFormat::from_path(Path::new("map")).is_err());
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_output_has_signature() {
        let (national, districts) = topologies();
        let png = render(&VoteMapping::new(), &national, &districts, &RenderOptions::default(), ImageFormat::Png).unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    }
}
