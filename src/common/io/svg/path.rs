use geo::{LineString, MultiLineString, MultiPolygon};

/// Projection function: lon/lat line -> SVG coords (x,y). Points that cannot be projected are dropped.
pub(crate) type LineProjection<'a> = dyn Fn(&LineString<f64>) -> Vec<(f64, f64)> + 'a;

/// Append projected points as an SVG subpath: "M x,y L x,y ..." (closed with "Z" for rings).
pub(crate) fn points_to_path(points: &[(f64, f64)], closed: bool, out: &mut String) {
    let min_len = if closed { 3 } else { 2 };
    if points.len() < min_len { return }

    out.push_str(&format!("M{:.3},{:.3}", points[0].0, points[0].1));
    for &(x, y) in &points[1..] {
        out.push_str(&format!("L{x:.3},{y:.3}"));
    }
    if closed { out.push('Z') }
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &LineProjection<'_>) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        points_to_path(&project(polygon.exterior()), true, &mut out);
        for interior in polygon.interiors() {
            points_to_path(&project(interior), true, &mut out);
        }
    }

    out
}

/// Build an SVG path string for a set of open lines (boundary meshes).
pub(crate) fn multilinestring_to_path(lines: &MultiLineString<f64>, project: &LineProjection<'_>) -> String {
    let mut out = String::new();
    for line in &lines.0 {
        points_to_path(&project(line), false, &mut out);
    }
    out
}
