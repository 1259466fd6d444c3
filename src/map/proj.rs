use geo::{Coord, CoordsIter, LineString};
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::{Error, Result};

/// Spherical Albers equal-area conic placed on the canvas:
/// screen = (x * scale + dx, dy - y * scale), accepted only inside `extent`.
struct ConicEqualArea {
    from: Proj4,
    to: Proj4,
    scale: f64,
    dx: f64,
    dy: f64,
    extent: [[f64; 2]; 2],
}

impl ConicEqualArea {
    /// `meridian` is the central longitude; `center` (geographic) lands on `translate`.
    fn new(meridian: f64, parallels: [f64; 2], center: [f64; 2], scale: f64,
        translate: [f64; 2], extent: [[f64; 2]; 2]) -> Result<Self>
    {
        let proj4 = |s: &str| Proj4::from_proj_string(s)
            .map_err(|e| Error::Render(format!("failed to build PROJ.4 {s:?}: {e:?}")));

        let from = proj4("+proj=longlat +R=1 +no_defs")?;
        let to = proj4(&format!(
            "+proj=aea +lat_1={} +lat_2={} +lat_0=0 +lon_0={meridian} +x_0=0 +y_0=0 +R=1 +units=m +no_defs",
            parallels[0], parallels[1],
        ))?;

        let mut conic = Self { from, to, scale, dx: 0.0, dy: 0.0, extent };
        let (cx, cy) = conic.raw(Coord { x: center[0], y: center[1] })
            .ok_or_else(|| Error::Render(format!("cannot project center {center:?}")))?;
        conic.dx = translate[0] - cx * scale;
        conic.dy = translate[1] + cy * scale;
        Ok(conic)
    }

    /// lon/lat degrees -> unit-sphere plane coordinates.
    fn raw(&self, coord: Coord<f64>) -> Option<(f64, f64)> {
        let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
        transform(&self.from, &self.to, &mut point).ok()?;
        (point.0.is_finite() && point.1.is_finite()).then_some((point.0, point.1))
    }

    fn screen(&self, coord: Coord<f64>) -> Option<(f64, f64)> {
        self.raw(coord).map(|(x, y)| (x * self.scale + self.dx, self.dy - y * self.scale))
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        let [[x0, y0], [x1, y1]] = self.extent;
        x0 <= x && x <= x1 && y0 <= y && y <= y1
    }

    /// Screen position, only if it falls inside this projection's extent.
    fn clipped(&self, coord: Coord<f64>) -> Option<(f64, f64)> {
        self.screen(coord).filter(|&p| self.contains(p))
    }
}

/// Composite equal-area projection for the 50 states: the lower 48, with Alaska (at 0.35 scale)
/// and Hawaii inset in the lower left. Points outside all three insets are not drawn.
pub struct AlbersUsa {
    parts: [ConicEqualArea; 3],
}

impl AlbersUsa {
    pub fn new(scale: f64, translate: [f64; 2]) -> Result<Self> {
        const EPS: f64 = 1e-6;
        let [x, y] = translate;
        let k = scale;

        let lower48 = ConicEqualArea::new(-96.0, [29.5, 45.5], [-96.6, 38.7], k, [x, y],
            [[x - 0.455 * k, y - 0.238 * k], [x + 0.455 * k, y + 0.238 * k]])?;
        let alaska = ConicEqualArea::new(-154.0, [55.0, 65.0], [-156.0, 58.5], k * 0.35,
            [x - 0.307 * k, y + 0.201 * k],
            [[x - 0.425 * k + EPS, y + 0.120 * k + EPS], [x - 0.214 * k - EPS, y + 0.234 * k - EPS]])?;
        let hawaii = ConicEqualArea::new(-157.0, [8.0, 18.0], [-160.0, 19.9], k,
            [x - 0.205 * k, y + 0.212 * k],
            [[x - 0.214 * k + EPS, y + 0.166 * k + EPS], [x - 0.115 * k - EPS, y + 0.234 * k - EPS]])?;

        Ok(Self { parts: [lower48, alaska, hawaii] })
    }

    /// Project a lon/lat point with the first inset that accepts it.
    pub fn project(&self, coord: Coord<f64>) -> Option<(f64, f64)> {
        self.parts.iter().find_map(|part| part.clipped(coord))
    }

    /// Project a whole ring or line with the inset chosen by its first drawable coordinate,
    /// so a shape is never split across insets.
    pub fn project_line(&self, line: &LineString<f64>) -> Vec<(f64, f64)> {
        let Some(part) = line.coords_iter()
            .find_map(|coord| self.parts.iter().find(|part| part.clipped(coord).is_some()))
        else {
            return Vec::new();
        };

        line.coords_iter().filter_map(|coord| part.screen(coord)).collect()
    }
}
