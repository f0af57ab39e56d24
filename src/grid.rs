use std::fmt;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::Num;

const MARKER: char = 'X';
const BACKGROUND: char = '.';

/// Axis-aligned extent of a set of geographic points, in decimal
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: Num,
    pub max_lat: Num,
    pub min_lon: Num,
    pub max_lon: Num,
}

impl BoundingBox {
    pub fn lat_span(&self) -> Num {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> Num {
        self.max_lon - self.min_lon
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat [{:.4}, {:.4}], lon [{:.4}, {:.4}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}

/// Computes the bounding box of a non-empty point set.
pub fn bounding_box(points: &[GeoPoint]) -> Result<BoundingBox> {
    if points.is_empty() {
        return Err(Error::EmptyPointSet);
    }

    let mut bbox = BoundingBox {
        min_lat: Num::INFINITY,
        max_lat: Num::NEG_INFINITY,
        min_lon: Num::INFINITY,
        max_lon: Num::NEG_INFINITY,
    };

    for point in points {
        bbox.min_lat = bbox.min_lat.min(point.lat);
        bbox.max_lat = bbox.max_lat.max(point.lat);
        bbox.min_lon = bbox.min_lon.min(point.lon);
        bbox.max_lon = bbox.max_lon.max(point.lon);
    }

    Ok(bbox)
}

/// Renders the points onto a `grid_size` × `grid_size` character grid
/// spanning their bounding box.
///
/// Cells holding at least one point are marked `X`, the rest stay `.`.
/// Rows run from the southern edge of the box upward; each output line
/// is exactly `grid_size` characters.
pub fn ascii_map(points: &[GeoPoint], grid_size: usize) -> Result<String> {
    if grid_size == 0 {
        return Err(Error::ZeroGridSize);
    }

    let bbox = bounding_box(points)?;

    let lat_step = bbox.lat_span() / grid_size as Num;
    let lon_step = bbox.lon_span() / grid_size as Num;

    let mut grid = vec![vec![BACKGROUND; grid_size]; grid_size];

    for point in points {
        let row = cell_index(point.lat - bbox.min_lat, lat_step, grid_size);
        let col = cell_index(point.lon - bbox.min_lon, lon_step, grid_size);

        grid[row][col] = MARKER;
    }

    let lines: Vec<String> = grid
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect();

    Ok(lines.join("\n"))
}

// A zero step means every point shares that coordinate; they all land
// in cell 0. Points on the upper edge are clamped into the last cell.
fn cell_index(offset: Num, step: Num, grid_size: usize) -> usize {
    if step == 0.0 {
        return 0;
    }

    ((offset / step) as usize).min(grid_size - 1)
}

/// Renders the map and writes it to stdout, one grid row per line.
pub fn print_ascii_map(points: &[GeoPoint], grid_size: usize) -> Result<()> {
    println!("{}", ascii_map(points, grid_size)?);

    Ok(())
}
