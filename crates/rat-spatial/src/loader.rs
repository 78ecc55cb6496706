//! CSV wall loader.
//!
//! # CSV format
//!
//! One row per wall, in registration order.
//!
//! ```csv
//! name,bias_x,bias_y,slope_x,slope_y,t_min,t_max,border
//! border_wall1,0,0,0,2.2,0,1,true
//! border_wall2,0,2.2,2.2,0,0,1,true
//! border_wall3,2.2,0,0,2.2,0,1,true
//! border_wall4,0,0,2.2,0,0,1,true
//! pillar,1.1,0,0,0.5,,,false
//! ```
//!
//! Empty `t_min` / `t_max` default to `[0, 1]`.  An empty `border` column
//! falls back to the naming convention: walls whose name contains
//! `border_wall` belong to the outer boundary.
//!
//! Loaded arenas always use the polygon membership test, even when the
//! border happens to be an axis-aligned box.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rat_core::Point;

use crate::geometry::ParamRange;
use crate::{Arena, ArenaBuilder, SpatialError, SpatialResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WallRecord {
    name:    String,
    bias_x:  f64,
    bias_y:  f64,
    slope_x: f64,
    slope_y: f64,
    t_min:   Option<f64>,
    t_max:   Option<f64>,
    border:  Option<bool>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`Arena`] from a CSV wall file.
pub fn load_walls_csv(path: &Path, soft_boundary: f64) -> SpatialResult<Arena> {
    let file = std::fs::File::open(path)?;
    load_walls_reader(file, soft_boundary)
}

/// Like [`load_walls_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for wall sets embedded
/// in a binary.
pub fn load_walls_reader<R: Read>(reader: R, soft_boundary: f64) -> SpatialResult<Arena> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = ArenaBuilder::new(soft_boundary);

    for (line, result) in csv_reader.deserialize::<WallRecord>().enumerate() {
        let row = result.map_err(|e| SpatialError::Parse(format!("row {}: {e}", line + 1)))?;

        let t_range = ParamRange::new(
            row.t_min.unwrap_or(ParamRange::UNIT.lo),
            row.t_max.unwrap_or(ParamRange::UNIT.hi),
        );
        let border = row.border.unwrap_or_else(|| row.name.contains("border_wall"));
        let bias = Point::new(row.bias_x, row.bias_y);
        let slope = Point::new(row.slope_x, row.slope_y);

        builder = if border {
            builder.add_border_wall(row.name, bias, slope, t_range)
        } else {
            builder.add_wall(row.name, bias, slope, t_range)
        };
    }

    if builder.wall_count() == 0 {
        return Err(SpatialError::Parse("wall file contains no rows".into()));
    }
    builder.build()
}
