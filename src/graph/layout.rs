use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::graph::Point;

pub const TUMOR_RING_RADIUS: f64 = 300.0;
pub const SPIRAL_GENES_PER_TURN: usize = 20;
pub const SPIRAL_BASE_OFFSET: f64 = 50.0;
pub const SPIRAL_STEP: f64 = 0.4;
pub const CROSS_GENE_PULL: f64 = 0.6;

/// Place tumor i of N on a ring of radius `TUMOR_RING_RADIUS` around the
/// central gene at the origin, at angle `2*pi*i/N`. A single tumor sits at
/// angle 0, i.e. at (R, 0).
pub fn assign_tumor_positions(tumor_ids: &[String]) -> BTreeMap<String, Point> {
    let n = tumor_ids.len();
    let mut positions = BTreeMap::new();
    for (idx, tumor_id) in tumor_ids.iter().enumerate() {
        let angle = 2.0 * PI * idx as f64 / n as f64;
        positions.insert(
            tumor_id.clone(),
            Point {
                x: TUMOR_RING_RADIUS * angle.cos(),
                y: TUMOR_RING_RADIUS * angle.sin(),
            },
        );
    }
    positions
}

/// Initial position for a tumor-specific gene: a spiral around the tumor,
/// `rank` being the 0-based index after sorting the tumor's genes by PCC
/// descending. The physics pass in the renderer refines this later; here it
/// only guarantees non-overlapping deterministic starting coordinates.
pub fn spiral_position(center: Point, rank: usize) -> Point {
    let angle = 2.0 * PI * rank as f64 / SPIRAL_GENES_PER_TURN as f64;
    let distance = SPIRAL_BASE_OFFSET + SPIRAL_STEP * rank as f64;
    Point {
        x: center.x + distance * angle.cos(),
        y: center.y + distance * angle.sin(),
    }
}

/// Cross-tumor genes start between their primary tumor and the central gene.
pub fn cross_position(primary: Point) -> Point {
    Point {
        x: primary.x * CROSS_GENE_PULL,
        y: primary.y * CROSS_GENE_PULL,
    }
}
