//! Blind spot detection over the sector visibility mask
//!
//! Unseen cells are grouped into 4-connected regions with a breadth-first
//! flood fill. Regions larger than the configured cell count are reported,
//! biggest first.

use crate::domain::types::{Camera, Dimensions, Point};
use crate::services::coverage_field::{cell_center, visibility_mask};
use std::collections::VecDeque;

/// Contiguous unseen region of the floor plan
#[derive(Debug, Clone, PartialEq)]
pub struct BlindSpot {
    /// Mean of the region's cell centres, in floor plan units
    pub position: Point,
    pub cells: usize,
    /// Region area in square metres, treating floor plan units as millimetres
    pub area_m2: f64,
}

/// Unseen regions with strictly more than `min_cells` cells, largest first
///
/// Equal areas keep row-major discovery order.
pub fn find_blind_spots(
    dims: Dimensions,
    cameras: &[Camera],
    grid_size: usize,
    min_cells: usize,
) -> Vec<BlindSpot> {
    let mask = visibility_mask(dims, cameras, grid_size);
    let mut visited = vec![vec![false; grid_size]; grid_size];
    let mut spots = Vec::new();

    for row in 0..grid_size {
        for col in 0..grid_size {
            if mask[row][col] || visited[row][col] {
                continue;
            }
            let region = flood_fill(&mask, &mut visited, row, col);
            if region.len() <= min_cells {
                continue;
            }

            let n = region.len() as f64;
            let (sum_x, sum_y) = region.iter().fold((0.0, 0.0), |(sx, sy), &(r, c)| {
                let center = cell_center(r, c, dims, grid_size);
                (sx + center.x, sy + center.y)
            });
            let total_cells = (grid_size * grid_size) as f64;
            spots.push(BlindSpot {
                position: Point::new(sum_x / n, sum_y / n),
                cells: region.len(),
                area_m2: n / total_cells * (dims.width * dims.height / 1_000_000.0),
            });
        }
    }

    spots.sort_by(|a, b| b.area_m2.total_cmp(&a.area_m2));
    spots
}

fn flood_fill(
    mask: &[Vec<bool>],
    visited: &mut [Vec<bool>],
    start_row: usize,
    start_col: usize,
) -> Vec<(usize, usize)> {
    let size = mask.len();
    let mut queue = VecDeque::from([(start_row, start_col)]);
    let mut cells = Vec::new();
    visited[start_row][start_col] = true;

    while let Some((row, col)) = queue.pop_front() {
        cells.push((row, col));

        let neighbors = [
            (row.checked_sub(1), Some(col)),
            ((row + 1 < size).then_some(row + 1), Some(col)),
            (Some(row), col.checked_sub(1)),
            (Some(row), (col + 1 < size).then_some(col + 1)),
        ];
        for (r, c) in neighbors {
            let (Some(r), Some(c)) = (r, c) else {
                continue;
            };
            if !mask[r][c] && !visited[r][c] {
                visited[r][c] = true;
                queue.push_back((r, c));
            }
        }
    }

    cells
}
