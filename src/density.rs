use serde::Serialize;

use crate::events::{Event, EventKind, Location};

pub const PITCH_LENGTH: f64 = 120.0;
pub const PITCH_WIDTH: f64 = 80.0;
pub const GRID_X: usize = 12;
pub const GRID_Y: usize = 8;
/// At or below this many samples the raw points are returned instead of a grid.
pub const SPARSE_SAMPLE_LIMIT: usize = 5;
pub const SMOOTHING_SIGMA: f64 = 1.5;
const TRUNCATE_SIGMAS: f64 = 4.0;

pub type Grid = [[f64; GRID_Y]; GRID_X];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityGrid {
    /// Smoothed counts indexed `[x_bin][y_bin]`.
    pub values: Grid,
    pub points: Vec<Location>,
}

impl DensityGrid {
    /// Evenly spaced x render coordinates, one per bin, spanning the full pitch length.
    pub fn x_positions() -> [f64; GRID_X] {
        linspace(PITCH_LENGTH)
    }

    pub fn y_positions() -> [f64; GRID_Y] {
        linspace(PITCH_WIDTH)
    }

    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DensityEstimate {
    NoData,
    /// Too few samples for a meaningful density; render as a scatter.
    Sparse { points: Vec<Location> },
    Dense(DensityGrid),
}

impl DensityEstimate {
    pub fn sample_count(&self) -> usize {
        match self {
            DensityEstimate::NoData => 0,
            DensityEstimate::Sparse { points } => points.len(),
            DensityEstimate::Dense(grid) => grid.points.len(),
        }
    }
}

pub fn collect_points<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<Location> {
    events.into_iter().filter_map(|e| e.location).collect()
}

pub fn estimate_density(points: Vec<Location>) -> DensityEstimate {
    if points.is_empty() {
        return DensityEstimate::NoData;
    }
    if points.len() <= SPARSE_SAMPLE_LIMIT {
        return DensityEstimate::Sparse { points };
    }
    let counts = histogram(&points);
    DensityEstimate::Dense(DensityGrid {
        values: gaussian_smooth(&counts, SMOOTHING_SIGMA),
        points,
    })
}

/// Every located event of `player` while playing for `team`.
pub fn player_density(events: &[Event], player: &str, team: &str) -> DensityEstimate {
    let points = collect_points(
        events
            .iter()
            .filter(|e| e.player_is(player) && e.team_is(team)),
    );
    tracing::debug!(player, team, samples = points.len(), "player density");
    estimate_density(points)
}

pub fn team_shot_density(events: &[Event], team: &str) -> DensityEstimate {
    let points = collect_points(
        events
            .iter()
            .filter(|e| e.kind == EventKind::Shot && e.team_is(team)),
    );
    estimate_density(points)
}

/// 2D histogram over the pitch. Bins are half-open except the last one on each axis,
/// which also takes points on the far touchline; points off the pitch are dropped.
fn histogram(points: &[Location]) -> Grid {
    let mut grid = [[0.0; GRID_Y]; GRID_X];
    for p in points {
        let (Some(ix), Some(iy)) = (
            bin_index(p.x, PITCH_LENGTH, GRID_X),
            bin_index(p.y, PITCH_WIDTH, GRID_Y),
        ) else {
            continue;
        };
        grid[ix][iy] += 1.0;
    }
    grid
}

fn bin_index(value: f64, extent: f64, bins: usize) -> Option<usize> {
    if !(0.0..=extent).contains(&value) {
        return None;
    }
    let idx = (value * bins as f64 / extent).floor() as usize;
    Some(idx.min(bins - 1))
}

fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (TRUNCATE_SIGMAS * sigma + 0.5) as i64;
    let mut weights: Vec<f64> = (-radius..=radius)
        .map(|x| (-0.5 / (sigma * sigma) * (x * x) as f64).exp())
        .collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Half-sample symmetric reflection (`d c b a | a b c d | d c b a`), repeated for
/// kernels wider than the axis.
fn reflect(index: i64, len: usize) -> usize {
    let len = len as i64;
    let period = 2 * len;
    let m = index.rem_euclid(period);
    if m < len { m as usize } else { (period - 1 - m) as usize }
}

fn convolve_line(line: &[f64], kernel: &[f64]) -> Vec<f64> {
    let radius = (kernel.len() / 2) as i64;
    (0..line.len() as i64)
        .map(|i| {
            kernel
                .iter()
                .enumerate()
                .map(|(k, w)| w * line[reflect(i + k as i64 - radius, line.len())])
                .sum::<f64>()
        })
        .collect()
}

/// Separable Gaussian filter, x axis first then y.
fn gaussian_smooth(counts: &Grid, sigma: f64) -> Grid {
    let kernel = gaussian_kernel(sigma);
    let mut out = *counts;

    for iy in 0..GRID_Y {
        let column: Vec<f64> = (0..GRID_X).map(|ix| out[ix][iy]).collect();
        for (ix, v) in convolve_line(&column, &kernel).into_iter().enumerate() {
            out[ix][iy] = v;
        }
    }
    for row in out.iter_mut() {
        let smoothed = convolve_line(&row[..], &kernel);
        row.copy_from_slice(&smoothed);
    }
    out
}

fn linspace<const N: usize>(extent: f64) -> [f64; N] {
    let mut out = [0.0; N];
    let step = extent / (N - 1) as f64;
    for (i, v) in out.iter_mut().enumerate() {
        *v = step * i as f64;
    }
    out[N - 1] = extent;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_matches_truncated_gaussian() {
        let kernel = gaussian_kernel(SMOOTHING_SIGMA);
        assert_eq!(kernel.len(), 13);
        assert!((kernel.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(kernel[0], kernel[12]);
        assert!(kernel[6] > kernel[5]);
    }

    #[test]
    fn reflection_wraps_short_axes() {
        assert_eq!(reflect(-1, 8), 0);
        assert_eq!(reflect(-2, 8), 1);
        assert_eq!(reflect(8, 8), 7);
        assert_eq!(reflect(9, 8), 6);
        assert_eq!(reflect(-9, 8), 7);
        assert_eq!(reflect(17, 8), 1);
    }

    #[test]
    fn edge_points_land_in_last_bin() {
        assert_eq!(bin_index(120.0, PITCH_LENGTH, GRID_X), Some(11));
        assert_eq!(bin_index(0.0, PITCH_LENGTH, GRID_X), Some(0));
        assert_eq!(bin_index(9.99, PITCH_LENGTH, GRID_X), Some(0));
        assert_eq!(bin_index(10.0, PITCH_LENGTH, GRID_X), Some(1));
        assert_eq!(bin_index(-0.5, PITCH_LENGTH, GRID_X), None);
        assert_eq!(bin_index(80.1, PITCH_WIDTH, GRID_Y), None);
    }

    #[test]
    fn smoothing_keeps_mass() {
        let mut counts = [[0.0; GRID_Y]; GRID_X];
        counts[0][0] = 3.0;
        counts[6][4] = 2.0;
        counts[11][7] = 1.0;
        let smoothed = gaussian_smooth(&counts, SMOOTHING_SIGMA);
        let total: f64 = smoothed.iter().flatten().sum();
        assert!((total - 6.0).abs() < 1e-9);
        assert!(smoothed.iter().flatten().all(|v| *v >= 0.0));
    }

    #[test]
    fn linspace_spans_pitch() {
        let xs = DensityGrid::x_positions();
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[11], 120.0);
        let ys = DensityGrid::y_positions();
        assert_eq!(ys[7], 80.0);
    }
}
