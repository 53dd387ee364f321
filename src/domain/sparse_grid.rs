//! Sparse storage of alive cells on an unbounded grid.
//!
//! Cells are grouped by column: a map from `x` to the set of alive `y`
//! values in that column. A column entry exists only while it holds at
//! least one alive cell, so absent data always means dead.

use ahash::{AHashMap, AHashSet};

use super::Point;

/// Set of alive cells, keyed column-first.
#[derive(Clone, Debug, Default)]
pub struct SparseGrid {
    columns: AHashMap<i64, AHashSet<i64>>,
    population: usize,
}

impl SparseGrid {
    /// Create an empty grid (every cell dead)
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.columns.clear();
        self.population = 0;
    }

    /// Set liveness of one cell.
    /// Removing the last alive row of a column drops the column itself.
    pub fn set_state(&mut self, point: Point, alive: bool) {
        if alive {
            if self.columns.entry(point.x).or_default().insert(point.y) {
                self.population += 1;
            }
        } else if let Some(column) = self.columns.get_mut(&point.x) {
            if column.remove(&point.y) {
                self.population -= 1;
            }
            if column.is_empty() {
                self.columns.remove(&point.x);
            }
        }
    }

    /// Flip liveness of one cell
    pub fn toggle_state(&mut self, point: Point) {
        self.set_state(point, !self.is_alive(point));
    }

    #[inline]
    pub fn is_alive(&self, point: Point) -> bool {
        self.columns
            .get(&point.x)
            .is_some_and(|column| column.contains(&point.y))
    }

    /// Iterate over every alive cell.
    /// Order is arbitrary but repeats for as long as the grid is unmodified.
    pub fn alive_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.columns
            .iter()
            .flat_map(|(&x, column)| column.iter().map(move |&y| Point::new(x, y)))
    }

    /// Count how many of `ys` are alive in column `x`.
    /// One column lookup serves every row in the batch; absent columns count 0.
    pub fn num_alive_in_column(&self, x: i64, ys: impl IntoIterator<Item = i64>) -> usize {
        match self.columns.get(&x) {
            Some(column) => ys.into_iter().filter(|y| column.contains(y)).count(),
            None => 0,
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.population
    }

    pub fn is_empty(&self) -> bool {
        self.population == 0
    }

    /// Number of non-empty columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Smallest rectangle holding every alive cell, as (min, max) corners
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let mut points = self.alive_points();
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

impl PartialEq for SparseGrid {
    fn eq(&self, other: &Self) -> bool {
        self.population == other.population
            && self.columns.iter().all(|(x, column)| {
                other
                    .columns
                    .get(x)
                    .is_some_and(|theirs| theirs.len() == column.len() && column.iter().all(|y| theirs.contains(y)))
            })
    }
}

impl Eq for SparseGrid {}

impl Extend<Point> for SparseGrid {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        for point in points {
            self.set_state(point, true);
        }
    }
}

impl FromIterator<Point> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut grid = Self::new();
        grid.extend(points);
        grid
    }
}
