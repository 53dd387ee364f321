use log::trace;

use super::{Cell, Point, SparseGrid};

/// Life owns the current generation and computes the next one.
/// No history is kept: each update replaces the grid wholesale.
#[derive(Clone, Debug, Default)]
pub struct Life {
    grid: SparseGrid,
    generation: u64,
}

impl Life {
    /// Create an engine with an all-dead grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Mark each point alive; used to seed starting patterns
    pub fn add_alive_points(&mut self, points: impl IntoIterator<Item = Point>) {
        self.grid.extend(points);
    }

    pub fn set_state(&mut self, point: Point, alive: bool) {
        self.grid.set_state(point, alive);
    }

    pub fn toggle(&mut self, point: Point) {
        self.grid.toggle_state(point);
    }

    pub fn is_alive(&self, point: Point) -> bool {
        self.grid.is_alive(point)
    }

    /// Count alive cells in the Moore neighborhood of `point`.
    /// The three columns x-1, x, x+1 are each queried once with their rows batched.
    pub fn num_alive_neighbors(&self, point: Point) -> u8 {
        let Point { x, y } = point;
        let count = self.grid.num_alive_in_column(x - 1, [y - 1, y, y + 1])
            + self.grid.num_alive_in_column(x, [y - 1, y + 1])
            + self.grid.num_alive_in_column(x + 1, [y - 1, y, y + 1]);
        count as u8
    }

    /// Advance exactly one generation.
    ///
    /// Only cells inside the 3x3 block of some alive cell can be alive next
    /// generation, so those are the only candidates evaluated. Every count is
    /// taken against the old grid; the new grid is built separately and swapped in.
    pub fn update(&mut self) {
        let mut next = SparseGrid::new();
        let mut evaluated = SparseGrid::new();

        for alive in self.grid.alive_points() {
            for candidate in alive.block() {
                if evaluated.is_alive(candidate) {
                    continue;
                }
                evaluated.set_state(candidate, true);

                let current = Cell::from(self.grid.is_alive(candidate));
                if current.evolve(self.num_alive_neighbors(candidate)).is_alive() {
                    next.set_state(candidate, true);
                }
            }
        }

        trace!(
            "generation {} -> {}: {} candidates, population {} -> {}",
            self.generation,
            self.generation + 1,
            evaluated.population(),
            self.grid.population(),
            next.population()
        );

        self.grid = next;
        self.generation += 1;
    }

    /// Read-only view of the current generation
    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }

    pub fn alive_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.grid.alive_points()
    }

    /// Generations advanced since the last clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}
