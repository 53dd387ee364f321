use super::Point;

/// A named starting pattern: alive cells relative to an arbitrary origin
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<Point>,
}

impl Pattern {
    /// Create a pattern from (x, y) pairs
    pub fn new(name: &'static str, description: &'static str, cells: &[(i64, i64)]) -> Self {
        Self {
            name,
            description,
            cells: cells.iter().copied().map(Point::from).collect(),
        }
    }

    /// Cells shifted by (dx, dy)
    pub fn translated(&self, dx: i64, dy: i64) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(move |p| p.offset(dx, dy))
    }

    /// Corners (min, max) of the pattern; None for the empty pattern
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = *self.cells.first()?;
        Some(self.cells.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    pub fn empty() -> Pattern {
        Pattern::new("Empty", "Nothing alive", &[])
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", &[(-1, 0), (0, 0), (1, 0)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            &[(9, 7), (10, 7), (11, 7), (8, 8), (9, 8), (10, 8)],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[
                (11, 10), (12, 10), (11, 11), (12, 11),
                (13, 12), (14, 12), (13, 13), (14, 13),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-Pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[(15, 11), (16, 11), (14, 12), (15, 12), (15, 13)],
        )
    }

    /// Diehard - vanishes after 130 generations
    pub fn diehard() -> Pattern {
        Pattern::new(
            "Diehard",
            "Methuselah - dies at gen 130",
            &[(17, 11), (11, 12), (12, 12), (12, 13), (16, 13), (17, 13), (18, 13)],
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            &[(12, 9), (14, 10), (11, 11), (12, 11), (15, 11), (16, 11), (17, 11)],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper glider gun",
            "Produces gliders (period 30)",
            &[
                (26, 2), (24, 3), (26, 3), (14, 4), (15, 4), (22, 4), (23, 4),
                (13, 5), (17, 5), (22, 5), (23, 5), (2, 6), (3, 6), (12, 6),
                (18, 6), (22, 6), (23, 6), (2, 7), (3, 7), (12, 7), (16, 7),
                (18, 7), (19, 7), (24, 7), (26, 7), (12, 8), (18, 8), (26, 8),
                (13, 9), (17, 9), (14, 10), (15, 10), (36, 4), (37, 5), (37, 4),
                (36, 5),
            ],
        )
    }

    /// Infinite growth from ten cells
    pub fn brick_layer_1() -> Pattern {
        Pattern::new(
            "Brick Layer 1",
            "Infinite growth (10 cells)",
            &[
                (19, 22), (21, 22), (21, 21), (23, 20), (23, 19),
                (23, 18), (25, 19), (25, 18), (25, 17), (26, 18),
            ],
        )
    }

    /// Infinite growth inside a 5x5 box
    pub fn brick_layer_2() -> Pattern {
        Pattern::new(
            "Brick Layer 2",
            "Infinite growth (5x5)",
            &[
                (21, 13), (22, 13), (23, 13), (25, 13), (21, 14), (24, 15), (25, 15),
                (25, 16), (23, 16), (22, 16), (21, 17), (23, 17), (25, 17),
            ],
        )
    }

    /// Infinite growth from a single row
    pub fn thin_brick_layer() -> Pattern {
        Pattern::new(
            "Thin Brick Layer",
            "Infinite growth (one row)",
            &[
                (15, 20), (16, 20), (17, 20), (18, 20), (19, 20), (20, 20), (21, 20),
                (22, 20), (24, 20), (25, 20), (26, 20), (27, 20), (28, 20), (32, 20),
                (33, 20), (34, 20), (41, 20), (42, 20), (43, 20), (45, 20), (44, 20),
                (46, 20), (47, 20), (49, 20), (50, 20), (51, 20), (52, 20), (53, 20),
            ],
        )
    }

    /// Puffer that leaves a trail of gliders
    pub fn space_rake() -> Pattern {
        Pattern::new(
            "Space Rake",
            "Spaceship emitting gliders",
            &[
                (18, 5), (19, 5), (21, 4), (20, 4), (21, 6), (21, 5), (22, 5),
                (18, 6), (20, 6), (19, 6), (19, 7), (20, 7), (26, 5), (27, 4),
                (28, 4), (29, 4), (30, 4), (30, 5), (30, 6), (29, 7), (26, 7),
                (17, 9), (17, 10), (16, 10), (15, 11), (16, 12), (17, 12), (18, 12),
                (20, 12), (19, 12), (17, 13), (20, 13), (18, 13), (19, 13), (20, 14),
                (26, 10), (27, 10), (25, 11), (28, 11), (28, 12), (25, 12), (24, 13),
                (25, 13), (28, 13), (27, 13), (26, 14), (25, 14), (26, 19), (27, 18),
                (26, 21), (28, 18), (29, 18), (30, 18), (30, 20), (30, 19), (29, 21),
                (13, 21), (13, 20), (12, 19), (13, 22), (12, 22), (11, 22), (10, 22),
                (9, 21), (9, 19),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            empty(),
            glider(),
            blinker(),
            toad(),
            beacon(),
            r_pentomino(),
            diehard(),
            acorn(),
            glider_gun(),
            brick_layer_1(),
            brick_layer_2(),
            thin_brick_layer(),
            space_rake(),
        ]
    }

    /// Look up a pattern by its display name
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns().into_iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Life, SparseGrid};

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_patterns_have_no_duplicate_cells() {
        for pattern in presets::all_patterns() {
            let grid: SparseGrid = pattern.cells.iter().copied().collect();
            assert_eq!(grid.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(presets::find("Acorn").map(|p| p.cells.len()), Some(7));
        assert!(presets::find("Nope").is_none());
    }

    #[test]
    fn test_empty_pattern() {
        let empty = presets::empty();
        assert!(empty.cells.is_empty());
        assert_eq!(empty.bounding_box(), None);
    }

    #[test]
    fn test_translated() {
        let moved: Vec<_> = presets::blinker().translated(10, -2).collect();
        assert_eq!(moved, vec![Point::new(9, -2), Point::new(10, -2), Point::new(11, -2)]);
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = presets::glider_gun().bounding_box().unwrap();
        assert_eq!((min, max), (Point::new(2, 2), Point::new(37, 10)));
    }

    #[test]
    fn test_toad_oscillates() {
        let toad = presets::toad();
        let start: SparseGrid = toad.cells.iter().copied().collect();
        let mut life = Life::new();
        life.add_alive_points(toad.cells.iter().copied());

        life.update();
        assert_ne!(life.grid(), &start);
        life.update();
        assert_eq!(life.grid(), &start);
    }

    #[test]
    fn test_diehard_dies_out() {
        let mut life = Life::new();
        life.add_alive_points(presets::diehard().cells);
        for _ in 0..130 {
            life.update();
        }
        assert!(life.grid().is_empty());
    }

    #[test]
    fn test_glider_gun_emits_one_glider_per_period() {
        let mut life = Life::new();
        life.add_alive_points(presets::glider_gun().cells);
        for _ in 0..120 {
            life.update();
        }
        let before = life.population();
        for _ in 0..30 {
            life.update();
        }
        assert_eq!(life.population(), before + 5);
    }
}
