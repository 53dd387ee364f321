/// A cell coordinate on the unbounded grid.
/// Compared by value; `y` grows downward the way the screen does.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Point shifted by (dx, dy)
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 3x3 block centered on this point, the point itself included
    pub fn block(self) -> impl Iterator<Item = Point> {
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| self.offset(dx, dy)))
    }

    /// The 8 Moore neighbors of this point
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        self.block().filter(move |&p| p != self)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
