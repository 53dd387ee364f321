//! Random soups: a rectangle of cells each alive with a fixed probability.
//! The rectangle bounds only the seed; the grid stays unbounded.

use rand::Rng;

use super::Point;

/// Alive cells of a `width` x `height` soup whose top-left corner is `origin`.
/// `density` is clamped into [0, 1]; NaN counts as 0.
pub fn random_soup<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Point,
    width: u32,
    height: u32,
    density: f64,
) -> Vec<Point> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };

    (0..i64::from(height))
        .flat_map(|dy| (0..i64::from(width)).map(move |dx| origin.offset(dx, dy)))
        .filter(|_| rng.random_bool(density))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_soup_stays_inside_rectangle() {
        let mut rng = StdRng::seed_from_u64(7);
        let origin = Point::new(-10, 20);
        let soup = random_soup(&mut rng, origin, 16, 8, 0.5);

        assert!(!soup.is_empty());
        assert!(soup.iter().all(|p| (-10..6).contains(&p.x) && (20..28).contains(&p.y)));
    }

    #[test]
    fn test_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_soup(&mut rng, Point::default(), 10, 10, 0.0).is_empty());
        assert_eq!(random_soup(&mut rng, Point::default(), 10, 10, 1.0).len(), 100);
        assert_eq!(random_soup(&mut rng, Point::default(), 4, 4, 7.5).len(), 16);
        assert!(random_soup(&mut rng, Point::default(), 4, 4, f64::NAN).is_empty());
    }

    #[test]
    fn test_same_seed_same_soup() {
        let a = random_soup(&mut StdRng::seed_from_u64(42), Point::default(), 32, 32, 0.3);
        let b = random_soup(&mut StdRng::seed_from_u64(42), Point::default(), 32, 32, 0.3);
        assert_eq!(a, b);
    }
}
