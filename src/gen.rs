use crate::config::{ScreenConfig, MARGIN};
use rand::RngCore;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position(u32, u32);

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self(x, y)
    }

    pub fn x(&self) -> u32 {
        self.0
    }

    pub fn y(&self) -> u32 {
        self.1
    }
}

/// One coordinate per line, x first.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.x())?;
        writeln!(f, "{}", self.y())
    }
}

/// Pick a point inside the margins of `screen`.
///
/// Takes two draws from `rng`, the first for x and the second for y, each
/// reduced modulo the number of positions available on that axis.
pub fn gen_position<R: RngCore + ?Sized>(screen: &ScreenConfig, rng: &mut R) -> Position {
    let x = MARGIN + rng.next_u32() % screen.span_x();
    let y = MARGIN + rng.next_u32() % screen.span_y();
    Position::new(x, y)
}

#[derive(Debug)]
pub struct Particle {
    position: Position,
}

impl Particle {
    pub fn new<R: RngCore + ?Sized>(screen: &ScreenConfig, rng: &mut R) -> Self {
        Self {
            position: gen_position(screen, rng),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> u32 {
        self.position.x()
    }

    pub fn y(&self) -> u32 {
        self.position.y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::{thread_rng, SeedableRng};

    fn in_bounds(screen: &ScreenConfig, position: Position) -> bool {
        (MARGIN..=screen.width() - MARGIN).contains(&position.x())
            && (MARGIN..=screen.height() - MARGIN).contains(&position.y())
    }

    #[test]
    fn test_known_draws() {
        let screen = ScreenConfig::new(800, 600).unwrap();
        // yields 5 then 300
        let mut rng = StepRng::new(5, 295);
        let position = gen_position(&screen, &mut rng);
        assert_eq!(position, Position::new(15, 310));
        assert_eq!(position.to_string(), "15\n310\n");
    }

    #[test]
    fn test_draws_wrap_around_span() {
        let screen = ScreenConfig::new(800, 600).unwrap();
        // yields 781 then 1581
        let mut rng = StepRng::new(781, 800);
        let position = gen_position(&screen, &mut rng);
        assert_eq!(position, Position::new(10, 429));
    }

    #[test]
    fn test_minimum_screen() {
        let screen = ScreenConfig::new(20, 20).unwrap();
        let mut rng = thread_rng();
        for _ in 0..100 {
            assert_eq!(gen_position(&screen, &mut rng), Position::new(10, 10));
        }
    }

    #[test]
    fn test_extreme_draws_stay_in_bounds() {
        let screen = ScreenConfig::new(21, 37).unwrap();
        let mut rng = StepRng::new(u32::MAX as u64, 0);
        let position = gen_position(&screen, &mut rng);
        assert!(in_bounds(&screen, position), "{position:?}");
    }

    #[test]
    fn test_random_draws_stay_in_bounds() {
        let mut rng = thread_rng();
        for (w, h) in [(20, 20), (21, 400), (800, 600), (1200, 700), (4096, 25)] {
            let screen = ScreenConfig::new(w, h).unwrap();
            for _ in 0..1000 {
                let position = gen_position(&screen, &mut rng);
                assert!(in_bounds(&screen, position), "{w}x{h}: {position:?}");
            }
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let screen = ScreenConfig::default();
        let first = gen_position(&screen, &mut StdRng::seed_from_u64(42));
        let second = gen_position(&screen, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_particle() {
        let screen = ScreenConfig::new(800, 600).unwrap();
        let particle = Particle::new(&screen, &mut StepRng::new(5, 295));
        assert_eq!(particle.x(), 15);
        assert_eq!(particle.y(), 310);
        assert_eq!(particle.position(), Position::new(15, 310));
    }
}
