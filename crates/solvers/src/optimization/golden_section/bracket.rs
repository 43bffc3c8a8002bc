use super::Error;

/// The golden number: r = (√5 − 1) / 2, the positive root of r² + r − 1 = 0.
pub const GOLDEN_NUMBER: f64 = 0.618_033_988_749_894_9;

/// r², which equals 1 − r.
const GOLDEN_NUMBER_SQUARED: f64 = GOLDEN_NUMBER * GOLDEN_NUMBER;

/// Golden section search bracket.
///
/// Maintains the outer interval `[a, b]` and two interior probes with
/// `a < y < x < b`.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Lower bound.
    pub(super) a: f64,

    /// Upper bound.
    pub(super) b: f64,

    /// Right probe at `a + r * width`.
    pub(super) x: f64,

    /// Left probe at `a + r² * width`.
    pub(super) y: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds with probes positioned by the golden number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] unless both bounds are finite and `a < b`.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [a, b] = validate(bracket)?;
        let width = b - a;
        Ok(Self {
            a,
            b,
            x: a + GOLDEN_NUMBER * width,
            y: a + GOLDEN_NUMBER_SQUARED * width,
        })
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Returns the center of the current bounds.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Shrinks the bounds to `[y, b]`.
    ///
    /// The old `x` becomes the new `y`, and a new `x` is placed using the
    /// golden number.
    pub(super) fn shrink_left(&mut self) {
        self.a = self.y;
        self.y = self.x;
        self.x = self.a + GOLDEN_NUMBER * self.width();
    }

    /// Shrinks the bounds to `[a, x]`.
    ///
    /// The old `y` becomes the new `x`, and a new `y` is placed using the
    /// golden number.
    pub(super) fn shrink_right(&mut self) {
        self.b = self.x;
        self.x = self.y;
        self.y = self.a + GOLDEN_NUMBER_SQUARED * self.width();
    }

    /// Returns the new `x` that [`shrink_left`](Self::shrink_left) would place.
    pub(super) fn next_x(&self) -> f64 {
        self.y + GOLDEN_NUMBER * (self.b - self.y)
    }

    /// Returns the new `y` that [`shrink_right`](Self::shrink_right) would place.
    pub(super) fn next_y(&self) -> f64 {
        self.a + GOLDEN_NUMBER_SQUARED * (self.x - self.a)
    }
}

/// Checks that `[a, b]` is a usable bracket.
pub(super) fn validate(bracket: [f64; 2]) -> Result<[f64; 2], Error> {
    let [a, b] = bracket;
    if a.is_finite() && b.is_finite() && a < b {
        Ok(bracket)
    } else {
        Err(Error::InvalidInterval { a, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn golden_number_satisfies_its_equation() {
        assert_relative_eq!((5.0_f64.sqrt() - 1.0) / 2.0, GOLDEN_NUMBER);
        assert_relative_eq!(GOLDEN_NUMBER_SQUARED + GOLDEN_NUMBER, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn bracket_initialized_with_golden_probes() {
        let bracket = GoldenBracket::new([0.0, 1.0]).unwrap();

        assert_relative_eq!(bracket.a, 0.0);
        assert_relative_eq!(bracket.b, 1.0);
        assert_relative_eq!(bracket.width(), 1.0);

        // y ≈ 0.382, x ≈ 0.618
        assert_relative_eq!(bracket.x, GOLDEN_NUMBER);
        assert_relative_eq!(bracket.y, GOLDEN_NUMBER_SQUARED);
        assert!(bracket.a < bracket.y && bracket.y < bracket.x && bracket.x < bracket.b);
    }

    #[test]
    fn rejects_empty_reversed_and_non_finite_bounds() {
        for bounds in [
            [1.0, 1.0],
            [1.0, -2.0],
            [f64::NAN, 1.0],
            [0.0, f64::INFINITY],
        ] {
            assert!(
                matches!(GoldenBracket::new(bounds), Err(Error::InvalidInterval { .. })),
                "bounds {bounds:?} should be rejected"
            );
        }
    }

    #[test]
    fn shrink_left_reuses_x_and_places_new_x() {
        let mut bracket = GoldenBracket::new([0.0, 1.0]).unwrap();
        let old_x = bracket.x;
        let predicted = bracket.next_x();

        bracket.shrink_left();

        assert_relative_eq!(bracket.a, GOLDEN_NUMBER_SQUARED);
        assert_relative_eq!(bracket.b, 1.0);
        assert_relative_eq!(bracket.y, old_x);
        assert_relative_eq!(bracket.x, predicted);
        assert_relative_eq!(bracket.width(), GOLDEN_NUMBER, epsilon = 1e-15);
    }

    #[test]
    fn shrink_right_reuses_y_and_places_new_y() {
        let mut bracket = GoldenBracket::new([0.0, 1.0]).unwrap();
        let old_y = bracket.y;
        let predicted = bracket.next_y();

        bracket.shrink_right();

        assert_relative_eq!(bracket.a, 0.0);
        assert_relative_eq!(bracket.b, GOLDEN_NUMBER);
        assert_relative_eq!(bracket.x, old_y);
        assert_relative_eq!(bracket.y, predicted);
        assert_relative_eq!(bracket.width(), GOLDEN_NUMBER);
    }

    #[test]
    fn reused_probe_keeps_golden_placement() {
        let mut bracket = GoldenBracket::new([-3.0, 7.0]).unwrap();

        for step in 0..20 {
            if step % 3 == 0 {
                bracket.shrink_right();
            } else {
                bracket.shrink_left();
            }
            let width = bracket.width();
            assert_relative_eq!(bracket.x, bracket.a + GOLDEN_NUMBER * width, epsilon = 1e-12);
            assert_relative_eq!(
                bracket.y,
                bracket.a + GOLDEN_NUMBER_SQUARED * width,
                epsilon = 1e-12
            );
        }
    }
}
