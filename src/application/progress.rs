use rand::{rngs::StdRng, Rng, SeedableRng};

/// Supplies the amount a downloading record advances on each tick.
///
/// The simulation draws random steps; a real transfer layer would report
/// the bytes it actually moved. Either way the tracker clamps at 100.
pub trait ProgressSource {
    fn next_increment(&mut self) -> f32;
}

/// Uniform random steps in `[0, max_increment)`.
pub struct RandomProgress {
    rng: StdRng,
    max_increment: f32,
}

impl RandomProgress {
    pub fn new(max_increment: f32) -> Self {
        Self::with_rng(StdRng::from_entropy(), max_increment)
    }

    #[cfg(test)]
    pub fn seeded(seed: u64, max_increment: f32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), max_increment)
    }

    fn with_rng(rng: StdRng, max_increment: f32) -> Self {
        Self {
            rng,
            // gen_range panics on an empty range
            max_increment: max_increment.max(f32::EPSILON),
        }
    }
}

impl ProgressSource for RandomProgress {
    fn next_increment(&mut self) -> f32 {
        self.rng.gen_range(0.0..self.max_increment)
    }
}

/// Constant step, handy when the number of ticks must be predictable.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedStep(pub f32);

#[cfg(test)]
impl ProgressSource for FixedStep {
    fn next_increment(&mut self) -> f32 {
        self.0
    }
}
