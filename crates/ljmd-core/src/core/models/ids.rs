use std::fmt;

/// Stable index of a particle within a [`ParticleSystem`](super::system::ParticleSystem).
///
/// Particles are never removed from a system, so the index identifies the same
/// particle for the whole duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ParticleId(usize);

impl ParticleId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ParticleId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
