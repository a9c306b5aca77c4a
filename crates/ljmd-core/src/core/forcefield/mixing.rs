use crate::core::models::particle::Particle;

/// Effective Lennard-Jones parameters of an unlike pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJonesPair {
    pub sigma: f64,
    pub epsilon: f64,
}

impl LennardJonesPair {
    /// Lorentz-Berthelot combination: arithmetic mean of the sigmas,
    /// geometric mean of the epsilons.
    #[inline]
    pub fn combine(sigma_i: f64, epsilon_i: f64, sigma_j: f64, epsilon_j: f64) -> Self {
        Self {
            sigma: 0.5 * (sigma_i + sigma_j),
            epsilon: (epsilon_i * epsilon_j).sqrt(),
        }
    }

    #[inline]
    pub fn mix(a: &Particle, b: &Particle) -> Self {
        Self::combine(a.sigma(), a.epsilon(), b.sigma(), b.epsilon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_particles_keep_their_parameters() {
        let pair = LennardJonesPair::combine(3.4, 0.24, 3.4, 0.24);
        assert_eq!(pair.sigma, 3.4);
        assert!((pair.epsilon - 0.24).abs() < 1e-15);
    }

    #[test]
    fn sigma_uses_arithmetic_mean() {
        let pair = LennardJonesPair::combine(1.0, 1.0, 2.0, 1.0);
        assert_eq!(pair.sigma, 1.5);
    }

    #[test]
    fn epsilon_uses_geometric_mean() {
        let pair = LennardJonesPair::combine(1.0, 4.0, 1.0, 9.0);
        assert_eq!(pair.epsilon, 6.0);
    }

    #[test]
    fn mix_is_symmetric() {
        let a = Particle::new(1.0, 1.0, 0.5).unwrap();
        let b = Particle::new(2.0, 1.6, 2.0).unwrap();
        assert_eq!(LennardJonesPair::mix(&a, &b), LennardJonesPair::mix(&b, &a));
        assert_eq!(LennardJonesPair::mix(&a, &b).epsilon, 1.0);
    }
}
