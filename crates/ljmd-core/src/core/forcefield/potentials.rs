/// 12-6 Lennard-Jones pair energy `4ε[(σ/r)^12 - (σ/r)^6]`.
#[inline]
pub fn lennard_jones_12_6(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    if epsilon == 0.0 {
        return 0.0;
    }
    let rho6 = (sigma / dist).powi(6);
    4.0 * epsilon * (rho6 * rho6 - rho6)
}

/// Radial force factor `-(dU/dr) / r` of the 12-6 potential, taken from the squared distance.
///
/// For a displacement `r = x_j - x_i` the force on `j` is `factor * r` and the
/// force on `i` is its negation. Positive values are repulsive.
#[inline]
pub fn lennard_jones_force_factor(dist_sq: f64, sigma: f64, epsilon: f64) -> f64 {
    lennard_jones_pair(dist_sq, sigma, epsilon).1
}

/// Energy and radial force factor of one pair, sharing the `(σ/r)^6` term.
///
/// A pair with zero well depth does not interact at any separation.
#[inline]
pub fn lennard_jones_pair(dist_sq: f64, sigma: f64, epsilon: f64) -> (f64, f64) {
    if epsilon == 0.0 {
        return (0.0, 0.0);
    }
    let rho2 = sigma * sigma / dist_sq;
    let rho6 = rho2 * rho2 * rho2;
    let rho12 = rho6 * rho6;
    let energy = 4.0 * epsilon * (rho12 - rho6);
    let factor = 24.0 * epsilon * (2.0 * rho12 - rho6) / dist_sq;
    (energy, factor)
}
