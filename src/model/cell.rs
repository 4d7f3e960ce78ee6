/// Crystallographic unit cell.
///
/// Lengths are in Ångström; `alpha`, `beta` and `gamma` are always stored in
/// radians. Degree conversion happens only at the document boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl UnitCell {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    /// Builds a cell from angles given in degrees.
    pub fn from_degrees(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self::new(
            a,
            b,
            c,
            alpha.to_radians(),
            beta.to_radians(),
            gamma.to_radians(),
        )
    }

    /// Returns `(alpha, beta, gamma)` in degrees.
    pub fn angles_degrees(&self) -> (f64, f64, f64) {
        (
            self.alpha.to_degrees(),
            self.beta.to_degrees(),
            self.gamma.to_degrees(),
        )
    }

    /// Lattice vectors `[a, b, c]` in Cartesian space.
    ///
    /// `a` lies along x, `b` in the xy-plane and `c` completes the basis.
    pub fn lattice_vectors(&self) -> [[f64; 3]; 3] {
        let (cos_a, cos_b, cos_g) = (self.alpha.cos(), self.beta.cos(), self.gamma.cos());
        let sin_g = self.gamma.sin();

        let cx = self.c * cos_b;
        let cy = self.c * (cos_a - cos_b * cos_g) / sin_g;
        let cz = (self.c * self.c - cx * cx - cy * cy).max(0.0).sqrt();

        [
            [self.a, 0.0, 0.0],
            [self.b * cos_g, self.b * sin_g, 0.0],
            [cx, cy, cz],
        ]
    }

    pub fn volume(&self) -> f64 {
        let [va, vb, vc] = self.lattice_vectors();
        va[0] * vb[1] * vc[2]
    }
}
