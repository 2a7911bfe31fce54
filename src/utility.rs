pub(crate) mod dms {
    /// Minutes per degree
    pub const DM: f64 = 60.;
    /// Seconds per degree
    pub const DS: f64 = 3600.;

    /// Decimal degrees from a degrees/minutes/seconds triple.
    pub fn to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
        degrees + minutes / DM + seconds / DS
    }
}

/// Hyperbolic functions written out with `exp`/`ln`. The Gauss-Krüger
/// results are pinned to these exact forms, not the std versions.
pub(crate) trait GeoMath {
    fn exp_sinh(&self) -> Self;
    fn exp_cosh(&self) -> Self;
    fn ln_atanh(&self) -> Self;
    fn round_half_up(&self, decimals: i32) -> Self;
}

impl GeoMath for f64 {
    fn exp_sinh(&self) -> f64 {
        0.5 * (self.exp() - (-*self).exp())
    }

    fn exp_cosh(&self) -> f64 {
        0.5 * (self.exp() + (-*self).exp())
    }

    fn ln_atanh(&self) -> f64 {
        0.5 * ((1.0 + *self) / (1.0 - *self)).ln()
    }

    // Ties go towards positive infinity, unlike f64::round
    fn round_half_up(&self, decimals: i32) -> f64 {
        let factor = 10_f64.powi(decimals);
        (*self * factor + 0.5).floor() / factor
    }
}
