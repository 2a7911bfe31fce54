use std::f64::consts::PI;

use num::{Complex, Zero};

use crate::{projections::parameters::ProjectionParameters, utility::GeoMath};

// Order of the Krüger series, in powers of the third flattening n
const ORDER: usize = 4;

/// Gauss conformal projection (Transverse Mercator) using Krüger's formulas,
/// for one fixed set of [`ProjectionParameters`].
///
/// Grid values are returned as `(northing, easting)`, geodetic values as
/// `(latitude, longitude)` in decimal degrees.
#[derive(Clone, Debug)]
pub struct GaussKreuger {
    params: ProjectionParameters,
    // Rectifying radius, â
    a_roof: f64,
    // Conformal latitude expansion, geodetic -> grid
    lat_coeff: [f64; ORDER],
    beta: [f64; ORDER],
    // Geodetic latitude expansion, grid -> geodetic
    lat_coeff_star: [f64; ORDER],
    delta: [f64; ORDER],
}

impl GaussKreuger {
    pub(crate) fn new(params: ProjectionParameters) -> GaussKreuger {
        let f = params.flattening;
        let e2 = f * (2.0 - f);
        let n = f / (2.0 - f);

        let a_roof = params.axis / (1.0 + n) * (1.0 + n * n / 4.0 + n * n * n * n / 64.0);

        let lat_coeff = [
            e2,
            (5.0 * e2 * e2 - e2 * e2 * e2) / 6.0,
            (104.0 * e2 * e2 * e2 - 45.0 * e2 * e2 * e2 * e2) / 120.0,
            (1237.0 * e2 * e2 * e2 * e2) / 1260.0,
        ];
        let beta = [
            n / 2.0 - 2.0 * n * n / 3.0 + 5.0 * n * n * n / 16.0 + 41.0 * n * n * n * n / 180.0,
            13.0 * n * n / 48.0 - 3.0 * n * n * n / 5.0 + 557.0 * n * n * n * n / 1440.0,
            61.0 * n * n * n / 240.0 - 103.0 * n * n * n * n / 140.0,
            49561.0 * n * n * n * n / 161_280.0,
        ];

        let lat_coeff_star = [
            e2 + e2 * e2 + e2 * e2 * e2 + e2 * e2 * e2 * e2,
            -(7.0 * e2 * e2 + 17.0 * e2 * e2 * e2 + 30.0 * e2 * e2 * e2 * e2) / 6.0,
            (224.0 * e2 * e2 * e2 + 889.0 * e2 * e2 * e2 * e2) / 120.0,
            -(4279.0 * e2 * e2 * e2 * e2) / 1260.0,
        ];
        let delta = [
            n / 2.0 - 2.0 * n * n / 3.0 + 37.0 * n * n * n / 96.0 - n * n * n * n / 360.0,
            n * n / 48.0 + n * n * n / 15.0 - 437.0 * n * n * n * n / 1440.0,
            17.0 * n * n * n / 480.0 - 37.0 * n * n * n * n / 840.0,
            4397.0 * n * n * n * n / 161_280.0,
        ];

        Self {
            params,
            a_roof,
            lat_coeff,
            beta,
            lat_coeff_star,
            delta,
        }
    }

    pub fn parameters(&self) -> &ProjectionParameters {
        &self.params
    }

    /// Projects a geodetic latitude/longitude onto the grid. The result is
    /// `(northing, easting)`, rounded to millimeters.
    ///
    /// No range check is made: input far outside the projection zone gives
    /// meaningless or non-finite output rather than an error.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{CrsProjection, GaussKreugerProvider};
    ///
    /// let provider = GaussKreugerProvider::global();
    /// let sweref99tm = provider.get(CrsProjection::Sweref99Tm).unwrap();
    ///
    /// let (northing, easting) = sweref99tm.geodetic_to_grid(59.330231, 18.059196);
    ///
    /// assert!((northing - 6580821.991).abs() < 1e-3);
    /// assert!((easting - 674032.357).abs() < 1e-3);
    /// ```
    pub fn geodetic_to_grid(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let [a, b, c, d] = self.lat_coeff;

        let phi = latitude.to_radians();
        let lambda = longitude.to_radians();
        let lambda_zero = self.params.central_meridian.to_radians();

        // Results are pinned to these exact powi forms
        let sin_phi = phi.sin();
        let phi_star = phi
            - sin_phi * phi.cos() * (a + b * sin_phi.powi(2) + c * sin_phi.powi(4) + d * sin_phi.powi(6));
        let delta_lambda = lambda - lambda_zero;

        let xi_prim = (phi_star.tan() / delta_lambda.cos()).atan();
        let eta_prim = (phi_star.cos() * delta_lambda.sin()).ln_atanh();

        let zeta = kruger_terms(Complex::new(xi_prim, eta_prim), &self.beta)
            .into_iter()
            .fold(Complex::new(xi_prim, eta_prim), |acc, term| acc + term);

        let grid = zeta * (self.params.scale * self.a_roof)
            + Complex::new(self.params.false_northing, self.params.false_easting);

        (grid.re.round_half_up(3), grid.im.round_half_up(3))
    }

    /// Inverse of [`GaussKreuger::geodetic_to_grid`]: takes
    /// `(northing, easting)` and returns `(latitude, longitude)` in decimal
    /// degrees. The result is not rounded.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{CrsProjection, GaussKreugerProvider};
    ///
    /// let provider = GaussKreugerProvider::global();
    /// let sweref99tm = provider.get(CrsProjection::Sweref99Tm).unwrap();
    ///
    /// let (lat, lon) = sweref99tm.grid_to_geodetic(6580822.0, 674032.0);
    ///
    /// assert!((lat - 59.330231).abs() < 1e-5);
    /// assert!((lon - 18.059196).abs() < 1e-5);
    /// ```
    pub fn grid_to_geodetic(&self, northing: f64, easting: f64) -> (f64, f64) {
        let [a_star, b_star, c_star, d_star] = self.lat_coeff_star;

        let lambda_zero = self.params.central_meridian.to_radians();
        let xi = (northing - self.params.false_northing) / (self.params.scale * self.a_roof);
        let eta = (easting - self.params.false_easting) / (self.params.scale * self.a_roof);

        let zeta_prim = kruger_terms(Complex::new(xi, eta), &self.delta)
            .into_iter()
            .fold(Complex::new(xi, eta), |acc, term| acc - term);
        let (xi_prim, eta_prim) = (zeta_prim.re, zeta_prim.im);

        let phi_star = (xi_prim.sin() / eta_prim.exp_cosh()).asin();
        let delta_lambda = (eta_prim.exp_sinh() / xi_prim.cos()).atan();

        let lon_radian = lambda_zero + delta_lambda;
        // Same powi forms as the forward direction
        let sin_phi_star = phi_star.sin();
        let lat_radian = phi_star
            + sin_phi_star
                * phi_star.cos()
                * (a_star
                    + b_star * sin_phi_star.powi(2)
                    + c_star * sin_phi_star.powi(4)
                    + d_star * sin_phi_star.powi(6));

        (lat_radian * 180.0 / PI, lon_radian * 180.0 / PI)
    }
}

// The terms c_j * sin(2j * zeta) of the Krüger series, j = 1..=ORDER, with
// the complex sine expanded into real trigonometric and hyperbolic parts.
fn kruger_terms(zeta: Complex<f64>, coefficients: &[f64; ORDER]) -> [Complex<f64>; ORDER] {
    let mut terms = [Complex::zero(); ORDER];

    for (j, (term, coeff)) in terms.iter_mut().zip(coefficients).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let k = 2.0 * (j + 1) as f64;
        let (xi, eta) = (k * zeta.re, k * zeta.im);

        *term = Complex::new(coeff * xi.sin() * eta.exp_cosh(), coeff * xi.cos() * eta.exp_sinh());
    }

    terms
}
