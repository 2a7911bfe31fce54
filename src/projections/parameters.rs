use crate::{
    constants::{
        GRS80_A, GRS80_F, SWEREF99_LOCAL_FALSE_EASTING, SWEREF99_LOCAL_K0, SWEREF99_TM_FALSE_EASTING,
        SWEREF99_TM_K0,
    },
    utility::dms,
    CrsProjection,
};

/// The constants defining one Gauss-Krüger grid: ellipsoid plus projection.
///
/// All Swedish grids supported here use the GRS 80 ellipsoid. RT90 is
/// expressed with GRS 80 too, through per-zone scale and offsets that absorb
/// the datum difference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParameters {
    /// Semi-major axis of the ellipsoid, meters
    pub(crate) axis: f64,
    pub(crate) flattening: f64,
    /// Central meridian, decimal degrees
    pub(crate) central_meridian: f64,
    /// Scale on the central meridian
    pub(crate) scale: f64,
    pub(crate) false_northing: f64,
    pub(crate) false_easting: f64,
}

impl ProjectionParameters {
    pub(crate) fn new(
        axis: f64,
        flattening: f64,
        central_meridian: f64,
        scale: f64,
        false_northing: f64,
        false_easting: f64,
    ) -> ProjectionParameters {
        Self {
            axis,
            flattening,
            central_meridian,
            scale,
            false_northing,
            false_easting,
        }
    }

    fn grs80(central_meridian: f64, scale: f64, false_northing: f64, false_easting: f64) -> ProjectionParameters {
        Self::new(GRS80_A, GRS80_F, central_meridian, scale, false_northing, false_easting)
    }

    fn sweref99_local(central_meridian: f64) -> ProjectionParameters {
        Self::grs80(central_meridian, SWEREF99_LOCAL_K0, 0., SWEREF99_LOCAL_FALSE_EASTING)
    }

    /// Parameters for a grid projection, or `None` for WGS84 which is
    /// geodetic and has no grid.
    ///
    /// # Example
    ///
    /// ```
    /// use sweden_crs_transformations::{CrsProjection, projections::ProjectionParameters};
    ///
    /// let tm = ProjectionParameters::for_projection(CrsProjection::Sweref99Tm).unwrap();
    /// assert_eq!(tm.central_meridian(), 15.0);
    /// assert_eq!(tm.false_easting(), 500_000.0);
    ///
    /// assert!(ProjectionParameters::for_projection(CrsProjection::Wgs84).is_none());
    /// ```
    #[allow(clippy::unreadable_literal)]
    pub fn for_projection(crs: CrsProjection) -> Option<ProjectionParameters> {
        let params = match crs {
            CrsProjection::Wgs84 => return None,

            CrsProjection::Rt90_7_5GonV => Self::grs80(dms::to_degrees(11., 18.375, 0.), 1.000006, -667.282, 1500025.141),
            CrsProjection::Rt90_5_0GonV => Self::grs80(dms::to_degrees(13., 33.376, 0.), 1.0000058, -667.130, 1500044.695),
            CrsProjection::Rt90_2_5GonV => Self::grs80(dms::to_degrees(15., 48., 22.624306), 1.00000561024, -667.711, 1500064.274),
            CrsProjection::Rt90_0_0GonV => Self::grs80(dms::to_degrees(18., 3.378, 0.), 1.0000054, -668.844, 1500083.521),
            CrsProjection::Rt90_2_5GonO => Self::grs80(dms::to_degrees(20., 18.379, 0.), 1.0000052, -670.706, 1500102.765),
            CrsProjection::Rt90_5_0GonO => Self::grs80(dms::to_degrees(22., 33.380, 0.), 1.0000049, -672.557, 1500121.846),

            CrsProjection::Sweref99Tm => Self::grs80(15.00, SWEREF99_TM_K0, 0., SWEREF99_TM_FALSE_EASTING),

            CrsProjection::Sweref99_12_00 => Self::sweref99_local(12.00),
            CrsProjection::Sweref99_13_30 => Self::sweref99_local(13.50),
            CrsProjection::Sweref99_15_00 => Self::sweref99_local(15.00),
            CrsProjection::Sweref99_16_30 => Self::sweref99_local(16.50),
            CrsProjection::Sweref99_18_00 => Self::sweref99_local(18.00),
            CrsProjection::Sweref99_14_15 => Self::sweref99_local(14.25),
            CrsProjection::Sweref99_15_45 => Self::sweref99_local(15.75),
            CrsProjection::Sweref99_17_15 => Self::sweref99_local(17.25),
            CrsProjection::Sweref99_18_45 => Self::sweref99_local(18.75),
            CrsProjection::Sweref99_20_15 => Self::sweref99_local(20.25),
            CrsProjection::Sweref99_21_45 => Self::sweref99_local(21.75),
            CrsProjection::Sweref99_23_15 => Self::sweref99_local(23.25),
        };

        Some(params)
    }

    #[inline]
    pub fn axis(&self) -> f64 {
        self.axis
    }

    #[inline]
    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    #[inline]
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    #[inline]
    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn every_grid_projection_has_parameters() {
        for &crs in CrsProjection::all() {
            let params = ProjectionParameters::for_projection(crs);
            assert_eq!(params.is_some(), crs.is_sweref_or_rt90(), "{crs}");

            if let Some(params) = params {
                assert_eq!(params.axis(), GRS80_A);
                assert_eq!(params.flattening(), GRS80_F);
            }
        }
    }

    #[test]
    fn sweref99_local_zones() {
        let expected = [
            (CrsProjection::Sweref99_12_00, 12.00),
            (CrsProjection::Sweref99_13_30, 13.50),
            (CrsProjection::Sweref99_15_00, 15.00),
            (CrsProjection::Sweref99_16_30, 16.50),
            (CrsProjection::Sweref99_18_00, 18.00),
            (CrsProjection::Sweref99_14_15, 14.25),
            (CrsProjection::Sweref99_15_45, 15.75),
            (CrsProjection::Sweref99_17_15, 17.25),
            (CrsProjection::Sweref99_18_45, 18.75),
            (CrsProjection::Sweref99_20_15, 20.25),
            (CrsProjection::Sweref99_21_45, 21.75),
            (CrsProjection::Sweref99_23_15, 23.25),
        ];

        for (crs, meridian) in expected {
            let params = ProjectionParameters::for_projection(crs).unwrap();
            assert_eq!(params.central_meridian(), meridian, "{crs}");
            assert_eq!(params.scale(), 1.0);
            assert_eq!(params.false_northing(), 0.0);
            assert_eq!(params.false_easting(), 150_000.0);
        }
    }

    #[test]
    fn rt90_zones() {
        let params = ProjectionParameters::for_projection(CrsProjection::Rt90_2_5GonV).unwrap();
        assert_relative_eq!(params.central_meridian(), 15.806_284_529_444_445, epsilon = 1e-12);
        assert_eq!(params.scale(), 1.000_005_610_24);
        assert_eq!(params.false_northing(), -667.711);
        assert_eq!(params.false_easting(), 1_500_064.274);

        let params = ProjectionParameters::for_projection(CrsProjection::Rt90_7_5GonV).unwrap();
        assert_relative_eq!(params.central_meridian(), 11.30625);

        // Zones step roughly 2.25 degrees east
        let meridians: Vec<f64> = CrsProjection::all()
            .iter()
            .filter(|crs| crs.is_rt90())
            .map(|crs| ProjectionParameters::for_projection(*crs).unwrap().central_meridian())
            .collect();
        assert!(meridians.windows(2).all(|w| (w[1] - w[0] - 2.25).abs() < 0.01));
    }
}
