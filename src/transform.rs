use std::fmt::Display;

use crate::{provider::GaussKreugerProvider, Coordinate, CrsProjection, Error};

/// Whether a projection was passed as the source or the target of a
/// transformation. Used in precondition errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionRole {
    Source,
    Target,
}

impl Display for ProjectionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionRole::Source => write!(f, "source projection"),
            ProjectionRole::Target => write!(f, "target projection"),
        }
    }
}

/// The three ways of getting from one CRS to another.
///
/// There is no direct formula between two grid projections, so
/// [`TransformStrategy::GridToGridViaWgs84`] always goes through WGS84.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformStrategy {
    /// WGS84 to SWEREF99 or RT90, projecting with the target's parameters.
    Wgs84ToGrid,
    /// SWEREF99 or RT90 to WGS84, unprojecting with the source's parameters.
    GridToWgs84,
    /// SWEREF99 or RT90 to SWEREF99 or RT90, by way of WGS84.
    GridToGridViaWgs84,
}

impl TransformStrategy {
    /// Picks the strategy for a pair of distinct projections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransform`] if no strategy covers the pair,
    /// which includes WGS84 to WGS84 (identity is handled before dispatch).
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{CrsProjection, TransformStrategy};
    ///
    /// let strategy = TransformStrategy::select(CrsProjection::Sweref99Tm, CrsProjection::Rt90_2_5GonV);
    /// assert_eq!(strategy.unwrap(), TransformStrategy::GridToGridViaWgs84);
    ///
    /// assert!(TransformStrategy::select(CrsProjection::Wgs84, CrsProjection::Wgs84).is_err());
    /// ```
    pub fn select(source: CrsProjection, target: CrsProjection) -> Result<TransformStrategy, Error> {
        match (source.is_sweref_or_rt90(), target.is_sweref_or_rt90()) {
            (false, true) if source.is_wgs84() => Ok(TransformStrategy::Wgs84ToGrid),
            (true, false) if target.is_wgs84() => Ok(TransformStrategy::GridToWgs84),
            (true, true) => Ok(TransformStrategy::GridToGridViaWgs84),
            _ => Err(Error::UnsupportedTransform { from: source, to: target }),
        }
    }

    fn accepts(self, role: ProjectionRole, crs: CrsProjection) -> bool {
        match (self, role) {
            (TransformStrategy::Wgs84ToGrid, ProjectionRole::Source)
            | (TransformStrategy::GridToWgs84, ProjectionRole::Target) => crs.is_wgs84(),
            _ => crs.is_sweref_or_rt90(),
        }
    }

    fn check_preconditions(self, source: CrsProjection, target: CrsProjection) -> Result<(), Error> {
        for (role, projection) in [(ProjectionRole::Source, source), (ProjectionRole::Target, target)] {
            if !self.accepts(role, projection) {
                return Err(Error::PreconditionViolated {
                    role,
                    projection,
                    strategy: self,
                });
            }
        }

        Ok(())
    }

    /// Runs this strategy on `coord`. The source and target are checked
    /// against what the strategy handles before any math is done.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolated`] if the source or target
    /// projection is of the wrong family for this strategy.
    pub fn apply(
        self,
        provider: &GaussKreugerProvider,
        coord: &Coordinate,
        target: CrsProjection,
    ) -> Result<Coordinate, Error> {
        let source = coord.crs();
        self.check_preconditions(source, target)?;

        match self {
            TransformStrategy::Wgs84ToGrid => {
                let (northing, easting) = provider
                    .get(target)?
                    .geodetic_to_grid(coord.latitude_y(), coord.longitude_x());

                Ok(Coordinate::create(target, northing, easting))
            }
            TransformStrategy::GridToWgs84 => {
                let (lat, lon) = provider
                    .get(source)?
                    .grid_to_geodetic(coord.latitude_y(), coord.longitude_x());

                Ok(Coordinate::create(CrsProjection::Wgs84, lat, lon))
            }
            TransformStrategy::GridToGridViaWgs84 => {
                let wgs84 = TransformStrategy::GridToWgs84.apply(provider, coord, CrsProjection::Wgs84)?;
                TransformStrategy::Wgs84ToGrid.apply(provider, &wgs84, target)
            }
        }
    }
}

impl Display for TransformStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransformStrategy::Wgs84ToGrid => "WGS84 to SWEREF99/RT90",
            TransformStrategy::GridToWgs84 => "SWEREF99/RT90 to WGS84",
            TransformStrategy::GridToGridViaWgs84 => "SWEREF99/RT90 to SWEREF99/RT90 via WGS84",
        };
        f.write_str(name)
    }
}

/// Transforms coordinates using the projections of one
/// [`GaussKreugerProvider`].
///
/// Each call is independent; the transformer itself holds nothing but the
/// borrowed provider.
#[derive(Clone, Copy, Debug)]
pub struct Transformer<'a> {
    provider: &'a GaussKreugerProvider,
}

impl<'a> Transformer<'a> {
    pub fn new(provider: &'a GaussKreugerProvider) -> Transformer<'a> {
        Self { provider }
    }

    /// A transformer over [`GaussKreugerProvider::global`].
    pub fn global() -> Transformer<'static> {
        Transformer::new(GaussKreugerProvider::global())
    }

    /// Transforms `coord` into `target`. A coordinate already in `target` is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Fails only if the projection pair is not covered by any
    /// [`TransformStrategy`].
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{Coordinate, CrsProjection, GaussKreugerProvider, Transformer};
    ///
    /// let provider = GaussKreugerProvider::new();
    /// let transformer = Transformer::new(&provider);
    ///
    /// let stockholm = Coordinate::create(CrsProjection::Wgs84, 59.330231, 18.059196);
    /// let rt90 = transformer.transform(&stockholm, CrsProjection::Rt90_2_5GonV).unwrap();
    ///
    /// assert_eq!(rt90.crs(), CrsProjection::Rt90_2_5GonV);
    /// assert!((rt90.latitude_y() - 6580994.18).abs() < 1e-3);
    /// assert!((rt90.longitude_x() - 1628293.886).abs() < 1e-3);
    /// ```
    pub fn transform(&self, coord: &Coordinate, target: CrsProjection) -> Result<Coordinate, Error> {
        let source = coord.crs();
        if source == target {
            tracing::trace!(crs = %source, "identity transformation");
            return Ok(*coord);
        }

        let strategy = TransformStrategy::select(source, target)?;
        tracing::trace!(from = %source, to = %target, %strategy, "transforming coordinate");

        strategy.apply(self.provider, coord, target)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn grid_projections() -> impl Iterator<Item = CrsProjection> {
        CrsProjection::all().iter().copied().filter(|crs| crs.is_sweref_or_rt90())
    }

    #[test]
    fn select_covers_every_distinct_pair() {
        for &source in CrsProjection::all() {
            for &target in CrsProjection::all() {
                let selected = TransformStrategy::select(source, target);

                if source.is_wgs84() && target.is_wgs84() {
                    assert!(matches!(selected, Err(Error::UnsupportedTransform { .. })));
                } else if source.is_wgs84() {
                    assert_eq!(selected.unwrap(), TransformStrategy::Wgs84ToGrid);
                } else if target.is_wgs84() {
                    assert_eq!(selected.unwrap(), TransformStrategy::GridToWgs84);
                } else {
                    assert_eq!(selected.unwrap(), TransformStrategy::GridToGridViaWgs84);
                }
            }
        }
    }

    #[test]
    fn preconditions_are_checked() {
        let provider = GaussKreugerProvider::new();
        let wgs84 = Coordinate::create(CrsProjection::Wgs84, 59.330_231, 18.059_196);
        let sweref = Coordinate::create(CrsProjection::Sweref99Tm, 6_580_822., 674_032.);

        let err = TransformStrategy::Wgs84ToGrid
            .apply(&provider, &sweref, CrsProjection::Rt90_2_5GonV)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::PreconditionViolated {
                role: ProjectionRole::Source,
                projection: CrsProjection::Sweref99Tm,
                strategy: TransformStrategy::Wgs84ToGrid,
            }
        ));
        assert_eq!(
            err.to_string(),
            "Precondition violated for source projection SWEREF_99_TM(EPSG:3006). \
             It is not valid as source projection for the strategy WGS84 to SWEREF99/RT90"
        );

        let err = TransformStrategy::GridToWgs84
            .apply(&provider, &sweref, CrsProjection::Rt90_2_5GonV)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::PreconditionViolated { role: ProjectionRole::Target, .. }
        ));

        let err = TransformStrategy::GridToGridViaWgs84
            .apply(&provider, &wgs84, CrsProjection::Sweref99Tm)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::PreconditionViolated { role: ProjectionRole::Source, .. }
        ));

        let err = TransformStrategy::GridToGridViaWgs84
            .apply(&provider, &sweref, CrsProjection::Wgs84)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::PreconditionViolated { role: ProjectionRole::Target, .. }
        ));
    }

    #[test]
    fn identity_returns_input() {
        let transformer = Transformer::global();

        for &crs in CrsProjection::all() {
            let coord = Coordinate::create(crs, 6_500_000.123, 150_000.456);
            assert_eq!(transformer.transform(&coord, crs).unwrap(), coord);
        }
    }

    #[test]
    fn grid_to_grid_matches_two_explicit_hops() {
        let provider = GaussKreugerProvider::new();
        let transformer = Transformer::new(&provider);
        let source = Coordinate::create(CrsProjection::Sweref99_18_00, 6_579_457.649, 153_369.673);

        for target in grid_projections().filter(|crs| *crs != source.crs()) {
            let direct = transformer.transform(&source, target).unwrap();
            let wgs84 = transformer.transform(&source, CrsProjection::Wgs84).unwrap();
            let two_hops = transformer.transform(&wgs84, target).unwrap();

            assert_eq!(direct, two_hops, "{target}");
        }
    }

    #[test]
    fn stockholm_to_sweref99tm_via_rt90() {
        let transformer = Transformer::global();
        let rt90 = Coordinate::create(CrsProjection::Rt90_2_5GonV, 6_580_994., 1_628_294.);

        let sweref = transformer.transform(&rt90, CrsProjection::Sweref99Tm).unwrap();

        assert_eq!(sweref.crs(), CrsProjection::Sweref99Tm);
        assert_abs_diff_eq!(sweref.latitude_y(), 6_580_822., epsilon = 0.5);
        assert_abs_diff_eq!(sweref.longitude_x(), 674_032., epsilon = 0.5);
    }
}
