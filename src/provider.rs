use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    projections::{GaussKreuger, ProjectionParameters},
    CrsProjection, Error,
};

lazy_static! {
    static ref GLOBAL: GaussKreugerProvider = GaussKreugerProvider::new();
}

/// Holds one [`GaussKreuger`] for each grid projection (every
/// [`CrsProjection`] except WGS84). Everything is built up front and never
/// mutated afterwards, so a provider can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct GaussKreugerProvider {
    projections: HashMap<CrsProjection, GaussKreuger>,
}

impl GaussKreugerProvider {
    /// Builds the projections for all SWEREF99 and RT90 zones.
    pub fn new() -> GaussKreugerProvider {
        let projections: HashMap<_, _> = CrsProjection::all()
            .iter()
            .filter_map(|&crs| {
                ProjectionParameters::for_projection(crs).map(|params| (crs, GaussKreuger::new(params)))
            })
            .collect();

        tracing::debug!(count = projections.len(), "built Gauss-Krüger projections");

        Self { projections }
    }

    /// The process-wide provider, initialized on first use. This is what
    /// [`Coordinate::transform`](crate::Coordinate::transform) uses.
    pub fn global() -> &'static GaussKreugerProvider {
        &GLOBAL
    }

    /// Returns the projection for a SWEREF99 or RT90 CRS.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoGridProjection`] for WGS84, which is geodetic.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{CrsProjection, GaussKreugerProvider};
    ///
    /// let provider = GaussKreugerProvider::new();
    ///
    /// let rt90 = provider.get(CrsProjection::Rt90_2_5GonV).unwrap();
    /// assert_eq!(rt90.parameters().scale(), 1.00000561024);
    ///
    /// assert!(provider.get(CrsProjection::Wgs84).is_err());
    /// ```
    pub fn get(&self, crs: CrsProjection) -> Result<&GaussKreuger, Error> {
        self.projections.get(&crs).ok_or(Error::NoGridProjection(crs))
    }
}

impl Default for GaussKreugerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn one_projection_per_grid_crs() {
        let provider = GaussKreugerProvider::new();

        for &crs in CrsProjection::all() {
            match provider.get(crs) {
                Ok(gk) => {
                    assert!(crs.is_sweref_or_rt90());
                    assert_eq!(Some(*gk.parameters()), ProjectionParameters::for_projection(crs));
                }
                Err(Error::NoGridProjection(missing)) => {
                    assert!(crs.is_wgs84());
                    assert_eq!(missing, crs);
                }
                Err(e) => panic!("unexpected error {e}"),
            }
        }
    }

    #[test]
    fn global_is_shared() {
        let first = GaussKreugerProvider::global() as *const GaussKreugerProvider;

        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| GaussKreugerProvider::global() as *const GaussKreugerProvider as usize))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), first as usize);
        }
    }
}
