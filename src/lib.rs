//! Transformations between the coordinate reference systems used in Sweden:
//! WGS84, SWEREF99 (national TM and 12 local zones) and RT90 (6 local zones).
//!
//! ```
//! use sweden_crs_transformations::{Coordinate, CrsProjection};
//!
//! let stockholm = Coordinate::create(CrsProjection::Wgs84, 59.330231, 18.059196);
//! let rt90 = stockholm.transform(CrsProjection::Rt90_2_5GonV).unwrap();
//!
//! assert!((rt90.latitude_y() - 6580994.0).abs() < 0.5);
//! assert!((rt90.longitude_x() - 1628294.0).abs() < 0.5);
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod coordinate;
pub mod crs_projection;
pub mod provider;
pub mod transform;
pub(crate) mod utility;

pub use coordinate::Coordinate;
pub use crs_projection::CrsProjection;
pub use provider::GaussKreugerProvider;
pub use transform::{ProjectionRole, TransformStrategy, Transformer};

pub mod projections {
    mod gauss_kreuger;
    mod parameters;

    pub use gauss_kreuger::GaussKreuger;
    pub use parameters::ProjectionParameters;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not find CrsProjection for EPSG {0}")]
    UnknownEpsg(i32),
    #[error("Unhandled source/target projection transformation: {from} ==> {to}")]
    UnsupportedTransform {
        from: CrsProjection,
        to: CrsProjection,
    },
    #[error("Precondition violated for {role} {projection}. It is not valid as {role} for the strategy {strategy}")]
    PreconditionViolated {
        role: ProjectionRole,
        projection: CrsProjection,
        strategy: TransformStrategy,
    },
    #[error("No Gauss-Krüger projection exists for {0}")]
    NoGridProjection(CrsProjection),
    #[error("CRS projection is invalid: {0}")]
    InvalidProjection(String),
    #[error("Coordinate string is invalid: {0}")]
    InvalidCoordinate(String),
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses anything implementing [`ParseCoord`].
///
/// # Usage
///
/// ```
/// use sweden_crs_transformations::{Coordinate, CrsProjection};
///
/// let crs: CrsProjection = sweden_crs_transformations::from_str("EPSG:3021").unwrap();
/// assert_eq!(crs, CrsProjection::Rt90_2_5GonV);
///
/// let coord: Coordinate = sweden_crs_transformations::from_str(
///     "Coordinate [ Latitude: 59.330231 , Longitude: 18.059196 , CRS: WGS84(EPSG:4326) ]"
/// ).unwrap();
/// assert_eq!(coord.crs(), CrsProjection::Wgs84);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
