use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{transform::Transformer, CrsProjection, Error, ParseCoord, ThisOrThat};

/// A location expressed in one of the supported [`CrsProjection`]s.
///
/// For WGS84 the values are latitude and longitude in decimal degrees, for
/// SWEREF99 and RT90 they are northing (Y) and easting (X) in meters. The
/// Y/latitude value always comes first.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub(crate) crs: CrsProjection,
    #[cfg_attr(feature = "serde", serde(alias = "lat", alias = "y"))]
    pub(crate) latitude_y: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon", alias = "x"))]
    pub(crate) longitude_x: f64,
}

impl Coordinate {
    /// Creates a coordinate. No range check is made on the values.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{Coordinate, CrsProjection};
    ///
    /// let coord = Coordinate::create(CrsProjection::Sweref99Tm, 6580822.0, 674032.0);
    ///
    /// assert_eq!(coord.crs(), CrsProjection::Sweref99Tm);
    /// assert_eq!(coord.latitude_y(), 6580822.0);
    /// assert_eq!(coord.longitude_x(), 674032.0);
    /// ```
    pub fn create(crs: CrsProjection, latitude_y: f64, longitude_x: f64) -> Coordinate {
        Self {
            crs,
            latitude_y,
            longitude_x,
        }
    }

    /// Creates a coordinate in the CRS with the given EPSG number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEpsg`] if the EPSG number is not supported.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{Coordinate, CrsProjection};
    ///
    /// let coord = Coordinate::create_from_epsg(3006, 60.0, 20.0).unwrap();
    /// assert_eq!(coord.crs(), CrsProjection::Sweref99Tm);
    ///
    /// assert!(Coordinate::create_from_epsg(1234, 60.0, 20.0).is_err());
    /// ```
    pub fn create_from_epsg(epsg: i32, latitude_y: f64, longitude_x: f64) -> Result<Coordinate, Error> {
        let crs = CrsProjection::from_epsg_number(epsg)?;
        Ok(Coordinate::create(crs, latitude_y, longitude_x))
    }

    #[inline]
    pub fn crs(&self) -> CrsProjection {
        self.crs
    }

    /// Latitude for WGS84, northing (Y) otherwise.
    #[inline]
    pub fn latitude_y(&self) -> f64 {
        self.latitude_y
    }

    /// Longitude for WGS84, easting (X) otherwise.
    #[inline]
    pub fn longitude_x(&self) -> f64 {
        self.longitude_x
    }

    /// Transforms the coordinate to another CRS, using the process-wide
    /// [`GaussKreugerProvider`](crate::GaussKreugerProvider).
    ///
    /// # Errors
    ///
    /// Only fails if the source/target pair has no transformation strategy,
    /// which cannot happen for the supported projections.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{Coordinate, CrsProjection};
    ///
    /// let stockholm = Coordinate::create(CrsProjection::Wgs84, 59.330231, 18.059196);
    ///
    /// let sweref = stockholm.transform(CrsProjection::Sweref99Tm).unwrap();
    /// assert!((sweref.latitude_y() - 6580822.0).abs() < 0.5);
    /// assert!((sweref.longitude_x() - 674032.0).abs() < 0.5);
    ///
    /// let back = sweref.transform(CrsProjection::Wgs84).unwrap();
    /// assert!((back.latitude_y() - 59.330231).abs() < 0.000007);
    /// assert!((back.longitude_x() - 18.059196).abs() < 0.000007);
    /// ```
    pub fn transform(&self, target: CrsProjection) -> Result<Coordinate, Error> {
        Transformer::global().transform(self, target)
    }

    /// Transforms the coordinate to the CRS with the given EPSG number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEpsg`] if the EPSG number is not supported.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::{Coordinate, CrsProjection};
    ///
    /// let rt90 = Coordinate::create(CrsProjection::Rt90_2_5GonV, 6580994.0, 1628294.0);
    /// let wgs84 = rt90.transform_to_epsg(4326).unwrap();
    ///
    /// assert_eq!(wgs84.crs(), CrsProjection::Wgs84);
    /// assert!(rt90.transform_to_epsg(9999).is_err());
    /// ```
    pub fn transform_to_epsg(&self, epsg: i32) -> Result<Coordinate, Error> {
        self.transform(CrsProjection::from_epsg_number(epsg)?)
    }

    /// Renders the coordinate with a caller-supplied function instead of the
    /// default [`Display`] format.
    ///
    /// # Example
    ///
    /// ```
    /// use sweden_crs_transformations::{Coordinate, CrsProjection};
    ///
    /// let coord = Coordinate::create(CrsProjection::Wgs84, 59.330231, 18.059196);
    /// let custom = coord.format_with(|c| format!("{} , {}", c.longitude_x(), c.latitude_y()));
    ///
    /// assert_eq!(custom, "18.059196 , 59.330231");
    /// ```
    pub fn format_with<F>(&self, formatter: F) -> String
    where
        F: FnOnce(&Coordinate) -> String,
    {
        formatter(self)
    }

    fn labels(crs: CrsProjection) -> (&'static str, &'static str) {
        crs.is_wgs84().ternary(("Latitude", "Longitude"), ("Y", "X"))
    }
}

// Structural equality on the exact bit patterns, with all NaNs treated alike,
// so that Eq and Hash stay consistent.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.crs == other.crs
            && canonical_bits(self.latitude_y) == canonical_bits(other.latitude_y)
            && canonical_bits(self.longitude_x) == canonical_bits(other.longitude_x)
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.crs.hash(state);
        canonical_bits(self.latitude_y).hash(state);
        canonical_bits(self.longitude_x).hash(state);
    }
}

/// Renders e.g. `Coordinate [ Y: 6579457.649 , X: 153369.673 , CRS: SWEREF_99_18_00(EPSG:3011) ]`
/// or `Coordinate [ Latitude: 59.330231 , Longitude: 18.059196 , CRS: WGS84(EPSG:4326) ]`.
impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y_label, x_label) = Coordinate::labels(self.crs);
        let mut buf = ryu::Buffer::new();
        let y = buf.format(self.latitude_y);
        let mut buf = ryu::Buffer::new();
        let x = buf.format(self.longitude_x);
        write!(
            f,
            "Coordinate [ {y_label}: {y} , {x_label}: {x} , CRS: {} ]",
            self.crs,
        )
    }
}

impl ParseCoord for Coordinate {
    /// Parses the format produced by [`Display`].
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let invalid = |msg: &str| Error::InvalidCoordinate(format!("{msg} in '{value}'"));

        let inner = value
            .trim()
            .strip_prefix("Coordinate [")
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| invalid("Expected 'Coordinate [ ... ]'"))?;

        let mut parts = inner.split(" , ").map(|part| {
            part.split_once(':')
                .map(|(label, rest)| (label.trim(), rest.trim()))
                .ok_or_else(|| invalid("Expected 'label: value'"))
        });
        let mut next_part = || parts.next().unwrap_or_else(|| Err(invalid("Missing field")));

        let (y_label, y) = next_part()?;
        let (x_label, x) = next_part()?;
        let (crs_label, crs) = next_part()?;
        if parts.next().is_some() {
            return Err(invalid("Unexpected trailing field"));
        }
        if crs_label != "CRS" {
            return Err(invalid("Expected 'CRS' label"));
        }

        // "NAME(EPSG:code)", or a plain name/EPSG reference
        let crs = match crs.strip_suffix(')').and_then(|rest| rest.split_once('(')) {
            Some((name, epsg)) => {
                let by_name = CrsProjection::parse_coord(name)?;
                if CrsProjection::parse_coord(epsg)? != by_name {
                    return Err(invalid("CRS name does not match its EPSG number"));
                }
                by_name
            }
            None => CrsProjection::parse_coord(crs)?,
        };

        if (y_label, x_label) != Coordinate::labels(crs) {
            return Err(invalid("Labels do not match the CRS"));
        }

        let latitude_y = y.parse::<f64>().map_err(|e| invalid(&format!("Invalid {y_label} value ({e})")))?;
        let longitude_x = x.parse::<f64>().map_err(|e| invalid(&format!("Invalid {x_label} value ({e})")))?;

        Ok(Coordinate::create(crs, latitude_y, longitude_x))
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse_coord(s)
    }
}
