use std::{fmt::Display, str::FromStr};

use crate::{constants::epsg, Error, ParseCoord};

/// Number of WGS84 projections (just the one, EPSG 4326)
pub const NUMBER_OF_WGS84_PROJECTIONS: usize = 1;
/// Number of SWEREF99 projections, EPSG 3006-3018
pub const NUMBER_OF_SWEREF99_PROJECTIONS: usize = 13;
/// Number of RT90 projections, EPSG 3019-3024
pub const NUMBER_OF_RT90_PROJECTIONS: usize = 6;

/// The coordinate reference systems supported by this crate: WGS84, the
/// national SWEREF99 TM, the 12 local SWEREF99 zones and the 6 local RT90
/// zones.
///
/// The discriminant of every variant is its EPSG number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum CrsProjection {
    Wgs84 = 4326,

    Sweref99Tm = 3006,

    Sweref99_12_00 = 3007,
    Sweref99_13_30 = 3008,
    Sweref99_15_00 = 3009,
    Sweref99_16_30 = 3010,
    Sweref99_18_00 = 3011,
    Sweref99_14_15 = 3012,
    Sweref99_15_45 = 3013,
    Sweref99_17_15 = 3014,
    Sweref99_18_45 = 3015,
    Sweref99_20_15 = 3016,
    Sweref99_21_45 = 3017,
    Sweref99_23_15 = 3018,

    Rt90_7_5GonV = 3019,
    Rt90_5_0GonV = 3020,
    Rt90_2_5GonV = 3021,
    Rt90_0_0GonV = 3022,
    Rt90_2_5GonO = 3023,
    Rt90_5_0GonO = 3024,
}

// WGS84 first, then ascending EPSG number. Tests depend on this order.
const ALL: [CrsProjection; 20] = [
    CrsProjection::Wgs84,
    CrsProjection::Sweref99Tm,
    CrsProjection::Sweref99_12_00,
    CrsProjection::Sweref99_13_30,
    CrsProjection::Sweref99_15_00,
    CrsProjection::Sweref99_16_30,
    CrsProjection::Sweref99_18_00,
    CrsProjection::Sweref99_14_15,
    CrsProjection::Sweref99_15_45,
    CrsProjection::Sweref99_17_15,
    CrsProjection::Sweref99_18_45,
    CrsProjection::Sweref99_20_15,
    CrsProjection::Sweref99_21_45,
    CrsProjection::Sweref99_23_15,
    CrsProjection::Rt90_7_5GonV,
    CrsProjection::Rt90_5_0GonV,
    CrsProjection::Rt90_2_5GonV,
    CrsProjection::Rt90_0_0GonV,
    CrsProjection::Rt90_2_5GonO,
    CrsProjection::Rt90_5_0GonO,
];

impl CrsProjection {
    /// Returns every supported projection, WGS84 first and the Swedish
    /// projections after it in increasing EPSG order.
    ///
    /// # Example
    ///
    /// ```
    /// use sweden_crs_transformations::CrsProjection;
    ///
    /// let all = CrsProjection::all();
    /// assert_eq!(all.len(), 20);
    /// assert_eq!(all[0], CrsProjection::Wgs84);
    /// assert_eq!(all[1], CrsProjection::Sweref99Tm);
    /// assert_eq!(all[19], CrsProjection::Rt90_5_0GonO);
    /// ```
    pub fn all() -> &'static [CrsProjection] {
        &ALL
    }

    /// Looks up a projection from its EPSG number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEpsg`] if the number is not one of the 20
    /// supported codes.
    ///
    /// # Usage
    ///
    /// ```
    /// use sweden_crs_transformations::CrsProjection;
    ///
    /// assert_eq!(CrsProjection::from_epsg_number(3006).unwrap(), CrsProjection::Sweref99Tm);
    /// assert!(CrsProjection::from_epsg_number(3025).is_err());
    /// ```
    pub fn from_epsg_number(epsg: i32) -> Result<CrsProjection, Error> {
        ALL.iter()
            .copied()
            .find(|crs| crs.epsg_number() == epsg)
            .ok_or(Error::UnknownEpsg(epsg))
    }

    /// Returns the EPSG number.
    ///
    /// # Example
    /// ```
    /// use sweden_crs_transformations::CrsProjection;
    ///
    /// assert_eq!(CrsProjection::Wgs84.epsg_number(), 4326);
    /// assert_eq!(CrsProjection::Rt90_2_5GonV.epsg_number(), 3021);
    /// ```
    #[inline]
    pub fn epsg_number(self) -> i32 {
        self as i32
    }

    #[inline]
    pub fn is_wgs84(self) -> bool {
        self.epsg_number() == epsg::WGS84
    }

    /// SWEREF99 TM or one of the twelve local SWEREF99 zones.
    #[inline]
    pub fn is_sweref(self) -> bool {
        (epsg::SWEREF99_TM..=epsg::SWEREF99_LAST).contains(&self.epsg_number())
    }

    #[inline]
    pub fn is_rt90(self) -> bool {
        (epsg::RT90_FIRST..=epsg::RT90_LAST).contains(&self.epsg_number())
    }

    /// Grid projections are the ones handled by the Gauss-Krüger math, i.e.
    /// everything but WGS84.
    #[inline]
    pub fn is_sweref_or_rt90(self) -> bool {
        self.is_sweref() || self.is_rt90()
    }

    /// Returns the upper-case name, e.g. `"SWEREF_99_TM"`.
    ///
    /// # Example
    /// ```
    /// use sweden_crs_transformations::CrsProjection;
    ///
    /// assert_eq!(CrsProjection::Sweref99_14_15.as_str(), "SWEREF_99_14_15");
    /// assert_eq!(CrsProjection::Rt90_0_0GonV.as_str(), "RT90_0_0_GON_V");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            CrsProjection::Wgs84 => "WGS84",
            CrsProjection::Sweref99Tm => "SWEREF_99_TM",
            CrsProjection::Sweref99_12_00 => "SWEREF_99_12_00",
            CrsProjection::Sweref99_13_30 => "SWEREF_99_13_30",
            CrsProjection::Sweref99_15_00 => "SWEREF_99_15_00",
            CrsProjection::Sweref99_16_30 => "SWEREF_99_16_30",
            CrsProjection::Sweref99_18_00 => "SWEREF_99_18_00",
            CrsProjection::Sweref99_14_15 => "SWEREF_99_14_15",
            CrsProjection::Sweref99_15_45 => "SWEREF_99_15_45",
            CrsProjection::Sweref99_17_15 => "SWEREF_99_17_15",
            CrsProjection::Sweref99_18_45 => "SWEREF_99_18_45",
            CrsProjection::Sweref99_20_15 => "SWEREF_99_20_15",
            CrsProjection::Sweref99_21_45 => "SWEREF_99_21_45",
            CrsProjection::Sweref99_23_15 => "SWEREF_99_23_15",
            CrsProjection::Rt90_7_5GonV => "RT90_7_5_GON_V",
            CrsProjection::Rt90_5_0GonV => "RT90_5_0_GON_V",
            CrsProjection::Rt90_2_5GonV => "RT90_2_5_GON_V",
            CrsProjection::Rt90_0_0GonV => "RT90_0_0_GON_V",
            CrsProjection::Rt90_2_5GonO => "RT90_2_5_GON_O",
            CrsProjection::Rt90_5_0GonO => "RT90_5_0_GON_O",
        }
    }
}

impl ParseCoord for CrsProjection {
    /// Accepts a name (`"SWEREF_99_TM"`, case-insensitive), an EPSG
    /// reference (`"EPSG:3006"`) or a bare EPSG number (`"3006"`).
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let value = value.trim();

        let number = value
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("EPSG:"))
            .map_or(value, |_| value[5..].trim());

        if let Ok(epsg) = number.parse::<i32>() {
            return CrsProjection::from_epsg_number(epsg);
        }

        ALL.iter()
            .copied()
            .find(|crs| crs.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::InvalidProjection(format!("Unknown projection name or EPSG reference '{value}'")))
    }
}

impl FromStr for CrsProjection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CrsProjection::parse_coord(s)
    }
}

impl Display for CrsProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(EPSG:{})", self.as_str(), self.epsg_number())
    }
}

// Serialized by name, deserialized by anything `parse_coord` accepts
#[cfg(feature = "serde")]
impl serde::Serialize for CrsProjection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CrsProjection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        CrsProjection::parse_coord(&value).map_err(serde::de::Error::custom)
    }
}
