// GRS 80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS 80 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

pub(crate) mod epsg {
    pub const WGS84: i32 = 4326;
    /// National SWEREF99 TM, first of the SWEREF99 range
    pub const SWEREF99_TM: i32 = 3006;
    pub const SWEREF99_LAST: i32 = 3018;
    pub const RT90_FIRST: i32 = 3019;
    pub const RT90_LAST: i32 = 3024;
}

// SWEREF99 TM central scale factor
pub(crate) const SWEREF99_TM_K0: f64 = 9996.0 / 10_000.;
pub(crate) const SWEREF99_TM_FALSE_EASTING: f64 = 500_000.;
// Local SWEREF99 zones share scale and offsets, only the meridian differs
pub(crate) const SWEREF99_LOCAL_K0: f64 = 1.;
pub(crate) const SWEREF99_LOCAL_FALSE_EASTING: f64 = 150_000.;
