use proptest::prelude::*;
use sweden_crs_transformations::{Coordinate, CrsProjection};

fn grid_projection() -> impl Strategy<Value = CrsProjection> {
    let grid: Vec<CrsProjection> = CrsProjection::all()
        .iter()
        .copied()
        .filter(|crs| crs.is_sweref_or_rt90())
        .collect();
    proptest::sample::select(grid)
}

proptest! {
    #[test]
    fn round_trip_through_grid(
        lat in 55.0f64..69.0,
        lon in 10.5f64..24.0,
        crs in grid_projection(),
    ) {
        let wgs84 = Coordinate::create(CrsProjection::Wgs84, lat, lon);
        let grid = wgs84.transform(crs).unwrap();
        let back = grid.transform(CrsProjection::Wgs84).unwrap();

        prop_assert_eq!(grid.crs(), crs);
        prop_assert_eq!(back.crs(), CrsProjection::Wgs84);
        prop_assert!((back.latitude_y() - lat).abs() < 0.000_007);
        prop_assert!((back.longitude_x() - lon).abs() < 0.000_007);
    }

    #[test]
    fn grid_to_grid_is_closed(
        lat in 55.0f64..69.0,
        lon in 10.5f64..24.0,
        source in grid_projection(),
        target in grid_projection(),
    ) {
        let start = Coordinate::create(CrsProjection::Wgs84, lat, lon).transform(source).unwrap();
        let moved = start.transform(target).unwrap();

        prop_assert_eq!(moved.crs(), target);
        prop_assert!(moved.latitude_y().is_finite());
        prop_assert!(moved.longitude_x().is_finite());
    }
}
