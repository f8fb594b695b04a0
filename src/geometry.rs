use geo::algorithm::intersects::Intersects;
use geo::coord;

use crate::models::LatLon;

fn rect_from_corners(north_west: &LatLon, south_east: &LatLon) -> geo::Rect<f64> {
    geo::Rect::new(
        coord! { x: north_west.longitude, y: south_east.latitude },
        coord! { x: south_east.longitude, y: north_west.latitude },
    )
}

/// True if `p` lies within the rectangle, boundary included.
pub fn rectangle_contains_point(north_west: &LatLon, south_east: &LatLon, p: &LatLon) -> bool {
    between(south_east.latitude, north_west.latitude, p.latitude)
        && between(north_west.longitude, south_east.longitude, p.longitude)
}

/// True if the segment `a`-`b` touches the rectangle anywhere.
pub fn rectangle_intersects_line(
    north_west: &LatLon,
    south_east: &LatLon,
    a: &LatLon,
    b: &LatLon,
) -> bool {
    if rectangle_contains_point(north_west, south_east, a)
        || rectangle_contains_point(north_west, south_east, b)
    {
        return true;
    }

    let segment = geo::Line::new(
        coord! { x: a.longitude, y: a.latitude },
        coord! { x: b.longitude, y: b.latitude },
    );

    segment.intersects(&rect_from_corners(north_west, south_east))
}

pub fn gp_from_lat_lon(locn: &LatLon) -> geo_types::Point<f64> {
    (*locn).into()
}

fn between(bound1: f64, bound2: f64, x: f64) -> bool {
    if bound1 < bound2 {
        bound1 <= x && x <= bound2
    } else {
        bound2 <= x && x <= bound1
    }
}
