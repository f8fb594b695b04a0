use crate::error::Error;
use crate::map_view::{DisplayDensity, MarkerIcon, MarkerId, StaticViewport};
use crate::models::{LatLon, RouteNumber, StopNumber};
use crate::plotters::BusStopPlotter;
use crate::stop_manager::StopManager;

// Three stops along Broadway plus one at UBC, which is west of the test viewport.
fn stops() -> StopManager {
    let mut stops = StopManager::new();

    let stop = stops.get_stop_with_number(
        StopNumber(50913),
        "WB W Broadway FS Granville St",
        LatLon::new(49.2635, -123.1387),
    );
    stop.add_route(RouteNumber::new("099"));
    stop.add_route(RouteNumber::new("009"));

    let stop = stops.get_stop_with_number(
        StopNumber(50039),
        "WB W Broadway FS Cambie St",
        LatLon::new(49.2632, -123.1150),
    );
    stop.add_route(RouteNumber::new("099"));

    let stop = stops.get_stop_with_number(
        StopNumber(58613),
        "EB E Broadway FS Main St",
        LatLon::new(49.2626, -123.1000),
    );
    stop.add_route(RouteNumber::new("009"));

    let stop = stops.get_stop_with_number(
        StopNumber(51479),
        "UBC Exchange Bay 7",
        LatLon::new(49.2676, -123.2473),
    );
    stop.add_route(RouteNumber::new("099"));
    stop.add_route(RouteNumber::new("084"));

    stops
}

fn broadway_view() -> StaticViewport {
    StaticViewport::new(LatLon::new(49.2700, -123.1500), LatLon::new(49.2550, -123.0900), 15)
}

fn ubc_view() -> StaticViewport {
    StaticViewport::new(LatLon::new(49.2800, -123.2600), LatLon::new(49.2600, -123.2300), 15)
}

fn nearest_icon_count(plotter: &BusStopPlotter) -> usize {
    plotter
        .clustered_markers()
        .filter(|m| m.icon == MarkerIcon::ClosestStop)
        .count()
}

#[test]
fn test_mark_stops_adds_one_marker_per_visible_stop() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));

    plotter.mark_stops(&broadway_view(), &stops, None);

    let clusterer = plotter.stop_clusterer();
    assert_eq!(clusterer.len(), 3);

    let mut clustered_stops: Vec<u32> = clusterer
        .items()
        .iter()
        .map(|id| plotter.stop_for(*id).unwrap().0)
        .collect();
    clustered_stops.sort();
    assert_eq!(clustered_stops, vec![50039, 50913, 58613]);

    assert!(plotter.marker_for(StopNumber(51479)).is_none());
    assert!(plotter.clustered_markers().all(|m| m.icon == MarkerIcon::Stop));
}

#[test]
fn test_mark_stops_reuses_markers_across_refreshes() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));

    plotter.mark_stops(&broadway_view(), &stops, None);
    let first = plotter.marker_for(StopNumber(50913)).unwrap();

    //pan away and back
    plotter.mark_stops(&ubc_view(), &stops, None);
    assert_eq!(plotter.stop_clusterer().items(), &[plotter.marker_for(StopNumber(51479)).unwrap()]);
    assert_eq!(plotter.marker_for(StopNumber(50913)), Some(first));

    plotter.mark_stops(&broadway_view(), &stops, None);
    assert_eq!(plotter.marker_for(StopNumber(50913)), Some(first));
    assert!(plotter.stop_clusterer().contains(first));
    assert_eq!(plotter.stop_clusterer().len(), 3);
}

#[test]
fn test_marker_title_and_position() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);

    let marker = plotter
        .marker(plotter.marker_for(StopNumber(50913)).unwrap())
        .unwrap();
    assert_eq!(marker.title, "50913 WB W Broadway FS Granville St\n099\n009");
    assert_eq!(marker.position, LatLon::new(49.2635, -123.1387));
}

#[test]
fn test_nearest_moves_between_markers() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);

    plotter.update_marker_of_nearest(stops.get(StopNumber(50913)));
    assert_eq!(nearest_icon_count(&plotter), 1);
    let nearest = plotter.nearest_marker().unwrap();
    assert_eq!(plotter.stop_for(nearest.id), Some(StopNumber(50913)));
    assert_eq!(plotter.marker_for(StopNumber(50913)), Some(nearest.id));

    //with a previous nearest, the new stop's existing marker is reused
    let cambie = plotter.marker_for(StopNumber(50039)).unwrap();
    plotter.update_marker_of_nearest(stops.get(StopNumber(50039)));
    assert_eq!(nearest_icon_count(&plotter), 1);
    assert_eq!(plotter.nearest_marker().unwrap().id, cambie);
    assert_eq!(plotter.stop_clusterer().len(), 4);
}

#[test]
fn test_nearest_cleared() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);

    plotter.update_marker_of_nearest(stops.get(StopNumber(58613)));
    assert_eq!(nearest_icon_count(&plotter), 1);

    plotter.update_marker_of_nearest(None);
    assert_eq!(nearest_icon_count(&plotter), 0);
    assert!(plotter.nearest_marker().is_none());
    assert!(plotter.clustered_markers().all(|m| m.icon == MarkerIcon::Stop));

    //nothing to clear twice
    plotter.update_marker_of_nearest(None);
    assert!(plotter.nearest_marker().is_none());
}

#[test]
fn test_nearest_icon_survives_refresh() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);
    plotter.update_marker_of_nearest(stops.get(StopNumber(50913)));
    plotter.update_marker_of_nearest(stops.get(StopNumber(50039)));

    plotter.mark_stops(&broadway_view(), &stops, None);
    assert_eq!(nearest_icon_count(&plotter), 1);
    assert_eq!(
        plotter.stop_for(plotter.nearest_marker().unwrap().id),
        Some(StopNumber(50039))
    );
}

#[test]
fn test_nearest_outside_visible_area_gets_new_marker() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);
    plotter.update_marker_of_nearest(stops.get(StopNumber(50913)));

    //UBC has no marker yet, so one is made and clustered
    plotter.update_marker_of_nearest(stops.get(StopNumber(51479)));
    let nearest = plotter.nearest_marker().unwrap();
    assert_eq!(plotter.stop_for(nearest.id), Some(StopNumber(51479)));
    assert_eq!(plotter.marker_for(StopNumber(51479)), Some(nearest.id));
    assert!(plotter.stop_clusterer().contains(nearest.id));
    assert_eq!(nearest.title, "51479 UBC Exchange Bay 7\n099\n084");
    assert_eq!(nearest_icon_count(&plotter), 1);
}

#[test]
fn test_first_nearest_creates_its_own_marker() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);
    let marked = plotter.marker_for(StopNumber(50913)).unwrap();

    //with no previous nearest, a fresh marker is created even though the stop
    //already has one; the association moves to the fresh marker
    plotter.update_marker_of_nearest(stops.get(StopNumber(50913)));
    let nearest = plotter.nearest_marker().unwrap().id;
    assert_ne!(nearest, marked);
    assert_eq!(plotter.marker_for(StopNumber(50913)), Some(nearest));
    assert_eq!(plotter.marker(marked).unwrap().icon, MarkerIcon::Stop);
    assert_eq!(nearest_icon_count(&plotter), 1);

    //the next refresh only clusters the associated marker
    plotter.mark_stops(&broadway_view(), &stops, None);
    assert_eq!(plotter.stop_clusterer().len(), 3);
    assert!(plotter.stop_clusterer().contains(nearest));
    assert!(plotter.marker(marked).is_none());
}

#[test]
fn test_clear_markers_forces_new_markers() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);
    let before = plotter.marker_for(StopNumber(58613)).unwrap();

    plotter.clear_marker(StopNumber(58613));
    assert!(plotter.marker_for(StopNumber(58613)).is_none());

    plotter.mark_stops(&broadway_view(), &stops, None);
    let after = plotter.marker_for(StopNumber(58613)).unwrap();
    assert_ne!(before, after);

    plotter.clear_markers();
    assert!(plotter.marker_for(StopNumber(50913)).is_none());
}

#[test]
fn test_marker_for_nearest_found_by_stop_manager() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    let here = LatLon::new(49.2631, -123.1149);

    plotter.mark_stops(&broadway_view(), &stops, Some(&here));
    plotter.update_marker_of_nearest(stops.find_nearest_to(&here));

    assert_eq!(
        plotter.stop_for(plotter.nearest_marker().unwrap().id),
        Some(StopNumber(50039))
    );
}

#[test]
fn test_clear_marker_of_nearest_stop() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);
    plotter.update_marker_of_nearest(stops.get(StopNumber(50913)));
    let cleared = plotter.nearest_marker().unwrap().id;

    plotter.clear_marker(StopNumber(50913));
    assert!(plotter.nearest_marker().is_none());
    assert_eq!(plotter.stop_for(cleared), None);
    assert_eq!(nearest_icon_count(&plotter), 0);

    plotter.mark_stops(&broadway_view(), &stops, None);
    assert!(plotter.marker(cleared).is_none());
    assert!(plotter.nearest_marker().is_none());
    assert!(plotter.clustered_markers().all(|m| m.icon == MarkerIcon::Stop));

    //the next location update marks the stop's new marker
    plotter.update_marker_of_nearest(stops.get(StopNumber(50039)));
    plotter.update_marker_of_nearest(stops.get(StopNumber(50913)));
    let nearest = plotter.nearest_marker().unwrap().id;
    assert_eq!(plotter.marker_for(StopNumber(50913)), Some(nearest));
    assert!(plotter.stop_clusterer().contains(nearest));
    assert_eq!(nearest_icon_count(&plotter), 1);
}

#[test]
fn test_clear_markers_drops_nearest() {
    let stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);
    plotter.update_marker_of_nearest(stops.get(StopNumber(58613)));

    plotter.clear_markers();
    assert!(plotter.nearest_marker().is_none());

    plotter.mark_stops(&broadway_view(), &stops, None);
    assert_eq!(plotter.stop_clusterer().len(), 3);
    assert_eq!(nearest_icon_count(&plotter), 0);
}

#[test]
fn test_tapping_marker_selects_its_stop() {
    let mut stops = stops();
    let mut plotter = BusStopPlotter::new(DisplayDensity(1.0));
    plotter.mark_stops(&broadway_view(), &stops, None);

    let cambie = plotter.marker_for(StopNumber(50039)).unwrap();
    let selected = plotter.select_stop_for_marker(cambie, &mut stops).unwrap();
    assert_eq!(selected, StopNumber(50039));
    assert_eq!(stops.selected().unwrap().number, StopNumber(50039));

    //unknown marker leaves the selection alone
    assert!(matches!(
        plotter.select_stop_for_marker(MarkerId(999), &mut stops),
        Err(Error::MarkerNotFound(MarkerId(999)))
    ));
    assert_eq!(stops.selected().unwrap().number, StopNumber(50039));
}
