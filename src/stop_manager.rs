use ahash::AHashMap;
use geo::{Distance, Haversine};

use crate::error::Error;
use crate::models::{LatLon, Stop, StopNumber};

/// Stops further than this from the user (in metres) are never "nearest".
pub const RADIUS: f64 = 10_000.0;

/// Registry of every known stop, plus the one the user has selected.
#[derive(Debug, Clone)]
pub struct StopManager {
    stops: Vec<Stop>,
    index: AHashMap<StopNumber, usize>,
    selected: Option<StopNumber>,
    radius_m: f64,
}

impl Default for StopManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StopManager {
    pub fn new() -> Self {
        Self::with_radius(RADIUS)
    }

    pub fn with_radius(radius_m: f64) -> Self {
        Self {
            stops: Vec::new(),
            index: AHashMap::new(),
            selected: None,
            radius_m,
        }
    }

    /// Returns the stop with the given number, creating it if it doesn't exist yet.
    /// An existing stop keeps its name and location.
    pub fn get_stop_with_number(
        &mut self,
        number: StopNumber,
        name: &str,
        locn: LatLon,
    ) -> &mut Stop {
        let idx = match self.index.get(&number) {
            Some(idx) => *idx,
            None => {
                self.stops.push(Stop::new(number, name, locn));
                let idx = self.stops.len() - 1;
                self.index.insert(number, idx);
                idx
            }
        };

        &mut self.stops[idx]
    }

    pub fn get(&self, number: StopNumber) -> Option<&Stop> {
        self.index.get(&number).map(|idx| &self.stops[*idx])
    }

    pub fn get_mut(&mut self, number: StopNumber) -> Option<&mut Stop> {
        match self.index.get(&number) {
            Some(idx) => Some(&mut self.stops[*idx]),
            None => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stop> {
        self.stops.iter()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn clear_stops(&mut self) {
        self.stops.clear();
        self.index.clear();
        self.selected = None;
    }

    pub fn set_selected(&mut self, number: StopNumber) -> Result<(), Error> {
        if !self.index.contains_key(&number) {
            return Err(Error::StopNotFound(number));
        }

        self.selected = Some(number);
        Ok(())
    }

    pub fn selected(&self) -> Option<&Stop> {
        self.selected.and_then(|number| self.get(number))
    }

    pub fn selected_mut(&mut self) -> Option<&mut Stop> {
        match self.selected {
            Some(number) => self.get_mut(number),
            None => None,
        }
    }

    pub fn clear_selected_stop(&mut self) {
        self.selected = None;
    }

    /// Finds the stop closest to `locn`, ignoring stops outside the search radius.
    pub fn find_nearest_to(&self, locn: &LatLon) -> Option<&Stop> {
        let here: geo_types::Point<f64> = (*locn).into();

        self.stops
            .iter()
            .map(|stop| {
                let there: geo_types::Point<f64> = stop.locn.into();
                (stop, Haversine.distance(here, there))
            })
            .filter(|(_, distance)| *distance <= self.radius_m)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(stop, _)| stop)
    }
}

impl<'a> IntoIterator for &'a StopManager {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}
