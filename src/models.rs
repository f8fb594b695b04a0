use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;

/// A WGS84 position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLon> for geo_types::Point<f64> {
    fn from(locn: LatLon) -> Self {
        geo_types::Point::new(locn.longitude, locn.latitude)
    }
}

impl From<geo_types::Point<f64>> for LatLon {
    fn from(point: geo_types::Point<f64>) -> Self {
        LatLon::new(point.y(), point.x())
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopNumber(pub u32);

impl fmt::Display for StopNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteNumber(pub String);

impl RouteNumber {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A live bus position as reported by the bus location feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub route: RouteNumber,
    pub locn: LatLon,
    pub destination: String,
    pub time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stop {
    pub number: StopNumber,
    pub name: String,
    pub locn: LatLon,
    //insertion order is the order route numbers appear in marker titles
    routes: Vec<RouteNumber>,
    buses: Vec<Bus>,
}

impl Stop {
    pub fn new(number: StopNumber, name: impl Into<String>, locn: LatLon) -> Self {
        Self {
            number,
            name: name.into(),
            locn,
            routes: Vec::new(),
            buses: Vec::new(),
        }
    }

    pub fn routes(&self) -> &[RouteNumber] {
        &self.routes
    }

    pub fn add_route(&mut self, route: RouteNumber) {
        if !self.routes.contains(&route) {
            self.routes.push(route);
        }
    }

    pub fn remove_route(&mut self, route: &RouteNumber) {
        self.routes.retain(|r| r != route);
    }

    pub fn on_route(&self, route: &RouteNumber) -> bool {
        self.routes.contains(route)
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn add_bus(&mut self, bus: Bus) -> Result<(), Error> {
        if !self.on_route(&bus.route) {
            return Err(Error::RouteNotAtStop {
                route: bus.route,
                stop: self.number,
            });
        }

        self.buses.push(bus);
        Ok(())
    }

    pub fn clear_buses(&mut self) {
        self.buses.clear();
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePattern {
    pub name: String,
    pub destination: String,
    pub direction: String,
    pub path: Vec<LatLon>,
}

impl RoutePattern {
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        direction: impl Into<String>,
        path: Vec<LatLon>,
    ) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            direction: direction.into(),
            path,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub number: RouteNumber,
    pub name: String,
    patterns: Vec<RoutePattern>,
}

impl Route {
    pub fn new(number: RouteNumber, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            patterns: Vec::new(),
        }
    }

    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }

    /// Adds a pattern, replacing any existing pattern with the same name.
    pub fn add_pattern(&mut self, pattern: RoutePattern) {
        match self.patterns.iter_mut().find(|p| p.name == pattern.name) {
            Some(existing) => *existing = pattern,
            None => self.patterns.push(pattern),
        }
    }

    pub fn get_pattern(&self, name: &str) -> Option<&RoutePattern> {
        self.patterns.iter().find(|p| p.name == name)
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}
