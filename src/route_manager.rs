use ahash::AHashMap;

use crate::models::{Route, RouteNumber};

/// Registry of every known route.
#[derive(Debug, Clone, Default)]
pub struct RouteManager {
    routes: Vec<Route>,
    index: AHashMap<RouteNumber, usize>,
}

impl RouteManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the route with the given number, creating it if needed.
    /// A route first created without a name picks up the name given later.
    pub fn get_route_with_number(&mut self, number: RouteNumber, name: &str) -> &mut Route {
        let idx = match self.index.get(&number) {
            Some(idx) => *idx,
            None => {
                self.routes.push(Route::new(number.clone(), name));
                let idx = self.routes.len() - 1;
                self.index.insert(number, idx);
                idx
            }
        };

        let route = &mut self.routes[idx];
        if route.name.is_empty() && !name.is_empty() {
            route.name = name.to_string();
        }
        route
    }

    pub fn get(&self, number: &RouteNumber) -> Option<&Route> {
        self.index.get(number).map(|idx| &self.routes[*idx])
    }

    pub fn get_mut(&mut self, number: &RouteNumber) -> Option<&mut Route> {
        match self.index.get(number) {
            Some(idx) => Some(&mut self.routes[*idx]),
            None => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn clear_routes(&mut self) {
        self.routes.clear();
        self.index.clear();
    }
}
