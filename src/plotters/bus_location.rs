use tracing::{debug, warn};

use crate::config::TranslinkApi;
use crate::error::Error;
use crate::map_view::{ItemizedIconOverlay, MarkerIcon, OverlayItem};
use crate::parsers::parse_buses;
use crate::providers::DataProvider;
use crate::stop_manager::StopManager;

/// Plots the live buses serving the selected stop.
#[derive(Debug, Clone)]
pub struct BusLocationPlotter {
    bus_locations_overlay: ItemizedIconOverlay,
}

impl Default for BusLocationPlotter {
    fn default() -> Self {
        Self::new()
    }
}

impl BusLocationPlotter {
    pub fn new() -> Self {
        Self {
            bus_locations_overlay: ItemizedIconOverlay::new(MarkerIcon::Bus),
        }
    }

    pub fn bus_locations_overlay(&self) -> &ItemizedIconOverlay {
        &self.bus_locations_overlay
    }

    /// Fetch and plot buses serving the selected stop. Does nothing when no
    /// stop is selected.
    ///
    /// The overlay is cleared before fetching, so on error it stays empty.
    pub fn plot_buses(
        &mut self,
        stops: &mut StopManager,
        provider: &dyn DataProvider,
    ) -> Result<(), Error> {
        let Some(selected) = stops.selected_mut() else {
            return Ok(());
        };

        self.bus_locations_overlay.remove_all_items();

        let data = provider.data_source_to_string()?;
        if let Err(e) = parse_buses(selected, &data) {
            warn!(stop = %selected.number, error = %e, "could not decode bus locations");
            return Err(e);
        }

        for bus in selected.buses() {
            self.bus_locations_overlay.add_item(OverlayItem {
                title: bus.route.to_string(),
                snippet: String::new(),
                position: bus.locn,
            });
        }

        debug!(
            stop = %selected.number,
            buses = self.bus_locations_overlay.items().len(),
            "plotted buses"
        );

        Ok(())
    }

    /// Same as `plot_buses`, fetching from the live bus location feed.
    pub fn plot_buses_from_api(
        &mut self,
        stops: &mut StopManager,
        api: &TranslinkApi,
    ) -> Result<(), Error> {
        let Some(selected) = stops.selected() else {
            return Ok(());
        };

        let provider = api.bus_locations(selected.number);
        self.plot_buses(stops, &provider)
    }
}
