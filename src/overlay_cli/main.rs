use anyhow::{Context, Result};
use busesareus::map_view::{MarkerIcon, StaticViewport};
use busesareus::models::{LatLon, StopNumber};
use busesareus::parsers::{parse_routes, parse_stops};
use busesareus::plotters::{BusLocationPlotter, BusRouteDrawer, BusStopPlotter};
use busesareus::providers::{DataProvider, FileDataProvider};
use busesareus::{RouteManager, StopManager, TranslinkApi, TranslinkConfig};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log plotter internals
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct ViewportArgs {
    #[arg(long, allow_hyphen_values = true)]
    north: f64,
    #[arg(long, allow_hyphen_values = true)]
    west: f64,
    #[arg(long, allow_hyphen_values = true)]
    south: f64,
    #[arg(long, allow_hyphen_values = true)]
    east: f64,
    #[arg(long, default_value_t = 0)]
    zoom: u32,
}

impl ViewportArgs {
    fn viewport(&self) -> StaticViewport {
        StaticViewport::new(
            LatLon::new(self.north, self.west),
            LatLon::new(self.south, self.east),
            self.zoom,
        )
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Mark the stops in a viewport and highlight the one nearest to a location
    Stops {
        #[arg(long)]
        stops: PathBuf,
        #[command(flatten)]
        viewport: ViewportArgs,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Draw the routes through a stop
    Routes {
        #[arg(long)]
        stops: PathBuf,
        #[arg(long)]
        routes: PathBuf,
        #[arg(long)]
        stop: u32,
        #[command(flatten)]
        viewport: ViewportArgs,
    },
    /// Print the raw arrival estimates for a stop
    Arrivals {
        #[arg(long)]
        stop: u32,
    },
    /// Plot the live buses serving a stop
    Buses {
        #[arg(long)]
        stops: PathBuf,
        #[arg(long)]
        stop: u32,
    },
}

fn load_stops(path: &Path, stops: &mut StopManager, routes: &mut RouteManager) -> Result<()> {
    let json = FileDataProvider::new(path)
        .data_source_to_string()
        .with_context(|| format!("Failed to read stops from {}", path.display()))?;
    let count = parse_stops(&json, stops, routes).context("Failed to parse stops")?;
    tracing::info!(count, "loaded stops");
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = TranslinkConfig::from_env().context("Invalid configuration")?;
    let mut stops = StopManager::with_radius(config.nearest_radius_m);
    let mut routes = RouteManager::new();

    match args.command {
        Commands::Stops {
            stops: stops_path,
            viewport,
            lat,
            lon,
        } => {
            load_stops(&stops_path, &mut stops, &mut routes)?;

            let here = match (lat, lon) {
                (Some(lat), Some(lon)) => Some(LatLon::new(lat, lon)),
                _ => None,
            };

            let mut plotter =
                BusStopPlotter::with_default_zoom(config.density(), config.default_zoom);
            plotter.mark_stops(&viewport.viewport(), &stops, here.as_ref());

            if let Some(here) = here {
                plotter.update_marker_of_nearest(stops.find_nearest_to(&here));
            }

            println!(
                "{} markers (cluster radius {})",
                plotter.stop_clusterer().len(),
                plotter.stop_clusterer().radius
            );
            for marker in plotter.clustered_markers() {
                let flag = if marker.icon == MarkerIcon::ClosestStop {
                    "*"
                } else {
                    " "
                };
                println!("{} {} {}", flag, marker.position, marker.title.replace('\n', " / "));
            }
        }
        Commands::Routes {
            stops: stops_path,
            routes: routes_path,
            stop,
            viewport,
        } => {
            load_stops(&stops_path, &mut stops, &mut routes)?;

            let json = FileDataProvider::new(&routes_path)
                .data_source_to_string()
                .with_context(|| format!("Failed to read routes from {}", routes_path.display()))?;
            parse_routes(&json, &mut routes).context("Failed to parse routes")?;

            stops.set_selected(StopNumber(stop))?;

            let mut drawer = BusRouteDrawer::new(config.density());
            drawer.plot_routes(&viewport.viewport(), &stops, &routes);

            for number in drawer.bus_route_legend_overlay().entries() {
                println!("route {}", number);
            }
            for line in drawer.bus_route_overlays() {
                println!(
                    "#{:02x}{:02x}{:02x} width {:.1} {:?}",
                    line.color.r, line.color.g, line.color.b, line.width, line.points
                );
            }
        }
        Commands::Arrivals { stop } => {
            let api = TranslinkApi::new(config)?;
            let body = api
                .arrivals(StopNumber(stop))
                .data_source_to_string()
                .with_context(|| format!("Failed to fetch arrivals for stop {}", stop))?;
            println!("{}", body);
        }
        Commands::Buses {
            stops: stops_path,
            stop,
        } => {
            load_stops(&stops_path, &mut stops, &mut routes)?;
            stops.set_selected(StopNumber(stop))?;

            let api = TranslinkApi::new(config)?;
            let mut plotter = BusLocationPlotter::new();
            plotter
                .plot_buses_from_api(&mut stops, &api)
                .with_context(|| format!("Failed to plot buses for stop {}", stop))?;

            for item in plotter.bus_locations_overlay().items() {
                println!("{} {}", item.title, item.position);
            }
        }
    }

    Ok(())
}
