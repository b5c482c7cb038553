//! `campus-walk` — a simulated walk to a room on the built-in campus.
//!
//! A scripted location provider walks from the south-west gate to the
//! building holding the searched-for room.  Every fix flows through the
//! position stream (nearby-building detection, optional CSV persistence) into
//! the navigation session, and the route line is printed in map-plane
//! coordinates the way a renderer would draw it.
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p campus-walk -- [config.json] [fixes.csv]

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cm_campus::{mace_campus, search, Campus, CampusDataset, SearchItem};
use cm_core::{CampusConfig, Coordinates, PlaceId, Projection};
use cm_navigation::{Arrival, DestinationKind, NavigationObserver, NavigationSession, Route};
use cm_spatial::ProximityIndex;
use cm_tracking::{
    CsvFixSink, FixSink, MockProvider, NoopSink, PositionError, PositionFix, PositionObserver,
    PositionStream, RawFix, WatchOptions,
};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Where the walk begins, just inside the south-west corner of the map.
const START: Coordinates = Coordinates::new(10.0515, 76.6175);
const QUERY: &str        = "L216";
const STEPS: u32         = 16;
/// Milliseconds between simulated fixes.
const FIX_INTERVAL_MS: i64 = 5_000;

// ── Observers ─────────────────────────────────────────────────────────────────

/// Prints what a map view would draw for the active route.
struct RouteReporter {
    projection: Projection,
}

impl NavigationObserver for RouteReporter {
    fn on_navigation_started(&mut self, route: &Route) {
        println!(
            "Navigating to {}: {} ({}), {}",
            route.destination_id(),
            route.distance_label(),
            route.walking_time_label(),
            route.direction_text(),
        );
    }

    fn on_route_updated(&mut self, route: &Route) {
        let (from, to) = self.projection.route_line(route.origin, route.destination);
        println!(
            "  {:>7}  {:<2}  line ({:6.1}, {:6.1}) → ({:6.1}, {:6.1})",
            route.distance_label(),
            route.compass().as_str(),
            from.x, from.y, to.x, to.y,
        );
    }

    fn on_destination_reached(&mut self, _route: &Route, arrival: &Arrival) {
        match &arrival.room_id {
            Some(room) => println!("Reached {} (room {room})", arrival.building_id),
            None       => println!("Reached {}", arrival.building_id),
        }
    }

    fn on_navigation_ended(&mut self) {
        println!("Navigation ended");
    }
}

/// Bridges position fixes into the navigation session and stops navigation
/// on arrival, as the app shell would.
struct Walker<'a> {
    campus:   &'a Campus,
    session:  NavigationSession<&'a Campus>,
    reporter: RouteReporter,
    arrival:  Option<Arrival>,
}

impl PositionObserver for Walker<'_> {
    fn on_location(&mut self, fix: &PositionFix) {
        if let Some(arrival) = self.session.update_position(fix.coordinates, &mut self.reporter) {
            self.arrival = Some(arrival);
            self.session.stop(&mut self.reporter);
        }
    }

    fn on_nearby_changed(&mut self, nearby: Option<&PlaceId>) {
        match nearby.and_then(|id| self.campus.place(id.as_str())) {
            Some(place) => println!("  ~ near {}", place.name),
            None        => println!("  ~ left the building area"),
        }
    }

    fn on_watch_error(&mut self, error: &PositionError) {
        warn!(%error, "GPS hiccup");
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<CampusConfig> {
    let Some(path) = path else {
        return Ok(CampusConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    let config: CampusConfig = serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    info!(path, "loaded configuration");
    Ok(config)
}

fn open_sink(path: Option<&str>) -> Result<Box<dyn FixSink>> {
    Ok(match path {
        Some(path) => Box::new(CsvFixSink::create(Path::new(path)).with_context(|| format!("creating {path}"))?),
        None       => Box::new(NoopSink),
    })
}

fn lerp(a: Coordinates, b: Coordinates, t: f64) -> Coordinates {
    Coordinates::new(a.lat + (b.lat - a.lat) * t, a.lng + (b.lng - a.lng) * t)
}

// ── Main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("campus_walk=info".parse()?))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;

    println!("=== campus-walk ===");

    // 1. Dataset and destination.
    let campus = mace_campus()?;
    println!("Campus: {} places, {} rooms", campus.places().len(), campus.rooms().len());

    let hits = search(&campus, QUERY);
    let (kind, id) = match hits.first().map(|hit| hit.item) {
        Some(SearchItem::Room(room))   => (DestinationKind::Room, room.id.to_string()),
        Some(SearchItem::Place(place)) => (DestinationKind::Place, place.id.to_string()),
        None                           => bail!("nothing matches {QUERY:?}"),
    };
    println!("Search {QUERY:?}: {} hit(s), going to {kind} {id}", hits.len());

    // 2. Position stream over the campus buildings.
    let index = ProximityIndex::new(
        campus.buildings().map(|p| (p.id.clone(), p.coordinates)),
        config.proximity_threshold_deg,
    );
    let provider = MockProvider::with_script([MockProvider::fix(START.lat, START.lng)]);
    let mut stream = PositionStream::new(provider.clone(), index, WatchOptions::from(&config.watch))
        .with_sink(open_sink(args.get(1).map(String::as_str))?);

    // 3. Navigation session, fed by the stream.
    let mut walker = Walker {
        campus:   &campus,
        session:  NavigationSession::new(&campus).with_arrival_radius(config.arrival_radius_m),
        reporter: RouteReporter { projection: config.projection()? },
        arrival:  None,
    };

    stream.start(&mut walker).await?;
    let origin = stream.current_fix().map(|f| f.coordinates).unwrap_or(START);
    let route = walker.session.calculate_route(origin, kind, &id)?;
    let target = route.destination;
    walker.session.start(route, &mut walker.reporter);
    if let Some(info) = walker.session.destination_info() {
        match info.floor {
            Some(floor) => println!("Destination: {} (floor {floor})", info.name),
            None        => println!("Destination: {}", info.name),
        }
    }

    // 4. Walk.
    for step in 1..=STEPS {
        if step == STEPS / 2 {
            // Indoor floor-plan view: stop listening for a moment.
            stream.pause();
            println!("  (paused: {})", stream.status().as_str());
            stream.resume()?;
        }
        let at = lerp(START, target, f64::from(step) / f64::from(STEPS));
        provider.push_fix(RawFix::new(at, 4.0, i64::from(step) * FIX_INTERVAL_MS));
        if stream.next_fix(&mut walker).await.is_none() || walker.arrival.is_some() {
            break;
        }
    }

    stream.stop();
    match walker.arrival {
        Some(arrival) => info!(building = %arrival.building_id, "walk complete"),
        None          => warn!("walk ended before arrival"),
    }
    println!("Tracking {}; user {}", stream.status().as_str(), stream.user_id());
    Ok(())
}
