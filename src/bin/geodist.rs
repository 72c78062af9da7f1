//! Geodesic Distance Tool
//!
//! Measures distances between geographic positions on any cataloged body:
//! point to point, point to arc and point to polyline.
//!
//! Usage:
//!   cargo run --bin geodist -- distance 51.454007 -0.263672 55.862982 -4.251709
//!   cargo run --bin geodist -- --body mars arc 10 5 0 0 0 10
//!   cargo run --bin geodist -- polyline 53 1 51.45,-0.26 53,-1.5 55.86,-4.25

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use spheroid::constants::NO_SEGMENT_DISTANCE;
use spheroid::geometry::pythagorean_distance;
use spheroid::{AngleUnit, Body, GeoOptions, GeoVector, Polyline, Spheroid};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Geodesic Distance Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Great-circle, arc and polyline distances on solar system bodies",
    long_about = None
)]
struct Args {
    /// Reference body, by name
    #[arg(short, long, global = true, default_value = "earth")]
    body: Body,

    /// Unit of the latitude/longitude inputs (degrees or radians)
    #[arg(short, long, global = true, default_value = "degrees")]
    unit: AngleUnit,

    /// Treat input latitudes as geocentric rather than geodetic
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    geocentric: bool,

    /// Scale by the mean geodetic radius of the points instead of the body's mean radius
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    mean_geodetic_radius: bool,

    /// Print the report as JSON
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Distance between two positions
    #[command(allow_negative_numbers = true)]
    Distance {
        lat_1: f64,
        lng_1: f64,
        lat_2: f64,
        lng_2: f64,
    },

    /// Distance from a position to the arc between two others
    #[command(allow_negative_numbers = true)]
    Arc {
        lat: f64,
        lng: f64,
        lat_a: f64,
        lng_a: f64,
        lat_b: f64,
        lng_b: f64,
    },

    /// Distance from a position to a polyline of "lat,lng" vertices
    #[command(allow_negative_numbers = true)]
    Polyline {
        lat: f64,
        lng: f64,

        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_vertex)]
        vertices: Vec<(f64, f64)>,
    },

    /// List the cataloged bodies and their radii
    Bodies,
}

/// A single named result line
#[derive(Debug, Serialize)]
struct Measurement {
    name: &'static str,
    value: f64,
}

/// Everything printed for one command
#[derive(Debug, Serialize)]
struct Report {
    body: Body,
    length_unit: String,
    measurements: Vec<Measurement>,
}

impl Report {
    fn new(body: Body) -> Self {
        Report {
            body,
            length_unit: body.spheroid().unit_label().to_string(),
            measurements: Vec::new(),
        }
    }

    fn push(&mut self, name: &'static str, value: f64) {
        self.measurements.push(Measurement { name, value });
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }

        println!("Body: {} ({})", self.body, self.length_unit);
        for m in &self.measurements {
            println!("{:>24}: {:.6}", m.name, m.value);
        }
        Ok(())
    }
}

/// Parse a "lat,lng" vertex
fn parse_vertex(s: &str) -> std::result::Result<(f64, f64), String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG but got '{}'", s))?;

    let lat = lat.trim().parse::<f64>().map_err(|e| format!("bad latitude '{}': {}", lat, e))?;
    let lng = lng.trim().parse::<f64>().map_err(|e| format!("bad longitude '{}': {}", lng, e))?;
    Ok((lat, lng))
}

fn at<'s>(lat: f64, lng: f64, spheroid: &'s Spheroid, options: &GeoOptions) -> GeoVector<'s> {
    GeoVector::from_geographic_on(lat, lng, spheroid, options)
}

fn distance_report(args: &Args, options: &GeoOptions, p1: (f64, f64), p2: (f64, f64)) -> Report {
    let spheroid = args.body.spheroid();
    let v1 = at(p1.0, p1.1, spheroid, options);
    let v2 = at(p2.0, p2.1, spheroid, options);

    let mut report = Report::new(args.body);
    report.push("great circle", v1.great_circle_distance(&v2, options));
    report.push("haversine", spheroid.haversine_distance(p1, p2, args.unit));
    report.push("straight line", v1.distance(&v2));
    report.push("pythagorean (input units)", pythagorean_distance(p1, p2));
    report
}

fn arc_report(args: &Args, options: &GeoOptions, p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> Report {
    let spheroid = args.body.spheroid();
    let point = at(p.0, p.1, spheroid, options);
    let point_a = at(a.0, a.1, spheroid, options);
    let point_b = at(b.0, b.1, spheroid, options);

    let mut report = Report::new(args.body);
    report.push("arc", point.great_circle_distance_from_arc(&point_a, &point_b, options));
    report.push(
        "great circle",
        point.great_circle_distance_from_great_circle(&point_a, &point_b),
    );
    report.push("arc length", point_a.great_circle_distance(&point_b, options));
    report
}

fn polyline_report(
    args: &Args,
    options: &GeoOptions,
    p: (f64, f64),
    vertices: &[(f64, f64)],
) -> Result<Report> {
    let spheroid = args.body.spheroid();
    let point = at(p.0, p.1, spheroid, options);

    let distance = point.great_circle_distance_from_polyline(Polyline::Geographic(vertices), options)?;
    if distance == NO_SEGMENT_DISTANCE {
        return Err("polyline needs at least two distinct vertices".into());
    }

    let mut report = Report::new(args.body);
    report.push("polyline", distance);
    Ok(report)
}

fn list_bodies(json: bool) -> Result<()> {
    if json {
        let bodies: Vec<_> = Body::ALL
            .iter()
            .map(|body| (body.name(), body.spheroid()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&bodies)?);
        return Ok(());
    }

    println!("{:<10} {:>12} {:>12} {:>12}", "Body", "Equatorial", "Polar", "Mean");
    println!("-------------------------------------------------");
    for body in Body::ALL {
        let s = body.spheroid();
        println!(
            "{:<10} {:>12.4} {:>12.4} {:>12.4}",
            body.name(),
            s.equatorial_radius(),
            s.polar_radius(),
            s.mean_radius()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let options = GeoOptions::default()
        .with_unit(args.unit)
        .with_geocentric(args.geocentric)
        .with_mean_geodetic_radius(args.mean_geodetic_radius);
    log::debug!("Measuring on {} with {:?}", args.body, options);

    let report = match &args.command {
        Command::Distance {
            lat_1,
            lng_1,
            lat_2,
            lng_2,
        } => distance_report(&args, &options, (*lat_1, *lng_1), (*lat_2, *lng_2)),
        Command::Arc {
            lat,
            lng,
            lat_a,
            lng_a,
            lat_b,
            lng_b,
        } => arc_report(
            &args,
            &options,
            (*lat, *lng),
            (*lat_a, *lng_a),
            (*lat_b, *lng_b),
        ),
        Command::Polyline { lat, lng, vertices } => {
            polyline_report(&args, &options, (*lat, *lng), vertices)?
        }
        Command::Bodies => return list_bodies(args.json),
    };

    report.print(args.json)
}
