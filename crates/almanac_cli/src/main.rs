use almanac_rs::{
    GeoLocation, Instant, NADIR, PhaseKind, PhaseRegistry, SunTimes, add_time, checked_location,
    moon_illumination, moon_position, moon_times, parse_instant, position, times_with,
};
use clap::{ArgAction, Parser, Subcommand};
use log::debug;

#[derive(Parser)]
#[command(name = "almanac", about = "Sun and Moon positions, light phases and rise/set")]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sun azimuth and altitude at an instant
    Position {
        /// UTC instant (YYYY-MM-DDThh:mm:ssZ or YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Sunrise, sunset, twilight and golden hour for a day
    Times {
        /// UTC date (YYYY-MM-DD) or instant
        #[arg(long)]
        date: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Observer height above sea level in meters
        #[arg(long, default_value = "0")]
        height: f64,
        /// Extra phase as ANGLE:RISE_NAME:SET_NAME, e.g. -4:blueHourDawn:blueHourDusk
        #[arg(long = "phase", value_parser = parse_phase, allow_hyphen_values = true)]
        phases: Vec<PhaseArg>,
        /// List events in registry order instead of by time
        #[arg(long)]
        registry_order: bool,
    },
    /// Moon azimuth, altitude, distance and parallactic angle
    MoonPosition {
        #[arg(long)]
        date: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Illuminated fraction, phase and bright-limb angle of the Moon
    MoonIllumination {
        #[arg(long)]
        date: String,
    },
    /// Moon rise and set for a day
    MoonTimes {
        #[arg(long)]
        date: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Search from 00:00 UTC instead of local mean midnight
        #[arg(long)]
        utc_midnight: bool,
    },
}

/// A `--phase` argument.
#[derive(Debug, Clone, PartialEq)]
struct PhaseArg {
    angle_deg: f64,
    rise_name: String,
    set_name: String,
}

fn parse_phase(s: &str) -> Result<PhaseArg, String> {
    // Angle may itself be negative, so split from the right.
    let mut parts = s.rsplitn(3, ':');
    let (Some(set_name), Some(rise_name), Some(angle)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected ANGLE:RISE_NAME:SET_NAME, got {s}"));
    };
    let angle_deg: f64 = angle
        .trim()
        .parse()
        .map_err(|e| format!("invalid angle `{angle}`: {e}"))?;
    if !angle_deg.is_finite() || !(-90.0..=90.0).contains(&angle_deg) {
        return Err(format!("angle {angle_deg} is outside [-90, 90]"));
    }
    if rise_name.is_empty() || set_name.is_empty() {
        return Err(format!("phase names must not be empty: {s}"));
    }
    Ok(PhaseArg {
        angle_deg,
        rise_name: rise_name.to_string(),
        set_name: set_name.to_string(),
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn require_instant(s: &str) -> Instant {
    parse_instant(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_location(lat: f64, lon: f64, height: f64) -> GeoLocation {
    checked_location(lat, lon, height).unwrap_or_else(|e| {
        eprintln!("Invalid location: {e}");
        std::process::exit(1);
    })
}

fn fmt_time(t: Option<Instant>) -> String {
    match t {
        Some(t) => t.to_string(),
        None => "-".to_string(),
    }
}

fn print_sun_times(day: &SunTimes, registry_order: bool) {
    if registry_order {
        for (name, t) in day.iter() {
            println!("  {name:16} {}", fmt_time(t));
        }
        return;
    }
    for (name, t) in day.chronological() {
        println!("  {name:16} {t}");
    }
    println!("  {:16} {}", NADIR, fmt_time(day.nadir));
    let absent: Vec<&str> = day
        .events
        .iter()
        .filter(|e| e.time.is_none())
        .map(|e| e.name.as_ref())
        .collect();
    if !absent.is_empty() {
        println!("  not reached: {}", absent.join(", "));
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Position { date, lat, lon } => {
            let t = require_instant(&date);
            let location = require_location(lat, lon, 0.0);
            let pos = position(t, location.latitude_deg, location.longitude_deg);
            println!("Sun at {t}, {lat:.4}°N {lon:.4}°E");
            println!(
                "  azimuth  {:9.4}° ({:.6} rad, from south)",
                pos.azimuth_rad.to_degrees(),
                pos.azimuth_rad
            );
            println!(
                "  altitude {:9.4}° ({:.6} rad)",
                pos.altitude_rad.to_degrees(),
                pos.altitude_rad
            );
        }

        Commands::Times {
            date,
            lat,
            lon,
            height,
            phases,
            registry_order,
        } => {
            let t = require_instant(&date);
            let location = require_location(lat, lon, height);
            let registry = phases
                .into_iter()
                .fold(PhaseRegistry::standard(), |reg, p| {
                    debug!("adding phase {}° {}/{}", p.angle_deg, p.rise_name, p.set_name);
                    add_time(&reg, p.angle_deg, p.rise_name, p.set_name)
                });
            let day = times_with(t, &location, &registry);
            println!("Sun times for {t} at {lat:.4}°N {lon:.4}°E, {height} m:\n");
            print_sun_times(&day, registry_order);
            for event in day.events.iter().filter(|e| e.time.is_none()) {
                let state = match event.kind {
                    PhaseKind::Rising => "rise above",
                    PhaseKind::Setting => "sink below",
                };
                debug!("{}: sun does not {state} {}°", event.name, event.altitude_deg);
            }
        }

        Commands::MoonPosition { date, lat, lon } => {
            let t = require_instant(&date);
            let location = require_location(lat, lon, 0.0);
            let pos = moon_position(t, location.latitude_deg, location.longitude_deg);
            println!("Moon at {t}, {lat:.4}°N {lon:.4}°E");
            println!("  azimuth     {:9.4}°", pos.azimuth_rad.to_degrees());
            println!("  altitude    {:9.4}° (refracted)", pos.altitude_rad.to_degrees());
            println!("  topocentric {:9.4}°", pos.topocentric_altitude_rad().to_degrees());
            println!("  distance    {:12.1} km", pos.distance_km);
            println!("  parallactic {:9.4}°", pos.parallactic_angle_rad.to_degrees());
        }

        Commands::MoonIllumination { date } => {
            let t = require_instant(&date);
            let illum = moon_illumination(t);
            println!("Moon illumination at {t}");
            println!("  fraction {:.4}", illum.fraction);
            println!("  phase    {:.4}", illum.phase);
            println!("  angle    {:.4}°", illum.angle_rad.to_degrees());
        }

        Commands::MoonTimes {
            date,
            lat,
            lon,
            utc_midnight,
        } => {
            let t = require_instant(&date);
            let location = require_location(lat, lon, 0.0);
            let mt = moon_times(t, location.latitude_deg, location.longitude_deg, utc_midnight);
            println!("Moon times for {t} at {lat:.4}°N {lon:.4}°E:\n");
            println!("  rise {}", fmt_time(mt.rise));
            println!("  set  {}", fmt_time(mt.set));
            if mt.always_up {
                println!("  Moon stays above the horizon all day");
            }
            if mt.always_down {
                println!("  Moon stays below the horizon all day");
            }
        }
    }
}
