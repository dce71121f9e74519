mod args;
mod output;

use std::error::Error;
use std::path::PathBuf;

use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, debug};
use serde::Serialize;

use panchang_rs::{
    AyanamshaSystem, GeoLocation, Instant, LogTrace, LunarCycle, MoonRiseSet, PanchangConfig,
    Panchangam, Projection, Region, TraceHook, Tz, historical_cases,
};
use panchang_time::parse_timezone;
use panchang_vedic_base::{
    ALL_EVENTS, CalendarSystem, RiseSetResult, ayanamsha_deg, compute_all_events,
    local_noon_for_date,
};

use crate::args::{parse_date, parse_datetime};

static LOG_TRACE: LogTrace = LogTrace;

#[derive(Parser)]
#[command(name = "panchang", version, about = "Panchangam and sky positions")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv search trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Ayanamsha override (e.g. Lahiri, TrueLahiri, KP, Raman)
    #[arg(long, global = true)]
    ayanamsha: Option<String>,
    /// Region override (e.g. tamil_nadu, north_india)
    #[arg(long, global = true)]
    region: Option<String>,
    /// Month convention override: amanta or purnimanta
    #[arg(long, global = true)]
    calendar: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LocationArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Altitude in metres
    #[arg(long, default_value_t = 0.0)]
    alt: f64,
    /// IANA timezone of the location (e.g. Asia/Kolkata)
    #[arg(long)]
    tz: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Elements, vaar, hora and muhurta windows at one moment
    Panchang {
        #[command(flatten)]
        location: LocationArgs,
        /// RFC 3339 timestamp, or local YYYY-MM-DDThh:mm[:ss] in the location's zone
        #[arg(long)]
        at: String,
    },
    /// Sunrise-anchored listing for a civil date
    Day {
        #[command(flatten)]
        location: LocationArgs,
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Sunrise, solar noon and sunset
    Sunrise {
        #[command(flatten)]
        location: LocationArgs,
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Also list civil, nautical and astronomical twilight
        #[arg(long)]
        twilight: bool,
    },
    /// Moonrise, moonset and lunar age for a civil date
    Moon {
        #[command(flatten)]
        location: LocationArgs,
        /// Civil date (YYYY-MM-DD); age is given at local noon
        #[arg(long)]
        date: String,
    },
    /// Sun and Moon in the observer's sky
    Sky {
        #[command(flatten)]
        location: LocationArgs,
        #[arg(long)]
        at: String,
        /// stereographic, orthographic or mercator
        #[arg(long)]
        projection: Option<String>,
    },
    /// Run the built-in historical validation table
    Validate,
    /// Ayanamsha value on a date
    Ayanamsha {
        /// Civil date (YYYY-MM-DD), evaluated at 0h UT
        #[arg(long)]
        date: String,
        /// Only this system; all systems otherwise
        #[arg(long)]
        system: Option<String>,
    },
}

#[derive(Serialize)]
struct EventRow {
    event: &'static str,
    time: Option<Instant>,
}

#[derive(Serialize)]
struct MoonReport {
    #[serde(flatten)]
    rise_set: MoonRiseSet,
    cycle: LunarCycle,
}

#[derive(Serialize)]
struct AyanamshaRow {
    system: &'static str,
    degrees: f64,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn load_config(cli: &Cli) -> Result<PanchangConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => PanchangConfig::load(path)?,
        None => PanchangConfig::default(),
    };
    config.apply_env()?;
    if let Some(name) = &cli.ayanamsha {
        config.ayanamsha = AyanamshaSystem::from_name(name)
            .ok_or_else(|| format!("unknown ayanamsha: {name}"))?;
    }
    if let Some(name) = &cli.region {
        config.region =
            Region::from_name(name).ok_or_else(|| format!("unknown region: {name}"))?;
    }
    if let Some(name) = &cli.calendar {
        config.calendar_system = Some(
            CalendarSystem::from_name(name)
                .ok_or_else(|| format!("unknown calendar system: {name}"))?,
        );
    }
    if let Commands::Sky {
        projection: Some(name),
        ..
    } = &cli.command
    {
        config.projection =
            Projection::from_name(name).ok_or_else(|| format!("unknown projection: {name}"))?;
    }
    debug!("config: {config:?}");
    Ok(config)
}

fn resolve_location(
    panchangam: &Panchangam,
    args: &LocationArgs,
) -> Result<GeoLocation, Box<dyn Error>> {
    let location = panchangam.location(args.lat, args.lon, args.alt)?;
    Ok(match &args.tz {
        Some(name) => location.with_timezone(parse_timezone(name)?),
        None => location,
    })
}

fn zone_of(location: &GeoLocation) -> Tz {
    location.timezone.unwrap_or(Tz::UTC)
}

fn emit<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_logging(cli.verbose);
    let trace = (cli.verbose >= 3).then_some(&LOG_TRACE as &dyn TraceHook);
    let config = load_config(&cli)?;
    let panchangam = Panchangam::new(config)?;
    let json = cli.json;

    match &cli.command {
        Commands::Panchang { location, at } => {
            let location = resolve_location(&panchangam, location)?;
            let instant = parse_datetime(at, zone_of(&location))?;
            let info = panchangam.compute_panchangam(&instant, &location, trace);
            emit(json, &info, || output::panchang_text(&info))
        }
        Commands::Day { location, date } => {
            let location = resolve_location(&panchangam, location)?;
            let day = panchangam.day_panchang(parse_date(date)?, &location, trace);
            emit(json, &day, || output::day_text(&day))
        }
        Commands::Sunrise {
            location,
            date,
            twilight,
        } => {
            let location = resolve_location(&panchangam, location)?;
            let date = parse_date(date)?;
            let window = panchangam.solar_day_window(date, &location);
            if !*twilight {
                return emit(json, &window, || output::window_text(&window));
            }
            let tz = zone_of(&location);
            let results = compute_all_events(
                &location,
                local_noon_for_date(date, &location, tz),
                &panchangam.options().riseset,
            );
            let rows: Vec<EventRow> = ALL_EVENTS
                .iter()
                .zip(&results)
                .map(|(event, result)| EventRow {
                    event: event.name(),
                    time: result.jd().map(|jd| Instant::from_julian_day(jd, tz)),
                })
                .collect();
            emit(json, &rows, || {
                rows.iter()
                    .zip(&results)
                    .map(|(row, result)| match (row.time, result) {
                        (Some(t), _) => format!("{:<18} {}", row.event, t),
                        (None, RiseSetResult::NeverRises) => {
                            format!("{:<18} never (Sun stays below)", row.event)
                        }
                        (None, _) => format!("{:<18} never (Sun stays above)", row.event),
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Commands::Moon { location, date } => {
            let location = resolve_location(&panchangam, location)?;
            let date = parse_date(date)?;
            let tz = zone_of(&location);
            let noon = Instant::from_julian_day(local_noon_for_date(date, &location, tz), tz);
            let report = MoonReport {
                rise_set: panchangam.moon_rise_set(date, &location, trace),
                cycle: panchangam.lunar_cycle(&noon, trace),
            };
            emit(json, &report, || output::moon_text(&report.rise_set, &report.cycle))
        }
        Commands::Sky { location, at, .. } => {
            let location = resolve_location(&panchangam, location)?;
            let instant = parse_datetime(at, zone_of(&location))?;
            let sky = panchangam.compute_sky_positions(&instant, &location, trace);
            emit(json, &sky, || output::sky_text(&sky))
        }
        Commands::Validate => {
            let suite = panchangam.validate(&historical_cases());
            if json {
                println!("{}", suite.to_json()?);
            } else {
                println!("{}", suite.report());
            }
            if suite.all_passed() {
                Ok(())
            } else {
                Err(format!("{} of {} checks failed", suite.failed, suite.total).into())
            }
        }
        Commands::Ayanamsha { date, system } => {
            let date = parse_date(date)?;
            let jd = Instant::from_civil(date.year(), date.month(), date.day(), 0, 0, 0, Tz::UTC)?
                .julian_day();
            let systems: Vec<AyanamshaSystem> = match system {
                Some(name) => vec![
                    AyanamshaSystem::from_name(name)
                        .ok_or_else(|| format!("unknown ayanamsha: {name}"))?,
                ],
                None => AyanamshaSystem::all().to_vec(),
            };
            let rows: Vec<AyanamshaRow> = systems
                .into_iter()
                .map(|s| AyanamshaRow {
                    system: s.name(),
                    degrees: ayanamsha_deg(s, jd),
                })
                .collect();
            emit(json, &rows, || {
                rows.iter()
                    .map(|r| format!("{:<14} {:.6}°", r.system, r.degrees))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
