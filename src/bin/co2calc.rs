use std::error::Error;

use clap::{Parser, Subcommand};
use simple_logger::SimpleLogger;
use tinytemplate::TinyTemplate;

use co2calc::report::Summary;
use co2calc::*;

static TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/bin/co2calc_template.md"
));
static TEMPLATE_NAME: &'static str = "t";

const ABOUT: &'static str = r#"Estimates the CO2 emissions of a commute and their equivalents:
* how many trees are needed during one year to absorb them
* how many km an average car would drive to emit the same
* how many km a plane would fly to emit the same
The distance is either given, computed from two coordinates, or looked up between two
addresses using the Google Maps Distance Matrix API.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// CSV file with the header `vehicle,emission` (g CO2/km) replacing the default factors
    #[arg(long, global = true)]
    factors: Option<String>,
    /// Log every computation
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Computes the emissions of a commute
    Compute(ComputeArgs),
    /// Lists the vehicles and their emission factors
    Vehicles {
        /// Prints the factors as CSV, in the format accepted by `--factors`
        #[arg(long)]
        csv: bool,
    },
    /// Prints tips to reduce emissions
    Tips,
}

#[derive(clap::Args, Debug)]
struct ComputeArgs {
    /// The distance of one trip in km
    #[arg(short, long, conflicts_with_all = ["from_coords", "to_coords"])]
    distance: Option<f64>,
    /// The start address
    #[arg(long, default_value = "")]
    from: String,
    /// The end address
    #[arg(long, default_value = "")]
    to: String,
    /// The start position as `latitude,longitude`
    #[arg(long, value_parser = parse_coords, requires = "to_coords")]
    from_coords: Option<(f64, f64)>,
    /// The end position as `latitude,longitude`
    #[arg(long, value_parser = parse_coords, requires = "from_coords")]
    to_coords: Option<(f64, f64)>,
    /// The vehicle (bicycle, motorcycle, car, bus or truck)
    #[arg(long, value_parser = parse_vehicle)]
    vehicle: VehicleKind,
    /// The number of trips
    #[arg(short, long)]
    frequency: u32,
    /// The number of days over which the trips happen, to compute the daily footprint
    #[arg(long, default_value_t = 365)]
    period_days: u32,
    /// The minimum accepted distance in km
    #[arg(long, default_value_t = Bounds::default().min_distance)]
    min_distance: f64,
    /// The maximum accepted distance in km
    #[arg(long, default_value_t = Bounds::default().max_distance)]
    max_distance: f64,
    /// The maximum accepted number of trips
    #[arg(long, default_value_t = Bounds::default().max_frequency)]
    max_frequency: u32,
    /// The key of the Google Maps API, used to look up the distance between addresses
    #[arg(long, env = "GOOGLE_MAPS_API_KEY")]
    maps_api_key: Option<String>,
    /// Formats numbers with a decimal comma
    #[arg(long)]
    decimal_comma: bool,
    /// Writes the results as JSON to this directory
    #[arg(long)]
    export: Option<String>,
}

fn parse_vehicle(arg: &str) -> Result<VehicleKind, co2calc::Error> {
    arg.parse()
}

fn parse_coords(arg: &str) -> Result<(f64, f64), String> {
    let (latitude, longitude) = arg
        .split_once(',')
        .ok_or_else(|| format!("\"{arg}\" is not in the format `latitude,longitude`"))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("\"{value}\": {e}"))
    };
    Ok((parse(latitude)?, parse(longitude)?))
}

/// Resolves the distance of one trip in km from the arguments
async fn distance(args: &ComputeArgs) -> Result<f64, Box<dyn Error>> {
    if let Some(distance) = args.distance {
        return Ok(distance);
    }
    if let (Some(from), Some(to)) = (args.from_coords, args.to_coords) {
        let km = great_circle_km(from, to);
        log::info!("Great-circle distance: {km:.2} km");
        return Ok(km);
    }
    let api_key = args.maps_api_key.clone().ok_or_else(|| {
        Into::<Box<dyn Error>>::into(
            "either --distance, --from-coords/--to-coords or a Maps API key is required",
        )
    })?;
    let provider = GoogleDistanceMatrix::new(api_key);
    Ok(lookup_distance_km(&provider, &args.from, &args.to).await?)
}

async fn compute(args: ComputeArgs, table: EmissionFactorTable) -> Result<(), Box<dyn Error>> {
    let calculator = Calculator {
        table,
        constants: EquivalentConstants::default(),
        bounds: Bounds::new(
            args.min_distance,
            args.max_distance,
            Bounds::default().min_frequency,
            args.max_frequency,
        )?,
    };

    let input = TripInput {
        distance: distance(&args).await?,
        vehicle: args.vehicle,
        frequency: args.frequency,
    };
    let result = calculator.compute(&input)?;
    let tier = classify_impact(result.total_kg);

    let separator = if args.decimal_comma { ',' } else { '.' };
    let summary = Summary::new(&input, &result, tier, args.period_days, separator);

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;
    println!("{}", tt.render(TEMPLATE_NAME, &summary)?);

    if let Some(directory) = args.export {
        let record = ExportRecord::new(
            &args.from,
            &args.to,
            &input,
            &result,
            time::OffsetDateTime::now_utc(),
        );
        write(&record, &directory, &LocalDisk).await?;
    }
    Ok(())
}

fn vehicles(table: &EmissionFactorTable, csv: bool) -> Result<(), Box<dyn Error>> {
    if csv {
        print!("{}", String::from_utf8(table.to_csv()?)?);
        return Ok(());
    }
    for (vehicle, emission) in table.iter() {
        let info = vehicle.info();
        println!(
            "{:<11} {:<16} {emission:>6.1} g/km  {} ({})",
            vehicle.id(),
            info.name,
            info.description,
            info.efficiency
        );
    }
    Ok(())
}

fn tips() {
    for category in SUSTAINABILITY_TIPS.iter() {
        println!("## {}", category.category);
        for tip in category.tips {
            println!("* {tip}");
        }
        println!();
    }
    println!("## Facts");
    for fact in FACTS {
        println!("* {fact}");
    }
    println!(
        "* An average person emits {} t CO2 per year ({} t in Brazil, {} t in developed countries)",
        PER_CAPITA_T_PER_YEAR.world,
        PER_CAPITA_T_PER_YEAR.brazil,
        PER_CAPITA_T_PER_YEAR.developed_countries
    );
    println!();
    println!("## Sustainable Development Goals");
    for goal in SUSTAINABILITY_GOALS.iter() {
        println!("* SDG {} - {}: {}", goal.number, goal.title, goal.target);
    }
    println!();
    println!("## References");
    for reference in REFERENCES.iter() {
        println!("* {}, {} <{}>", reference.title, reference.author, reference.url);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let table = match &cli.factors {
        Some(path) => load_factors(path)?,
        None => EmissionFactorTable::default(),
    };

    match cli.command {
        Command::Compute(args) => compute(args, table).await,
        Command::Vehicles { csv } => vehicles(&table, csv),
        Command::Tips => {
            tips();
            Ok(())
        }
    }
}
