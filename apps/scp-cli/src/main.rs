use clap::{Args, Parser, Subcommand};
use scp_fluids::{
    Fluid, FluidDefinition, FluidError, Property, TemperatureSweep, catalog, filter_catalog,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "scp-cli")]
#[command(about = "Curve-fit secondary coolant property lookups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one property at one temperature
    Eval {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Which fluid property to evaluate
        #[arg(short = 'p', long = "property")]
        property: Property,
        /// Fluid temperature, in degrees Celsius
        #[arg(short = 't', long, allow_negative_numbers = true)]
        temperature: f64,
        /// Just report the value, good for scripts
        #[arg(short = 'q', long)]
        quick: bool,
    },
    /// Print a property over a temperature range
    Table {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Which fluid property to tabulate
        #[arg(short = 'p', long = "property")]
        property: Property,
        /// First temperature, in degrees Celsius (defaults to the fluid's t_min)
        #[arg(long, allow_negative_numbers = true)]
        from: Option<f64>,
        /// Last temperature, in degrees Celsius (defaults to the fluid's t_max)
        #[arg(long, allow_negative_numbers = true)]
        to: Option<f64>,
        /// Number of rows
        #[arg(long, default_value_t = 11)]
        points: usize,
    },
    /// Print every property at one temperature
    Pack {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Fluid temperature, in degrees Celsius
        #[arg(short = 't', long, allow_negative_numbers = true)]
        temperature: f64,
    },
    /// List built-in fluids
    Fluids {
        /// Only show fluids matching this text
        query: Option<String>,
    },
}

#[derive(Args)]
struct FluidArgs {
    /// Which fluid to use
    #[arg(short = 'f', long, default_value = "water", conflicts_with = "definition")]
    fluid: String,
    /// Load the fluid from a YAML or JSON definition file instead
    #[arg(long)]
    definition: Option<PathBuf>,
    /// Mixture concentration, in the fluid's units (a fraction for built-ins)
    #[arg(
        short = 'x',
        long,
        default_value_t = 0.0,
        value_parser = parse_concentration,
        allow_negative_numbers = true
    )]
    concentration: f64,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error("Failed to read fluid definition: {path}")]
    DefinitionRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing; range warnings go to stderr so -q output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            fluid,
            property,
            temperature,
            quick,
        } => cmd_eval(&fluid, property, temperature, quick),
        Commands::Table {
            fluid,
            property,
            from,
            to,
            points,
        } => cmd_table(&fluid, property, from, to, points),
        Commands::Pack { fluid, temperature } => cmd_pack(&fluid, temperature),
        Commands::Fluids { query } => {
            cmd_fluids(query.as_deref());
            Ok(())
        }
    }
}

/// Any finite number; range checking is left to the fluid, which clamps and warns.
fn parse_concentration(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{value} is not a finite number"))
    }
}

fn build_fluid(args: &FluidArgs) -> CliResult<Fluid> {
    let fluid = match &args.definition {
        Some(path) => load_definition(path)?
            .builder()
            .concentration(args.concentration)
            .build()?,
        None => Fluid::by_name(&args.fluid, args.concentration)?,
    };
    Ok(fluid)
}

fn load_definition(path: &Path) -> CliResult<FluidDefinition> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::DefinitionRead {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let definition = if is_json {
        FluidDefinition::from_json_str(&text)?
    } else {
        FluidDefinition::from_yaml_str(&text)?
    };
    tracing::debug!(path = %path.display(), fluid = %definition.name, "loaded fluid definition");
    Ok(definition)
}

fn cmd_eval(args: &FluidArgs, property: Property, temperature: f64, quick: bool) -> CliResult<()> {
    let fluid = build_fluid(args)?;

    let value = match property {
        Property::FreezePoint => fluid.freeze_point_at(args.concentration),
        _ => fluid.value(property, temperature),
    };

    if quick {
        println!("{value}");
    } else {
        println!("Fluid:    {}", fluid.name());
        println!("Property: {property}");
        println!("Value:    {value}");
        println!("Units:    [{}]", property.units());
    }
    Ok(())
}

fn cmd_pack(args: &FluidArgs, temperature: f64) -> CliResult<()> {
    let fluid = build_fluid(args)?;
    let pack = fluid.property_pack(temperature);
    println!("{} (x = {:.3})", fluid.name(), fluid.concentration());
    println!("{pack}");
    Ok(())
}

fn cmd_table(
    args: &FluidArgs,
    property: Property,
    from: Option<f64>,
    to: Option<f64>,
    points: usize,
) -> CliResult<()> {
    let fluid = build_fluid(args)?;
    let sweep = TemperatureSweep::new(
        from.unwrap_or(fluid.t_min()),
        to.unwrap_or(fluid.t_max()),
        points,
    )?;
    let rows = fluid.sweep(property, &sweep)?;

    println!(
        "{} (x = {:.3}), valid {} C",
        fluid.name(),
        fluid.concentration(),
        fluid.temperature_limits()
    );
    println!("{:>10}  {:>14}", "T [C]", format!("{property} [{}]", property.units()));
    let mut clamped = 0;
    for row in &rows {
        let marker = if row.warning.is_some() {
            clamped += 1;
            "*"
        } else {
            ""
        };
        println!("{:>10.3}  {:>14.6e}{marker}", row.temperature, row.value);
    }
    if clamped > 0 {
        println!("* {clamped} row(s) outside the valid range, clamped to the nearest limit");
    }
    Ok(())
}

fn cmd_fluids(query: Option<&str>) {
    let entries = match query {
        Some(q) => filter_catalog(q),
        None => catalog().to_vec(),
    };

    if entries.is_empty() {
        println!("No fluids match");
        return;
    }

    println!("Fluids:");
    for entry in entries {
        let kind = if entry.mixture { "mixture" } else { "pure" };
        println!(
            "  {:<14} {:<14} ({kind}; aliases: {})",
            entry.canonical_id,
            entry.display_name,
            entry.aliases.join(", ")
        );
    }
}
