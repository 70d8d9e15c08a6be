use clap::{Args, Parser, Subcommand};
use css_units::config::Config;
use css_units::rewrite::BulkCodeRewriter;
use css_units::units::{
    self, parse_length, ConversionContext, Dimensions, Formatter, PropertyType, Unit,
    UnitConverter, UnitKind,
};
use log::{info, LevelFilter};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "css-units")]
#[command(about = "CSS unit converter and bulk CSS code rewriter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    context: ContextArgs,

    /// Log each conversion step
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Overrides for the conversion context; these win over the config file
#[derive(Args)]
struct ContextArgs {
    /// TOML config file with [context] and [precision] tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Root (html) font size in px
    #[arg(long, global = true)]
    root_font_size: Option<f64>,

    /// Parent element font size in px (defaults to the root font size)
    #[arg(long, global = true)]
    parent_font_size: Option<f64>,

    /// Viewport size in px, e.g. 1920x1080
    #[arg(long, global = true)]
    viewport: Option<Dimensions>,

    /// Containing block / query container size in px, e.g. 600x400
    #[arg(long, global = true)]
    container: Option<Dimensions>,

    /// Property the value belongs to: width, height, font-size or other
    #[arg(long, global = true)]
    property: Option<PropertyType>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value, e.g. `convert 24px --to rem`
    Convert {
        /// Value with its unit (e.g., "24px", "-1.5rem", "50%")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Target unit
        #[arg(short, long)]
        to: Unit,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a value in every unit the context can resolve
    Table {
        /// Value with its unit (e.g., "16px")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite every occurrence of one unit in a CSS file
    Rewrite {
        /// CSS file to read (default: stdin)
        input: Option<PathBuf>,

        /// Unit to replace
        #[arg(short, long, default_value = "px")]
        from: Unit,

        /// Unit to write
        #[arg(short, long, default_value = "rem")]
        to: Unit,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the supported units
    Units,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert { value, to, json } => convert_value(&cli.context, &value, to, json),
        Commands::Table { value, json } => print_table(&cli.context, &value, json),
        Commands::Rewrite {
            input,
            from,
            to,
            output,
        } => rewrite_file(&cli.context, input.as_deref(), from, to, output.as_deref()),
        Commands::Units => {
            list_units();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Config file first, then command-line overrides
fn load_settings(
    args: &ContextArgs,
) -> Result<(ConversionContext, Formatter), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::empty(),
    };

    let mut ctx = config.context();
    if let Some(size) = args.root_font_size {
        ctx.root_font_size = size;
    }
    if let Some(size) = args.parent_font_size {
        ctx.parent_font_size = Some(size);
    }
    if let Some(viewport) = args.viewport {
        ctx.viewport = Some(viewport);
    }
    if let Some(container) = args.container {
        ctx.container = Some(container);
    }
    if let Some(property) = args.property {
        ctx.property = property;
    }

    Ok((ctx, config.formatter()?))
}

fn convert_value(
    args: &ContextArgs,
    input: &str,
    to: Unit,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (ctx, formatter) = load_settings(args)?;
    let (value, from) = parse_length(input)?;

    let converter = UnitConverter::new(ctx).with_formatter(formatter);
    let result = converter.convert_formatted(value, from, to)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}

fn print_table(
    args: &ContextArgs,
    input: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (ctx, formatter) = load_settings(args)?;
    let (value, from) = parse_length(input)?;

    let converter = UnitConverter::new(ctx).with_formatter(formatter);
    let results = converter.convert_all(value, from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{}{} is:", converter.formatter().format(value, from), from);
    for result in &results {
        println!("  {:>6}  {}", result.unit, result);
    }

    let unresolved = unresolved_kinds(&converter);
    if !unresolved.is_empty() {
        println!();
    }
    for (kind, flag) in unresolved {
        println!("{} units skipped: pass {} to resolve them", kind, flag);
    }

    Ok(())
}

/// Unit kinds the converter's context cannot resolve, with the flag that supplies it
fn unresolved_kinds(converter: &UnitConverter) -> Vec<(UnitKind, &'static str)> {
    [
        (UnitKind::Percentage, "--container"),
        (UnitKind::Viewport, "--viewport"),
        (UnitKind::Container, "--container"),
    ]
    .into_iter()
    .filter(|(kind, _)| !converter.supports(*kind))
    .collect()
}

fn rewrite_file(
    args: &ContextArgs,
    input: Option<&std::path::Path>,
    from: Unit,
    to: Unit,
    output: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (ctx, formatter) = load_settings(args)?;

    let source = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let rewriter = BulkCodeRewriter::new(from, to).with_formatter(formatter);
    let outcome = rewriter.rewrite_with_stats(&source, &ctx)?;
    info!(
        "Converted {} value(s) from {} to {}",
        outcome.replacements, from, to
    );

    if let Some(output_path) = output {
        std::fs::write(output_path, &outcome.output)?;
        println!("CSS written to {}", output_path.display());
    } else {
        print!("{}", outcome.output);
    }

    Ok(())
}

fn list_units() {
    let ratio_formatter = Formatter::new().with_precision(Unit::Px, 3);

    println!("Units ({}):", Unit::ALL.len());
    for unit in Unit::ALL {
        match units::px_per_unit(unit) {
            Some(ratio) => println!(
                "  {:>6}  {:<14} 1{} = {}px",
                unit,
                unit.kind(),
                unit,
                ratio_formatter.format(ratio, Unit::Px)
            ),
            None => println!("  {:>6}  {}", unit, unit.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_literals_parse_as_values() {
        let cli = Cli::try_parse_from(["css-units", "convert", "-2rem", "--to", "px"]).unwrap();
        match cli.command {
            Commands::Convert { value, to, json } => {
                assert_eq!(value, "-2rem");
                assert_eq!(to, Unit::Px);
                assert!(!json);
            }
            _ => panic!("Expected convert"),
        }

        let cli = Cli::try_parse_from(["css-units", "table", "-0.5in", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Table { ref value, json: true } if value == "-0.5in"
        ));
    }

    #[test]
    fn test_context_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "css-units",
            "convert",
            "50vw",
            "--to",
            "px",
            "--viewport",
            "1920x1080",
        ])
        .unwrap();
        assert_eq!(cli.context.viewport, Some(Dimensions::new(1920.0, 1080.0)));
    }

    #[test]
    fn test_unresolved_kinds_name_missing_flags() {
        let converter = UnitConverter::new(ConversionContext::default());
        let kinds: Vec<UnitKind> = unresolved_kinds(&converter)
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, vec![UnitKind::Viewport, UnitKind::Container]);

        let converter = UnitConverter::new(
            ConversionContext::new()
                .with_viewport(1440.0, 900.0)
                .with_property(PropertyType::Width),
        );
        assert_eq!(
            unresolved_kinds(&converter),
            vec![
                (UnitKind::Percentage, "--container"),
                (UnitKind::Container, "--container")
            ]
        );

        let converter = UnitConverter::new(
            ConversionContext::new()
                .with_viewport(1440.0, 900.0)
                .with_container(600.0, 400.0),
        );
        assert!(unresolved_kinds(&converter).is_empty());
    }
}
