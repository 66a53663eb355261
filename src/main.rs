use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use serde::Serialize;
use tools2025::calc::converter::{convert_pair, ConversionPair};
use tools2025::calc::download::{self, DownloadInputs};
use tools2025::calc::electricity::{self, Country, Tariff};
use tools2025::calc::mortgage;
use tools2025::calc::validation::ValidationResult;
use tools2025::config::Config;
use tools2025::site;
use tools2025::units::{self, fixed, Unit};

#[derive(Parser)]
#[command(name = "tools2025")]
#[command(
    about = "Everyday calculators: download speed, electricity cost, mortgage interest and units",
    long_about = None
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve whichever of size, time and speed is missing
    Download {
        /// File size, optionally with a unit (e.g. "1.5 GB")
        #[arg(long)]
        size: Option<String>,

        #[arg(long)]
        size_unit: Option<String>,

        /// Download time, optionally with a unit (e.g. "2 min")
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        time_unit: Option<String>,

        /// Download speed, optionally with a unit (e.g. "50 Mbps")
        #[arg(long)]
        speed: Option<String>,

        #[arg(long)]
        speed_unit: Option<String>,
    },

    /// Annual running cost of an always-on device
    Electricity {
        /// Power draw in watts
        #[arg(long)]
        watts: f64,

        /// Country code (US, UK, EU, CA, AU, JP, DE, FR, NL, SE, SG)
        #[arg(long)]
        country: Option<String>,

        /// Locale used to pick a country, e.g. "en-GB"
        #[arg(long)]
        locale: Option<String>,

        /// Flat rate per kWh
        #[arg(long)]
        rate: Option<f64>,

        #[arg(long)]
        peak_rate: Option<f64>,

        #[arg(long)]
        off_peak_rate: Option<f64>,

        #[arg(long)]
        peak_hours: Option<f64>,

        #[arg(long)]
        off_peak_hours: Option<f64>,
    },

    /// Daily interest before and after an overpayment
    Mortgage {
        #[arg(long)]
        balance: String,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: String,

        #[arg(long)]
        overpayment: Option<String>,
    },

    /// Convert a value between units ("10 km mi" or "10km mi")
    Convert {
        /// Value, optionally with its unit attached (e.g. "-40" or "10km")
        #[arg(allow_hyphen_values = true)]
        value: String,

        from: String,

        to: Option<String>,
    },

    /// List site routes, navigation and calculators
    Routes,
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(LevelFilter::Warn)
            .init();
    }
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Download {
            size,
            size_unit,
            time,
            time_unit,
            speed,
            speed_unit,
        } => run_download(
            &config,
            DownloadArgs {
                size,
                size_unit,
                time,
                time_unit,
                speed,
                speed_unit,
            },
            cli.json,
        ),
        Commands::Electricity {
            watts,
            country,
            locale,
            rate,
            peak_rate,
            off_peak_rate,
            peak_hours,
            off_peak_hours,
        } => run_electricity(
            &config,
            ElectricityArgs {
                watts,
                country,
                locale,
                rate,
                peak_rate,
                off_peak_rate,
                peak_hours,
                off_peak_hours,
            },
            cli.json,
        ),
        Commands::Mortgage {
            balance,
            rate,
            overpayment,
        } => run_mortgage(&balance, &rate, overpayment.as_deref(), cli.json),
        Commands::Convert { value, from, to } => {
            run_convert(&value, &from, to.as_deref(), cli.json)
        }
        Commands::Routes => list_routes(&config, cli.json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::empty(),
    };
    config.apply_env();
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

struct DownloadArgs {
    size: Option<String>,
    size_unit: Option<String>,
    time: Option<String>,
    time_unit: Option<String>,
    speed: Option<String>,
    speed_unit: Option<String>,
}

fn run_download(
    config: &Config,
    args: DownloadArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = DownloadInputs {
        size: args.size.unwrap_or_default(),
        size_unit: match args.size_unit {
            Some(unit) => unit.parse()?,
            None => config.download.size_unit,
        },
        time: args.time.unwrap_or_default(),
        time_unit: match args.time_unit {
            Some(unit) => unit.parse()?,
            None => config.download.time_unit,
        },
        speed: args.speed.unwrap_or_default(),
        speed_unit: match args.speed_unit {
            Some(unit) => unit.parse()?,
            None => config.download.speed_unit,
        },
    };

    let report = download::solve(inputs)?;

    if json {
        return print_json(&report);
    }

    let inputs = &report.inputs;
    println!("File size: {} {}", inputs.size, inputs.size_unit);
    println!("Time:      {} {}", inputs.time, inputs.time_unit);
    println!("Speed:     {} {}", inputs.speed, inputs.speed_unit);
    if let Some(solved) = report.solved {
        println!("\nCalculated {}", solved);
    }

    if let Some(speeds) = &report.speeds {
        println!("\nSpeeds:");
        for entry in &speeds.entries {
            println!("  {:>8}  {}", entry.unit.label(), entry.formatted);
        }
    }

    if let Some(summary) = &report.summary {
        println!("\n{}", summary);
    }

    Ok(())
}

struct ElectricityArgs {
    watts: f64,
    country: Option<String>,
    locale: Option<String>,
    rate: Option<f64>,
    peak_rate: Option<f64>,
    off_peak_rate: Option<f64>,
    peak_hours: Option<f64>,
    off_peak_hours: Option<f64>,
}

/// Explicit code, then config, then the given or system locale
fn pick_country(config: &Config, args: &ElectricityArgs) -> Result<&'static Country, String> {
    if let Some(code) = args.country.as_ref().or(config.electricity.country.as_ref()) {
        return electricity::find_country(code).ok_or_else(|| format!("Unknown country: {}", code));
    }

    let locale = args
        .locale
        .clone()
        .or_else(|| std::env::var("LANG").ok())
        .unwrap_or_default();
    // "en_GB.UTF-8" -> "en-GB"
    let locale = locale
        .split('.')
        .next()
        .unwrap_or_default()
        .replace('_', "-");
    let country = electricity::detect_country(&locale);
    log::debug!("locale '{}' -> {}", locale, country.code);
    Ok(country)
}

fn run_electricity(
    config: &Config,
    args: ElectricityArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let country = pick_country(config, &args)?;

    let dual = args.peak_rate.is_some()
        || args.off_peak_rate.is_some()
        || args.peak_hours.is_some()
        || args.off_peak_hours.is_some();

    let tariff = if dual {
        let peak_hours = args.peak_hours.unwrap_or(config.electricity.peak_hours);
        let off_peak_hours = args
            .off_peak_hours
            .unwrap_or_else(|| electricity::complement_hours(peak_hours));
        Tariff::Dual {
            peak_rate: args.peak_rate.unwrap_or_else(|| country.default_peak_rate()),
            off_peak_rate: args
                .off_peak_rate
                .unwrap_or_else(|| country.default_off_peak_rate()),
            peak_hours,
            off_peak_hours,
        }
    } else {
        Tariff::Single {
            rate: args
                .rate
                .or(config.electricity.rate)
                .unwrap_or(country.default_rate),
        }
    };

    let mut validation = ValidationResult::new();
    if let Tariff::Dual {
        peak_hours,
        off_peak_hours,
        ..
    } = tariff
    {
        if let Some(warning) = electricity::hours_warning(peak_hours, off_peak_hours) {
            log::warn!("{}", warning);
            validation.add_warning(warning.to_string(), Some("hours".to_string()));
        }
    }

    let estimate = match electricity::annual_cost(args.watts, &tariff) {
        Ok(estimate) => estimate,
        Err(e) => {
            validation.add_calc_error(&e);
            eprintln!("{}", validation);
            return Err(e.into());
        }
    };

    if json {
        return print_json(&serde_json::json!({
            "country": country,
            "tariff": tariff,
            "estimate": estimate,
        }));
    }

    let symbol = country.symbol;
    let money = |amount: f64| format!("{}{}", symbol, fixed(amount, 2));
    println!("{} ({})", country.name, country.currency);
    println!("Annual consumption: {} kWh", fixed(estimate.annual_kwh, 2));
    println!("Annual cost:        {}", money(estimate.annual_cost));
    println!("Monthly cost:       {}", money(estimate.monthly_cost));
    println!("Daily cost:         {}", money(estimate.daily_cost));

    if let Some(breakdown) = &estimate.breakdown {
        println!(
            "\nPeak ({}h):     {} kWh  {}",
            breakdown.peak.hours,
            fixed(breakdown.peak.kwh, 2),
            money(breakdown.peak.cost)
        );
        println!(
            "Off-peak ({}h): {} kWh  {}",
            breakdown.off_peak.hours,
            fixed(breakdown.off_peak.kwh, 2),
            money(breakdown.off_peak.cost)
        );
    }

    Ok(())
}

fn run_mortgage(
    balance: &str,
    rate: &str,
    overpayment: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let comparison = mortgage::compare_inputs(balance, rate, overpayment.unwrap_or(""))?;

    if json {
        return print_json(&comparison);
    }

    let rows = [
        ("Current", &comparison.current),
        ("After overpayment", &comparison.after_overpayment.interest),
        ("Saving", &comparison.saving),
    ];
    println!("{:<18} {:>12} {:>12} {:>12}", "", "Daily", "Monthly", "Annual");
    for (label, periods) in rows {
        println!(
            "{:<18} {:>12} {:>12} {:>12}",
            label,
            fixed(periods.daily, 2),
            fixed(periods.monthly, 2),
            fixed(periods.annual, 2)
        );
    }
    println!(
        "\nNew balance: {}",
        fixed(comparison.after_overpayment.balance, 2)
    );

    Ok(())
}

#[derive(Serialize)]
struct Conversion {
    value: f64,
    from: Unit,
    to: Unit,
    result: String,
    formulas: &'static [&'static str],
}

const NO_FORMULAS: &[&str] = &[];

/// Accepts `VALUE FROM TO` or `VALUE+FROM TO`
fn parse_convert_args(
    value: &str,
    from: &str,
    to: Option<&str>,
) -> Result<(f64, Unit, Unit), Box<dyn std::error::Error>> {
    match to {
        Some(to) => {
            let number = units::parse_number(value)
                .ok_or_else(|| format!("Not a number: {}", value))?;
            Ok((number, from.parse()?, to.parse()?))
        }
        None => {
            let quantity = units::parse_quantity(value)?;
            Ok((quantity.value, quantity.unit, from.parse()?))
        }
    }
}

fn run_convert(
    value: &str,
    from: &str,
    to: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (number, from, to) = parse_convert_args(value, from, to)?;

    // Paired units go through the converter page's formatting
    let (result, formulas) = match ConversionPair::between(from, to) {
        Some((pair, side)) => (
            convert_pair(pair, side, &number.to_string()),
            pair.formula_hints(),
        ),
        None => (fixed(units::convert(number, from, to)?, 4), NO_FORMULAS),
    };

    if json {
        return print_json(&Conversion {
            value: number,
            from,
            to,
            result,
            formulas,
        });
    }

    println!("{} {} = {} {}", number, from, result, to);
    for formula in formulas {
        println!("  {}", formula);
    }
    Ok(())
}

fn list_routes(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let map = site::site_map(config);

    if json {
        return print_json(&map);
    }

    println!("{}", map.title);
    println!("\nRoutes ({}):", map.routes.len());
    for route in &map.routes {
        println!("  {:<28} {}", route.path, route.title);
    }

    println!("\nNavigation:");
    for item in &map.nav {
        let mobile = map.mobile_nav.contains(item);
        println!(
            "  {} -> {}{}",
            item.label,
            item.href(),
            if mobile { "" } else { " (desktop only)" }
        );
    }

    println!("\nCalculators:");
    for entry in &map.calculators {
        println!("  {} ({})", entry.name, entry.route);
        println!("    {}", entry.description);
    }

    for group in &map.alternatives {
        println!("\nAlternatives - {}:", group.category);
        for alt in &group.alternatives {
            println!("  {} - {}", alt.name, alt.url);
        }
    }

    match &map.feedback {
        Some(link) => println!("\n{} {}", site::FEEDBACK_PROMPT, link.url),
        None => log::debug!("no feedback url configured"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_accepts_negative_values() {
        let cli = Cli::try_parse_from(["tools2025", "convert", "-40", "C", "F"]).unwrap();
        match cli.command {
            Commands::Convert { value, from, to } => {
                assert_eq!(value, "-40");
                assert_eq!(from, "C");
                assert_eq!(to.as_deref(), Some("F"));

                let (number, from, to) =
                    parse_convert_args(&value, &from, to.as_deref()).unwrap();
                assert_eq!(number, -40.0);
                assert_eq!(units::convert(number, from, to).unwrap(), -40.0);
            }
            _ => panic!("Expected convert command"),
        }
    }

    #[test]
    fn test_convert_attached_unit_form() {
        let cli = Cli::try_parse_from(["tools2025", "--json", "convert", "-20C", "F"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Convert { value, from, to } => {
                let (number, from, to) =
                    parse_convert_args(&value, &from, to.as_deref()).unwrap();
                assert_eq!(number, -20.0);
                assert_eq!(from.to_string(), "°C");
                assert_eq!(to.to_string(), "°F");
            }
            _ => panic!("Expected convert command"),
        }
    }

    #[test]
    fn test_convert_requires_a_unit() {
        assert!(Cli::try_parse_from(["tools2025", "convert", "-40"]).is_err());
    }
}
