use clap::{Parser, ValueEnum};
use ipv4_subnet_calc::output::{print_report, subnet_print, to_json};
use ipv4_subnet_calc::{calculate, CalcConfig};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
    Csv,
}

/// IPv4 subnet calculator.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// `10.0.0.1/24`, `10.0.0.1 255.255.255.0`, `10.0.0.1 0.0.0.255` or `10.0.0.1`
    #[arg(required = true, num_args = 1..)]
    subnet: Vec<String>,
    /// Page of the sibling list to centre on
    #[arg(short, long, allow_hyphen_values = true)]
    page: Option<String>,
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    let args = Args::parse();
    let config = CalcConfig::from_env();
    log::info!("#Start main() {:?}", args);

    let input = args.subnet.join(" ");
    let report = match calculate(&input, args.page.as_deref(), &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match args.format {
        Format::Text => print_report(&report),
        Format::Json => println!("{}", to_json(&report)?),
        Format::Csv => subnet_print(&report),
    }
    Ok(())
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
