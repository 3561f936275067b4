//! `lp_parse` — parse an LP file and print its structure. Parsing and
//! printing only; no solving, writing, or conversion.

mod cli;

use clap::Parser;
use cli::{Cli, OutputFormat};
use lp_parser_rs::parse_file;

type BoxError = Box<dyn std::error::Error>;

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    let model = parse_file(&cli.file)?;

    match cli.format {
        OutputFormat::Text => println!("{model}"),
        #[cfg(feature = "serde")]
        OutputFormat::Json => {
            if cli.pretty {
                println!("{}", serde_json::to_string_pretty(&model)?);
            } else {
                println!("{}", serde_json::to_string(&model)?);
            }
        }
        #[cfg(feature = "serde")]
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&model)?);
        }
    }

    Ok(())
}
