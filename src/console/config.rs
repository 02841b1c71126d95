use crate::console::decorate::OutputFormat;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const DEFAULT_PORT: &str = "/dev/ttyUSB1";
pub const DEFAULT_BAUD_RATE: u32 = 115200;

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Serial { port: String, baud_rate: u32 },
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: Input,
    pub format: OutputFormat,
}

impl Config {
    pub fn command() -> Command {
        Command::new("dali_console")
            .about("Decode DALI bus traffic from a serial bridge.")
            .arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .default_value(DEFAULT_PORT)
                    .help("Serial device of the bridge"),
            )
            .arg(
                Arg::new("baud_rate")
                    .short('b')
                    .long("baud-rate")
                    .value_parser(value_parser!(u32))
                    .default_value("115200")
                    .help("Serial baud rate"),
            )
            .arg(
                Arg::new("input")
                    .short('i')
                    .long("input")
                    .value_parser(value_parser!(PathBuf))
                    .help("Read captured lines from a file instead, '-' for stdin"),
            )
            .arg(
                Arg::new("json")
                    .short('j')
                    .long("json")
                    .action(clap::ArgAction::SetTrue)
                    .help("Print one JSON object per line"),
            )
    }

    pub fn from_matches(matches: &ArgMatches) -> Config {
        let input = match matches.get_one::<PathBuf>("input") {
            Some(path) if path.as_os_str() == "-" => Input::Stdin,
            Some(path) => Input::File(path.clone()),
            None => Input::Serial {
                port: matches
                    .get_one::<String>("port")
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_PORT.to_string()),
                baud_rate: matches
                    .get_one::<u32>("baud_rate")
                    .copied()
                    .unwrap_or(DEFAULT_BAUD_RATE),
            },
        };
        let format = if matches.get_flag("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        Config { input, format }
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::command()
            .try_get_matches_from(args)
            .map(|m| Self::from_matches(&m))
    }
}
