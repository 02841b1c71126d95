use dali_console::console::config::{Config, Input};
use dali_console::console::decorate::Decorator;
use dali_console::error::DynResult;
use dali_console::utils::fallback::StandardDecoder;
use log::{debug, error, info};
use std::process::ExitCode;
use tokio::io::{AsyncBufRead, BufReader};

#[cfg(feature = "serial")]
fn open_serial(port: &str, baud_rate: u32) -> DynResult<Box<dyn AsyncBufRead + Unpin + Send>> {
    let serial = tokio_serial::SerialStream::open(&tokio_serial::new(port, baud_rate))
        .map_err(dali_console::error::ConsoleError::from)?;
    Ok(Box::new(BufReader::new(serial)))
}

#[cfg(not(feature = "serial"))]
fn open_serial(_port: &str, _baud_rate: u32) -> DynResult<Box<dyn AsyncBufRead + Unpin + Send>> {
    Err("Built without serial port support, use --input".into())
}

async fn open_input(input: &Input) -> DynResult<Box<dyn AsyncBufRead + Unpin + Send>> {
    match input {
        Input::Serial { port, baud_rate } => {
            info!("Reading from {} at {} baud", port, baud_rate);
            open_serial(port, *baud_rate)
        }
        Input::Stdin => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
        Input::File(path) => {
            let file = tokio::fs::File::open(path).await?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let config = Config::from_matches(&Config::command().get_matches());
    debug!("Config: {:?}", config);

    let input = match open_input(&config.input).await {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Failed to open input: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let decorator = Decorator::new(Box::new(StandardDecoder), config.format);
    let mut stdout = tokio::io::stdout();
    if let Err(e) = dali_console::console::run(input, &mut stdout, &decorator).await {
        error!("Reading bus traffic failed: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
