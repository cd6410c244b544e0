mod console;
mod core;

use clap::Parser;
use tokio::io::BufReader;

use crate::core::store::{CounterStore, SharedCounterStore};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory for the rolling JSON log
    #[arg(short, long, default_value_t = String::from("./logs"))]
    log_dir: String,
    #[arg(short = 'f', long, default_value_t = String::from("counter.log"))]
    log_file: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_command_line_args();

    let _guard = init_tracing(&args)?;

    let store = SharedCounterStore::new(CounterStore::new());
    let render = store
        .subscribe(|count| println!("The count is {}", count))
        .await;

    println!("The count is {}", store.value().await);
    console::run_console(&store, BufReader::new(tokio::io::stdin())).await?;

    render.unsubscribe();
    tracing::info!("Console closed with counter at {}", store.value().await);

    Ok(())
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn init_tracing(args: &Args) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let file_appender = tracing_appender::rolling::daily(&args.log_dir, &args.log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}
