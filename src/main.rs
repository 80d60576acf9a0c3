use clap::{App, Arg, SubCommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod settings;
mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("goldtrend=debug".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let app = App::new("goldtrend")
        .version("0.1.0")
        .about("Gold price quotes and trend charts from the GoldPrice API")
        .subcommand(
            SubCommand::with_name("latest")
                .about("Fetch the latest quote and the 7-day history")
                .arg(
                    Arg::with_name("out")
                        .short('o')
                        .long("out")
                        .value_name("FILE")
                        .help("Write the 7-day trend chart to this PNG file")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("width")
                        .long("width")
                        .value_name("PX")
                        .help("Logical chart width in pixels")
                        .takes_value(true)
                        .default_value("375"),
                )
                .arg(
                    Arg::with_name("height")
                        .long("height")
                        .value_name("PX")
                        .help("Logical chart height in pixels")
                        .takes_value(true)
                        .default_value("250"),
                )
                .arg(
                    Arg::with_name("scale")
                        .long("scale")
                        .value_name("FACTOR")
                        .help("Device pixel ratio for the chart backing store")
                        .takes_value(true)
                        .default_value("2"),
                ),
        )
        .subcommand(
            SubCommand::with_name("trend")
                .about("Render a trend chart for a selectable time range")
                .arg(
                    Arg::with_name("range")
                        .short('r')
                        .long("range")
                        .value_name("RANGE")
                        .help("Time range: 7d, 30d or 90d")
                        .takes_value(true)
                        .default_value("7d"),
                )
                .arg(
                    Arg::with_name("records")
                        .long("records")
                        .value_name("N")
                        .help("Cap the number of history records (e.g. 10, 20, 50)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("out")
                        .short('o')
                        .long("out")
                        .value_name("FILE")
                        .help("Output PNG file")
                        .takes_value(true)
                        .default_value("trend.png"),
                )
                .arg(
                    Arg::with_name("width")
                        .long("width")
                        .value_name("PX")
                        .help("Logical chart width in pixels")
                        .takes_value(true)
                        .default_value("375"),
                )
                .arg(
                    Arg::with_name("height")
                        .long("height")
                        .value_name("PX")
                        .help("Logical chart height in pixels")
                        .takes_value(true)
                        .default_value("250"),
                )
                .arg(
                    Arg::with_name("scale")
                        .long("scale")
                        .value_name("FACTOR")
                        .help("Device pixel ratio for the chart backing store")
                        .takes_value(true)
                        .default_value("2"),
                ),
        )
        .subcommand(
            SubCommand::with_name("set-url")
                .about("Override the API base URL and verify it with a fetch")
                .arg(
                    Arg::with_name("url")
                        .value_name("URL")
                        .help("New base URL, e.g. https://api.example.com")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("clear")
                        .long("clear")
                        .help("Remove the stored override")
                        .takes_value(false),
                ),
        );

    let matches = app.get_matches();

    info!("goldtrend starting");

    if let Err(e) = commands::dispatch(&matches).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
