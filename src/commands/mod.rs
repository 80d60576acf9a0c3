pub mod latest;
pub mod set_url;
pub mod trend;

use clap::ArgMatches;

/// Route a parsed command line to its handler
pub async fn dispatch(matches: &ArgMatches) -> Result<(), String> {
    if let Some(m) = matches.subcommand_matches("latest") {
        let (width, height, scale) = surface_args(m)?;
        latest::execute(m.value_of("out"), width, height, scale).await
    } else if let Some(m) = matches.subcommand_matches("trend") {
        let (width, height, scale) = surface_args(m)?;
        let records = match m.value_of("records") {
            Some(raw) => Some(
                raw.parse::<u32>()
                    .map_err(|_| format!("Invalid record count: '{}'", raw))?,
            ),
            None => None,
        };
        trend::execute(
            m.value_of("range").unwrap_or("7d"),
            records,
            m.value_of("out").unwrap_or("trend.png"),
            width,
            height,
            scale,
        )
        .await
    } else if let Some(m) = matches.subcommand_matches("set-url") {
        set_url::execute(m.value_of("url"), m.is_present("clear")).await
    } else {
        Err("No command specified. Use --help for usage information.".to_string())
    }
}

fn surface_args(m: &ArgMatches) -> Result<(u32, u32, u32), String> {
    let width = parse_dim(m, "width", 375)?;
    let height = parse_dim(m, "height", 250)?;
    let scale = parse_dim(m, "scale", 2)?;
    Ok((width, height, scale))
}

fn parse_dim(m: &ArgMatches, name: &str, default: u32) -> Result<u32, String> {
    match m.value_of(name) {
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| format!("Invalid {}: '{}'", name, raw)),
        None => Ok(default),
    }
}
