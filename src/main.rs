use std::error::Error;

use recovr::{build_matcher, RecovrConfig, UserId};
use tracing_subscriber::EnvFilter;

/// Print match suggestions for a user as JSON.
///
/// Usage: `recovr <config.yaml> <user-id>`
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(user)) = (args.next(), args.next()) else {
        return Err("usage: recovr <config.yaml> <user-id>".into());
    };
    let user = UserId(user.parse()?);

    let config = RecovrConfig::from_file(&path)?;
    let matcher = build_matcher(&config)?;
    let matches = matcher.find_potential_matches(user)?;

    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}
