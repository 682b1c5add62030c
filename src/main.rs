use clap::Parser;
use drone_location::config::Command;
use drone_location::utils::{logger, validation::Validate};
use drone_location::{CliConfig, Location, LocationError, LocationsFile, NamedLocation};

fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.json_logs);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let rendered = run(&config.command)
        .and_then(|locations| config.command.output().render(&locations));

    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => fail(&e),
    }
}

fn run(command: &Command) -> Result<Vec<NamedLocation>, LocationError> {
    match command {
        Command::Check {
            latitude,
            longitude,
            altitude,
            ..
        } => {
            let location = Location::new(*latitude, *longitude, *altitude)?;
            tracing::info!("✅ Location is valid: {}", location);
            Ok(vec![NamedLocation {
                name: "check".to_string(),
                location,
            }])
        }
        Command::Parse { text, .. } => {
            let location: Location = text.parse()?;
            tracing::info!("✅ Location is valid: {}", location);
            Ok(vec![NamedLocation {
                name: "parse".to_string(),
                location,
            }])
        }
        Command::File { path, .. } => {
            tracing::info!("📁 Loading locations from: {}", path);
            let file = LocationsFile::from_file(path)?;
            let locations = file.resolve()?;
            tracing::info!(
                "✅ {} locations in '{}' are valid",
                locations.len(),
                file.meta.name
            );
            Ok(locations)
        }
    }
}

fn fail(e: &LocationError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
