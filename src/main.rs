use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing::info;

use bookstore::{config::Config, ConsoleSink, SessionRunner};

#[tokio::main]
async fn main() -> Result<()> {
    // Keep the driver's own logging quiet unless asked for
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::try_new("info,mongodb=warn,bookstore=info")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("bookstore")
        .about("Run the bookstore query session against a MongoDB collection")
        .arg(
            Arg::new("uri")
                .help("MongoDB connection string (overrides MONGODB_URI)")
                .long("uri")
                .value_name("URI"),
        )
        .arg(
            Arg::new("database")
                .help("Database name (overrides MONGODB_DATABASE)")
                .long("database")
                .short('d')
                .value_name("NAME"),
        )
        .arg(
            Arg::new("collection")
                .help("Collection name (overrides MONGODB_COLLECTION)")
                .long("collection")
                .short('c')
                .value_name("NAME"),
        )
        .arg(
            Arg::new("seed")
                .help("Insert the sample books first when the collection is empty")
                .long("seed")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = Config::from_env()?.with_overrides(
        matches.get_one::<String>("uri").cloned(),
        matches.get_one::<String>("database").cloned(),
        matches.get_one::<String>("collection").cloned(),
        matches.get_flag("seed"),
    );

    let mut runner = SessionRunner::new(config, ConsoleSink);
    let report = runner.run().await;

    info!(
        "Completed {} steps{}",
        report.steps_completed.len(),
        if report.succeeded() { "" } else { " before failing" }
    );

    Ok(())
}
