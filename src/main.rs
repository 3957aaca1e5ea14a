use mdb_flatten::config::AppConfig;
use mdb_flatten::error::AppError;
use mdb_flatten::telemetry;
use mdb_flatten::workflows::registry;
use tracing::info;

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let summary = registry::run(&config.pipeline)?;

    info!(
        members = summary.members,
        rows = summary.rows,
        output = %config.pipeline.output_path.display(),
        "processing complete"
    );
    Ok(())
}
