use fanplot::{run_fanplot, DemoOptions};

/// Level taken from `FANPLOT_LOG` (`error`..`trace`), `info` otherwise.
fn setup_logger() -> Result<(), fern::InitError> {
    let level = std::env::var("FANPLOT_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("fanplot", level)
        .level_for("fanplot_demo", level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> eframe::Result<()> {
    if let Err(e) = setup_logger() {
        eprintln!("Failed to initialize logging: {e}");
    }
    log::info!("Starting fan chart demo");
    run_fanplot(DemoOptions::default())
}
