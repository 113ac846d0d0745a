use anyhow::Context;

use restopos_loader::DataLoader;
use restopos_sim::{SimConfig, lunch_window, simulate_lunch};

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_env()?;
    restopos_observability::init(config.log_format);

    for var in &config.defaulted {
        tracing::warn!(var, "not set; using default");
    }

    let data = DataLoader::load_all(&config.data_dir).with_context(|| {
        format!(
            "failed to load reference data from {}",
            config.data_dir.display()
        )
    })?;

    let shift = simulate_lunch(data)?;

    let window = lunch_window();
    tracing::info!("generating lunch shift report (11:00-15:00)");
    shift
        .report()
        .generate_report(window.start, window.end)
        .context("failed to write report")?;

    Ok(())
}
