use result_and_option::{config::DemoConfig, driver, tracing_init};

fn main() -> anyhow::Result<()> {
    tracing_init::init()?;

    let config = DemoConfig::load()?;
    tracing::debug!(?config, "loaded config");

    driver::run(&config, &mut std::io::stdout().lock())?;

    Ok(())
}
