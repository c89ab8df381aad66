use clap::Parser;
use roulette::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let level = match config.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    roulette::log(level, config.log_file.as_deref())?;
    let mut simulator = config.simulator()?;
    if config.layout {
        println!("{}", serde_json::to_string_pretty(&simulator.game().wheel().layout())?);
        return Ok(());
    }
    log::info!(
        "{:<32}{:<16}{}",
        "simulating",
        config.strategy,
        format!("{} sessions × {} rounds", config.sessions, config.rounds)
    );
    let batch = match config.parallel {
        #[cfg(feature = "parallel")]
        true => simulator.par_gather()?,
        #[cfg(not(feature = "parallel"))]
        true => anyhow::bail!("--parallel requires the `parallel` feature"),
        false => simulator.gather()?,
    };
    let summary = batch.summary();
    match config.json {
        true => println!("{}", serde_json::to_string_pretty(&summary)?),
        false => println!("{}", summary),
    }
    Ok(())
}
