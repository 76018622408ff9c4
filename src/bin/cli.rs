// src/bin/cli.rs
use notice_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let summary = cli::run()?;
    println!("{}", summary.ack());
    Ok(())
}
