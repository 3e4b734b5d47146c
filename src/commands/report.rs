/// Report command — prints the time to reach one cap at one speed.
use log::debug;

pub fn run_report(cap: f64, speed: f64) -> anyhow::Result<()> {
    debug!("computing time to a {cap} GB cap at {speed} mb/s");
    println!("{}", crate::report::format_report(cap, speed)?);
    Ok(())
}
