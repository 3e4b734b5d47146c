/// Table command — renders the built-in figure set as an aligned table.
use log::debug;

use crate::figures::CHECK_FIGURES;

pub fn run_table() -> anyhow::Result<()> {
    debug!("rendering table over {} built-in figures", CHECK_FIGURES.len());
    let figures = CHECK_FIGURES.iter().map(|(pair, _)| *pair);
    println!("{}", crate::report::render_table(figures)?);
    Ok(())
}
