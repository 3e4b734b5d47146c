use clap::Parser;

#[derive(Parser)]
#[command(
    name = "captime",
    version,
    about = "Calculate time to reach a broadband data cap at a given bandwidth"
)]
pub struct Cli {
    /// Size of cap in gigabytes
    #[arg(long, value_name = "GB")]
    pub cap: Option<f64>,

    /// Speed of connection in megabits/s (bandwidth)
    #[arg(long, visible_alias = "bandwidth", value_name = "MBIT")]
    pub speed: Option<f64>,

    /// Print a table of figures (ignores --cap and --speed)
    #[arg(long)]
    pub print_table: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Run the built-in self-test suite instead of normal operation
    #[arg(short = 't', long = "test")]
    pub run_tests: bool,
}
