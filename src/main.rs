use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rangeagg::driver::{self, DriverConfig};

/// Read a size and that many integers from stdin, then query a range,
/// update one element, query again and print the tree.
#[derive(Parser, Debug)]
#[command(name = "rangeagg", version)]
struct Args {
    /// Left bound of the queried range, inclusive.
    #[arg(short, long, default_value_t = 1)]
    left: usize,

    /// Right bound of the queried range, inclusive.
    #[arg(short, long, default_value_t = 4)]
    right: usize,

    /// Index to update between the two rounds of queries.
    #[arg(short, long, default_value_t = 2)]
    index: usize,

    /// New value for `--index`.
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    value: i64,

    /// Skip the tree dump.
    #[arg(long)]
    no_dump: bool,
}

impl From<Args> for DriverConfig {
    fn from(args: Args) -> Self {
        return DriverConfig {
            left: args.left,
            right: args.right,
            index: args.index,
            value: args.value,
            dump: !args.no_dump,
        };
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = DriverConfig::from(Args::parse());
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match driver::run(stdin.lock(), &mut stdout, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
