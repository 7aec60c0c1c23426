mod flow;
mod input;
mod output;
mod visualization;

use std::error::Error;
use std::io::{self, Write};

use log::info;

const USAGE: &str = "\
Usage: max-flow-min-cut [--draw] < network.txt

Reads a flow network from stdin, prints its maximum flow from vertex 1 to vertex n,
the edges carrying flow and the source side of a minimum cut.

Options:
    --draw    show the solved network in a window
    -h, --help    print this message";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut draw = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--draw" => draw = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other => return Err(format!("unknown argument {:?}\n\n{}", other, USAGE).into()),
        }
    }

    let network = input::read_network(io::stdin().lock())?;
    let solution = flow::solve(&network);
    info!("found max flow in {} augmenting rounds", solution.rounds());

    {
        let mut stdout = io::stdout().lock();
        output::write_solution(&mut stdout, &solution)?;
        stdout.flush()?;
    }

    if draw {
        visualization::draw_network(&network, &solution)?;
    }

    Ok(())
}
