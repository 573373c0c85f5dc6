mod util;

use clap::Parser;
use log::LevelFilter;
use roadflow::{edmonds_karp, Network, Project};
use util::{run_benchmark, setup_logger, Args, Commands};

/// Unwraps the result of a fallible solver call, logging the error and
/// exiting on failure.
#[macro_export]
macro_rules! attempt {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(error) => {
                log::error!("{error}");
                std::process::exit(1);
            }
        }
    };
}

fn main() {
    let args = Args::parse();

    let level = if args.quiet {
        LevelFilter::Off
    } else if args.trace {
        LevelFilter::Trace
    } else if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    setup_logger(level);

    match args.command {
        Commands::Solve { file } => {
            let project = attempt!(Project::from_file(&file));
            let flow = attempt!(edmonds_karp(&project.network));
            println!("Maximum flow in the road network: {flow}");
        }
        Commands::Explore { file, budget } => {
            let mut project = attempt!(Project::from_file(&file));
            if let Some(budget) = budget {
                project.budget = budget;
            }
            let exploration = attempt!(project.explore());
            println!("{exploration}");
        }
        Commands::Demo => {
            let project = Project::example();
            println!("{}", project.network);
            let exploration = attempt!(project.explore());
            println!("{exploration}");
            for best in exploration.best_combinations() {
                println!("Best: {best}");
            }
        }
        Commands::Random {
            vertices,
            arc_density,
            umin,
            umax,
            output,
        } => {
            let network = attempt!(Network::from_random(vertices, arc_density, (umin, umax)));
            println!("{network}");
            if let Some(output) = output {
                let project = Project {
                    network,
                    candidates: vec![],
                    budget: 0,
                };
                attempt!(project.save(&output));
            }
        }
        Commands::Benchmark { file, iterations } => {
            let project = attempt!(Project::from_file(&file));
            run_benchmark(&project, iterations);
        }
    }
}
