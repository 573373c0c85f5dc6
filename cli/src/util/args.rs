use clap::{Parser, Subcommand};

/// CLI for the roadflow maximum-flow and road-building explorer.
#[derive(Parser, Debug)]
#[command()]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Enable [v]erbose debug logging
    #[arg(long, short = 'v', global = true, display_order = 1)]
    pub(crate) debug: bool,

    /// Enable [t]race logging
    #[arg(long, short, global = true, display_order = 2)]
    pub(crate) trace: bool,

    /// Disable logging, [q]uieting output. Takes precedence over debug.
    #[arg(long, short, global = true, display_order = 3)]
    pub(crate) quiet: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Compute the maximum flow of the network, without any new roads.
    Solve {
        /// Path to a file containing a project to be used as input.
        file: String,
    },
    /// Evaluate all candidate road combinations within the build budget.
    Explore {
        /// Path to a file containing a project to be used as input.
        file: String,

        /// Override the [b]uild budget stored in the project file.
        #[arg(short, long, display_order = 0)]
        budget: Option<usize>,
    },
    /// Run the bundled 12-vertex example project.
    Demo,
    /// Create a completely random network instead of using an input file.
    Random {
        /// Number of vertices
        vertices: usize,

        /// The fraction of arcs with a capacity greater than zero
        #[arg(long, default_value_t = 0.4, display_order = 100)]
        arc_density: f64,

        /// Minimum capacity of generated arcs
        #[arg(long, default_value_t = 15, display_order = 101)]
        umin: i64,

        /// Maximum capacity of generated arcs
        #[arg(long, default_value_t = 40, display_order = 102)]
        umax: i64,

        /// Path to [o]utput file to save the project in
        #[arg(short, long, display_order = 0)]
        output: Option<String>,
    },
    /// Benchmark the exploration process.
    Benchmark {
        /// Path to a file containing a project to be used as input.
        file: String,

        /// Number of [i]terations over which to average
        #[arg(short, long, display_order = 0)]
        iterations: usize,
    },
}
