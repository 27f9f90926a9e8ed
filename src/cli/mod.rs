// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pingmap command-line interface.
//!
//! Four subcommands: `search` ranks servers against a query, `distance`
//! exposes the raw bounded edit distance, `list` prints the server list in
//! display order, and `pings` inspects the latency matrix.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pingmap",
    about = "Typo-tolerant server search for a ping latency map",
    version
)]
pub struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 0 = errors only, 1 = warnings (default), 2 = info, 3+ = debug.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank servers by how well they match a query
    Search {
        /// Free-text query, e.g. "frankfurt" or "new yrok"
        query: String,

        /// Path to servers.json
        #[arg(short, long)]
        servers: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Bounded edit distance between two strings
    Distance {
        a: String,
        b: String,

        #[command(flatten)]
        costs: CostArgs,

        /// Compare the strings as given instead of normalizing them first
        #[arg(long)]
        raw: bool,
    },

    /// List servers sorted by country, then city
    List {
        /// Path to servers.json
        #[arg(short, long)]
        servers: String,

        /// Print servers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect a ping matrix file
    Pings {
        /// Path to pings.data
        file: String,

        /// Path to servers.json, to print names instead of positions
        #[arg(short, long)]
        servers: Option<String>,

        /// Source server position
        #[arg(long, requires = "to")]
        from: Option<usize>,

        /// Destination server position
        #[arg(long, requires = "from")]
        to: Option<usize>,
    },
}

/// Cost model flags for the `distance` command.
#[derive(Args)]
pub struct CostArgs {
    /// Hard ceiling on the total edit cost
    #[arg(short, long)]
    pub max_cost: f64,

    #[arg(long, default_value = "1")]
    pub insertion_cost: f64,

    #[arg(long, default_value = "1")]
    pub deletion_cost: f64,

    #[arg(long, default_value = "1")]
    pub replacement_cost: f64,

    #[arg(long)]
    pub no_insertion: bool,

    #[arg(long)]
    pub no_deletion: bool,

    #[arg(long)]
    pub no_replacement: bool,
}

impl CostArgs {
    pub fn cost_model(&self) -> pingmap::CostModel {
        let mut model = pingmap::CostModel::new(self.max_cost)
            .with_insertion_cost(self.insertion_cost)
            .with_deletion_cost(self.deletion_cost)
            .with_replacement_cost(self.replacement_cost);
        if self.no_insertion {
            model = model.without_insertion();
        }
        if self.no_deletion {
            model = model.without_deletion();
        }
        if self.no_replacement {
            model = model.without_replacement();
        }
        model
    }
}
