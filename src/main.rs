// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use serde_json::json;

use pingmap::assets::{load_pings, load_servers, PingMatrix};
use pingmap::search::{rank, SearchOptions};
use pingmap::{edit_distance, normalize, sort_servers, Server};

mod cli;
use cli::display::{
    distance_colored, latency_colored, pad_left, pad_right, row, section_bot, section_top,
    themed, Role, BOLD,
};
use cli::{Cli, CostArgs, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG, when set, wins over the flags.
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            query,
            servers,
            limit,
            json,
        } => run_search(&query, &servers, limit, json),
        Commands::Distance { a, b, costs, raw } => run_distance(&a, &b, &costs, raw),
        Commands::List { servers, json } => run_list(&servers, json),
        Commands::Pings {
            file,
            servers,
            from,
            to,
        } => run_pings(&file, servers.as_deref(), from.zip(to)),
    }
}

fn read_servers(path: &str) -> Result<Vec<Server>> {
    load_servers(path).with_context(|| format!("failed to load server list {}", path))
}

fn server_name(servers: &[Server], position: usize) -> String {
    servers
        .get(position)
        .map(|s| format!("{}, {}", s.city, s.country))
        .unwrap_or_else(|| format!("#{}", position))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(query: &str, servers_path: &str, limit: usize, as_json: bool) -> Result<()> {
    let servers = read_servers(servers_path)?;
    let matches = rank(query, &servers, &SearchOptions::default())?;

    if as_json {
        let results: Vec<_> = matches
            .iter()
            .take(limit)
            .map(|m| {
                let server = &servers[m.position];
                json!({
                    "position": m.position,
                    "distance": m.distance,
                    "city": server.city,
                    "country": server.country,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    section_top(&format!("SEARCH \"{}\"", query));
    if matches.is_empty() {
        row(&format!(" {}", themed(Role::Muted, &[], "no matching servers")));
    }
    for (i, m) in matches.iter().take(limit).enumerate() {
        let server = &servers[m.position];
        row(&format!(
            " {}  {}  {}",
            pad_left(&(i + 1).to_string(), 3),
            pad_right(&format!("{}, {}", server.city, server.country), 52),
            pad_left(&distance_colored(m.distance), 8)
        ));
    }
    row(&format!(
        " {}",
        themed(
            Role::Muted,
            &[],
            &format!("{} of {} servers matched", matches.len(), servers.len())
        )
    ));
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// DISTANCE
// ═══════════════════════════════════════════════════════════════════════════

fn run_distance(a: &str, b: &str, costs: &CostArgs, raw: bool) -> Result<()> {
    let (a, b) = if raw {
        (a.to_string(), b.to_string())
    } else {
        (normalize(a), normalize(b))
    };
    log::debug!("comparing {:?} with {:?}", a, b);

    match edit_distance(&a, &b, &costs.cost_model())? {
        Some(distance) => println!("{}", distance),
        None => println!("no match"),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// LIST
// ═══════════════════════════════════════════════════════════════════════════

fn run_list(servers_path: &str, as_json: bool) -> Result<()> {
    let servers = sort_servers(&read_servers(servers_path)?);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&servers)?);
        return Ok(());
    }

    section_top(&format!("SERVERS ({})", servers.len()));
    for server in &servers {
        row(&format!(
            " {}  {}",
            pad_right(&themed(Role::Muted, &[BOLD], &server.country), 28),
            server.city
        ));
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PINGS
// ═══════════════════════════════════════════════════════════════════════════

fn run_pings(file: &str, servers_path: Option<&str>, pair: Option<(usize, usize)>) -> Result<()> {
    let matrix =
        load_pings(file).with_context(|| format!("failed to load ping matrix {}", file))?;
    let servers = match servers_path {
        Some(path) => read_servers(path)?,
        None => Vec::new(),
    };

    if !servers.is_empty() && servers.len() != matrix.server_count() {
        log::warn!(
            "server list has {} entries but the ping matrix covers {}",
            servers.len(),
            matrix.server_count()
        );
    }

    if let Some((from, to)) = pair {
        println!(
            "{} -> {}: {}",
            server_name(&servers, from),
            server_name(&servers, to),
            latency_colored(matrix.latency(from, to))
        );
        return Ok(());
    }

    print_matrix_summary(file, &matrix);
    Ok(())
}

fn print_matrix_summary(file: &str, matrix: &PingMatrix) {
    let mut latencies: Vec<f64> = matrix.latencies().collect();
    latencies.sort_by(f64::total_cmp);

    let n = matrix.server_count();
    let possible = n * n.saturating_sub(1) / 2;

    section_top(&format!("PING MATRIX {}", file));
    row(&format!(" servers        {}", n));
    row(&format!(
        " measured pairs {} of {}",
        latencies.len(),
        possible
    ));
    if matrix.is_truncated() {
        row(&format!(" {}", themed(Role::Muted, &[], "last row is incomplete")));
    }
    if let (Some(&min), Some(&max)) = (latencies.first(), latencies.last()) {
        let median = latencies[latencies.len() / 2];
        row(&format!(" min            {}", latency_colored(Some(min))));
        row(&format!(" median         {}", latency_colored(Some(median))));
        row(&format!(" max            {}", latency_colored(Some(max))));
    }
    section_bot();
}
