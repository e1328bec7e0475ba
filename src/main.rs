use anyhow::{Context, Result, bail};
use clap::Parser as Clap;
use itertools::Itertools;
use log::{Level, debug, info, warn};
use revperm::EPOCH;
use revperm::config::*;
use revperm::consts::{LOG_LEVEL_FILTER_DEBUG, LOG_LEVEL_FILTER_RELEASE, MAX_LOG_SIZE};
use revperm::permute::{Validation, permute_with};
use revperm::table::TableBuilder;
use revperm::util::io;
use revperm::util::io::MainCli;
use std::fs;
use std::path::Path;

pub const OUTPUT_DIR: &str = "output";

/// Tables larger than this are summarized instead of printed in full
const MAX_PRINTED_SLOTS: usize = 64;

fn main() -> Result<()> {
    let mut config = DEFAULT_PERMUTE_CONFIG;

    fs::create_dir_all(OUTPUT_DIR)?;
    let log_file_path = format!("{}/log.txt", OUTPUT_DIR);
    match cfg!(debug_assertions) {
        true => io::init_logger(LOG_LEVEL_FILTER_DEBUG, Path::new(&log_file_path))?,
        false => io::init_logger(LOG_LEVEL_FILTER_RELEASE, Path::new(&log_file_path))?,
    }

    let args = MainCli::parse();
    let size = match (args.size, args.log_size) {
        (Some(n), None) => n,
        (None, Some(k)) if k <= MAX_LOG_SIZE => 1 << k,
        (None, Some(k)) => bail!("log size {k} exceeds the maximum of {MAX_LOG_SIZE}"),
        _ => bail!("invalid cli pattern (clap should have caught this)"),
    };
    if args.unchecked {
        config.validation = Validation::Unchecked;
        warn!("[MAIN] precondition checks disabled");
    }
    if let Some(par_threshold) = args.par_threshold {
        config.par_threshold = par_threshold;
    }
    if let Some(workers) = args.workers {
        config.n_workers = Some(workers);
    }
    debug!("[MAIN] config: {:?}", config);

    if let Some(index) = args.index {
        let permuted = permute_with(config.validation, size, index)
            .with_context(|| format!("cannot permute index {index} of size {size}"))?;
        info!("[MAIN] {index} -> {permuted} (size {size})");
        println!("{permuted}");
        return Ok(());
    }

    let builder = TableBuilder::new(config)?;
    let start = EPOCH.elapsed();
    let table = builder
        .build(size)
        .with_context(|| format!("cannot build permutation table of size {size}"))?;
    info!(
        "[MAIN] built table of size 2^{} in {:?}",
        table.log_size(),
        EPOCH.elapsed() - start
    );

    match table.len() <= MAX_PRINTED_SLOTS {
        true => println!("{}", table.iter().join(" ")),
        false => println!(
            "{} ... {} ({} slots)",
            table.iter().take(8).join(" "),
            table.iter().skip(table.len() - 8).join(" "),
            table.len()
        ),
    }

    if let Some(output) = args.output {
        io::write_json(&table, Path::new(&output), Level::Info)?;
    }

    Ok(())
}
