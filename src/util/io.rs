use crate::EPOCH;
use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, LevelFilter, log};
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::path::Path;

#[derive(Parser)]
#[command(group = clap::ArgGroup::new("extent").required(true).args(["size", "log_size"]))]
pub struct MainCli {
    /// Number of elements, must be a power of two
    #[arg(short = 'n', long, help = "Size of the index space (power of two)")]
    pub size: Option<u32>,

    /// Base-two logarithm of the number of elements
    #[arg(short = 'k', long, help = "Size of the index space as a power of two exponent")]
    pub log_size: Option<u32>,

    /// Single index lookup instead of a full table
    #[arg(short = 'i', long, help = "Print the permuted position of a single index")]
    pub index: Option<u32>,

    #[arg(
        short = 'u',
        long,
        requires = "index",
        help = "Skip precondition checks for the single index lookup"
    )]
    pub unchecked: bool,

    #[arg(short = 'p', long, help = "Minimum table size filled in parallel")]
    pub par_threshold: Option<usize>,

    #[arg(short = 'w', long, help = "Number of worker threads for parallel fills")]
    pub workers: Option<usize>,

    /// Path to write the table to as JSON
    #[arg(short = 'o', long, conflicts_with = "index", help = "Export the table as JSON")]
    pub output: Option<String>,
}

pub fn init_logger(level_filter: LevelFilter, log_file_path: &Path) -> Result<()> {
    //remove old log file
    let _ = fs::remove_file(log_file_path);
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<25}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file_path)?)
        .apply()?;
    log!(
        Level::Info,
        "[EPOCH]: {}",
        jiff::Timestamp::now().to_string()
    );
    Ok(())
}

pub fn write_json(json: &impl Serialize, path: &Path, log_lvl: Level) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("could not create parent directory for json file")?;
    }
    let file = File::create(path).context("could not create json file")?;
    serde_json::to_writer_pretty(file, json)?;
    let canonical = fs::canonicalize(path).context("could not canonicalize path")?;
    log!(log_lvl, "[IO] json exported to file://{}", canonical.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::PermutationTable;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        MainCli::command().debug_assert();
    }

    #[test]
    fn cli_requires_an_extent() {
        assert!(MainCli::try_parse_from(["revperm"]).is_err());
        assert!(MainCli::try_parse_from(["revperm", "-n", "8", "-k", "3"]).is_err());
        let cli = MainCli::try_parse_from(["revperm", "-k", "3", "-i", "5", "-u"]).unwrap();
        assert_eq!(cli.log_size, Some(3));
        assert_eq!(cli.index, Some(5));
        assert!(cli.unchecked);
    }

    #[test]
    fn unchecked_needs_an_index() {
        assert!(MainCli::try_parse_from(["revperm", "-n", "8", "-u"]).is_err());
    }

    #[test]
    fn table_json_layout() {
        let table = PermutationTable::new(4).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "size": 4, "log_size": 2, "indices": [0, 2, 1, 3] })
        );
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("revperm-io-{}", std::process::id()));
        let path = dir.join("nested/table.json");
        let table = PermutationTable::new(8).unwrap();
        write_json(&table, &path, Level::Debug).unwrap();
        let read: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(read["indices"], serde_json::json!([0, 4, 2, 6, 1, 5, 3, 7]));
        fs::remove_dir_all(dir).unwrap();
    }
}
