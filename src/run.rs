mod cli;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

pub(crate) use cli::as_cli;

/// Flags accepted anywhere on the command line, split from the command and
/// its own arguments.
#[derive(Debug, PartialEq)]
pub(crate) struct GlobalArgs {
    pub log_level: LevelFilter,
    pub export_dir: Option<PathBuf>,
    pub rest: Vec<String>,
}

pub(crate) fn split_global_args(args: &[String]) -> Result<GlobalArgs> {
    let mut global = GlobalArgs {
        log_level: LevelFilter::WARN,
        export_dir: None,
        rest: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--log-level" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--log-level needs a value"))?;
                global.log_level = value
                    .parse()
                    .with_context(|| format!("Invalid log level: {value}"))?;
            }
            "--dir" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--dir needs a path"))?;
                global.export_dir = Some(PathBuf::from(shellexpand(value)));
            }
            _ => global.rest.push(arg.clone()),
        }
    }

    Ok(global)
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
