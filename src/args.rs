use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Comma-separated members of set A, e.g. -1,2,3
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub a: String,

    /// Comma-separated members of set B
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub b: String,
}

pub fn parse_members(list: &str) -> Result<Vec<i32>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .with_context(|| format!("invalid member {:?}", s))
        })
        .collect()
}
