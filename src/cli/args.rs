use std::{path::PathBuf, str::FromStr};

use clap::Parser;

use crate::policy::Preset;

/// Which policies to relax while reporting from inside a relaxed scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relax {
    Disk,
    Network,
    All,
}

impl FromStr for Relax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disk" => Ok(Relax::Disk),
            "network" => Ok(Relax::Network),
            "all" => Ok(Relax::All),
            other => Err(format!(
                "unknown scope '{other}' (expected disk, network or all)"
            )),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Install thread and VM diagnostic policies and report what is active"
)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Named preset (default, development, production); overrides the config file
    #[arg(long = "preset", value_name = "NAME")]
    pub preset: Option<Preset>,

    /// Install LAX policies instead of enabling
    #[arg(long = "disable", conflicts_with_all = ["config", "preset"])]
    pub disable: bool,

    /// Also report the policies seen inside a relaxed scope (disk, network, all)
    #[arg(long = "relax", value_name = "SCOPE")]
    pub relax: Option<Relax>,
}
