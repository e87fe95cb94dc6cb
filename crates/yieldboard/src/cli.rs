use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Where brands are stored.
    #[arg(long, value_enum, default_value_t = StoreKind::Couch, global = true)]
    pub store: StoreKind,

    /// JSON file used by `--store file`; overrides `STORE_PATH`.
    #[arg(long, global = true)]
    pub store_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-read every brand from the store and print its card.
    #[command(visible_alias = "list")]
    Refresh,

    /// Register a new brand, or overwrite the brand with the same code.
    Register(RegisterArgs),
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Company name, e.g. "Orix".
    #[arg(long)]
    pub brand: String,

    /// 4-digit ticker code, e.g. 8591.
    #[arg(long)]
    pub code: String,

    /// Desired dividend yield in percent, 0 to 99.9; may be left for later.
    #[arg(long, allow_hyphen_values = true)]
    pub desired_yield: Option<String>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// CouchDB, at `COUCHDB_URL`.
    Couch,

    /// A local JSON file.
    File,

    /// Nothing persisted; gone when the command exits.
    Memory,
}
