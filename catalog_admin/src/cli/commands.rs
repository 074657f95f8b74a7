use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "Parts catalog admin CLI")]
pub struct Cli {
    /// Path to a TOML config file with `base_url`; falls back to the
    /// CATALOG_API_BASE_URL environment variable.
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage part categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage part sizes
    Sizes {
        #[command(subcommand)]
        action: RenameAction,
    },
    /// Manage measurement units
    Units {
        #[command(subcommand)]
        action: RenameAction,
    },
    /// Manage measurement precisions
    Precisions {
        #[command(subcommand)]
        action: PrecisionAction,
    },
    /// Manage parts
    Parts {
        #[command(subcommand)]
        action: PartAction,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories, optionally filtered by name
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    /// Create a category
    Add {
        #[arg(long)]
        name: String,
    },
    /// Rename a category
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Delete a category
    Delete {
        #[arg(long)]
        id: i64,
        /// Confirm the deletion; nothing is deleted without it
        #[arg(long)]
        yes: bool,
    },
}

/// Actions for the id-keyed collections (sizes, units), where an update is a
/// rename: the old id keys the request and the new id travels in the body.
#[derive(Subcommand)]
pub enum RenameAction {
    /// List rows, optionally filtered by id
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    /// Create a row with the given id
    Add {
        #[arg(long)]
        id: String,
    },
    /// Rename a row
    Update {
        #[arg(long)]
        old_id: String,
        #[arg(long)]
        new_id: String,
    },
    /// Delete a row
    Delete {
        #[arg(long)]
        id: String,
        /// Confirm the deletion; nothing is deleted without it
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum PrecisionAction {
    /// List precisions, optionally filtered by value
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    /// Create a precision
    Add {
        #[arg(long)]
        value: String,
    },
    /// Change a precision's value
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        value: String,
    },
    /// Delete a precision
    Delete {
        #[arg(long)]
        id: i64,
        /// Confirm the deletion; nothing is deleted without it
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum PartAction {
    /// List parts with foreign keys resolved to labels; the criteria
    /// combine server-side
    List {
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "category-id")]
        category_ids: Vec<i64>,
        #[arg(long = "size-id")]
        size_ids: Vec<String>,
        #[arg(long = "unit-id")]
        unit_ids: Vec<String>,
        #[arg(long)]
        precision_id: Option<i64>,
    },
    /// Create a part
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category_id: String,
        #[arg(long)]
        size_id: String,
        #[arg(long)]
        unit_id: String,
        #[arg(long)]
        precision_id: String,
    },
    /// Update a part; omitted fields keep their current values
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category_id: Option<String>,
        #[arg(long)]
        size_id: Option<String>,
        #[arg(long)]
        unit_id: Option<String>,
        #[arg(long)]
        precision_id: Option<String>,
    },
    /// Delete a part
    Delete {
        #[arg(long)]
        id: i64,
        /// Confirm the deletion; nothing is deleted without it
        #[arg(long)]
        yes: bool,
    },
}
