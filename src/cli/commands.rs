use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fo", about = concat!("[#] folio v", env!("CARGO_PKG_VERSION"), " - your portfolio in one file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a project
    Add(AddArgs),
    /// List projects
    List(ListArgs),
    /// Show full details for a project
    Show(ShowArgs),
    /// Edit fields of a project
    Edit(EditArgs),
    /// Delete a project
    Delete(DeleteArgs),
    /// Print the path of the portfolio file
    Path,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Sort order (newest, oldest, a-z, z-a); default is stored order
    #[arg(long)]
    pub sort: Option<String>,
    /// Filter by technology slug, or "all"
    #[arg(long)]
    pub tech: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project ID
    pub id: u64,
    /// Write the attachment payload into this directory
    #[arg(long, value_name = "DIR")]
    pub save_attachment: Option<String>,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Project name
    pub name: String,
    /// Start date (ISO, e.g. 2024-01-15)
    #[arg(long)]
    pub start: Option<String>,
    /// End date (ISO)
    #[arg(long)]
    pub end: Option<String>,
    /// Description text
    #[arg(long)]
    pub desc: Option<String>,
    /// Technology slug (repeatable): node-js, next-js, react-js, typescript
    #[arg(long)]
    pub tech: Vec<String>,
    /// File to embed as the attachment
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Project ID
    pub id: u64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New start date (ISO)
    #[arg(long)]
    pub start: Option<String>,
    /// New end date (ISO)
    #[arg(long)]
    pub end: Option<String>,
    /// New description
    #[arg(long)]
    pub desc: Option<String>,
    /// Replacement technology set (repeatable)
    #[arg(long)]
    pub tech: Vec<String>,
    /// File to embed as the attachment (replaces the current one)
    #[arg(long)]
    pub file: Option<String>,
    /// Drop the current attachment
    #[arg(long)]
    pub clear_file: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Project ID
    pub id: u64,
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}
