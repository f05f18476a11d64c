use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tsk", about = concat!("tasksync v", env!("CARGO_PKG_VERSION"), " - your task list, synced from the source of truth"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the task service, e.g. http://localhost:3000
    #[arg(long, global = true, env = "TASKSYNC_BASE_URL")]
    pub base_url: Option<String>,

    /// Task endpoint path on the service (default: /api/tasks)
    #[arg(long, global = true, env = "TASKSYNC_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Read configuration from this file instead of ./tasksync.toml
    #[arg(short = 'C', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List(ListArgs),
    /// Add a new task
    Add(AddArgs),
    /// Mark a task done
    Done(IdArgs),
    /// Mark a task not done
    Todo(IdArgs),
    /// Toggle a task between done and not done
    Toggle(IdArgs),
    /// Change a task's name
    Rename(RenameArgs),
    /// Delete a task
    Rm(IdArgs),
    /// Show total and completed task counts
    Summary,
}

#[derive(Args)]
pub struct ListArgs {
    /// Hide completed tasks
    #[arg(long)]
    pub hide_done: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Name of the new task
    pub name: String,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct RenameArgs {
    /// Task id
    pub id: u64,
    /// New name
    pub name: String,
}
