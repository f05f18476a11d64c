use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::gateway::HttpGateway;
use crate::model::config::GatewayConfig;
use crate::model::task::TaskDraft;
use crate::store::{RowState, TaskStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub async fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    let config = GatewayConfig::resolve(
        cli.base_url,
        cli.endpoint,
        cli.config.as_deref().map(Path::new),
    )?;
    let gateway = HttpGateway::new(&config)?;
    let mut store = TaskStore::new(Box::new(gateway));
    store.init().await;

    match cli.command {
        Commands::List(args) => cmd_list(&mut store, args, json),
        Commands::Add(args) => cmd_add(&mut store, args, json).await,
        Commands::Done(args) => cmd_set_done(&mut store, args, true, json).await,
        Commands::Todo(args) => cmd_set_done(&mut store, args, false, json).await,
        Commands::Toggle(args) => cmd_toggle(&mut store, args, json).await,
        Commands::Rename(args) => cmd_rename(&mut store, args, json).await,
        Commands::Rm(args) => cmd_rm(&mut store, args, json).await,
        Commands::Summary => cmd_summary(&store, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(
    store: &mut TaskStore,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.hide_done {
        store.toggle_filter();
    }
    print_tasks(store, json);
    Ok(())
}

fn cmd_summary(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let counts = store.counts();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary_json(counts))?);
    } else {
        println!("{}", summary_lines(counts));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

async fn cmd_add(
    store: &mut TaskStore,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !store.create(&args.name).await {
        return Err("task name cannot be empty".into());
    }
    print_tasks(store, json);
    Ok(())
}

async fn cmd_set_done(
    store: &mut TaskStore,
    args: IdArgs,
    done: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Full-replace update: carry the current name from the snapshot.
    let task = store
        .find(args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;
    let draft = TaskDraft::new(task.name.clone(), done);
    store.update(args.id, draft).await;
    print_tasks(store, json);
    Ok(())
}

async fn cmd_toggle(
    store: &mut TaskStore,
    args: IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut row = store
        .find(args.id)
        .map(RowState::new)
        .ok_or_else(|| format!("task not found: {}", args.id))?;
    let draft = row.mark_done();
    store.update(args.id, draft).await;
    print_tasks(store, json);
    Ok(())
}

async fn cmd_rename(
    store: &mut TaskStore,
    args: RenameArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let task = store
        .find(args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;
    let draft = TaskDraft::new(args.name, task.done);
    store.update(args.id, draft).await;
    print_tasks(store, json);
    Ok(())
}

async fn cmd_rm(
    store: &mut TaskStore,
    args: IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    store.delete(args.id).await;
    print_tasks(store, json);
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn print_tasks(store: &TaskStore, json: bool) {
    let visible = store.visible();
    if json {
        let out = task_list_json(&visible, store.hide_done());
        // Serializing plain data structs cannot fail.
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
    } else if visible.is_empty() {
        println!("no tasks");
    } else {
        for task in visible {
            println!("{}", task_line(task));
        }
    }
}
