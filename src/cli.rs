//! Command-line surface: the store server and a text client for the board.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::board::{BoardController, BoardState};
use crate::config::{ClientConfig, Config, ServerConfig};
use crate::drag::DropTarget;
use crate::server::TaskServer;
use crate::store::{HttpTaskStore, SnapshotSource};
use crate::sync::PersistenceSync;
use crate::task::ColumnId;

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Four-lane task board backed by a flat-file store")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the store server URL
    #[arg(long, global = true)]
    pub store_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP store server
    Serve {
        #[arg(long)]
        bind: Option<String>,
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
    /// Print the board
    List,
    /// Add a card at the bottom of a lane
    Add {
        column: ColumnId,
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },
    /// Delete a card
    Delete { id: String },
    /// Drag a card and drop it on a lane or another card
    Move {
        id: String,
        /// Lane id or card id to drop on
        target: String,
        /// Lane or card hovered before dropping (defaults to the drop target)
        #[arg(long)]
        over: Option<String>,
    },
    /// Reload the board from the store and print it
    Refresh,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.store_url {
        config.client.store_url = url;
    }

    match cli.command {
        Command::Serve { bind, data_file } => {
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            if let Some(data_file) = data_file {
                config.server.data_file = data_file;
            }
            config.validate()?;
            serve(&config.server).await
        }
        command => {
            config.validate()?;
            let mut board = open_board(&config.client).await?;
            let result = run_board_command(&mut board, command).await;
            board.settle().await;
            result
        }
    }
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let mut server = TaskServer::new(config);
    server
        .bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(data_file = %config.data_file.display(), "Serving tasks");
    server.run().await?;
    Ok(())
}

async fn open_board(config: &ClientConfig) -> anyhow::Result<BoardController> {
    let store = HttpTaskStore::new(&config.store_url, Duration::from_secs(config.timeout_seconds))?;
    let mut sync = PersistenceSync::new(Arc::new(store));
    if let Some(path) = &config.fallback_file {
        sync = sync.with_fallback(Arc::new(SnapshotSource::new(path.clone())));
    }
    Ok(BoardController::start(sync).await)
}

async fn run_board_command(board: &mut BoardController, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List => {}
        Command::Refresh => board.refresh().await,
        Command::Add { column, content } => {
            let task = board.add_task(content.join(" ").trim(), column)?;
            println!("Added {}", task.id);
        }
        Command::Delete { id } => board.delete_task(&id),
        Command::Move { id, target, over } => {
            if !board.drag_start(&id) {
                anyhow::bail!("No task with id '{}'", id);
            }
            let target = DropTarget::from_raw(&target);
            let over = over
                .map(|raw| DropTarget::from_raw(&raw))
                .unwrap_or_else(|| target.clone());
            board.drag_over(over);
            board.drag_end(Some(target));
        }
        Command::Serve { .. } => anyhow::bail!("serve does not operate on an open board"),
    }

    print!("{}", render_board(board.board()));
    Ok(())
}

/// Plain-text rendering of the four lanes.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();
    for view in board.columns() {
        let _ = writeln!(
            out,
            "== {} ({}) [{}]",
            view.column.title(),
            view.column,
            view.tasks.len()
        );
        for task in view.tasks {
            let _ = writeln!(out, "  {}  {}", task.id, task.content);
        }
    }
    out
}
