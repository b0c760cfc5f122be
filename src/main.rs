use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gomoku_stepper::service::{serve, DEFAULT_BIND};
use gomoku_stepper::{
    format_sequence, init_logging, render_path, ClipboardSink, Osc52Sink, Session, StdoutSink,
    StepClient, StepRequest, TcpTransport,
};
use serde::Serialize;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about = "Walk a line of cells on a 15x15 Gomoku board", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the coordinates from START along DIRECTION, STEPS cells long.
    Step {
        /// Start cell, e.g. H3.
        start: String,
        /// U, D, L, R, LU, RU, LD, RD or up, down-left, ...
        direction: String,
        /// Number of cells to emit, start included.
        #[arg(allow_hyphen_values = true)]
        steps: String,
        #[arg(long, help = "Print a JSON report instead of the plain list")]
        json: bool,
        #[arg(long, help = "Draw the board with the path marked")]
        board: bool,
        #[arg(long, help = "Also copy the result via the terminal clipboard (OSC 52)")]
        copy: bool,
    },
    /// Open an interactive session (Ctrl+H / Ctrl+B typed as text).
    Interactive {
        #[arg(long, help = "Draw the board after each result")]
        board: bool,
    },
    /// Run the stepping service over TCP.
    Serve {
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: String,
    },
    /// Send one request to a running service.
    Query {
        #[arg(long, default_value = DEFAULT_BIND)]
        connect: String,
        start: String,
        direction: String,
        #[arg(allow_hyphen_values = true)]
        steps: String,
    },
}

#[derive(Serialize)]
struct StepReport {
    start: String,
    direction: String,
    steps: usize,
    path: Vec<String>,
    text: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Step {
            start,
            direction,
            steps,
            json,
            board,
            copy,
        } => {
            let request = StepRequest::from_fields(&start, &direction, &steps)?;
            let path = request.run()?;
            let text = format_sequence(&path);
            log::debug!("{} -> {}", request, text);
            if json {
                let report = StepReport {
                    start: request.start.to_string(),
                    direction: request.direction.to_string(),
                    steps: request.steps,
                    path: path.iter().map(ToString::to_string).collect(),
                    text: text.clone(),
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                StdoutSink.copy(&text)?;
            }
            if board {
                print!("{}", render_path(&path));
            }
            if copy {
                Osc52Sink::new(io::stderr()).copy(&text)?;
            }
        }
        Commands::Interactive { board } => {
            let stdin = io::stdin();
            let sink = Osc52Sink::new(io::stderr());
            let mut session = Session::new(stdin.lock(), io::stdout(), sink).with_board(board);
            let copied = session.run()?;
            log::info!("session ended, {} results copied", copied);
        }
        Commands::Serve { bind } => {
            let listener = TcpListener::bind(&bind).await?;
            serve(listener).await?;
        }
        Commands::Query {
            connect,
            start,
            direction,
            steps,
        } => {
            let transport = TcpTransport::connect(&connect).await?;
            let mut client = StepClient::new(transport);
            let path = client.step(&start, &direction, &steps).await?;
            client.close().await?;
            println!("{}", format_sequence(&path));
        }
    }
    Ok(())
}
