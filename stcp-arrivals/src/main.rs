use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use stcp_arrivals::cli::{ALERT, Command, render};
use stcp_arrivals::config::{
    ClientConfig, DEFAULT_LINES_URL, DEFAULT_WIDGET_UID, DEFAULT_WIDGET_URL,
};
use stcp_arrivals::resolve::SelectionKind;
use stcp_arrivals::session::{Session, Update};
use stcp_arrivals::stcp::StcpClient;

/// Real-time STCP bus arrivals.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Metadata endpoint (lines, directions, stops)
    #[arg(long, env = "STCP_LINES_URL", default_value = DEFAULT_LINES_URL)]
    lines_url: String,

    /// Arrival widget endpoint
    #[arg(long, env = "STCP_WIDGET_URL", default_value = DEFAULT_WIDGET_URL)]
    widget_url: String,

    /// Widget uid sent with arrival requests
    #[arg(long, env = "STCP_WIDGET_UID", default_value = DEFAULT_WIDGET_UID)]
    widget_uid: String,

    /// Give up on a request after this many seconds (default: never)
    #[arg(long, env = "STCP_TIMEOUT_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
}

impl Args {
    fn config(&self) -> ClientConfig {
        let config = ClientConfig::new()
            .with_lines_url(&self.lines_url)
            .with_widget_url(&self.widget_url)
            .with_widget_uid(&self.widget_uid);

        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let client = match StcpClient::new(&args.config()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new();
    let mut pending = FuturesUnordered::new();
    pending.push(client.execute(session.begin_load_lines()));

    println!("{}", render::help());

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = input.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read stdin");
                        break;
                    }
                };

                let request = match Command::parse(&line) {
                    Command::SubmitStop(code) => session.begin_submit_stop(&code),
                    Command::Select(SelectionKind::Line, label) => session.begin_select_line(&label),
                    Command::Select(SelectionKind::Direction, label) => {
                        session.begin_select_direction(&label)
                    }
                    Command::Select(SelectionKind::Stop, label) => session.begin_select_stop(&label),
                    Command::List(kind) => {
                        println!("{}", render::choices(list_title(kind), session.catalog().labels(kind)));
                        None
                    }
                    Command::Help => {
                        println!("{}", render::help());
                        None
                    }
                    Command::Quit => break,
                    Command::Nothing => None,
                    Command::Unknown(text) => {
                        println!("Unknown command: {text} (try `help`)");
                        None
                    }
                };

                if let Some(request) = request {
                    pending.push(client.execute(request));
                    println!("A carregar...");
                }
            }
            Some(completion) = pending.next(), if !pending.is_empty() => {
                match session.apply(completion) {
                    Ok(update) => show(&session, update),
                    Err(e) => {
                        tracing::warn!(error = %e, "request failed");
                        println!("{ALERT}");
                    }
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn show(session: &Session, update: Update) {
    match update {
        Update::Unchanged => {}
        Update::Lines => {
            let count = session.catalog().lines.len();
            println!("{count} linhas carregadas (`lines` para listar)");
        }
        Update::Directions => {
            let labels = session.catalog().labels(SelectionKind::Direction);
            println!("{}", render::choices(list_title(SelectionKind::Direction), labels));
        }
        Update::Stops => {
            let labels = session.catalog().labels(SelectionKind::Stop);
            println!("{}", render::choices(list_title(SelectionKind::Stop), labels));
        }
        Update::Board => {
            if let Some(board) = session.board() {
                println!("{}", render::board(board));
            }
        }
    }
}

fn list_title(kind: SelectionKind) -> &'static str {
    match kind {
        SelectionKind::Line => "Linhas",
        SelectionKind::Direction => "Sentidos",
        SelectionKind::Stop => "Paragens",
    }
}
