use clap::{Args, Parser, Subcommand};
use client::{ClientError, LobbyAdapter, LobbyView};
use messages::GameSettings;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("lobby session failed: {0}")]
    Client(#[from] ClientError),
    #[error("game creation rejected: {0}")]
    CreateRejected(String),
    #[error("connection closed before the server responded")]
    ClosedEarly,
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "lobby-cli", about = "Terminal host for the lobby websocket protocol")]
struct Cli {
    /// Lobby websocket endpoint.
    #[arg(long, env = "LOBBY_WS_URL", default_value = "ws://127.0.0.1:8080/history")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a game and run an interactive host session.
    Host(HostArgs),
    /// Send a bare start command and exit.
    Start,
    /// Send a bare next-question command and exit.
    NextQuestion,
}

#[derive(Args, Debug)]
struct HostArgs {
    /// Host display name.
    #[arg(long)]
    username: String,

    /// First question-bank section, passed through as entered.
    #[arg(long, default_value = "")]
    start_section: String,

    /// Last question-bank section, passed through as entered.
    #[arg(long, default_value = "")]
    end_section: String,

    /// Game variant to run.
    #[arg(long, default_value = "")]
    game_kind: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Host(args) => run_host(&cli.url, args).await,
        Command::Start => run_start(&cli.url).await,
        Command::NextQuestion => run_next_question(&cli.url).await,
    }
}

/// Outcome of one turn of the host session loop.
enum SessionEvent {
    /// A server message was folded into the view (`false` = socket closed).
    Socket(bool),
    /// A line arrived on stdin (`None` = stdin closed).
    Input(Option<String>),
}

async fn run_host(url: &str, args: HostArgs) -> Result<(), CliError> {
    let mut adapter = LobbyAdapter::connect(url).await?;
    let settings = GameSettings {
        start_section: args.start_section,
        end_section: args.end_section,
        game_kind: args.game_kind,
    };
    adapter.create_game(&args.username, settings).await?;

    wait_for_lobby(&mut adapter).await?;
    println!("{}", adapter.view().host_name_label);
    println!("{}", adapter.view().game_id_label);
    println!("commands: start | next | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match next_session_event(&mut adapter, &mut lines).await? {
            SessionEvent::Socket(false) | SessionEvent::Input(None) => break,
            SessionEvent::Socket(true) => render(adapter.view()),
            SessionEvent::Input(Some(line)) => match line.trim() {
                "start" => adapter.start_game().await?,
                "next" => adapter.next_question().await?,
                "quit" => break,
                "" => {}
                other => eprintln!("unknown command: {other}"),
            },
        }
    }

    adapter.disconnect().await?;
    Ok(())
}

/// Pump messages until the server answers the create request one way or the
/// other.
async fn wait_for_lobby(adapter: &mut LobbyAdapter) -> Result<(), CliError> {
    loop {
        if !adapter.process_next().await? {
            return Err(CliError::ClosedEarly);
        }
        if adapter.view().lobby_visible {
            return Ok(());
        }
        if !adapter.view().error_label.is_empty() {
            return Err(CliError::CreateRejected(adapter.view().error_label.clone()));
        }
    }
}

async fn next_session_event(
    adapter: &mut LobbyAdapter,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<SessionEvent, CliError> {
    tokio::select! {
        open = adapter.process_next() => Ok(SessionEvent::Socket(open?)),
        line = lines.next_line() => Ok(SessionEvent::Input(line?)),
    }
}

async fn run_start(url: &str) -> Result<(), CliError> {
    let mut adapter = LobbyAdapter::connect(url).await?;
    adapter.start_game().await?;
    adapter.disconnect().await?;
    Ok(())
}

async fn run_next_question(url: &str) -> Result<(), CliError> {
    let mut adapter = LobbyAdapter::connect(url).await?;
    adapter.next_question().await?;
    adapter.disconnect().await?;
    Ok(())
}

fn render(view: &LobbyView) {
    if !view.error_label.is_empty() {
        eprintln!("error: {}", view.error_label);
    }
    if view.lobby_visible {
        println!("--- {} ({}) ---", view.host_name_label, view.game_id_label);
        if view.members_text.is_empty() {
            println!("(no members yet)");
        } else {
            println!("{}", view.members_text);
        }
    }
    if view.game_visible {
        println!("--- game in progress ---");
    }
}
