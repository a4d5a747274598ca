use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use television::{
    Bindings, Config, ConsoleDisplay, EventSource, LineSource, MediaEvent, ScriptSource,
    TelevisionController, TelevisionState, TracingSink,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "television")]
#[command(about = "Drive a simulated television from its front-panel buttons", long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, env = "TELEVISION_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read button names from stdin, one per line
    Run,
    /// Press a fixed sequence of buttons and print the final state
    Play(PlayOpts),
    /// Print the effective configuration
    Config,
    /// Generate shell completions
    Completions(CompletionsOpts),
}

#[derive(clap::Args, Debug)]
struct PlayOpts {
    #[arg(required = true)]
    events: Vec<String>,
    /// Skip unknown buttons instead of failing
    #[arg(long)]
    keep_going: bool,
}

#[derive(clap::Args, Debug)]
struct CompletionsOpts {
    shell: Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run => {
            let config = load_config(cli.config)?;
            let mut source = LineSource::stdin();
            drive(&config, &mut source, false).await?;
        }
        Commands::Play(opts) => {
            let config = load_config(cli.config)?;
            let mut source = ScriptSource::new(opts.events);
            let session = drive(&config, &mut source, !opts.keep_going).await?;
            if let Some(failure) = session.failure {
                return Err(failure);
            }
            let state = session.state;
            tracing::debug!("{} media events", session.media_events);
            println!(
                "power={} channel={} volume={} muted={}",
                if state.powered { "on" } else { "off" },
                state.channel,
                state.volume,
                state.muted
            );
        }
        Commands::Config => {
            let config = load_config(cli.config)?;
            print!("{}", config.to_toml()?);
        }
        Commands::Completions(opts) => {
            clap_complete::generate(opts.shell, &mut Cli::command(), "television", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path.clone())
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

/// How a session ended. `failure` is set when a strict session stopped at a
/// bad button; the sink is torn down and its status drained either way.
struct Session {
    state: TelevisionState,
    media_events: usize,
    failure: Option<anyhow::Error>,
}

async fn drive<E: EventSource>(config: &Config, source: &mut E, strict: bool) -> Result<Session> {
    let settings = config.controller_settings()?;
    let (sink, media_events) = TracingSink::new(config.media.check_sources);
    let reporter = tokio::spawn(report_media(media_events));

    let mut tv = TelevisionController::new(sink, ConsoleDisplay::new(), settings);
    let bindings = Bindings::standard();
    let mut failure = None;

    loop {
        let event = tokio::select! {
            event = source.next_event() => event,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        };
        let Some(event) = event else { break };

        if let Err(e) = event.and_then(|button| bindings.dispatch(&mut tv, button)) {
            if strict {
                failure = Some(e.into());
                break;
            }
            tracing::warn!("{}", e);
        }
    }

    let state = tv.state();
    tv.shutdown();
    drop(tv);
    let media_events = reporter.await?;

    Ok(Session { state, media_events, failure })
}

async fn report_media(mut events: mpsc::UnboundedReceiver<MediaEvent>) -> usize {
    let mut seen = 0;
    while let Some(event) = events.recv().await {
        seen += 1;
        match event {
            MediaEvent::Failed(e) => tracing::error!("Media error: {}", e),
            other => tracing::debug!("Media: {:?}", other),
        }
    }
    seen
}
