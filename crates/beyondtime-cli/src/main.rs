use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "beyondtime-cli", version, about = "Beyond Time CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 24-hour time ring
    Ring {
        #[command(subcommand)]
        action: commands::ring::RingAction,
    },
    /// Routine builder slots and planning
    Builder {
        #[command(subcommand)]
        action: commands::builder::BuilderAction,
    },
    /// Replay recorded session gestures
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Habit tracker
    Habits {
        #[command(subcommand)]
        action: commands::habits::HabitsAction,
    },
    /// Greeting, date and stat cards
    Dashboard(commands::dashboard::DashboardArgs),
    /// Insight cards
    Insights {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Hero copy and parallax offsets
    Hero(commands::hero::HeroArgs),
    /// Seeded background particle field
    Particles(commands::particles::ParticlesArgs),
    /// Dark/light theme
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Live clock refresh
    Clock {
        #[command(subcommand)]
        action: commands::clock::ClockAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Ring { action } => commands::ring::run(action),
        Commands::Builder { action } => commands::builder::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Habits { action } => commands::habits::run(action),
        Commands::Dashboard(args) => commands::dashboard::run(args),
        Commands::Insights { json } => commands::insights::run(json),
        Commands::Hero(args) => commands::hero::run(args),
        Commands::Particles(args) => commands::particles::run(args),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Clock { action } => commands::clock::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "beyondtime-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
