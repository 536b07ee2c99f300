use clap::{ArgGroup, Args, Parser, Subcommand};
use fitsch::app::editor;
use fitsch::app::{self, AppConfig};
use fitsch::config;
#[cfg(feature = "harness")]
use fitsch::harness;
use fitsch::ui::theme;
use std::path::PathBuf;

/// Terminal UI for comparing grocery prices across Irish stores.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to a catalogue snapshot (JSON array of products).
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// Search term to run immediately once the catalogue has loaded.
    #[arg(long)]
    query: Option<String>,

    #[cfg(feature = "harness")]
    /// Use the built-in demo catalogue instead of loading a snapshot.
    #[arg(long, default_value_t = false)]
    demo: bool,

    #[cfg(feature = "harness")]
    /// Render deterministic frames to stdout without entering interactive mode.
    #[arg(long, default_value_t = false)]
    harness_dump: bool,

    #[cfg(feature = "harness")]
    /// Harness frame width.
    #[arg(long, default_value_t = 140)]
    harness_width: u16,

    #[cfg(feature = "harness")]
    /// Harness frame height.
    #[arg(long, default_value_t = 44)]
    harness_height: u16,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect or edit fitsch configuration.
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("config_action")
        .required(true)
        .multiple(false)
        .args(["edit", "path"])
))]
struct ConfigCommand {
    /// Open the config file in $VISUAL/$EDITOR/nvim/vim/vi.
    #[arg(long)]
    edit: bool,

    /// Print the config file path.
    #[arg(long)]
    path: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Config(command)) = cli.command {
        return handle_config_command(command);
    }

    let config = config::load_or_create()?;
    theme::apply(config.theme);

    #[cfg(feature = "harness")]
    if cli.harness_dump {
        let dump = harness::render_demo_dump(cli.harness_width, cli.harness_height)?;
        println!("{dump}");
        return Ok(());
    }

    app::run(AppConfig {
        catalogue: cli.catalogue,
        query: cli.query,
        breakpoint: config.breakpoint,
        #[cfg(feature = "harness")]
        demo: cli.demo,
    })
    .await
}

fn handle_config_command(command: ConfigCommand) -> anyhow::Result<()> {
    let path = config::ensure_config_file()?;

    if command.path {
        println!("{}", path.display());
        return Ok(());
    }

    if command.edit {
        editor::edit_file_with_system_editor(path.as_path())?;
        return Ok(());
    }

    Ok(())
}
