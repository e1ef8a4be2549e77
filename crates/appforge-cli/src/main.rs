//! appforge CLI - scaffold React / React Native apps and generate source files

use anyhow::Result;
use appforge_core::generate::{self, ComponentKind};
use appforge_core::outcome::CommandOutcome;
use appforge_core::project;
use appforge_core::tui::InitArgs;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "appforge")]
#[command(about = "Scaffold React / React Native apps and generate source files")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a new application from a boilerplate
    Init(CliInitArgs),
    /// Run the project's dev script, installing dependencies when missing
    Start,
    /// Run the project's test script
    Test,
    /// Generate a screen component
    Screen(NameArg),
    /// Generate a shared component
    Shared(NameArg),
    /// Generate a model class
    Model(NameArg),
    /// Generate a store class
    Store(NameArg),
    /// Generate an API call stub
    Api(NameArg),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// App name (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Flavor to scaffold: react-ts, react-js, react-native-ts, react-native-js
    #[arg(short, long)]
    pub flavor: Option<String>,

    /// Local boilerplate index YAML instead of the built-in one (for development use)
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// Skip the react-native CLI installation check
    #[arg(long = "skip-tool-check")]
    pub skip_tool_check: bool,

    /// Skip installing dependencies after scaffolding
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            name: args.name,
            flavor: args.flavor,
            index: args.index,
            skip_tool_check: args.skip_tool_check,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct NameArg {
    /// Name of the component to generate (any casing; normalized internally)
    pub name: String,
}

/// Route a parsed command to its handler. Handlers return structured
/// outcomes; process exit happens once, in main.
async fn dispatch(args: Args) -> Result<CommandOutcome> {
    let root = std::env::current_dir()?;

    match args.command {
        Some(Command::Init(init_args)) => {
            appforge_core::run_init(init_args.into(), CLI_VERSION).await
        }
        Some(Command::Start) => project::start(&root).await,
        Some(Command::Test) => project::test(&root).await,
        Some(Command::Screen(arg)) => generate::generate(&root, ComponentKind::Screen, &arg.name).await,
        Some(Command::Shared(arg)) => generate::generate(&root, ComponentKind::Shared, &arg.name).await,
        Some(Command::Model(arg)) => generate::generate(&root, ComponentKind::Model, &arg.name).await,
        Some(Command::Store(arg)) => generate::generate(&root, ComponentKind::Store, &arg.name).await,
        Some(Command::Api(arg)) => generate::generate(&root, ComponentKind::Api, &arg.name).await,
        None => {
            // No subcommand provided: show help
            Args::command().print_help()?;
            Ok(CommandOutcome::success())
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let outcome = match dispatch(args).await {
        Ok(outcome) => outcome,
        Err(e) => CommandOutcome::failure(format!("{:#}", e)),
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Some(message) = &outcome.message {
        if outcome.is_success() {
            println!("{}", message.green());
        } else {
            eprintln!("{}", message.red());
        }
    }

    std::process::exit(outcome.code);
}
