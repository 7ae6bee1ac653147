mod config;
mod tasks;
mod tui;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tasks::store::TaskListStore;
use tui::handlers::KeyEventHandler;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A transient TUI to-do list: add, edit, filter, and bulk-delete tasks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Manage the startup task list")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Add a task to be loaded at every launch")]
    Add {
        #[arg(help = "Task text")]
        text: String,
    },
    #[command(about = "List the startup tasks")]
    List,
    #[command(about = "Remove all startup tasks")]
    Clear,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Add { text } => {
            if text.trim().is_empty() {
                eprintln!("Error: Task text must not be empty.");
                std::process::exit(1);
            }

            let mut config = Config::load()?;
            config.add_startup_task(text);
            config.save()?;
            println!("Startup task added.");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for task in &config.startup_tasks {
                println!("{}", task);
            }
        }
        ConfigAction::Clear => {
            let mut config = Config::load()?;
            config.clear_startup_tasks();
            config.save()?;
            println!("Startup tasks cleared.");
        }
    }
    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let store = TaskListStore::with_tasks(config.startup_tasks);
    let mut app = App::new(store);

    run_tui(&mut app)?;

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    // One key event handled to completion per iteration; intents are
    // processed strictly in arrival order.
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
