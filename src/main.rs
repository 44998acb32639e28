// ctutor: step-by-step C programming tutor

use std::fs::File;
use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ctutor::cli::{print_help, print_version, Args, Command};
use ctutor::settings::{Settings, DEFAULT_CONFIG_FILE};
use ctutor::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = match Args::parse().command {
        Command::Run(options) => options,
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            print_version();
            return Ok(());
        }
    };

    // ctutor.toml, then CTUTOR_* variables, then flags
    let config_path = options
        .config
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
    let mut settings = match Settings::load_or_default(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    settings.merge_with_env();
    settings.apply_args(&options);

    // The TUI owns stdout, so logs go to a file
    let log_path = settings.log_file();
    let log_file = File::create(&log_path)?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.logging.level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(log_file)))
    .init();
    log::info!(
        "Starting ctutor at week {} ({}), lessons from {}",
        settings.week(),
        settings.lesson.theme,
        settings.lesson.root.display()
    );

    let mut app = App::new(&settings);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            return Err(e.into());
        }
    };

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI exited with error: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
