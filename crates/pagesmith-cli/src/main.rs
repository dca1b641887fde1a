mod app;
mod ui;

use anyhow::Result;
use app::{App, Flow};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pagesmith_config::Config;
use pagesmith_engine::io;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{env, io::stdout, path::PathBuf, process};

fn main() -> Result<()> {
    // Output directory from CLI args, then config file, then the working directory
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let from_config = args.len() == 1 && config.is_some();
    let config = config.unwrap_or_default();

    let output_dir = match args.len() {
        2 => PathBuf::from(&args[1]),
        1 => config.output_dir.clone(),
        _ => {
            eprintln!("Usage: {} [output-dir]", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_output_dir(&output_dir) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Output path '{}'{} is invalid: {e}",
            output_dir.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(output_dir, config.page_shell());
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}
