use dioxus::prelude::*;
use pagesmith_engine::{PageShell, io};
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use pagesmith_config::Config;
use ui::App;

/// Resolved at startup and handed to the root component
#[derive(Debug, Clone)]
struct Settings {
    output_dir: PathBuf,
    shell: PageShell,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("pagesmith starting up");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().collect();
    let from_config = args.len() == 1 && config.is_some();
    let config = config.unwrap_or_default();

    let output_dir = match args.len() {
        2 => {
            log::info!("Using output directory from CLI argument: {}", args[1]);
            PathBuf::from(&args[1])
        }
        1 => config.output_dir.clone(),
        _ => {
            let program_name = args
                .first()
                .cloned()
                .unwrap_or_else(|| "pagesmith".to_string());
            eprintln!("Usage: {program_name} [output-dir]");
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

    let settings = Settings {
        output_dir,
        shell: config.page_shell(),
    };

    log::info!("Launching builder, exporting to {}", settings.output_dir.display());
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(settings)
        .launch(app_root);
}

fn app_root() -> Element {
    let settings = use_context::<Settings>();

    rsx! {
        App {
            output_dir: settings.output_dir,
            shell: settings.shell,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("pagesmith")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
