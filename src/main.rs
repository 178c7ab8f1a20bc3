use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use tui_toast::app::App;
use tui_toast::config::{Config, ConfigResult, load_config, load_config_from_path};
use tui_toast::{Bundle, ToastEdge, ToastLength};

/// Show each toast category in a full-screen demo
#[derive(Parser, Debug)]
#[command(name = "toast-demo", version, about)]
struct Args {
    /// Edge the toast slides in from (top or bottom)
    #[arg(long)]
    edge: Option<ToastEdge>,

    /// How long a toast stays up: short, long, or a number of seconds
    #[arg(long)]
    length: Option<ToastLength>,

    /// Keep toasts up until dismissed by hand
    #[arg(long)]
    no_auto_dismiss: bool,

    /// Read this config file instead of ~/.config/toast/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let config = apply_args(config, &args);

    if args.print_config {
        if let Some(warning) = &warning {
            eprintln!("{}", warning);
        }
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut warnings: Vec<String> = warning.into_iter().collect();
    if let Some(path) = &config.locale.bundle {
        if let Err(e) = Bundle::load(path).and_then(Bundle::install_main) {
            log::warn!("Message bundle not installed: {}", e);
            warnings.push(e.to_string());
        }
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    with_restore(
        || execute!(io::stdout(), EnableMouseCapture),
        || run(terminal, &config, warnings),
        || {
            let _ = execute!(io::stdout(), DisableMouseCapture);
            ratatui::restore();
        },
    )
}

/// Run `body` after `setup`, then `restore` whether either of them failed
fn with_restore<T>(
    setup: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    let result = setup().map_err(Into::into).and_then(|()| body());
    restore();
    result
}

/// Command-line flags win over the config file
fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(edge) = args.edge {
        config.toast.edge = edge;
    }
    if let Some(length) = args.length {
        config.toast.length = length;
    }
    if args.no_auto_dismiss {
        config.toast.auto_dismiss = false;
    }
    config
}

fn run(mut terminal: DefaultTerminal, config: &Config, warnings: Vec<String>) -> Result<()> {
    let mut app = App::new(config);

    // Only one slot: the last warning is the one that stays up
    for warning in warnings {
        app.show_warning_at(warning, Instant::now());
    }

    loop {
        let now = Instant::now();
        app.presenter.tick_at(now);

        terminal.draw(|frame| app.render(frame, now))?;

        if event::poll(app.poll_timeout(now))? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("toast-demo.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
