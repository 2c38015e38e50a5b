//! GuideMate - Entry Point

use clap::Parser;
use guidemate::config::{self, ResolvedConfig};
use guidemate::content::{self, Catalog};
use guidemate::model::{AppError, ScreenId, UserType};
use guidemate::state::{AppState, ScreenStack, SearchInput, SearchQuery};
use guidemate::view::{self, ColorConfig, ViewStyles};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// GuideMate - IB Diploma Programme reference guides in the terminal
#[derive(Parser, Debug)]
#[command(name = "guidemate")]
#[command(version)]
#[command(about = "Browse and search IB Diploma Programme reference guides")]
pub struct Args {
    /// Reader role: student or teacher
    #[arg(short, long)]
    pub user_type: Option<UserType>,

    /// Open this screen on top of the home screen
    #[arg(long, value_parser = parse_screen_id)]
    pub screen: Option<ScreenId>,

    /// Start with this search applied on the opened screen
    #[arg(short, long)]
    pub search: Option<String>,

    /// Content pack (.toml or .json) to use instead of the bundled guides
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print screen ids and titles, then exit
    #[arg(long)]
    pub list: bool,
}

fn parse_screen_id(raw: &str) -> Result<ScreenId, String> {
    ScreenId::new(raw).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = resolve_config(&args)?;

    guidemate::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let catalog = match &config.content_path {
        Some(path) => content::load_catalog(path.clone())?,
        None => content::catalog()?,
    };

    if args.list {
        print_screens(&catalog, &mut io::stdout().lock())?;
        return Ok(());
    }

    let state = initial_state(Arc::new(catalog), &config, args.search.as_deref())?;
    let styles = ViewStyles::new(
        ColorConfig::from_env_and_args(args.no_color),
        config.highlight_color,
    );

    view::run(state, config.key_bindings, styles)?;

    Ok(())
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file)?;
    let with_env = config::apply_env_overrides(merged)?;
    Ok(config::apply_cli_overrides(
        with_env,
        args.user_type,
        args.content.clone(),
        args.screen.clone(),
    ))
}

/// Build the starting state: root screen, the configured start screen on
/// top, then the initial search if one was given.
fn initial_state(
    catalog: Arc<Catalog>,
    config: &ResolvedConfig,
    search: Option<&str>,
) -> Result<AppState, AppError> {
    let mut stack = ScreenStack::new(catalog, config.user_type);
    if let Some(id) = &config.start_screen {
        stack.open(id)?;
    }

    let mut state = AppState::new(stack);
    if let Some(query) = search.and_then(|q| SearchQuery::new(q)) {
        if state.current().screen().is_menu() {
            warn!(query = %query.as_str(), "Ignoring --search on a menu screen");
        } else {
            state.set_search_input(SearchInput::Active { query });
        }
    }
    Ok(state)
}

fn print_screens(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    for screen in catalog.screens() {
        let kind = if screen.is_menu() { "menu" } else { "content" };
        writeln!(out, "{:<20} {:<8} {}", screen.id(), kind, screen.title())?;
    }
    Ok(())
}
