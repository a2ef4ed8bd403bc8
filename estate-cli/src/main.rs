mod paths;

use std::fs::{self, File};

use anyhow::Context;
use clap::{Parser, Subcommand};
use estate_lib::menu::{
    annotate_breadcrumbs, is_parent_section, menu_for_role, resolve_active_section,
    resolve_breadcrumbs, sections_for_role,
};
use estate_lib::navigation::{Location, MemoryNavigation, Navigation};
use estate_lib::resource::Resource;
use estate_lib::session::{AuthSession, PreferencesStore, Role, SessionStore, ThemeMode};
use estate_lib::settings::{SettingsProvider, SqliteBackend};
use estate_lib::table::{PageData, PageItem, TableController, TableRow};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "estate")]
#[command(about = "Navigation and table state for the estate management console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the breadcrumb trail for a route
    Breadcrumbs {
        path: String,
        /// Role whose menu is used. Defaults to the signed-in role.
        #[arg(long, env = "ESTATE_ROLE")]
        role: Option<Role>,
    },
    /// Print the sidebar sub-menu shown for a route
    Sidebar {
        path: String,
        #[arg(long, env = "ESTATE_ROLE")]
        role: Option<Role>,
    },
    /// Print pagination state for a route with query string
    Pager {
        /// Route and query, e.g. `/finance/invoices?page=3&size=20`
        location: String,
        #[arg(long)]
        total_elements: u64,
        /// Change the page size and print the resulting route
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Store a session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        role: Role,
        #[arg(long, env = "ESTATE_TOKEN")]
        token: String,
        /// Session lifetime in hours; omit for no expiry
        #[arg(long)]
        ttl_hours: Option<i64>,
    },
    /// Clear the stored session
    Logout,
    /// Print the stored session
    Whoami,
    /// Print or change the theme
    Theme { mode: Option<ThemeMode> },
}

/// Row placeholder; the pager only needs totals.
#[derive(Clone)]
struct RowKey(String);

impl TableRow for RowKey {
    fn id(&self) -> String {
        self.0.clone()
    }
}

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

async fn open_settings() -> anyhow::Result<SettingsProvider> {
    let Some(path) = paths::settings_db() else {
        warn!("no home directory; settings are not persisted");
        return Ok(SettingsProvider::in_memory());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let backend = SqliteBackend::new(&path)
        .await
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok(SettingsProvider::new(backend))
}

/// Explicit role, else the signed-in role, else `USER`.
async fn effective_role(role: Option<Role>, settings: &SettingsProvider) -> anyhow::Result<Role> {
    if let Some(role) = role {
        return Ok(role);
    }
    let sessions = SessionStore::new(settings.clone());
    sessions.hydrate().await?;
    Ok(sessions.role().unwrap_or_default())
}

fn print_breadcrumbs(role: Role, path: &str) -> anyhow::Result<()> {
    let path = Location::parse(path)?.decoded_pathname();
    let menu = menu_for_role(role);
    let trail = annotate_breadcrumbs(&menu, resolve_breadcrumbs(&menu, &path));
    if trail.is_empty() {
        println!("(no breadcrumbs for {})", path);
        return Ok(());
    }
    for crumb in trail {
        if crumb.linked {
            println!("{} -> {}", crumb.entry.title, crumb.entry.url);
        } else {
            println!("{}", crumb.entry.title);
        }
    }
    Ok(())
}

fn print_sidebar(role: Role, path: &str) -> anyhow::Result<()> {
    let path = Location::parse(path)?.decoded_pathname();
    let menu = menu_for_role(role);
    let sections = sections_for_role(role);
    let items = resolve_active_section(&sections, &path);
    if items.is_empty() {
        println!("(no section for {})", path);
        return Ok(());
    }
    for item in items {
        let marker = if path == item.url || path.starts_with(&format!("{}/", item.url)) {
            "*"
        } else {
            " "
        };
        let kind = if is_parent_section(&menu, &item.url) { "/" } else { "" };
        println!("{} {}{} ({})", marker, item.title, kind, item.url);
    }
    Ok(())
}

fn print_pager(location: &str, total_elements: u64, page_size: Option<u32>) -> anyhow::Result<()> {
    let navigation = MemoryNavigation::at(location)?;
    let columns = Resource::for_path(&navigation.pathname())
        .map(|resource| resource.columns())
        .unwrap_or_default();
    let table: TableController<RowKey, _> = TableController::new(columns, navigation);

    if let Some(size) = page_size {
        table.set_page_size(size);
    }

    let pagination = table.pagination();
    table.set_data(PageData::with_page_size(
        Vec::new(),
        total_elements,
        pagination.page_size,
    ));

    let window: Vec<String> = table
        .page_window()
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == pagination.page() => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect();

    println!("route:  {}", table.navigation().location());
    println!(
        "page:   {} of {} ({} per page, {} total)",
        pagination.page(),
        table.total_pages(),
        pagination.page_size,
        total_elements
    );
    println!("pages:  {}", window.join(" "));
    if !table.columns().is_empty() {
        let columns: Vec<String> = table.columns().into_iter().map(|c| c.label).collect();
        println!("columns: {}", columns.join(", "));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Breadcrumbs { path, role } => {
            let settings = open_settings().await?;
            print_breadcrumbs(effective_role(role, &settings).await?, &path)?;
        }
        Commands::Sidebar { path, role } => {
            let settings = open_settings().await?;
            print_sidebar(effective_role(role, &settings).await?, &path)?;
        }
        Commands::Pager {
            location,
            total_elements,
            page_size,
        } => print_pager(&location, total_elements, page_size)?,
        Commands::Login {
            username,
            role,
            token,
            ttl_hours,
        } => {
            let sessions = SessionStore::new(open_settings().await?);
            let mut session = AuthSession::new(username, role, token);
            if let Some(hours) = ttl_hours {
                session = session.with_expiry(chrono::Utc::now() + chrono::Duration::hours(hours));
            }
            sessions.login(session).await?;
            info!("logged in as {}", role);
            println!("signed in as {}", role);
        }
        Commands::Logout => {
            SessionStore::new(open_settings().await?).logout().await?;
            println!("signed out");
        }
        Commands::Whoami => {
            let sessions = SessionStore::new(open_settings().await?);
            match sessions.hydrate().await? {
                Some(session) => {
                    let expiry = session
                        .expires_at
                        .map(|at| at.to_rfc3339())
                        .unwrap_or_else(|| "never".to_string());
                    println!("{} ({}), expires {}", session.username, session.role, expiry);
                }
                None => println!("not signed in"),
            }
        }
        Commands::Theme { mode } => {
            let prefs = PreferencesStore::new(open_settings().await?);
            prefs.hydrate().await?;
            if let Some(mode) = mode {
                prefs.set_theme(mode).await?;
            }
            println!("{}", prefs.theme());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
