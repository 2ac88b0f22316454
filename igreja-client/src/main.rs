use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use igreja_client::config::{ClientConfig, ServerConfig};
use igreja_client::screens::{
    pickers, AccountScreen, Feedback, HomeScreen, LoginScreen, NoticesScreen, PickerEntry,
    ReportScreen,
};
use igreja_client::{HttpBackend, Navigator, Route, Session};
use reports::{format_total, parse_amount, parse_registered_date};
use serde::Serialize;
use shared_types::{Notice, Report, TokenResponse};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "igreja", author, version, about = "Church member client")]
struct Cli {
    /// Login name used to request a token
    #[arg(long, env = "IGREJA_USERNAME", global = true)]
    username: Option<String>,

    #[arg(long, env = "IGREJA_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    /// Bearer token from a previous login, used instead of username/password
    #[arg(
        long,
        env = "IGREJA_TOKEN",
        hide_env_values = true,
        global = true,
        conflicts_with_all = ["username", "password"]
    )]
    token: Option<String>,

    /// Overrides `server.base_url` from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[arg(long, global = true)]
    log_file_path: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the identity read from the token
    Whoami,
    /// Own contributions of one year, grouped by category
    Contributions {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Church expenses of one month, grouped by category
    Expenses {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Active notices addressed to you
    Notices,
    ChangePassword {
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        confirmation: String,
    },
    ChangeUsername {
        #[arg(long)]
        login: String,
    },
    /// Years available in the report pickers
    Years {
        /// List the expense years instead of the contribution years
        #[arg(long)]
        expenses: bool,
    },
    /// Months available in the expenses picker
    Months {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Store a new backend URL in the config file
    SetBaseUrl { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file_path.as_deref());

    let (mut config, config_path) = ClientConfig::load().context("Failed to load client config")?;
    tracing::debug!("Config loaded from {:?}", config_path);

    let mut server = config.server();
    if let Some(base_url) = &cli.base_url {
        server.base_url = base_url.clone();
    }
    let reports_config = config.reports();
    let today = Local::now().date_naive();

    if let Command::SetBaseUrl { url } = &cli.command {
        config.server = Some(ServerConfig {
            base_url: url.clone(),
            ..server
        });
        config
            .save_to(&config_path)
            .with_context(|| format!("Failed to save config at {:?}", config_path))?;
        println!("Base URL set to {}", url);
        return Ok(());
    }

    let backend = HttpBackend::from_config(&server).context("Failed to build HTTP client")?;
    tracing::info!("Using backend at {}", backend.base_url());

    let mut navigator = Navigator::new();
    let session = open_session(&cli, &backend, &mut navigator).await?;

    match &cli.command {
        Command::Whoami => {
            let view = HomeScreen::new(session.clone()).load(&backend).await;
            if cli.json {
                print_json(&serde_json::json!({
                    "identity": session.identity(),
                    "home": view,
                }))?;
            } else {
                println!("{}", view.greeting);
                if let Some(identity) = session.identity() {
                    if let Some(member_id) = identity.member_id {
                        println!("Membro: {}", member_id);
                    }
                    if let Some(role) = &identity.role {
                        println!("Cargo: {}", role);
                    }
                }
                if let Some(name) = &view.display_name {
                    println!("Nome: {}", name);
                }
                if view.has_notices {
                    println!("Você tem avisos.");
                }
            }
        }
        Command::Contributions { year } => {
            let year = year.unwrap_or(today.year());
            navigator.navigate(Route::Contributions {
                session: session.clone(),
                year,
            });
            let screen = ReportScreen::contributions(
                session.clone(),
                year,
                reports_config.contribution_categories.clone(),
            );
            show_report(&screen, &backend, cli.json).await?;
        }
        Command::Expenses { year, month } => {
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());
            navigator.navigate(Route::Expenses {
                session: session.clone(),
                year,
                month,
            });
            let screen = ReportScreen::expenses(
                session.clone(),
                year,
                month,
                reports_config.expense_categories.clone(),
            )?;
            show_report(&screen, &backend, cli.json).await?;
        }
        Command::Notices => {
            navigator.navigate(Route::Notices {
                session: session.clone(),
            });
            let screen = NoticesScreen::new(session.clone());
            screen.load(&backend).await;
            let state = screen.state().await;
            if let Some(message) = state.error {
                return Err(anyhow!(message));
            }
            if cli.json {
                print_json(&state.data)?;
            } else {
                print_notices(&state.data);
            }
        }
        Command::ChangePassword {
            new_password,
            confirmation,
        } => {
            navigator.navigate(Route::ChangePassword {
                session: session.clone(),
            });
            let feedback = AccountScreen::new(session.clone())
                .change_password(&backend, new_password, confirmation)
                .await;
            report_feedback(feedback, cli.json)?;
        }
        Command::ChangeUsername { login } => {
            navigator.navigate(Route::ChangeUsername {
                session: session.clone(),
            });
            let feedback = AccountScreen::new(session.clone())
                .change_username(&backend, login)
                .await;
            report_feedback(feedback, cli.json)?;
        }
        Command::Years { expenses } => {
            let entries = if *expenses {
                navigator.navigate(Route::ExpenseYears {
                    session: session.clone(),
                });
                pickers::expense_years(&session, reports_config.first_year, today)
            } else {
                navigator.navigate(Route::ContributionYears {
                    session: session.clone(),
                });
                pickers::contribution_years(&session, reports_config.first_year, today)
            };
            print_picker(&entries, cli.json)?;
        }
        Command::Months { year } => {
            let year = year.unwrap_or(today.year());
            navigator.navigate(Route::ExpenseMonths {
                session: session.clone(),
                year,
            });
            print_picker(&pickers::expense_months(&session, year), cli.json)?;
        }
        Command::SetBaseUrl { .. } => {}
    }

    navigator.logout();
    Ok(())
}

fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("igreja.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Session from `--token`, or a login through the login screen
async fn open_session(
    cli: &Cli,
    backend: &HttpBackend,
    navigator: &mut Navigator,
) -> Result<Session> {
    if let Some(token) = &cli.token {
        let session = Session::new(TokenResponse::bearer(token.clone()));
        navigator.navigate(Route::Home {
            session: session.clone(),
        });
        return Ok(session);
    }

    let username = cli.username.as_deref().unwrap_or_default();
    let password = cli.password.as_deref().unwrap_or_default();

    navigator.navigate(Route::Login);
    let mut screen = LoginScreen::new();
    screen
        .submit(backend, navigator, username, password)
        .await
        .ok_or_else(|| {
            anyhow!(screen
                .error
                .clone()
                .unwrap_or_else(|| "Login failed".to_string()))
        })
}

async fn show_report(screen: &ReportScreen, backend: &HttpBackend, json: bool) -> Result<()> {
    screen.load(backend).await;
    let state = screen.state().await;
    if let Some(message) = state.error {
        return Err(anyhow!(message));
    }

    if json {
        return print_json(&state.data);
    }

    println!("{}", screen.title());
    match &state.data {
        Some(report) if !report.is_empty() => print_report(report),
        _ => println!("Nenhum registro encontrado."),
    }
    Ok(())
}

fn print_report(report: &Report) {
    for section in &report.sections {
        println!();
        println!("{}", section.title);
        for item in &section.items {
            let date = parse_registered_date(&item.registered_date)
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| item.registered_date.clone());
            println!(
                "  {}  R$ {:>10}  {}",
                date,
                format_total(parse_amount(item.amount.as_ref())),
                item.description
            );
        }
        println!("  Total: R$ {}", section.total);
    }
    println!();
    println!("Total geral: R$ {}", report.grand_total);
}

fn print_notices(notices: &[Notice]) {
    if notices.is_empty() {
        println!("Nenhum aviso.");
        return;
    }
    for notice in notices {
        let date = parse_registered_date(&notice.event_date)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| notice.event_date.clone());
        println!("{}  {}", date, notice.description);
    }
}

#[derive(Serialize)]
struct PickerLine<'a> {
    label: &'a str,
    route: &'static str,
}

fn print_picker(entries: &[PickerEntry], json: bool) -> Result<()> {
    if json {
        let lines: Vec<PickerLine> = entries
            .iter()
            .map(|entry| PickerLine {
                label: &entry.label,
                route: entry.route.name(),
            })
            .collect();
        return print_json(&lines);
    }

    for entry in entries {
        println!("{}", entry.label);
    }
    Ok(())
}

fn report_feedback(feedback: Feedback, json: bool) -> Result<()> {
    if json {
        print_json(&feedback)?;
    } else {
        println!("{}", feedback.message);
    }
    if feedback.success {
        Ok(())
    } else {
        Err(anyhow!(feedback.message))
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}
