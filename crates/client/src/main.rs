//! agendo-client CLI entry point.

use agendo_client::cli::{Cli, Commands, OutputFormat};
use agendo_client::client::AgendoClient;
use agendo_client::output::{format_output, pretty};
use agendo_client::report::render_report;
use agendo_client::view::{ScheduleView, ViewState};
use agendo_core::agenda::{filter_agenda, filter_by_year, sort_chronologically, Locale};
use anyhow::Context;
use chrono::{Datelike, Local};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agendo_client=info,agendo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = AgendoClient::new(&cli.base_url)?;
    let locale = Locale::from(cli.locale);

    match cli.command {
        Commands::Schedule(schedule_cmd) => {
            use agendo_client::cli::schedule::ScheduleAction;
            match schedule_cmd.action {
                ScheduleAction::List { mode, date } => {
                    let mut view = ScheduleView::new(mode.into(), date);
                    let ticket = view.begin_refresh();

                    let today = Local::now().date_naive();
                    let outcome = match client.fetch_agenda(locale).await {
                        Ok(items) => {
                            let mut filtered =
                                filter_agenda(&items, view.mode(), view.reference_day(), today);
                            sort_chronologically(&mut filtered);
                            Ok(filtered)
                        }
                        Err(err) => Err(err.to_string()),
                    };
                    view.apply(ticket, outcome);

                    match view.state() {
                        ViewState::Ready(items) => match cli.format {
                            OutputFormat::Json => {
                                println!("{}", format_output(items, cli.format))
                            }
                            OutputFormat::Pretty => println!("{}", pretty::format_agenda(items)),
                        },
                        ViewState::Failed(reason) => {
                            anyhow::bail!("failed to load appointments: {reason}")
                        }
                        // The ticket was just issued; nothing superseded it.
                        ViewState::Loading => {}
                    }
                }
                ScheduleAction::Cancel { id, event_id } => {
                    client
                        .cancel_scheduling(&id, &event_id)
                        .await
                        .context("failed to cancel appointment")?;
                    if !cli.quiet {
                        println!("Cancelled appointment {}", id);
                    }
                }
            }
        }
        Commands::Services(services_cmd) => {
            use agendo_client::cli::services::ServicesAction;
            match services_cmd.action {
                ServicesAction::Get { id } => {
                    let service = client.get_service(&id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&service, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_service(&service)),
                    }
                }
            }
        }
        Commands::Report(report_cmd) => {
            let year = Local::now().year();
            let items = client
                .fetch_agenda(locale)
                .await
                .context("failed to load appointments")?;

            let mut yearly = filter_by_year(&items, year);
            sort_chronologically(&mut yearly);

            let html = render_report(&yearly, year)?;
            match report_cmd.out {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    if !cli.quiet {
                        println!("Wrote report to {}", path.display());
                    }
                }
                None => println!("{}", html),
            }
        }
    }

    Ok(())
}
