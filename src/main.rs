use axum_prometheus::PrometheusMetricLayer;
use calendario_tributario::config::AppConfig;
use calendario_tributario::context::FilingContext;
use calendario_tributario::error::AppError;
use calendario_tributario::http::{self, AppState};
use calendario_tributario::schedule::domain::{Jurisdiction, TaxpayerKind};
use calendario_tributario::schedule::{DeadlineReport, DUE_SOON_WINDOW_DAYS};
use calendario_tributario::telemetry;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Calendario Tributario",
    about = "Resolve Colombian tax filing deadlines from the command line or as an HTTP service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with filing obligations without starting the service
    Obligations {
        #[command(subcommand)]
        command: ObligationsCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum ObligationsCommand {
    /// Resolve and print the deadlines for one taxpayer identifier
    Lookup(LookupArgs),
}

#[derive(Args, Debug)]
struct LookupArgs {
    /// Taxpayer identifier, digits only, without the verification digit
    #[arg(long)]
    nit: String,
    /// Taxpayer category
    #[arg(long, value_enum, default_value = "juridica")]
    kind: KindArg,
    /// Restrict to one or more jurisdictions (repeatable)
    #[arg(long = "jurisdiction", value_enum)]
    jurisdictions: Vec<JurisdictionArg>,
    /// Evaluation date for status coloring (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Print every obligation as a flat date-sorted listing as well
    #[arg(long)]
    list_details: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Juridica,
    Natural,
}

impl From<KindArg> for TaxpayerKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Juridica => TaxpayerKind::PersonaJuridica,
            KindArg::Natural => TaxpayerKind::PersonaNatural,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum JurisdictionArg {
    Nacional,
    Distrital,
    Departamental,
}

impl From<JurisdictionArg> for Jurisdiction {
    fn from(value: JurisdictionArg) -> Self {
        match value {
            JurisdictionArg::Nacional => Jurisdiction::Nacional,
            JurisdictionArg::Distrital => Jurisdiction::Distrital,
            JurisdictionArg::Departamental => Jurisdiction::Departamental,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Obligations {
            command: ObligationsCommand::Lookup(args),
        } => run_lookup(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let context = FilingContext::load(&config.data)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        context: Arc::new(context),
    };

    let app = http::router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "calendario tributario ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let LookupArgs {
        nit,
        kind,
        jurisdictions,
        today,
        list_details,
    } = args;

    let config = AppConfig::load()?;
    let context = FilingContext::load(&config.data)?;

    let kind: TaxpayerKind = kind.into();
    let jurisdictions: Vec<Jurisdiction> = jurisdictions
        .into_iter()
        .map(Jurisdiction::from)
        .collect();

    let schedule = context.lookup(&nit, kind, &jurisdictions)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = DeadlineReport::build(&schedule, today);

    render_lookup_report(&schedule.key().last_pair(), kind, &report, list_details);
    Ok(())
}

fn render_lookup_report(
    last_pair: &str,
    kind: TaxpayerKind,
    report: &DeadlineReport,
    list_details: bool,
) {
    println!("Calendario tributario 2026");
    println!(
        "NIT terminado en {} — {} (evaluado el {})",
        last_pair,
        kind.label(),
        report.today()
    );

    for group in report.by_jurisdiction() {
        println!("\n{}", group.jurisdiction_label);
        for obligation in &group.obligations {
            println!(
                "- {} | {} | vence {} | {} ({})",
                obligation.tax,
                obligation.period,
                obligation.due_date,
                obligation.status_label,
                describe_days(obligation.days_remaining)
            );
        }
    }

    let summary = report.summary();
    println!(
        "\nResumen: {} vencidas, {} urgentes (≤ {} días), {} a tiempo",
        summary.overdue, summary.due_soon, DUE_SOON_WINDOW_DAYS, summary.on_time
    );

    match summary.next_due {
        Some(next) => println!(
            "Próximo vencimiento: {} ({}) — {}",
            next.tax, next.period, next.due_date
        ),
        None => println!("Sin vencimientos pendientes para el resto del año."),
    }

    if list_details {
        println!("\nDetalle por fecha");
        for obligation in report.rows() {
            println!(
                "- {} | {} | {} | vence {} | {}",
                obligation.key,
                obligation.tax,
                obligation.jurisdiction_label,
                obligation.due_date,
                obligation.status_label
            );
        }
    }
}

fn describe_days(days_remaining: i64) -> String {
    match days_remaining {
        0 => "vence hoy".to_string(),
        d if d < 0 => format!("hace {} días", -d),
        d => format!("en {d} días"),
    }
}
