use anyhow::Context;
use clap::{Parser, Subcommand};
use membership_backend_runtime::{telemetry, BackendServices};
use membership_config::load as load_config;
use membership_gateway::{create_router, GatewayState};
use sqlx::Row;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "membership-backend")]
#[command(about = "Membership backend (HTTP server by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Seed the database with sample members
    SeedData,
    /// Delete all members from the database
    ClearData,
    /// Dump all members from the database
    DumpData,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::SeedData => seed_data().await,
        Commands::ClearData => clear_data().await,
        Commands::DumpData => dump_data().await,
    }
}

async fn run_server() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("starting membership backend");

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let state = GatewayState::new(services.db_pool.clone());
    let app = create_router(state);

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(membership_backend_runtime::shutdown_signal())
        .await
        .context("http server error")?;

    info!("backend shut down");
    Ok(())
}

async fn seed_data() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("seeding database with sample members");

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let members: &[(&str, &str, &str, &str, &str)] = &[
        (
            "Juan",
            "Pérez",
            "juan.perez@example.com",
            "1985-05-15",
            "1000.00",
        ),
        (
            "María",
            "García",
            "maria.garcia@example.com",
            "1990-08-22",
            "2500.50",
        ),
        (
            "Carlos",
            "Rodríguez",
            "carlos.rodriguez@example.com",
            "1978-03-10",
            "5000.75",
        ),
    ];

    let mut inserted = 0u64;
    for (first_name, last_name, email, birth_date, balance) in members {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO members (first_name, last_name, email, birth_date, registration_date, is_active, balance)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(birth_date)
        .bind("2025-01-01T00:00:00Z")
        .bind(true)
        .bind(balance)
        .execute(&services.db_pool)
        .await
        .with_context(|| format!("failed to seed member {email}"))?;

        inserted += result.rows_affected();
    }

    println!("Seeded {} members (existing emails skipped)", inserted);
    println!("Run 'dump-data' to see the stored data");

    Ok(())
}

async fn clear_data() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("clearing all members from database");

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let members_deleted = sqlx::query("DELETE FROM members")
        .execute(&services.db_pool)
        .await
        .context("failed to delete members")?;

    println!("Database cleared:");
    println!("- {} members deleted", members_deleted.rows_affected());

    Ok(())
}

async fn dump_data() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("dumping members from database");

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let members = sqlx::query(
        r#"
        SELECT id, first_name, last_name, email, birth_date, registration_date, is_active, balance
        FROM members
        ORDER BY id ASC
        "#,
    )
    .fetch_all(&services.db_pool)
    .await
    .context("failed to fetch members")?;

    println!("=== MEMBERS ===");
    if members.is_empty() {
        println!("No members found in database");
        return Ok(());
    }

    println!("Found {} members:", members.len());
    println!(
        "{:<5} {:<15} {:<15} {:<35} {:<12} {:<25} {:<8} {:<12}",
        "ID", "First Name", "Last Name", "Email", "Birth Date", "Registered At", "Active", "Balance"
    );
    println!("{}", "-".repeat(130));

    for member in members {
        let id: i64 = member.get("id");
        let first_name: String = member.get("first_name");
        let last_name: String = member.get("last_name");
        let email: String = member.get("email");
        let birth_date: String = member.get("birth_date");
        let registration_date: String = member.get("registration_date");
        let is_active: bool = member.get("is_active");
        let balance: String = member.get("balance");

        println!(
            "{:<5} {:<15} {:<15} {:<35} {:<12} {:<25} {:<8} {:<12}",
            id, first_name, last_name, email, birth_date, registration_date, is_active, balance
        );
    }

    Ok(())
}
