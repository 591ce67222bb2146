use std::env;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use booking_client::{
    display_message, is_plausible_email_domain, is_valid_email_format, ApiConfig,
    AppointmentsResource, AuthProvider, BookingClient, StaticAuthProvider, User,
};
use loyalty_store::{LoyaltyPoints, SqliteStore};

const DEFAULT_DB_URL: &str = "sqlite:salon.db?mode=rwc";

#[derive(Debug, Parser)]
#[command(name = "salon")]
#[command(about = "Inspect appointments and loyalty points of salon customers")]
struct Args {
    /// SQLite URL of the local store. Falls back to SALON_DB_URL env.
    #[arg(long, global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the booking backend is reachable
    Health,

    /// List a customer's appointments
    Appointments {
        /// Customer id
        #[arg(long)]
        user: Option<String>,
    },

    /// Show or change a customer's loyalty points
    Points {
        /// Customer id
        #[arg(long)]
        user: String,

        #[command(subcommand)]
        action: Option<PointsAction>,
    },

    /// Check an email address the way the sign-in form does
    CheckEmail {
        email: String,
    },
}

#[derive(Debug, Subcommand)]
enum PointsAction {
    /// Print the balance
    Show,
    /// Add earned points
    Add { amount: u64 },
    /// Spend points (never below zero)
    Deduct { amount: u64 },
    /// Overwrite the balance
    Set { amount: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("booking_client=info".parse()?)
                .add_directive("loyalty_store=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Health => {
            let client = BookingClient::new(ApiConfig::from_env()?)?;
            match client.health_check().await {
                Ok(true) => println!("Backend at {} is healthy", client.config().base_url),
                Ok(false) => println!("Backend at {} is unhealthy", client.config().base_url),
                Err(e) => println!("{}", display_message(&e)),
            }
        }
        Command::Appointments { user } => {
            let auth = match user {
                Some(id) => StaticAuthProvider::signed_in(User::new(id)),
                None => StaticAuthProvider::signed_out(),
            };

            let client = BookingClient::new(ApiConfig::from_env()?)?;
            let resource = AppointmentsResource::new(client);
            resource.mount(auth.current_user().as_ref()).await;

            let state = resource.snapshot();
            if let Some(message) = state.error {
                println!("{}", message);
            } else if state.appointments.is_empty() {
                println!("No appointments");
            } else {
                for appt in &state.appointments {
                    println!(
                        "#{} {} {} [{}] {} with {} ({:.2})",
                        appt.id,
                        appt.date,
                        appt.time,
                        appt.status,
                        appt.service.name,
                        appt.technician.name,
                        appt.total_amount
                    );
                }
            }
        }
        Command::Points { user, action } => {
            let db_url = args
                .db
                .or_else(|| env::var("SALON_DB_URL").ok())
                .unwrap_or_else(|| DEFAULT_DB_URL.to_string());

            let store = SqliteStore::connect(&db_url).await?;
            store.migrate().await?;

            let mut points = LoyaltyPoints::load(Arc::new(store.clone()), Some(user.as_str())).await?;
            let balance = match action.unwrap_or(PointsAction::Show) {
                PointsAction::Show => points.points(),
                PointsAction::Add { amount } => points.add(amount).await?,
                PointsAction::Deduct { amount } => points.deduct(amount).await?,
                PointsAction::Set { amount } => points.set(amount).await?,
            };
            info!(user_id = %user, points = balance, "Loyalty points");
            println!("{}: {} points", user, balance);

            store.close().await;
        }
        Command::CheckEmail { email } => {
            println!("format:  {}", if is_valid_email_format(&email) { "ok" } else { "invalid" });
            println!(
                "domain:  {}",
                if is_plausible_email_domain(&email) { "ok" } else { "suspicious" }
            );
        }
    }

    Ok(())
}
