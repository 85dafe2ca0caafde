//! CLI administration tool for token-login.
//!
//! Manages accounts in the PostgreSQL credential store. The web service only
//! reads accounts; this tool is the only writer.
//!
//! # Usage
//!
//! ```bash
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Create an account (prompts for missing values and the password)
//! cargo run --bin admin -- user create --username bob
//!
//! # Disable / re-enable an account
//! cargo run --bin admin -- user disable bob
//! cargo run --bin admin -- user enable bob
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use token_login::domain::entities::NewUser;
use token_login::domain::repositories::UserRepository;
use token_login::infrastructure::persistence::PgUserRepository;
use token_login::utils::password::fake_hash_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing token-login accounts.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all accounts
    List,

    /// Create a new account
    Create {
        /// Unique username
        #[arg(short, long)]
        username: Option<String>,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,

        /// Full name shown on pages
        #[arg(short, long)]
        full_name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Disable an account; applies to logins made after the change
    Disable {
        /// Username to disable
        username: String,
    },

    /// Re-enable a disabled account
    Enable {
        /// Username to enable
        username: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::List => list_users(&repo).await?,
        UserAction::Create {
            username,
            email,
            full_name,
            yes,
        } => create_user(&repo, username, email, full_name, yes).await?,
        UserAction::Disable { username } => set_disabled(&repo, &username, true).await?,
        UserAction::Enable { username } => set_disabled(&repo, &username, false).await?,
    }

    Ok(())
}

/// Lists all accounts with status indicators.
///
/// # Output Format
///
/// ```text
/// 👥 Users
///
///   Username         Full name              Email                     Status
///   ───────────────────────────────────────────────────────────────────────────
///   testuser         John Doe               johndoe@example.com       ACTIVE
///   alice            Alice Wonderson        alice@example.com         DISABLED
/// ```
async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = repo
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<16} {:<22} {:<25} {:<18} {:<10}",
        "Username".bright_white().bold(),
        "Full name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(95).bright_black());

    for stored in &users {
        let user = &stored.user;
        let status = if user.disabled {
            "DISABLED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<16} {:<22} {:<25} {:<18} {}",
            user.username.cyan(),
            user.full_name.as_deref().unwrap_or("-"),
            user.email.as_deref().unwrap_or("-").bright_black(),
            stored
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a new account with interactive prompts.
///
/// The password is always prompted for and stored through the same prefix
/// transform the web service checks against.
async fn create_user(
    repo: &PgUserRepository,
    username: Option<String>,
    email: Option<String>,
    full_name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "➕ Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let username = username.trim().to_string();
    if username.is_empty() {
        anyhow::bail!("Username must not be empty");
    }

    if repo
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        println!("{}", format!("⚠️  User '{username}' already exists").yellow());
        return Ok(());
    }

    let email = match email {
        Some(e) => Some(e),
        None => optional_input("Email (optional)")?,
    };
    let full_name = match full_name {
        Some(n) => Some(n),
        None => optional_input("Full name (optional)")?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Username:  {}", username.cyan());
    println!("  Email:     {}", email.as_deref().unwrap_or("-"));
    println!("  Full name: {}", full_name.as_deref().unwrap_or("-"));
    println!();
    println!(
        "{}",
        "⚠️  Passwords are stored with a reversible demo transform, not a real hash."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let new_user = NewUser {
        username,
        email,
        full_name,
        hashed_password: fake_hash_password(&password),
    };

    let created = repo
        .create_user(&new_user)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{}",
        format!("✅ User '{}' created successfully!", created.username)
            .green()
            .bold()
    );
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -i -d 'username={}&password=...' http://localhost:8000/token",
        created.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Prompts for a value that may be left empty.
fn optional_input(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// Sets or clears the `disabled` flag on an account.
///
/// Disabling asks for confirmation (default: No). The flag only affects new
/// logins: a token keeps the account record it was issued with, so tokens
/// issued before the change keep their old status until the server restarts.
async fn set_disabled(repo: &PgUserRepository, username: &str, disabled: bool) -> Result<()> {
    let (title, verb) = if disabled {
        ("🔒 Disable User", "disabled")
    } else {
        ("🔓 Enable User", "enabled")
    };
    println!("{}", title.bright_blue().bold());
    println!();

    let user = repo
        .find_by_username(username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    if user.disabled == disabled {
        println!(
            "{}",
            format!("⚠️  User '{}' is already {verb}", user.username).yellow()
        );
        return Ok(());
    }

    println!("  User: {}", user.username.cyan());
    println!();

    if disabled {
        let confirmed = Confirm::new()
            .with_prompt("Disable this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.set_disabled(&user.username, disabled)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update user: {}", e))?;

    println!();
    println!(
        "{}",
        format!("✅ User {verb} successfully!").green().bold()
    );
    println!(
        "{}",
        "   Applies to new logins; restart the server to invalidate issued tokens.".bright_black()
    );
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Database Check".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("  {}", "✅ Connected".green().bold());
            println!("  {}", version.bright_black());

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .context("Failed to count users (have migrations run?)")?;

            println!("  Users: {}", users.to_string().bright_white().bold());
            println!();
        }
    }

    Ok(())
}
