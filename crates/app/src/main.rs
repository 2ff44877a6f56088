//! `aspire` - command-line driver for the Aspire tutoring client

use anyhow::{Context, Result};
use aspire_app::cli::{Cli, Command, LogFormatArg};
use aspire_app::commands::{self, ProfileView, SettingsChange};
use aspire_app::AppContext;
use aspire_core::{LoginOutcome, ReconcileOutcome, RegistrationOutcome, Route};
use aspire_infra::{config, init_tracing, LogFormat};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // `.env` must be loaded before parsing so env-backed flags see it.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let format = match cli.log_format {
        LogFormatArg::Text => LogFormat::Text,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_tracing(format)?;

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let app_config = match cli.config {
        Some(path) => config::load_from_file(Some(path))?,
        None => config::load()?,
    };
    let ctx = AppContext::new(app_config).context("failed to initialise application context")?;

    match cli.command {
        Command::Login { email, password } => {
            let outcome = commands::login(&ctx, &email, &password).await?;
            print_login(&outcome);
        }
        Command::Redeem { code } => {
            let outcome = commands::redeem_code(&ctx, &code).await?;
            print_registration(&outcome);
        }
        Command::Show => {
            let view = commands::show_profile(&ctx).await?;
            print_profile(&view)?;
        }
        Command::Settings { theme, font, language, preferred_name, time_zone } => {
            let change = SettingsChange {
                theme_mode: theme,
                font_style: font,
                preferred_language: language,
                preferred_name,
                time_zone,
            };
            let outcome = commands::update_settings(&ctx, change).await?;
            print_reconcile("settings", &outcome);
        }
        Command::Avatar { image } => match commands::upload_avatar(&ctx, &image).await? {
            Some(url) => println!("Profile picture updated: {url}"),
            None => println!("Upload failed; profile picture unchanged"),
        },
        Command::Logout => {
            commands::logout(&ctx).await?;
            println!("Signed out");
        }
    }

    Ok(())
}

fn print_login(outcome: &LoginOutcome) {
    match outcome {
        LoginOutcome::Authenticated(session) => {
            let name = session.profile.first_name.as_deref().unwrap_or("student");
            println!("Welcome back, {name}");
            if !session.has_public_key {
                println!("No public key registered for this account yet");
            }
            match &session.seeded {
                Some(outcome) => print_reconcile("profile", outcome),
                None => println!("Profile could not be synchronised with the server"),
            }
        }
        LoginOutcome::Rejected(rejection) => println!("Login rejected: {rejection:?}"),
    }
}

fn print_registration(outcome: &RegistrationOutcome) {
    match outcome {
        RegistrationOutcome::Accepted { defaults, route, .. } => {
            println!(
                "Code accepted for {} {} <{}>",
                defaults.first_name, defaults.last_name, defaults.email_address
            );
            if matches!(route, Route::StudentInfoForm(_)) {
                println!("Complete your student profile to continue");
            }
        }
        RegistrationOutcome::Rejected(rejection) => {
            println!("Registration code rejected: {rejection:?}");
        }
    }
}

fn print_reconcile(what: &str, outcome: &ReconcileOutcome) {
    match outcome {
        ReconcileOutcome::Accepted => println!("{what} saved"),
        ReconcileOutcome::Rejected { diverging_fields } => println!(
            "{what} replaced by the server copy (differed in: {})",
            diverging_fields.join(", ")
        ),
    }
}

fn print_profile(view: &ProfileView) -> Result<()> {
    if view.record.is_empty() {
        println!("Not signed in");
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&view.record)?);
    println!(
        "theme={:?} font={:?} locale={:?}",
        view.presentation.theme_mode, view.presentation.font_style, view.presentation.locale
    );
    if view.reconciled.is_none() {
        println!("(local copy; server not reachable)");
    }
    Ok(())
}
