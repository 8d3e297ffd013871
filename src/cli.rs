use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use pushrelay::config::{AppConfig, ProfileStoreConfig, VapidConfig};

#[allow(clippy::large_enum_variant)]
pub(crate) enum RunOutcome {
    Serve(AppConfig),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    let cli = Cli::parse();
    if let Some(Command::Init(args)) = cli.command {
        let code = run_init(args);
        return RunOutcome::Exit(code);
    }

    match resolve_config(&cli) {
        Ok(config) => RunOutcome::Serve(config),
        Err(err) => {
            eprintln!("error: {err}");
            RunOutcome::Exit(2)
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pushrelay",
    version,
    about = "Chat message push notification relay"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[arg(long, env = "PUSHRELAY_PORT", default_value_t = 5000)]
    port: u16,
    #[arg(long, env = "PUSHRELAY_CHAT_SECRET")]
    chat_secret: Option<String>,
    #[arg(long, env = "PUSHRELAY_WEBHOOK_SECRET")]
    webhook_secret: Option<String>,
    #[arg(long, env = "PUSHRELAY_CHAT_TOKEN_TTL")]
    chat_token_ttl: Option<String>,
    #[arg(long, env = "PUSHRELAY_VAPID_PRIVATE_KEY")]
    vapid_private_key: Option<String>,
    #[arg(long, env = "PUSHRELAY_VAPID_PUBLIC_KEY")]
    vapid_public_key: Option<String>,
    #[arg(long, env = "PUSHRELAY_VAPID_SUBJECT")]
    vapid_subject: Option<String>,
    #[arg(long, env = "PUSHRELAY_PROFILE_URL")]
    profile_url: Option<String>,
    #[arg(long, env = "PUSHRELAY_PROFILE_API_KEY")]
    profile_api_key: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Init(InitArgs),
}

#[derive(Args, Debug)]
struct InitArgs {
    #[arg(long)]
    subject: Option<String>,
}

fn run_init(args: InitArgs) -> i32 {
    let credentials = match pushrelay::generate_vapid_credentials() {
        Ok(credentials) => credentials,
        Err(err) => {
            eprintln!("failed to generate VAPID credentials: {err}");
            return 1;
        }
    };
    let (subject, show_subject_note) = match args.subject {
        Some(subject) => (subject, false),
        None => ("mailto:you@example.com".to_string(), true),
    };

    println!("VAPID credentials generated.");
    println!();
    println!("PUSHRELAY_VAPID_PRIVATE_KEY=\"{}\"", credentials.private_key);
    println!("PUSHRELAY_VAPID_PUBLIC_KEY=\"{}\"", credentials.public_key);
    println!("PUSHRELAY_VAPID_SUBJECT=\"{subject}\"");
    if show_subject_note {
        println!();
        println!("Note: replace PUSHRELAY_VAPID_SUBJECT with a contact URI you control.");
    }
    0
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, String> {
    let chat_secret = require(cli.chat_secret.as_deref(), "--chat-secret")?;
    // The chat backend signs webhooks with its API secret unless a dedicated
    // secret is configured.
    let webhook_secret = match cli.webhook_secret.as_deref().map(str::trim) {
        Some(secret) if !secret.is_empty() => secret.to_string(),
        _ => chat_secret.clone(),
    };
    let chat_token_ttl = match cli.chat_token_ttl.as_deref() {
        Some(raw) => parse_token_ttl(raw)?,
        None => default_token_ttl(),
    };
    let vapid = VapidConfig {
        private_key: require(cli.vapid_private_key.as_deref(), "--vapid-private-key")?,
        public_key: require(cli.vapid_public_key.as_deref(), "--vapid-public-key")?,
        subject: require(cli.vapid_subject.as_deref(), "--vapid-subject")?,
    };
    let profile = ProfileStoreConfig {
        base_url: require(cli.profile_url.as_deref(), "--profile-url")?,
        api_key: require(cli.profile_api_key.as_deref(), "--profile-api-key")?,
    };

    Ok(AppConfig {
        port: cli.port,
        chat_secret,
        webhook_secret,
        chat_token_ttl,
        vapid,
        profile,
    })
}

fn require(value: Option<&str>, flag: &str) -> Result<String, String> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(format!("{flag} is required"));
    }
    Ok(value.to_string())
}

fn default_token_ttl() -> Duration {
    Duration::from_secs(60 * 60)
}

fn parse_token_ttl(raw: &str) -> Result<Duration, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("chat token ttl cannot be empty".to_string());
    }

    let (amount, unit) = match value.chars().last() {
        Some(ch) if ch.is_ascii_alphabetic() => {
            (&value[..value.len() - 1], ch.to_ascii_lowercase())
        }
        _ => (value, 's'),
    };

    let amount: u64 = amount
        .parse()
        .map_err(|_| format!("invalid chat token ttl '{value}'; expected <number>[s|m|h|d]"))?;

    if amount == 0 {
        return Err("chat token ttl must be greater than 0".to_string());
    }

    match unit {
        's' => Ok(Duration::from_secs(amount)),
        'm' => Ok(Duration::from_secs(amount * 60)),
        'h' => Ok(Duration::from_secs(amount * 60 * 60)),
        'd' => Ok(Duration::from_secs(amount * 60 * 60 * 24)),
        _ => Err(format!(
            "invalid chat token ttl '{value}'; expected <number>[s|m|h|d]"
        )),
    }
}
