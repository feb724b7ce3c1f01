use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use profile_cards::config::{
    HtbConfig, ThmConfig, DEFAULT_HTB_API_BASE, DEFAULT_HTB_AVATAR_URL,
    DEFAULT_HTB_OUTPUT, DEFAULT_HTB_STATE, DEFAULT_HTB_USER_ID, DEFAULT_THM_OUTPUT,
    DEFAULT_THM_USER_PUBLIC_ID, DEFAULT_TIMEOUT_SECS,
};
use profile_cards::pipeline::{run_htb, run_thm};
use profile_cards::CardError;

#[derive(Parser)]
#[command(name = "profile-cards")]
#[command(version, about = "Generate HackTheBox and TryHackMe SVG stat cards")]
struct Cli {
    /// Per-request HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the HackTheBox card
    Htb(HtbArgs),
    /// Build the TryHackMe card
    Thm(ThmArgs),
}

#[derive(Args)]
struct HtbArgs {
    #[arg(long, env = "HTB_USER_ID", default_value = DEFAULT_HTB_USER_ID)]
    user_id: String,

    /// API bearer token
    #[arg(long, env = "HTB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "HTB_AVATAR_URL", default_value = DEFAULT_HTB_AVATAR_URL)]
    avatar_url: String,

    #[arg(long, env = "HTB_API_BASE", default_value = DEFAULT_HTB_API_BASE)]
    api_base: String,

    #[arg(long, default_value = DEFAULT_HTB_OUTPUT)]
    output: PathBuf,

    /// League tracking state
    #[arg(long, default_value = DEFAULT_HTB_STATE)]
    state_file: PathBuf,
}

#[derive(Args)]
struct ThmArgs {
    #[arg(long, env = "THM_USER_PUBLIC_ID", default_value = DEFAULT_THM_USER_PUBLIC_ID)]
    user_public_id: String,

    /// Badge page URL; derived from the user id when omitted
    #[arg(long, env = "THM_BADGE_URL")]
    badge_url: Option<String>,

    #[arg(long, default_value = DEFAULT_THM_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let timeout = Duration::from_secs(cli.timeout);

    let result = match cli.command {
        Commands::Htb(args) => htb(args, timeout),
        Commands::Thm(args) => thm(args, timeout),
    };

    if let Err(e) = result {
        match e.downcast_ref::<CardError>() {
            Some(CardError::MissingToken { var }) => {
                println!("[!] {} not set; no stats can be fetched.", var);
            }
            Some(CardError::CriticalFields { .. }) => {}
            _ => eprintln!("[✗] {:#}", e),
        }
        std::process::exit(1);
    }

    println!("[✓] Done!");
    Ok(())
}

fn htb(args: HtbArgs, timeout: Duration) -> Result<()> {
    println!("[*] HTB Stats Card Generator");
    println!("[*] User ID: {}", args.user_id);

    let mut cfg = HtbConfig::new(args.user_id, args.token.unwrap_or_default());
    cfg.avatar_url = args.avatar_url;
    cfg.api_base = args.api_base.trim_end_matches('/').to_string();
    cfg.output = args.output;
    cfg.state_file = args.state_file;
    cfg.timeout = timeout;

    run_htb(&cfg, Utc::now())?;
    Ok(())
}

fn thm(args: ThmArgs, timeout: Duration) -> Result<()> {
    println!("[*] THM Badge Card Generator");

    let mut cfg = ThmConfig::new(&args.user_public_id);
    if let Some(url) = args.badge_url {
        cfg.badge_url = url;
    }
    cfg.output = args.output;
    cfg.timeout = timeout;

    run_thm(&cfg)?;
    Ok(())
}
