use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use roi_core::HoursRounding;
use roi_lead::ContactDetails;
use rust_decimal::Decimal;
use tracing::debug;

use roi_cli::{
    app::{self, InputOverrides},
    config::AppConfig,
    logging,
    utils::{parse_decimal, parse_tier},
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Labor-hour ROI estimator.
///
/// Models monthly manager-hour savings and forwards lead details to the
/// configured webhook.
#[derive(Debug, Parser)]
#[command(name = "roi-estimator", version, about)]
struct Cli {
    /// TOML configuration file (policy, webhook, defaults).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level or EnvFilter directive. RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute and print the monthly savings estimate.
    Estimate(EstimateArgs),

    /// Compare traditional and text-first reach percentages.
    Reach {
        /// Traditional channel reach, 0-100.
        #[arg(long, value_parser = parse_decimal)]
        traditional: Decimal,

        /// Text-first reach, 0-100.
        #[arg(long, value_parser = parse_decimal)]
        text_first: Decimal,
    },

    /// Submit a lead with the current estimate.
    Submit {
        #[command(flatten)]
        estimate: EstimateArgs,

        #[command(flatten)]
        contact: ContactArgs,

        /// Webhook URL; overrides the config file.
        #[arg(long, env = "ROI_WEBHOOK_URL")]
        webhook_url: Option<String>,

        /// Page location reported with the lead.
        #[arg(long)]
        page_url: Option<String>,
    },
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// Number of managers.
    #[arg(long)]
    managers: Option<i32>,

    /// Hours saved per manager per week.
    #[arg(long, value_parser = parse_decimal)]
    hours: Option<Decimal>,

    /// Fully loaded hourly manager cost.
    #[arg(long, value_parser = parse_decimal)]
    cost: Option<Decimal>,

    /// Employee count tier: 1-5 or a label such as "500-1K".
    #[arg(long, value_parser = parse_tier)]
    tier: Option<u8>,

    /// Round monthly hours to the nearest quarter hour.
    #[arg(long)]
    round_quarter_hour: bool,
}

#[derive(Debug, Args)]
struct ContactArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    company: String,

    #[arg(long)]
    phone: Option<String>,

    /// Hidden form field; left empty by real visitors.
    #[arg(long, default_value = "", hide = true)]
    website: String,
}

impl EstimateArgs {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            managers: self.managers,
            hours_saved_per_week: self.hours,
            hourly_cost: self.cost,
            employee_tier: self.tier,
        }
    }

    fn apply_to(
        &self,
        config: &mut AppConfig,
    ) {
        if self.round_quarter_hour {
            config.policy.hours_rounding = HoursRounding::NearestQuarterHour;
        }
    }
}

impl From<ContactArgs> for ContactDetails {
    fn from(args: ContactArgs) -> Self {
        ContactDetails {
            full_name: args.name,
            email: args.email,
            phone: args.phone,
            company: args.company,
            website: args.website,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level);
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let mut config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    debug!("configuration:\n{config}");

    match cli.command {
        Command::Estimate(args) => {
            args.apply_to(&mut config);
            let (_, derived) = app::build_state(&config, &args.overrides())
                .context("Failed to compute estimate")?;
            print!("{}", derived.display);
        }
        Command::Reach {
            traditional,
            text_first,
        } => {
            let display = app::render_reach(traditional, text_first)
                .context("Failed to compare reach")?;
            print!("{display}");
        }
        Command::Submit {
            estimate,
            contact,
            webhook_url,
            page_url,
        } => {
            estimate.apply_to(&mut config);
            if let Some(url) = webhook_url {
                config.webhook.url = Some(url);
            }
            if let Some(url) = page_url {
                config.page_url = url;
            }

            let (state, derived) = app::build_state(&config, &estimate.overrides())
                .context("Failed to compute estimate")?;
            print!("{}", derived.display);

            let report = app::submit_lead(&config, &state, &contact.into()).await;
            println!("{}", report.message);
            if !report.succeeded {
                anyhow::bail!("lead was not submitted");
            }
        }
    }

    Ok(())
}
