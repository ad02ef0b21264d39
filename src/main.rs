use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use rate_strategy::cli::{self, OutputFormat};
use rate_strategy::context::{Order, Payment};
use rate_strategy::logging::{self, Verbosity};
use rate_strategy::policy::{self, PolicyCatalog, PolicyKind};
use rate_strategy::CalculationReport;
use tracing::info;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    args.validate().context("Invalid arguments")?;

    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    let catalog = PolicyCatalog::new();
    let policy = catalog
        .get(&args.policy)
        .with_context(|| format!("Known policies: {}", catalog.policy_names().join(", ")))?;

    // Tax policies go through a Payment, freight policies through an Order.
    // Same numbers either way; the split mirrors what each policy applies to.
    let owned = policy::create(policy.name())?;
    let result = match policy.kind() {
        PolicyKind::Tax => Payment::new(owned).calculate_tax(args.amount),
        PolicyKind::Freight => Order::new(owned).calculate_freight(args.amount),
    };

    info!(policy = policy.name(), amount = args.amount, result, "calculation done");

    let report = CalculationReport::new(policy, args.amount, result);
    let rendered = match args.format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => report.to_json().context("Failed to render report")?,
    };

    match args.output_file {
        Some(ref path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Cannot write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
