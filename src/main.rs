use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use estate_desk::format::{format_mn_sek, format_sek};
use estate_desk::{
    mortgage, Catalog, CriteriaForm, Listing, ListingDraft, MortgageTerms, PropertyType, DISTRICTS,
};

#[derive(Parser)]
#[command(name = "estate-desk")]
#[command(about = "Listing catalog, search and mortgage desk for the agency site")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog with the site's filter controls
    Search {
        /// Lowest acceptable price in kr (0 = unbounded)
        #[arg(long, default_value_t = 0)]
        price_from: i64,

        /// Highest acceptable price in kr (0 = unbounded)
        #[arg(long, default_value_t = 0)]
        price_to: i64,

        /// Exact room count, or "all"
        #[arg(long, default_value = "all")]
        rooms: String,

        /// Smallest acceptable living area in sqm (0 = unbounded)
        #[arg(long, default_value_t = 0.0)]
        area_from: f64,

        /// Largest acceptable living area in sqm (0 = unbounded)
        #[arg(long, default_value_t = 0.0)]
        area_to: f64,

        /// Property type: apartment, house, newbuilding or "all"
        #[arg(long = "type", default_value = "all")]
        property_type: String,

        /// District name, or "all"
        #[arg(long, default_value = "all")]
        district: String,

        /// Write the matching listings to this JSON file
        #[arg(long)]
        save: Option<String>,
    },

    /// Quote the monthly cost for a mortgage
    Quote {
        /// Property price in kr
        #[arg(
            long,
            default_value_t = mortgage::DEFAULT_PRICE,
            value_parser = clap::value_parser!(i64).range(0..=mortgage::PRICE_MAX)
        )]
        price: i64,

        /// Cash paid up front in kr
        #[arg(
            long,
            default_value_t = mortgage::DEFAULT_DOWN_PAYMENT,
            value_parser = clap::value_parser!(i64).range(0..=mortgage::PRICE_MAX)
        )]
        down_payment: i64,

        /// Loan term in years
        #[arg(
            long,
            default_value_t = mortgage::DEFAULT_YEARS,
            value_parser = clap::value_parser!(u32).range(mortgage::YEARS_MIN as i64..=mortgage::YEARS_MAX as i64)
        )]
        years: u32,

        /// Annual interest rate in percent
        #[arg(long, default_value_t = mortgage::DEFAULT_RATE, value_parser = parse_rate)]
        rate: f64,
    },

    /// Submit a new listing to the catalog for this run
    Submit {
        #[arg(long)]
        title: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        district: String,

        /// Property type: apartment, house or newbuilding
        #[arg(long = "type")]
        property_type: PropertyType,

        /// Asking price in kr
        #[arg(long)]
        price: i64,

        #[arg(long)]
        rooms: u32,

        /// Living area in sqm
        #[arg(long)]
        area: f64,

        #[arg(long, default_value_t = 1)]
        floor: u32,

        #[arg(long, default_value_t = 1)]
        total_floors: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("🏠 Estate Desk - listings, search and mortgage quotes");
    info!("=====================================================");
    info!("");

    let mut catalog = Catalog::seeded();
    info!(
        "Loaded {} listings across {} districts",
        catalog.len(),
        DISTRICTS.len()
    );
    info!("");

    match cli.command {
        None => show_catalog(&catalog),
        Some(Commands::Search {
            price_from,
            price_to,
            rooms,
            area_from,
            area_to,
            property_type,
            district,
            save,
        }) => {
            let form = CriteriaForm {
                price_from,
                price_to,
                rooms,
                area_from,
                area_to,
                property_type,
                district,
            };
            run_search(&catalog, &form, save).await?;
        }
        Some(Commands::Quote {
            price,
            down_payment,
            years,
            rate,
        }) => {
            let terms = MortgageTerms {
                price,
                down_payment,
                years,
                annual_rate: rate,
            };
            run_quote(&terms)?;
        }
        Some(Commands::Submit {
            title,
            address,
            district,
            property_type,
            price,
            rooms,
            area,
            floor,
            total_floors,
        }) => {
            let draft = ListingDraft {
                title,
                address,
                district,
                property_type,
                price,
                rooms,
                area,
                floor,
                total_floors,
            };
            run_submit(&mut catalog, draft)?;
        }
    }

    Ok(())
}

/// Parse an interest rate and hold it to the calculator form's range.
fn parse_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !(mortgage::RATE_MIN..=mortgage::RATE_MAX).contains(&rate) {
        return Err(format!(
            "rate must be between {} and {} percent",
            mortgage::RATE_MIN,
            mortgage::RATE_MAX
        ));
    }
    Ok(rate)
}

fn init_logging(verbose: bool) {
    let default_directives = if verbose {
        "estate_desk=debug,info"
    } else {
        "estate_desk=info,warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn show_catalog(catalog: &Catalog) {
    info!("Districts: {}", DISTRICTS.join(", "));

    let listings = catalog.listings();
    if !listings.is_empty() {
        let average = listings.iter().map(|l| l.price).sum::<i64>() / listings.len() as i64;
        info!("Average asking price: {}", format_mn_sek(average));
    }
    info!("");

    print_listings(listings);
}

async fn run_search(catalog: &Catalog, form: &CriteriaForm, save: Option<String>) -> Result<()> {
    let criteria = form.criteria();
    if criteria.is_unconstrained() {
        info!("No filters active, showing the whole catalog");
    }

    let results = catalog.search(&criteria);
    info!("✅ Found {} of {} listings\n", results.len(), catalog.len());

    print_listings(&results);

    if let Some(path) = save {
        let json = serde_json::to_string_pretty(&results)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write results to {path}"))?;
        info!("💾 Saved {} listings to {}", results.len(), path);
    }

    Ok(())
}

fn run_quote(terms: &MortgageTerms) -> Result<()> {
    info!(
        "Quoting {} with {} down, {} years at {}%",
        format_sek(terms.price),
        format_sek(terms.down_payment),
        terms.years,
        terms.annual_rate
    );

    let quote = terms.quote().context("Mortgage terms were rejected")?;

    println!("Loan amount:     {}", format_sek(quote.loan_amount));
    println!("Term:            {} months", quote.months);
    println!("Monthly payment: {}", format_sek(quote.monthly_payment));
    println!("Total payment:   {}", format_sek(quote.total_payment));
    println!("Overpayment:     {}", format_sek(quote.overpayment));

    Ok(())
}

fn run_submit(catalog: &mut Catalog, draft: ListingDraft) -> Result<()> {
    let accepted = catalog
        .submit(draft)
        .context("Listing submission was rejected")?;

    info!("✅ Listing {} accepted: {}", accepted.id, accepted.title);
    info!(
        "Catalog now holds {} listings (kept in memory for this run only)",
        catalog.len()
    );
    info!("");

    print_listings(std::slice::from_ref(&accepted));
    Ok(())
}

fn print_listings(listings: &[Listing]) {
    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, format_sek(listing.price));
        println!("   {} rum, {} kvm", listing.rooms, listing.area);
        println!(
            "   {}, {} ({})",
            listing.address, listing.district, listing.property_type
        );
        println!(
            "   Våning {}/{}, ID {}",
            listing.floor, listing.total_floors, listing.id
        );
        println!();
    }
}
