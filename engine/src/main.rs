// Dashboard entry point: renders one page as pretty JSON on stdout
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use engine::config::EngineSettings;
use engine::data::CatalogStore;
use engine::filter::{CategorySelector, FilterCriteria};
use engine::locale::LocaleProvider;
use engine::services::{DashboardService, Page};
use shared::models::Language;
use shared::utils::parse_iso_date;
use tracing::info;

const CONFIG_ENV: &str = "DASHBOARD_CONFIG";

#[derive(Debug, Parser)]
#[command(name = "dashboard")]
#[command(about = "Render one admin dashboard page as JSON", long_about = None)]
struct Cli {
    /// overview, customers, invoices, inventory, analytics or settings
    #[arg(default_value = "overview", value_parser = parse_page)]
    page: Page,

    /// Display language: EN or CZ
    #[arg(long = "lang", value_name = "LANG", value_parser = parse_language)]
    language: Option<Language>,

    /// Case-insensitive text search
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Status to keep ("All" keeps everything); products filter by category
    #[arg(long, alias = "category", value_name = "STATUS")]
    status: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    from: Option<NaiveDate>,

    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    to: Option<NaiveDate>,

    /// Print the detail sheet of one invoice (invoices page only)
    #[arg(long, value_name = "ID")]
    invoice: Option<String>,

    /// Load catalog CSV files from a directory instead of the embedded set
    #[arg(long = "data", value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Cli {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(query) = &self.search {
            criteria = criteria.with_query(query.as_str());
        }
        if let Some(status) = &self.status {
            criteria = criteria.with_category(CategorySelector::parse(status));
        }
        criteria.with_date_range(self.from, self.to)
    }
}

fn parse_page(s: &str) -> Result<Page, String> {
    s.parse::<Page>().map_err(|e| e.to_string())
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_code(s).ok_or_else(|| format!("unknown language '{}', expected EN or CZ", s))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_iso_date(s).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut settings = match env::var(CONFIG_ENV) {
        Ok(path) => EngineSettings::load_from_file(path)?,
        Err(_) => EngineSettings::load_default()?,
    };
    if let Some(language) = cli.language {
        settings.default_language = language;
    }
    info!(
        language = settings.default_language.code(),
        czk_per_usd = settings.czk_per_usd,
        page = %cli.page,
        "Starting dashboard"
    );

    let catalogs = match &cli.data_dir {
        Some(dir) => CatalogStore::from_dir(dir, &settings)?,
        None => CatalogStore::embedded(&settings)?,
    };
    let locale = LocaleProvider::from_settings(&settings).use_locale()?;
    let service = DashboardService::new(Arc::new(catalogs), locale, settings);

    let output = match (&cli.invoice, cli.page) {
        (Some(id), Page::Invoices) => serde_json::to_value(service.invoice_detail(id)?)?,
        _ => service.render(cli.page, &cli.criteria())?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dashboard").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_invoice_filters() {
        let cli = parse(&["invoices", "--search", "tatra", "--status", "Overdue", "--from", "2024-01-01", "--lang", "cz"])
            .unwrap();
        assert_eq!(cli.page, Page::Invoices);
        assert_eq!(cli.language, Some(Language::Cz));

        let criteria = cli.criteria();
        assert_eq!(criteria.query, "tatra");
        assert_eq!(criteria.category, CategorySelector::Only("Overdue".to_string()));
        assert_eq!(criteria.date_range.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(criteria.date_range.to, None);
    }

    #[test]
    fn test_category_is_an_alias_of_status() {
        let cli = parse(&["inventory", "--category", "Peripherals", "--data", "/tmp/catalogs"]).unwrap();
        assert_eq!(cli.criteria().category, CategorySelector::Only("Peripherals".to_string()));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/catalogs")));
    }

    #[test]
    fn test_defaults_to_overview() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.page, Page::Overview);
        assert_eq!(cli.language, None);
        assert!(cli.criteria().date_range.is_unbounded());

        assert_eq!(parse(&["settings"]).unwrap().page, Page::Settings);
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        assert_eq!(parse(&["reports"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse(&["--lang", "de"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse(&["--from", "15.01.2024"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse(&["--verbose"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert!(parse(&["--search"]).is_err());
    }
}
