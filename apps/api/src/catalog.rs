//! Listing catalog — one-shot CSV load of the job-postings table.
//!
//! The table is read once at startup and shared read-only for the life of
//! the process; nothing ever invalidates it within a session.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::models::listing::Listing;

/// Raw CSV row. Column names follow the source spreadsheet; only title,
/// description, and link are guaranteed to exist.
#[derive(Debug, Deserialize)]
struct ListingRecord {
    #[serde(rename = "Job Title", default)]
    job_title: Option<String>,
    #[serde(rename = "Company Name", default)]
    company_name: Option<String>,
    #[serde(rename = "Company Info", default)]
    company_info: Option<String>,
    #[serde(rename = "Job Description", default)]
    job_description: Option<String>,
    #[serde(rename = "Job Link", default)]
    job_link: Option<String>,
}

impl From<ListingRecord> for Listing {
    fn from(record: ListingRecord) -> Self {
        Listing {
            // Missing cells read as empty strings, like the source table.
            title: record.job_title.unwrap_or_default(),
            company_name: non_empty(record.company_name),
            company_info: non_empty(record.company_info),
            description: record.job_description.unwrap_or_default(),
            link: record.job_link.unwrap_or_default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Loads the catalog from disk. Called once from `main`.
pub fn load_catalog(path: &Path) -> Result<Arc<[Listing]>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open listings file {}", path.display()))?;
    let catalog = read_catalog(file)?;
    info!(
        "Loaded {} job listings from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

fn read_catalog(reader: impl Read) -> Result<Arc<[Listing]>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut listings = Vec::new();
    for record in csv_reader.deserialize::<ListingRecord>() {
        let record = record.context("Failed to parse listing row")?;
        listings.push(Listing::from(record));
    }
    Ok(listings.into())
}
