use colored::Colorize;

use crate::dictionary::{self, TermDictionary};
use crate::license::classifier::classify;
use crate::models::LicenseStatus;

/// Print the rewritten query.
pub fn translate(query: &str, user: &TermDictionary) {
    println!("{}", dictionary::translate(query, user));
}

/// Print the classification of a single license identifier.
pub fn classify_license(license: Option<&str>) {
    let c = classify(license);
    let label = match c.status {
        LicenseStatus::Allowed => c.label.green(),
        LicenseStatus::Review => c.label.cyan(),
        LicenseStatus::Forbidden => c.label.red(),
        LicenseStatus::Unknown => c.label.yellow(),
    };
    println!("{} ({}, {})", label.bold(), c.status, c.access_type);
    println!("{}", c.description);
}
