use crate::license::spdx::{is_copyleft, is_non_commercial, is_permissive, normalize};
use crate::models::{
    AccessType, ClassifiedRepository, LicenseClassification, LicenseStatus, Repository,
};

const ALLOWED: LicenseClassification = LicenseClassification {
    status: LicenseStatus::Allowed,
    label: "COMMERCIAL OK",
    description: "Permissive license. Safe for commercial use.",
    access_type: AccessType::Granted,
};

const REVIEW: LicenseClassification = LicenseClassification {
    status: LicenseStatus::Review,
    label: "VIRAL / COPYLEFT",
    description: "Commercial use allowed, but source code must be disclosed if distributed.",
    access_type: AccessType::AuditReq,
};

const FORBIDDEN: LicenseClassification = LicenseClassification {
    status: LicenseStatus::Forbidden,
    label: "NON-COMMERCIAL",
    description: "Commercial use is strictly prohibited.",
    access_type: AccessType::Restricted,
};

const NO_LICENSE: LicenseClassification = LicenseClassification {
    status: LicenseStatus::Unknown,
    label: "NO LICENSE",
    description: "Copyright laws apply. Risky.",
    access_type: AccessType::Unknown,
};

const UNKNOWN_LICENSE: LicenseClassification = LicenseClassification {
    status: LicenseStatus::Unknown,
    label: "UNKNOWN LICENSE",
    description: "Check license terms manually.",
    access_type: AccessType::Unknown,
};

/// Classify a license identifier into a risk category.
///
/// Lookups are case-insensitive and evaluated in order, first match wins:
/// - permissive set → [`LicenseStatus::Allowed`]
/// - copyleft set → [`LicenseStatus::Review`]
/// - non-commercial marker anywhere in the id → [`LicenseStatus::Forbidden`]
/// - anything else → [`LicenseStatus::Unknown`] ("UNKNOWN LICENSE")
///
/// A missing or blank identifier is [`LicenseStatus::Unknown`] with the
/// "NO LICENSE" label.
pub fn classify(license: Option<&str>) -> LicenseClassification {
    let key = match license.map(normalize) {
        Some(key) if !key.is_empty() => key,
        _ => return NO_LICENSE,
    };

    if is_permissive(&key) {
        return ALLOWED;
    }

    if is_copyleft(&key) {
        return REVIEW;
    }

    if is_non_commercial(&key) {
        return FORBIDDEN;
    }

    UNKNOWN_LICENSE
}

/// Annotate a search hit with the classification of its `license.key`.
pub fn classify_repository(repository: Repository) -> ClassifiedRepository {
    let classification = classify(repository.license.as_ref().map(|l| l.key.as_str()));
    ClassifiedRepository {
        repository,
        classification,
    }
}
