//! Domain input collection.

use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};

use crate::error_handling::InputError;

/// Collects the domains to check from the CLI inputs.
///
/// A positional `domain` takes precedence: when both are given the list file
/// is ignored (and not read). The domain is trimmed, and an empty domain
/// counts as absent.
///
/// # Errors
///
/// - `InputError::NoInput` if neither input is supplied
/// - `InputError::ListNotFound` / `ListUnreadable` if the list cannot be read
/// - `InputError::EmptyList` if the list holds no domains
pub fn collect_domains(
    domain: Option<&str>,
    list: Option<&Path>,
) -> Result<Vec<String>, InputError> {
    let domain = domain.map(str::trim).filter(|d| !d.is_empty());

    match (domain, list) {
        (Some(domain), list) => {
            if let Some(list) = list {
                warn!(
                    "Both a domain and --list were given; checking {domain} and ignoring {}",
                    list.display()
                );
            }
            Ok(vec![domain.to_string()])
        }
        (None, Some(list)) => {
            let content = std::fs::read_to_string(list).map_err(|e| match e.kind() {
                ErrorKind::NotFound => InputError::ListNotFound(list.to_path_buf()),
                _ => InputError::ListUnreadable {
                    path: list.to_path_buf(),
                    source: e,
                },
            })?;
            let domains = parse_domain_list(&content);
            if domains.is_empty() {
                return Err(InputError::EmptyList(list.to_path_buf()));
            }
            info!("Loaded {} domain(s) from {}", domains.len(), list.display());
            Ok(domains)
        }
        (None, None) => Err(InputError::NoInput),
    }
}

/// Parses newline-delimited domains: trims each line, skips blank lines and
/// `#` comments, keeps file order.
pub fn parse_domain_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
