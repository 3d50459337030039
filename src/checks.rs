//! Value format checks for environment variables.
//!
//! Each check is a pure function from a raw value to pass/fail. Failures
//! carry a technical message and a user-facing suggestion so reports can
//! show both.
//!
//! # Doc Audit
//! - audited: 2026-08-12
//! - docs: reference/checks.md
//! - ignore: false

use once_cell::sync::Lazy;
use regex::Regex;

static GITHUB_CLASSIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ghp_[A-Za-z0-9]{36}$").expect("Invalid regex pattern"));

static GITHUB_FINE_GRAINED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^github_pat_[A-Za-z0-9_]{82}$").expect("Invalid regex pattern"));

static DOCKER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^dckr_pat_[A-Za-z0-9_-]{30,}$").expect("Invalid regex pattern"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid regex pattern")
});

static HOSTNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("Invalid regex pattern")
});

// Charset and alphanumeric-ends rules; length is checked separately for a
// clearer failure message.
static AWS_BUCKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9.-]*[a-z0-9]$").expect("Invalid regex pattern"));

static GCS_BUCKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9._-]*[a-z0-9]$").expect("Invalid regex pattern"));

static AZURE_ACCOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]{3,24}$").expect("Invalid regex pattern"));

static IP_SHAPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("Invalid regex pattern"));

/// Structured failure from a value check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// Technical description of what failed.
    pub message: String,
    /// Actionable suggestion shown to the user.
    pub user_message: String,
}

impl CheckFailure {
    pub fn new(message: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user_message: user_message.into(),
        }
    }
}

/// The closed set of value checks catalog entries can reference.
///
/// Checks are looked up by registry name via [`ValueCheck::parse`]; an
/// unknown name resolves to `None`, which callers treat as "no check".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCheck {
    GithubToken,
    DockerToken,
    Email,
    Url,
    AwsBucket,
    GcsBucket,
    AzureStorageAccount,
    Hostname,
    FilePath,
}

impl ValueCheck {
    pub const ALL: [ValueCheck; 9] = [
        ValueCheck::GithubToken,
        ValueCheck::DockerToken,
        ValueCheck::Email,
        ValueCheck::Url,
        ValueCheck::AwsBucket,
        ValueCheck::GcsBucket,
        ValueCheck::AzureStorageAccount,
        ValueCheck::Hostname,
        ValueCheck::FilePath,
    ];

    /// Registry name for this check, as referenced by catalog entries.
    pub fn name(&self) -> &'static str {
        match self {
            ValueCheck::GithubToken => "github_token",
            ValueCheck::DockerToken => "docker_token",
            ValueCheck::Email => "email",
            ValueCheck::Url => "url",
            ValueCheck::AwsBucket => "aws_bucket",
            ValueCheck::GcsBucket => "gcs_bucket",
            ValueCheck::AzureStorageAccount => "azure_storage_account",
            ValueCheck::Hostname => "hostname",
            ValueCheck::FilePath => "file_path",
        }
    }

    /// Look up a check by registry name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|check| check.name() == name)
    }

    /// Run the check against a raw value.
    pub fn run(&self, value: &str) -> Result<(), CheckFailure> {
        match self {
            ValueCheck::GithubToken => check_github_token(value),
            ValueCheck::DockerToken => check_docker_token(value),
            ValueCheck::Email => check_email(value),
            ValueCheck::Url => check_url(value),
            ValueCheck::AwsBucket => check_aws_bucket(value),
            ValueCheck::GcsBucket => check_gcs_bucket(value),
            ValueCheck::AzureStorageAccount => check_azure_storage_account(value),
            ValueCheck::Hostname => check_hostname(value),
            ValueCheck::FilePath => check_file_path(value),
        }
    }
}

/// Classic (`ghp_` + 36 alphanumerics) or fine-grained
/// (`github_pat_` + 82 word characters) GitHub token.
fn check_github_token(value: &str) -> Result<(), CheckFailure> {
    if GITHUB_CLASSIC.is_match(value) || GITHUB_FINE_GRAINED.is_match(value) {
        Ok(())
    } else {
        Err(CheckFailure::new(
            "value does not match a known GitHub token format (ghp_* or github_pat_*)",
            "Generate a token at https://github.com/settings/tokens with repo scope",
        ))
    }
}

/// Docker Hub access token: `dckr_pat_` + at least 30 word/hyphen characters.
fn check_docker_token(value: &str) -> Result<(), CheckFailure> {
    if DOCKER_TOKEN.is_match(value) {
        Ok(())
    } else {
        Err(CheckFailure::new(
            "value is not a Docker Hub access token (expected dckr_pat_ prefix)",
            "Create an access token at https://hub.docker.com/settings/security",
        ))
    }
}

fn check_email(value: &str) -> Result<(), CheckFailure> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(CheckFailure::new(
            "value is not a valid email address",
            "Use an address of the form name@example.com",
        ))
    }
}

/// http(s) URL with a non-empty host.
fn check_url(value: &str) -> Result<(), CheckFailure> {
    let parsed = match url::Url::parse(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Err(CheckFailure::new(
                format!("value is not a valid URL: {}", e),
                "Use a full URL like https://hooks.example.com/path",
            ))
        }
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(CheckFailure::new(
            format!("URL scheme must be http or https, got {}", parsed.scheme()),
            "Use an http:// or https:// URL",
        ));
    }

    if parsed.host_str().map_or(true, |host| host.is_empty()) {
        return Err(CheckFailure::new(
            "URL has no host",
            "Use a full URL like https://hooks.example.com/path",
        ));
    }

    Ok(())
}

/// S3 bucket naming rules: 3-63 chars, lowercase alphanumeric/dot/hyphen,
/// alphanumeric at both ends, no `..` or `--`, not shaped like an IP.
fn check_aws_bucket(value: &str) -> Result<(), CheckFailure> {
    if value.len() < 3 || value.len() > 63 {
        return Err(CheckFailure::new(
            format!("bucket name must be 3-63 characters, got {}", value.len()),
            "Pick a bucket name between 3 and 63 characters",
        ));
    }

    if !AWS_BUCKET.is_match(value) {
        return Err(CheckFailure::new(
            "bucket name must use lowercase letters, digits, dots, and hyphens, \
             and start and end with a letter or digit",
            "Rename the bucket to follow the S3 naming rules",
        ));
    }

    if value.contains("..") || value.contains("--") {
        return Err(CheckFailure::new(
            "bucket name must not contain consecutive dots or hyphens",
            "Rename the bucket to follow the S3 naming rules",
        ));
    }

    if IP_SHAPED.is_match(value) {
        return Err(CheckFailure::new(
            "bucket name must not be formatted like an IP address",
            "Rename the bucket to follow the S3 naming rules",
        ));
    }

    Ok(())
}

/// GCS bucket naming rules: 3-63 chars, lowercase alphanumeric with
/// dot/hyphen/underscore, alphanumeric at both ends.
fn check_gcs_bucket(value: &str) -> Result<(), CheckFailure> {
    if value.len() < 3 || value.len() > 63 {
        return Err(CheckFailure::new(
            format!("bucket name must be 3-63 characters, got {}", value.len()),
            "Pick a bucket name between 3 and 63 characters",
        ));
    }

    if !GCS_BUCKET.is_match(value) {
        return Err(CheckFailure::new(
            "bucket name must use lowercase letters, digits, dots, hyphens, and \
             underscores, and start and end with a letter or digit",
            "Rename the bucket to follow the GCS naming rules",
        ));
    }

    Ok(())
}

/// Azure storage account: exactly 3-24 lowercase alphanumerics, no separators.
fn check_azure_storage_account(value: &str) -> Result<(), CheckFailure> {
    if AZURE_ACCOUNT.is_match(value) {
        Ok(())
    } else {
        Err(CheckFailure::new(
            "storage account name must be 3-24 lowercase letters and digits",
            "Rename the account to 3-24 lowercase letters and digits",
        ))
    }
}

fn check_hostname(value: &str) -> Result<(), CheckFailure> {
    if HOSTNAME.is_match(value) {
        Ok(())
    } else {
        Err(CheckFailure::new(
            "value is not a valid hostname",
            "Use a hostname like registry.example.com",
        ))
    }
}

/// Path (with `~` expansion) to an existing, accessible filesystem entry.
fn check_file_path(value: &str) -> Result<(), CheckFailure> {
    let expanded = shellexpand::tilde(value);
    match std::fs::metadata(expanded.as_ref()) {
        Ok(_) => Ok(()),
        Err(e) => Err(CheckFailure::new(
            format!("path is not accessible: {}", e),
            "Create the file or point the variable at an existing path",
        )),
    }
}
