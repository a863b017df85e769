//! Error types for the three seams that talk to the outside world.
//!
//! None of these abort a run on their own: a [`FetchError`] turns into an
//! empty site, a [`DeliveryError`] into a per-subscriber failure notice.
//! Only a [`ConfigError`] at startup stops the program.

use thiserror::Error;

/// A front page could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (DNS, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// A rendered digest could not be handed to its recipient.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Sender or recipient is not a valid mailbox
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("message build error: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP exchange failed
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Another recipient's digest already went to this file
    #[error("{} already holds another digest", .0.display())]
    PathTaken(std::path::PathBuf),

    /// Writing the digest to disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The configuration file is unreadable or inconsistent.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
