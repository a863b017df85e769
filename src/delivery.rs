//! Delivery of rendered digests, one subscriber at a time.
//!
//! # Architecture
//!
//! - [`DeliveryChannel`]: Core trait, hands a rendered digest to a recipient
//! - [`SmtpChannel`]: Sends mail through an SMTP relay with `lettre`
//! - [`FileChannel`]: Writes each digest to an HTML file instead of sending it
//! - [`AnyChannel`]: Whichever of the two the command line selected
//! - [`deliver_all`]: Fan-out, render and deliver for every subscriber
//!
//! A subscriber whose digest has no sections is skipped, and a failed
//! delivery is recorded; neither stops the remaining subscribers. Nothing
//! is retried within a run.

use crate::aggregate::Aggregate;
use crate::config::MailConfig;
use crate::error::DeliveryError;
use crate::fanout::build_digest;
use crate::models::SubscriberPreference;
use crate::outputs::{DigestRenderer, RenderedDigest};
use crate::utils::file_stem_for;
use lettre::message::{header::ContentType, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info, instrument, warn};

/// Trait for handing a rendered digest to its recipient.
pub trait DeliveryChannel {
    async fn deliver(&self, recipient: &str, digest: &RenderedDigest) -> Result<(), DeliveryError>;
}

/// [`DeliveryChannel`] that sends HTML mail over SMTP with STARTTLS.
pub struct SmtpChannel {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpChannel {
    /// Build a channel for the relay in `mail`, logging in as `user`.
    pub fn new(mail: &MailConfig, user: String, password: String) -> Result<Self, DeliveryError> {
        let from: Mailbox = mail.sender.parse()?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&mail.server)?
            .port(mail.port)
            .credentials(Credentials::new(user, password))
            .build();
        Ok(Self { mailer, from })
    }
}

impl DeliveryChannel for SmtpChannel {
    #[instrument(level = "info", skip(self, digest))]
    async fn deliver(&self, recipient: &str, digest: &RenderedDigest) -> Result<(), DeliveryError> {
        let to: Mailbox = recipient.parse()?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(digest.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(digest.html.clone())?;

        self.mailer.send(message).await?;
        Ok(())
    }
}

/// [`DeliveryChannel`] that writes `<dir>/<recipient>.html` files.
///
/// Files left by earlier runs are overwritten, but a path is written at most
/// once per channel: a second recipient that maps to the same file name is
/// refused rather than replacing the first digest.
#[derive(Debug)]
pub struct FileChannel {
    dir: PathBuf,
    written: Mutex<HashSet<PathBuf>>,
}

impl FileChannel {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Mutex::new(HashSet::new()),
        }
    }

    /// Where the digest for `recipient` ends up.
    pub fn path_for(&self, recipient: &str) -> PathBuf {
        self.dir.join(format!("{}.html", file_stem_for(recipient)))
    }
}

impl DeliveryChannel for FileChannel {
    #[instrument(level = "info", skip(self, digest))]
    async fn deliver(&self, recipient: &str, digest: &RenderedDigest) -> Result<(), DeliveryError> {
        let path = self.path_for(recipient);
        {
            let mut written = self.written.lock().unwrap_or_else(|e| e.into_inner());
            if !written.insert(path.clone()) {
                return Err(DeliveryError::PathTaken(path));
            }
        }
        tokio::fs::write(&path, &digest.html).await?;
        info!(path = %path.display(), "Wrote digest");
        Ok(())
    }
}

/// The channel chosen at startup.
pub enum AnyChannel {
    Smtp(SmtpChannel),
    File(FileChannel),
}

impl DeliveryChannel for AnyChannel {
    async fn deliver(&self, recipient: &str, digest: &RenderedDigest) -> Result<(), DeliveryError> {
        match self {
            AnyChannel::Smtp(channel) => channel.deliver(recipient, digest).await,
            AnyChannel::File(channel) => channel.deliver(recipient, digest).await,
        }
    }
}

/// Outcome of one delivery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    /// Subscribers whose digest had no sections.
    pub skipped: usize,
    /// `(subscriber_id, error message)` for each failed delivery.
    pub failed: Vec<(String, String)>,
}

/// Build, render and deliver a digest for every subscriber.
#[instrument(level = "info", skip_all, fields(subscribers = preferences.len()))]
pub async fn deliver_all<R, C>(
    preferences: &[SubscriberPreference],
    aggregate: &Aggregate,
    renderer: &R,
    channel: &C,
) -> DeliveryReport
where
    R: DigestRenderer,
    C: DeliveryChannel,
{
    let mut report = DeliveryReport::default();

    for preference in preferences {
        let digest = build_digest(preference, aggregate);
        if digest.is_empty() {
            warn!(
                subscriber = %digest.subscriber_id,
                "None of the requested sites had headlines; delivery skipped"
            );
            report.skipped += 1;
            continue;
        }

        let rendered = renderer.render(&digest);
        match channel.deliver(&digest.email, &rendered).await {
            Ok(()) => {
                info!(
                    subscriber = %digest.subscriber_id,
                    sections = digest.sections.len(),
                    "Digest delivered"
                );
                report.sent += 1;
            }
            Err(e) => {
                error!(subscriber = %digest.subscriber_id, error = %e, "Digest delivery failed");
                report.failed.push((digest.subscriber_id, e.to_string()));
            }
        }
    }

    info!(
        sent = report.sent,
        skipped = report.skipped,
        failed = report.failed.len(),
        "Delivery finished"
    );
    report
}
