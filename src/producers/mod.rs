//! Finding producers: one per assessment category.
//!
//! The built-in producers report from fixed observation tables and never touch
//! the network. A real probe replaces a producer's body while keeping the
//! `FindingProducer` contract, so the orchestrator is unaffected.

pub mod port;
pub mod tls;
pub mod web;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use crate::errors::ScanboardError;
use crate::models::{Finding, FindingCategory, Severity};

pub use port::PortProducer;
pub use tls::TlsProducer;
pub use web::WebProducer;

#[async_trait]
pub trait FindingProducer: Send + Sync {
    /// Category this producer covers
    fn category(&self) -> FindingCategory;

    /// Producer name for logging
    fn name(&self) -> &str;

    /// Assess `target`, a validated hostname or IP address.
    async fn produce(&self, target: &str) -> Result<Vec<Finding>, ScanboardError>;
}

/// The `info` finding recorded in place of a producer's output when it fails.
pub fn failure_finding(category: FindingCategory, error: &ScanboardError) -> Finding {
    let (title, description, recommendation) = match category {
        FindingCategory::Port => (
            "Scan Error",
            format!("Error during port scan: {}", error),
            "Check network connectivity and target availability",
        ),
        FindingCategory::Web => (
            "Scan Error",
            format!("Error during web server scan: {}", error),
            "Verify web server is running and accessible",
        ),
        FindingCategory::Tls => (
            "SSL Check Error",
            format!("Error during SSL check: {}", error),
            "Verify HTTPS is configured on target",
        ),
    };
    Finding::new(Severity::Info, title, description, recommendation)
}

/// Runs one producer. Never fails: an error becomes a single `info` finding.
pub async fn run_producer(producer: &dyn FindingProducer, target: &str) -> Vec<Finding> {
    match producer.produce(target).await {
        Ok(findings) => findings,
        Err(e) => {
            warn!(producer = producer.name(), host = %target, error = %e, "Producer failed, recording error finding");
            vec![failure_finding(producer.category(), &e)]
        }
    }
}

/// Ordered set of producers, looked up by category.
#[derive(Clone, Default)]
pub struct ProducerRegistry {
    producers: Vec<Arc<dyn FindingProducer>>,
}

impl ProducerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Port, web and TLS producers backed by the built-in tables.
    pub fn builtin() -> Self {
        Self::new()
            .with(PortProducer)
            .with(WebProducer)
            .with(TlsProducer)
    }

    pub fn with(mut self, producer: impl FindingProducer + 'static) -> Self {
        self.register(Arc::new(producer));
        self
    }

    pub fn register(&mut self, producer: Arc<dyn FindingProducer>) {
        self.producers.push(producer);
    }

    pub fn for_category(&self, category: FindingCategory) -> impl Iterator<Item = &Arc<dyn FindingProducer>> {
        self.producers.iter().filter(move |p| p.category() == category)
    }

    /// Runs every producer of each category in turn and concatenates the
    /// findings in invocation order.
    pub async fn collect(&self, target: &str, categories: &[FindingCategory]) -> Vec<Finding> {
        let mut findings = Vec::new();
        for &category in categories {
            for producer in self.for_category(category) {
                findings.extend(run_producer(producer.as_ref(), target).await);
            }
        }
        findings
    }
}
