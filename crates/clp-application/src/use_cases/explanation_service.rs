//! Explanation Service Use Case
//!
//! Application service for explaining code. A request is validated (code
//! first, then language), the remote model is tried within a bounded
//! timeout, and any remote failure falls back to local pattern analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use clp_domain::constants::{MESSAGE_CODE_REQUIRED, REMOTE_TIMEOUT_SECS_DEFAULT};
use clp_domain::entities::CodeExplanation;
use clp_domain::error::{Error, Result};
use clp_domain::ports::RemoteExplanationProvider;
use clp_domain::value_objects::{ExplanationPrompt, SupportedLanguage};
use tracing::{debug, info, warn};

use crate::domain_services::CodeAnalyzer;
use crate::ports::services::{ExplanationRequest, ExplanationServiceInterface};

/// Explanation service implementation
pub struct ExplanationServiceImpl {
    analyzer: Arc<dyn CodeAnalyzer>,
    remote: Option<Arc<dyn RemoteExplanationProvider>>,
    remote_timeout: Duration,
}

impl ExplanationServiceImpl {
    /// Create new explanation service with injected dependencies
    pub fn new(
        analyzer: Arc<dyn CodeAnalyzer>,
        remote: Option<Arc<dyn RemoteExplanationProvider>>,
        remote_timeout: Duration,
    ) -> Self {
        Self {
            analyzer,
            remote,
            remote_timeout,
        }
    }

    /// Create a service that never contacts a remote model
    pub fn local_only(analyzer: Arc<dyn CodeAnalyzer>) -> Self {
        Self::new(
            analyzer,
            None,
            Duration::from_secs(REMOTE_TIMEOUT_SECS_DEFAULT),
        )
    }

    /// Ask the remote model, returning `None` on any failure
    async fn try_remote(&self, code: &str, language: SupportedLanguage) -> Option<String> {
        let remote = self.remote.as_ref()?;
        let provider = remote.provider_name();
        let prompt = ExplanationPrompt::new(code, language);

        match tokio::time::timeout(self.remote_timeout, remote.explain(&prompt)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
            Ok(Ok(_)) => {
                warn!(provider, "Remote model returned an empty explanation, using local analysis");
                None
            }
            Ok(Err(e)) => {
                warn!(provider, error = %e, "Remote explanation failed, using local analysis");
                None
            }
            Err(_) => {
                warn!(
                    provider,
                    timeout_ms = u64::try_from(self.remote_timeout.as_millis()).unwrap_or(u64::MAX),
                    "Remote explanation timed out, using local analysis"
                );
                None
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Reject missing or whitespace-only code
fn require_code(code: Option<String>) -> Result<String> {
    code.filter(|c| !c.trim().is_empty())
        .ok_or_else(|| Error::invalid_argument(MESSAGE_CODE_REQUIRED))
}

#[async_trait]
impl ExplanationServiceInterface for ExplanationServiceImpl {
    async fn explain(&self, request: ExplanationRequest) -> Result<CodeExplanation> {
        let code = require_code(request.code)?;
        let language = SupportedLanguage::validate(request.language.as_deref())?;

        let started = Instant::now();
        info!(
            language = language.id(),
            code_len = code.len(),
            "Explanation requested"
        );

        if request.offline {
            debug!("Remote model skipped for offline request");
        } else if let Some(text) = self.try_remote(&code, language).await {
            let explanation = CodeExplanation::from_remote(text, code, language, Utc::now());
            info!(
                source = %explanation.source,
                elapsed_ms = elapsed_ms(started),
                "Explanation completed"
            );
            return Ok(explanation);
        }

        let report = self.analyzer.analyze(&code, language)?;
        let explanation = CodeExplanation::from_report(&report, code, Utc::now());
        info!(
            source = %explanation.source,
            steps = report.step_count(),
            constructs = report.constructs.len(),
            elapsed_ms = elapsed_ms(started),
            "Explanation completed"
        );
        Ok(explanation)
    }

    fn remote_provider_name(&self) -> Option<String> {
        self.remote
            .as_ref()
            .map(|remote| remote.provider_name().to_string())
    }
}
