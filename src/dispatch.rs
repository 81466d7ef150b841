//! Appointment dispatch collaborator and its configuration
//!
//! The engine never talks to the mail service directly; it hands a fully
//! built request to an [`AppointmentDispatcher`] and only consumes the
//! success or failure signal. Configuration tokens are injected at process
//! start and construction fails fast when one is absent; there are no
//! embedded fallback values.

use std::env;

use log::info;
use thiserror::Error;

use crate::appointment::AppointmentRequest;

/// Environment variable carrying the mail service identifier
pub const SERVICE_ID_VAR: &str = "INTAKE_SERVICE_ID";
/// Environment variable carrying the mail template identifier
pub const TEMPLATE_ID_VAR: &str = "INTAKE_TEMPLATE_ID";
/// Environment variable carrying the mail service public key
pub const PUBLIC_KEY_VAR: &str = "INTAKE_PUBLIC_KEY";

/// A required configuration token is absent or blank
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required configuration token {0}")]
pub struct ConfigError(pub &'static str);

/// The three tokens identifying the external mail service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl DispatchConfig {
    /// Build from explicit tokens, rejecting blank values
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        };
        if config.service_id.trim().is_empty() {
            return Err(ConfigError(SERVICE_ID_VAR));
        }
        if config.template_id.trim().is_empty() {
            return Err(ConfigError(TEMPLATE_ID_VAR));
        }
        if config.public_key.trim().is_empty() {
            return Err(ConfigError(PUBLIC_KEY_VAR));
        }
        Ok(config)
    }

    /// Read the tokens from the environment at process start
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            env::var(SERVICE_ID_VAR).unwrap_or_default(),
            env::var(TEMPLATE_ID_VAR).unwrap_or_default(),
            env::var(PUBLIC_KEY_VAR).unwrap_or_default(),
        )
    }
}

/// The dispatch collaborator rejected or failed to deliver a request
///
/// The raw text is surfaced to the client verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct DispatchError(pub String);

/// Confirmation of a dispatched appointment request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub reference: String,
}

/// External delivery of an appointment request
///
/// One-shot: the caller awaits the signal only to drive its own
/// success/failure indicator. No retry or queuing happens here.
pub trait AppointmentDispatcher {
    fn dispatch(&self, request: &AppointmentRequest) -> Result<DispatchReceipt, DispatchError>;
}

/// Dispatcher that records the payload through the log instead of sending
///
/// Used by local runs and tests; the delivery path to the real mail service
/// lives outside this crate.
#[derive(Debug, Clone)]
pub struct LoggingDispatcher {
    config: DispatchConfig,
}

impl LoggingDispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }
}

impl AppointmentDispatcher for LoggingDispatcher {
    fn dispatch(&self, request: &AppointmentRequest) -> Result<DispatchReceipt, DispatchError> {
        let payload = serde_json::to_string(request)
            .map_err(|err| DispatchError(format!("could not serialize request: {}", err)))?;
        info!(
            "dispatching appointment via service {} template {}: {}",
            self.config.service_id, self.config.template_id, payload
        );
        Ok(DispatchReceipt {
            reference: format!("{}:{}", self.config.template_id, request.email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_blank_tokens() {
        assert_eq!(
            DispatchConfig::new("", "tpl", "key"),
            Err(ConfigError(SERVICE_ID_VAR))
        );
        assert_eq!(
            DispatchConfig::new("svc", "  ", "key"),
            Err(ConfigError(TEMPLATE_ID_VAR))
        );
        assert_eq!(
            DispatchConfig::new("svc", "tpl", ""),
            Err(ConfigError(PUBLIC_KEY_VAR))
        );
        assert!(DispatchConfig::new("svc", "tpl", "key").is_ok());
    }

    #[test]
    fn test_from_env_fails_fast_when_unset() {
        env::remove_var(SERVICE_ID_VAR);
        env::remove_var(TEMPLATE_ID_VAR);
        env::remove_var(PUBLIC_KEY_VAR);

        assert_eq!(DispatchConfig::from_env(), Err(ConfigError(SERVICE_ID_VAR)));
    }
}
