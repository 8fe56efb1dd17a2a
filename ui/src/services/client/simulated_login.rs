use async_trait::async_trait;
use gloo_timers::future::sleep;
use std::time::Duration;
use tracing::{info, instrument};

use crate::login::Credentials;
use crate::services::config::LoginConfig;
use crate::services::errors::LoginResult;

/// Anything that can accept or reject a set of credentials.
///
/// WASM-first: no `Send` bound, futures run on the browser event loop.
#[async_trait(?Send)]
pub trait LoginBackend {
    async fn login(&self, credentials: &Credentials) -> LoginResult<()>;
}

/// Resolves successfully after a fixed delay; never rejects.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Pick a delay inside the configured range from a uniform sample
    pub fn from_config(config: &LoginConfig, unit: f64) -> Self {
        Self::new(config.login_delay(unit))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait(?Send)]
impl LoginBackend for SimulatedBackend {
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    async fn login(&self, credentials: &Credentials) -> LoginResult<()> {
        sleep(self.delay).await;
        info!("Simulated login resolved");
        Ok(())
    }
}
