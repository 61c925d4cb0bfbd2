use std::sync::Arc;

use storage::repository::Storage;

use crate::ai::{GenerationClient, GenerationConfig, TextGenerator};
use crate::error::{AppServicesError, ConfigError};
use crate::sessions::SessionLoopService;
use crate::Clock;

/// Assembles app-facing services around one generation backend.
#[derive(Clone)]
pub struct AppServices {
    client: Option<Arc<GenerationClient>>,
    storage: Storage,
    session_loop: Arc<SessionLoopService>,
}

impl AppServices {
    /// Build services that talk to the configured chat-completion API and keep
    /// sessions in memory.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Config` if the HTTP client cannot be built.
    pub fn new(config: GenerationConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let client = Arc::new(GenerationClient::new(config)?);
        let generator: Arc<dyn TextGenerator> = client.clone();
        let mut services = Self::with_generator(generator, clock);
        services.client = Some(client);
        Ok(services)
    }

    /// Build services around any generator, e.g. a scripted one for demos and tests.
    #[must_use]
    pub fn with_generator(generator: Arc<dyn TextGenerator>, clock: Clock) -> Self {
        let storage = Storage::in_memory();
        let session_loop = Arc::new(SessionLoopService::new(
            clock,
            generator,
            Arc::clone(&storage.sessions),
        ));
        Self {
            client: None,
            storage,
            session_loop,
        }
    }

    /// Check the API key once at startup. Generators other than the HTTP client
    /// have nothing to verify.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CredentialRejected` if the provider refuses the key.
    pub async fn verify_credentials(&self) -> Result<(), ConfigError> {
        match &self.client {
            Some(client) => client.verify_credentials().await,
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }
}
