//! Async wrapper around [`FormulaCardzSdk`] for use in async runtimes.
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking reqwest client does its work.
//!
//! Selection changes in a UI can leave a fetch for the previous selection in
//! flight. The engine recomputes everything from its inputs on each call, so
//! the intended pattern is last-write-wins on selection identity: tag each
//! request with the selection it belongs to and drop responses whose tag no
//! longer matches. Nothing here needs cancelling.
//!
//! # Example
//!
//! ```no_run
//! # use formula_cardz_sdk::AsyncFormulaCardzSdk;
//! # async fn example() -> formula_cardz_sdk::Result<()> {
//! let sdk = AsyncFormulaCardzSdk::builder().build().await?;
//!
//! // Run any sync SDK method via closure
//! let battles = sdk.run(|s| s.battles().active()).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{FormulaCardzError, Result};
use crate::{config, FormulaCardzSdk};

// ---------------------------------------------------------------------------
// AsyncFormulaCardzSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncFormulaCardzSdk`].
pub struct AsyncFormulaCardzSdkBuilder {
    base_url: String,
    timeout: Duration,
    auth_token: Option<String>,
}

impl Default for AsyncFormulaCardzSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            auth_token: None,
        }
    }
}

impl AsyncFormulaCardzSdkBuilder {
    /// Point the SDK at a different API deployment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bearer token attached to every request.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Build the async SDK. Construction runs on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncFormulaCardzSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = FormulaCardzSdk::builder()
                .base_url(self.base_url)
                .timeout(self.timeout);
            if let Some(token) = self.auth_token {
                builder = builder.auth_token(token);
            }
            let sdk = builder.build()?;
            Ok(AsyncFormulaCardzSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| FormulaCardzError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncFormulaCardzSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`FormulaCardzSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]; the underlying SDK is shared behind a
/// [`Mutex`].
pub struct AsyncFormulaCardzSdk {
    inner: Arc<Mutex<FormulaCardzSdk>>,
}

impl AsyncFormulaCardzSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncFormulaCardzSdkBuilder {
        AsyncFormulaCardzSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&FormulaCardzSdk` reference and should return
    /// a `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use formula_cardz_sdk::AsyncFormulaCardzSdk;
    /// # async fn example() -> formula_cardz_sdk::Result<()> {
    /// # let sdk = AsyncFormulaCardzSdk::builder().build().await?;
    /// let drops = sdk.run(|s| s.drops().all()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&FormulaCardzSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| FormulaCardzError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| FormulaCardzError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Replace the bearer token, e.g. after a login or refresh.
    pub async fn set_auth_token(&self, token: Option<String>) -> Result<()> {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| FormulaCardzError::InvalidArgument("SDK lock poisoned".into()))?;
            guard.set_auth_token(token);
            Ok(())
        })
        .await
        .map_err(|e| FormulaCardzError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
