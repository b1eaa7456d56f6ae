use crate::error::DamError;
use crate::storage::config::DamConfig;
use crate::storage::schema::{Dialect, create_statements};
use log::LevelFilter;
use sqlx::ConnectOptions;
use sqlx::AnyPool;
use sqlx::any::{AnyConnectOptions, AnyPoolOptions, install_default_drivers};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// A connection pool bound to one connection string
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    url: String,
    dialect: Dialect,
    echo: bool,
    pool: AnyPool,
}

impl Engine {
    /// Opens a pool for `config.db`
    ///
    /// # Errors
    /// * [`DamError::Configuration`] when `db` is missing or the pool size is zero
    /// * [`DamError::InvalidInput`] for an unsupported scheme
    /// * [`DamError::Db`] when the store cannot be reached
    pub async fn connect(config: &DamConfig) -> Result<Self, DamError> {
        let url = config.database_url()?;
        let dialect = Dialect::from_url(url)?;
        if config.max_connections == 0 {
            return Err(DamError::Configuration(
                "max_connections must be greater than 0".to_string(),
            ));
        }

        let options = Self::connect_options(config)?;
        let in_memory = is_in_memory(options.database_url.as_str());

        info!(
            "Creating {} connection pool with max {} connections",
            dialect, config.max_connections
        );

        let mut pool_options = AnyPoolOptions::new().max_connections(config.max_connections);
        // An in-memory SQLite database lives only as long as one of its connections
        if in_memory {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }
        let pool = pool_options.connect_with(options).await?;

        info!("{} connection pool created successfully", dialect);
        Ok(Self {
            inner: Arc::new(EngineInner {
                url: url.to_string(),
                dialect,
                echo: config.echo,
                pool,
            }),
        })
    }

    /// Connect options the pool of `config.db` is opened with
    ///
    /// With `config.echo` every statement is logged at `INFO` on the
    /// `sqlx::query` target; otherwise statement logging is off. A
    /// `sqlite::memory:` connection string is turned into a uniquely named
    /// shared-cache database so every pooled connection sees the same tables.
    ///
    /// # Errors
    /// Same as [`Engine::connect`], except that no connection is attempted.
    pub fn connect_options(config: &DamConfig) -> Result<AnyConnectOptions, DamError> {
        let url = config.database_url()?;
        let dialect = Dialect::from_url(url)?;
        install_default_drivers();

        let url = match dialect {
            Dialect::Sqlite => shared_memory_url(url).unwrap_or_else(|| url.to_string()),
            Dialect::Postgres => url.to_string(),
        };
        let options = AnyConnectOptions::from_str(&url)?;
        Ok(if config.echo {
            options.log_statements(LevelFilter::Info)
        } else {
            options.disable_statement_logging()
        })
    }

    /// Creates the `fundamental`, `quotes` and `ticks` tables and their indexes
    /// when absent; existing tables are left untouched
    ///
    /// # Errors
    /// Returns [`DamError::Db`] when a statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DamError> {
        debug!("Ensuring {} schema", self.inner.dialect);
        for statement in create_statements(self.inner.dialect) {
            sqlx::query(&statement).execute(&self.inner.pool).await?;
        }
        Ok(())
    }

    /// The connection string this engine was built from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// SQL dialect of the store
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.inner.dialect
    }

    /// Whether statement echo is enabled
    #[must_use]
    pub fn echo(&self) -> bool {
        self.inner.echo
    }

    /// The underlying pool
    #[must_use]
    pub fn pool(&self) -> &AnyPool {
        &self.inner.pool
    }

    /// Whether both handles point at the same engine
    #[must_use]
    pub fn ptr_eq(&self, other: &Engine) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Closes every connection of the pool
    pub async fn close(&self) {
        self.inner.pool.close().await;
    }
}

static MEMORY_DB_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Rewrites `sqlite::memory:` to a named shared-cache database, keeping
/// any other query parameters
fn shared_memory_url(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let (database, params) = rest.split_once('?').unwrap_or((rest, ""));
    if database != ":memory:" {
        return None;
    }

    let seq = MEMORY_DB_SEQ.fetch_add(1, Ordering::Relaxed);
    let mut shared = format!("sqlite:file:sql-dam-memory-{seq}?mode=memory&cache=shared");
    for param in params.split('&').filter(|p| !p.is_empty()) {
        if !param.starts_with("mode=") && !param.starts_with("cache=") {
            shared.push('&');
            shared.push_str(param);
        }
    }
    debug!("Using shared in-memory database sql-dam-memory-{}", seq);
    Some(shared)
}

fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains("mode=memory")
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("dialect", &self.inner.dialect)
            .field("echo", &self.inner.echo)
            .field("pool_size", &self.inner.pool.size())
            .finish()
    }
}

/// Hands out one [`Engine`] per connection string
///
/// Build one registry per process and share it (`Arc<ConnectionRegistry>`)
/// between DAM instances. The first configuration seen for a connection string
/// decides the engine's echo flag and pool size; the schema is ensured once,
/// when the engine is built.
#[derive(Default)]
pub struct ConnectionRegistry {
    engines: Mutex<HashMap<String, Engine>>,
}

impl ConnectionRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine for `config.db`, building it on first use
    ///
    /// # Errors
    /// Same as [`Engine::connect`] and [`Engine::ensure_schema`].
    pub async fn engine(&self, config: &DamConfig) -> Result<Engine, DamError> {
        let url = config.database_url()?;
        let mut engines = self.engines.lock().await;
        if let Some(engine) = engines.get(url) {
            debug!("Reusing {} engine", engine.dialect());
            return Ok(engine.clone());
        }

        let engine = Engine::connect(config).await?;
        engine.ensure_schema().await?;
        engines.insert(url.to_string(), engine.clone());
        info!("Registered {} engine ({} total)", engine.dialect(), engines.len());
        Ok(engine)
    }

    /// Number of engines built so far
    pub async fn len(&self) -> usize {
        self.engines.lock().await.len()
    }

    /// Whether no engine has been built yet
    pub async fn is_empty(&self) -> bool {
        self.engines.lock().await.is_empty()
    }

    /// Whether an engine exists for `url`
    pub async fn contains(&self, url: &str) -> bool {
        self.engines.lock().await.contains_key(url.trim())
    }

    /// Closes and forgets every engine
    pub async fn close_all(&self) {
        let engines: Vec<Engine> = self.engines.lock().await.drain().map(|(_, e)| e).collect();
        for engine in engines {
            engine.close().await;
        }
    }
}
