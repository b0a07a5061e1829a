//! Service logger facade
//!
//! Turns three plain strings (level, service, env) into a fully configured
//! JSON logger and hands out module-scoped children of it.
//!
//! Conventions are fixed: one JSON object per line on stdout, `ts` in RFC 3339,
//! `level`/`msg`/`caller` keys, caller capture on every record and a stack
//! trace on records at `error` and above. Every record carries `service` and
//! `env`; loggers from [`module_logger`] add `module`.
//!
//! # Example
//!
//! ```no_run
//! service_logger::init("debug", "orders-api", "prod")?;
//!
//! let log = service_logger::module_logger("http");
//! log.info("listening");
//!
//! service_logger::sync()?;
//! # Ok::<(), service_logger::LoggerError>(())
//! ```
//!
//! `init` is a startup-time call. Concurrent calls to it are not a supported
//! race: each one replaces the logger wholesale and the last one wins.

use crate::core::{
    global, EncoderConfig, JsonEncoder, LogCore, LogLevel, Logger, Result, Sink,
};
use crate::sinks::StdoutSink;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

pub const DEFAULT_LEVEL: &str = "info";
pub const DEFAULT_SERVICE: &str = "unknown-service";
pub const DEFAULT_ENV: &str = "dev";

/// Environment variable consulted when no explicit level is given
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

pub const SERVICE_KEY: &str = "service";
pub const ENV_KEY: &str = "env";
pub const MODULE_KEY: &str = "module";

/// Builds a fresh sink for each initialization
pub type SinkFactory = Arc<dyn Fn() -> Box<dyn Sink> + Send + Sync>;

/// Resolved `(service, env)` pair every record is tagged with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIdentity {
    pub service: String,
    pub env: String,
}

impl ServiceIdentity {
    /// Blank (or whitespace-only) values fall back to the defaults. Anything
    /// else is kept exactly as given.
    pub fn resolve(service: &str, env: &str) -> Self {
        Self {
            service: or_default(service, DEFAULT_SERVICE),
            env: or_default(env, DEFAULT_ENV),
        }
    }
}

impl Default for ServiceIdentity {
    fn default() -> Self {
        Self::resolve("", "")
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Pick the effective level: explicit argument, then `fallback` (the
/// environment variable's value), then [`DEFAULT_LEVEL`]
///
/// Each candidate is trimmed and skipped when empty. The winner is
/// lower-cased and parsed; an unknown name is an error, never replaced.
pub fn resolve_level(explicit: &str, fallback: Option<&str>) -> Result<LogLevel> {
    let explicit = explicit.trim();
    let chosen = if !explicit.is_empty() {
        explicit
    } else {
        match fallback.map(str::trim) {
            Some(env) if !env.is_empty() => env,
            _ => DEFAULT_LEVEL,
        }
    };
    chosen.to_lowercase().parse()
}

/// Facade settings as they appear in an application's config file
///
/// Missing keys deserialize as empty strings and take the usual fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    pub level: String,
    pub service: String,
    pub env: String,
}

struct Installed {
    logger: Logger,
    identity: ServiceIdentity,
}

/// A built but not yet installed logger pair
struct Candidate {
    base: Logger,
    installed: Installed,
}

/// Owner of one facade logger
///
/// The process-wide functions in this module ([`init`], [`module_logger`],
/// [`sync`]) use a single instance bound to stdout and [`LEVEL_ENV_VAR`].
/// Separate instances are useful for embedding and tests.
pub struct LoggerFacade {
    state: RwLock<Option<Installed>>,
    sink_factory: SinkFactory,
    level_var: String,
    install_global: bool,
}

impl LoggerFacade {
    /// Stdout sink, `LOG_LEVEL` fallback, replaces the engine's ambient logger
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerFacadeBuilder {
        LoggerFacadeBuilder::new()
    }

    /// Configure the facade logger, replacing any previous one
    ///
    /// Fails only with [`LoggerError::InvalidLevel`](crate::LoggerError::InvalidLevel),
    /// in which case the previous logger stays in place.
    pub fn init(&self, level: &str, service: &str, env: &str) -> Result<()> {
        let fallback = std::env::var(&self.level_var).ok();
        let level = resolve_level(level, fallback.as_deref())?;
        let identity = ServiceIdentity::resolve(service, env);

        let candidate = self.build(level, identity);
        let previous = self.state.write().replace(self.publish(candidate));
        drop(previous);
        Ok(())
    }

    pub fn init_from(&self, config: &FacadeConfig) -> Result<()> {
        self.init(&config.level, &config.service, &config.env)
    }

    /// Child of the facade logger carrying `module = <module>`
    ///
    /// `module` is used verbatim, empty strings included. Initializes with the
    /// defaults first if nothing has been installed yet.
    pub fn module_logger(&self, module: &str) -> Logger {
        self.ensure_initialized().with(MODULE_KEY, module)
    }

    /// The installed logger, installing the default one if there is none
    ///
    /// Racing first callers may each build a candidate; exactly one is
    /// installed and all of them get that one back.
    pub fn ensure_initialized(&self) -> Logger {
        if let Some(installed) = self.state.read().as_ref() {
            return installed.logger.clone();
        }

        let level: LogLevel = DEFAULT_LEVEL
            .parse()
            .unwrap_or_else(|e| panic!("default log level {:?} must parse: {}", DEFAULT_LEVEL, e));
        let candidate = self.build(level, ServiceIdentity::default());

        let mut state = self.state.write();
        if let Some(installed) = state.as_ref() {
            return installed.logger.clone();
        }
        let installed = state.insert(self.publish(candidate));
        installed.logger.clone()
    }

    /// Build the base and tagged loggers; runs the sink factory, so no lock is held
    fn build(&self, level: LogLevel, identity: ServiceIdentity) -> Candidate {
        let core = LogCore::from_boxed(
            JsonEncoder::new(EncoderConfig::production()),
            (self.sink_factory)(),
            level,
        );
        let base = Logger::builder(core)
            .add_caller(true)
            .stacktrace_at(LogLevel::Error)
            .build();
        let logger = base
            .with(SERVICE_KEY, identity.service.as_str())
            .with(ENV_KEY, identity.env.as_str());

        Candidate {
            base,
            installed: Installed { logger, identity },
        }
    }

    /// Called with the state lock held, right before the candidate is stored
    fn publish(&self, candidate: Candidate) -> Installed {
        if self.install_global {
            global::replace_global(candidate.base);
        }
        candidate.installed
    }

    /// Flush buffered records
    ///
    /// A no-op before initialization. A broken pipe (the reader of stdout went
    /// away) counts as success; any other failure is returned unchanged.
    pub fn sync(&self) -> Result<()> {
        let Some(logger) = self.logger() else {
            return Ok(());
        };
        match logger.sync() {
            Err(e) if e.is_broken_pipe() => Ok(()),
            other => other,
        }
    }

    /// The installed logger, without `module`
    pub fn logger(&self) -> Option<Logger> {
        self.state.read().as_ref().map(|i| i.logger.clone())
    }

    pub fn identity(&self) -> Option<ServiceIdentity> {
        self.state.read().as_ref().map(|i| i.identity.clone())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().is_some()
    }
}

impl Default for LoggerFacade {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`LoggerFacade`]
///
/// # Example
///
/// ```
/// use service_logger::facade::LoggerFacade;
/// use service_logger::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let handle = sink.clone();
/// let facade = LoggerFacade::builder()
///     .sink_factory(move || Box::new(handle.clone()))
///     .level_var("BILLING_LOG_LEVEL")
///     .install_global(false)
///     .build();
///
/// facade.init("info", "billing", "stage")?;
/// facade.module_logger("invoices").info("issued");
///
/// assert_eq!(sink.records()[0]["module"], "invoices");
/// # Ok::<(), service_logger::LoggerError>(())
/// ```
pub struct LoggerFacadeBuilder {
    sink_factory: SinkFactory,
    level_var: String,
    install_global: bool,
}

impl LoggerFacadeBuilder {
    fn new() -> Self {
        Self {
            sink_factory: Arc::new(|| -> Box<dyn Sink> { Box::new(StdoutSink::new()) }),
            level_var: LEVEL_ENV_VAR.to_string(),
            install_global: true,
        }
    }

    /// Where records go; called once per initialization
    #[must_use = "builder methods return a new value"]
    pub fn sink_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Sink> + Send + Sync + 'static,
    {
        self.sink_factory = Arc::new(factory);
        self
    }

    /// Environment variable holding the fallback level
    #[must_use = "builder methods return a new value"]
    pub fn level_var(mut self, name: impl Into<String>) -> Self {
        self.level_var = name.into();
        self
    }

    /// Whether initialization also replaces the engine's ambient logger
    #[must_use = "builder methods return a new value"]
    pub fn install_global(mut self, enabled: bool) -> Self {
        self.install_global = enabled;
        self
    }

    pub fn build(self) -> LoggerFacade {
        LoggerFacade {
            state: RwLock::new(None),
            sink_factory: self.sink_factory,
            level_var: self.level_var,
            install_global: self.install_global,
        }
    }
}

fn process_facade() -> &'static LoggerFacade {
    static FACADE: OnceLock<LoggerFacade> = OnceLock::new();
    FACADE.get_or_init(LoggerFacade::new)
}

/// Initialize the process-wide logger. See [`LoggerFacade::init`].
pub fn init(level: &str, service: &str, env: &str) -> Result<()> {
    process_facade().init(level, service, env)
}

/// See [`LoggerFacade::init_from`].
pub fn init_from(config: &FacadeConfig) -> Result<()> {
    process_facade().init_from(config)
}

/// Module-scoped child of the process-wide logger. See [`LoggerFacade::module_logger`].
pub fn module_logger(module: &str) -> Logger {
    process_facade().module_logger(module)
}

/// Flush the process-wide logger. See [`LoggerFacade::sync`].
pub fn sync() -> Result<()> {
    process_facade().sync()
}

pub fn identity() -> Option<ServiceIdentity> {
    process_facade().identity()
}
