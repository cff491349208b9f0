//! HTTP server configuration: settings loaded via OrthoConfig and the
//! builder-style object the server is constructed from.

use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use westbook::domain::BudgetPolicy;
use westbook::outbound::memory::InMemoryDirectory;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Settings controlling the listener, data seeding and search budgeting.
///
/// Every field can be set through `WESTBOOK_*` environment variables, a
/// configuration file, or command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WESTBOOK")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind; defaults to 8080.
    pub port: Option<u16>,
    /// JSON seed document loaded into the in-memory directory at startup.
    pub seed_path: Option<PathBuf>,
    /// Cap combined search results at `maxResults` instead of bounding the
    /// user and page parts separately.
    #[ortho_config(default = false)]
    pub shared_search_budget: bool,
}

impl ServerSettings {
    /// Load settings from `args`, the environment and configuration files.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when any source fails to parse.
    pub fn from_args<I, T>(args: I) -> std::io::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|e| {
            std::io::Error::other(format!("failed to load server settings: {e}"))
        })
    }

    /// Socket address assembled from the host and port, with defaults.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Seed document path, if one was configured.
    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }

    /// How federated search spends `maxResults`.
    pub fn budget_policy(&self) -> BudgetPolicy {
        BudgetPolicy::from_shared_flag(self.shared_search_budget)
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: Arc<InMemoryDirectory>,
    pub(crate) budget_policy: BudgetPolicy,
}

impl ServerConfig {
    /// Construct a configuration serving an empty directory.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            directory: Arc::new(InMemoryDirectory::new()),
            budget_policy: BudgetPolicy::default(),
        }
    }

    /// Serve the given directory instead of an empty one.
    #[must_use]
    pub fn with_directory(mut self, directory: Arc<InMemoryDirectory>) -> Self {
        self.directory = directory;
        self
    }

    /// Override the federated search budget policy.
    #[must_use]
    pub fn with_budget_policy(mut self, policy: BudgetPolicy) -> Self {
        self.budget_policy = policy;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Read by tests to inspect the listener")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
