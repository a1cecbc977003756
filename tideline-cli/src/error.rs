//! Error types emitted by the Tideline CLI.

use std::net::SocketAddr;
use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tideline_core::ConditionsError;
use tideline_data::ProviderBuildError;

/// Errors emitted by the Tideline CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// An option holds a value the command cannot use.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
    /// Two options were set that cannot be combined.
    #[error("--{first} cannot be combined with --{second}")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },
    /// Opening the conditions file failed.
    #[error("failed to open conditions file at {path:?}: {source}")]
    OpenConditions {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Conditions JSON could not be decoded.
    #[error("failed to parse conditions JSON at {path:?}: {source}")]
    ParseConditions {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the live conditions provider failed.
    #[error("failed to build live conditions provider: {0}")]
    BuildProvider(#[source] ProviderBuildError),
    /// No provider could supply conditions.
    #[error("failed to obtain conditions for {location:?}: {source}")]
    Conditions {
        location: String,
        #[source]
        source: ConditionsError,
    },
    /// Serialising the report failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// The server runtime could not be started.
    #[error("failed to start server runtime: {0}")]
    BuildRuntime(#[source] std::io::Error),
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    BindServer {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
