//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map flags and their environment fallbacks to engine options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use std::path::{Path, PathBuf};

use biome_config::constants::{
    ALLOW_PLAIN_SECRETS_ENV, CONFIG_PATH_ENV, NAME_ENV, STAGED_EXPORT_ENV,
};
use biome_config::{SecretPolicy, env_var_or_none};
use biome_engine::{ActivationOptions, ExportMode};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "biome")]
#[command(about = "Activate named environment profiles for a program or shell", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  biome run -b dev -- cargo test\n  biome save -b staging -o .env.staging\n  biome show -b staging\n  biome encrypt --keyring\n"
)]
pub struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Activate a biome, then run a program inside it
    Run {
        #[command(flatten)]
        selection: BiomeSelection,

        #[command(flatten)]
        activation: ActivationFlags,

        /// Program and arguments to run after activation
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },

    /// Activate a biome and write its variables to a dotenv file
    Save {
        #[command(flatten)]
        selection: BiomeSelection,

        #[command(flatten)]
        activation: ActivationFlags,

        /// Output file
        #[arg(short, long, default_value = ".env", value_name = "FILE")]
        output: PathBuf,
    },

    /// Print the resolved biome as YAML without activating it
    Show {
        #[command(flatten)]
        selection: BiomeSelection,
    },

    /// Encrypt a value for use with `from_dragoman`
    Encrypt {
        #[command(flatten)]
        target: EncryptTarget,
    },
}

/// Which biome to load and from where.
#[derive(Args, Debug, Clone)]
pub struct BiomeSelection {
    /// Name of the biome to load
    #[arg(short, long, env = NAME_ENV, value_name = "NAME")]
    pub biome: String,

    /// Load from this file instead of searching the current and home directories
    #[arg(short, long, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl BiomeSelection {
    /// The explicit file, ignoring blank values so an empty env var falls back to the search path.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| !path_is_blank(p))
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ActivationFlags {
    /// Use the whole secret string when no secret_json_key is given
    #[arg(long, env = ALLOW_PLAIN_SECRETS_ENV)]
    pub allow_plain_secrets: bool,

    /// Export variables only after every value resolved
    #[arg(long, env = STAGED_EXPORT_ENV)]
    pub staged: bool,
}

impl ActivationFlags {
    pub fn options(self) -> ActivationOptions {
        ActivationOptions {
            secret_policy: if self.allow_plain_secrets {
                SecretPolicy::AllowPlain
            } else {
                SecretPolicy::RequireJsonKey
            },
            export_mode: if self.staged {
                ExportMode::Staged
            } else {
                ExportMode::Immediate
            },
        }
    }
}

/// Which key protects an encrypted value.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct EncryptTarget {
    /// KMS key id or alias used to generate the data key
    #[arg(long, value_name = "KEY_ID")]
    pub kms_key_id: Option<String>,

    /// Secrets Manager secret holding a hex-encoded 32-byte key
    #[arg(long, value_name = "SECRET_ID")]
    pub secret_id: Option<String>,

    /// Use the key stored in the OS keyring, creating it if needed
    #[arg(long)]
    pub keyring: bool,
}

/// Returns true if the path is empty or contains only whitespace.
pub(crate) fn path_is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

/// Whether a `RUST_LOG` directive was provided.
pub(crate) fn log_directive_from_env() -> Option<String> {
    env_var_or_none("RUST_LOG")
}
