//! Centralized constants for the Biome workspace.
//!
//! File names, profile document keys, and the environment variables the
//! activation pipeline writes live here so every crate spells them the same way.

// =============================================================================
// Profile Discovery
// =============================================================================

/// File names searched, in order, in each search directory.
pub const DEFAULT_FILE_NAMES: [&str; 2] = [".biome.yaml", ".biome.yml"];

/// Environment variable naming an explicit profile file (skips the search path).
pub const CONFIG_PATH_ENV: &str = "BIOME_CONFIG_PATH";

/// Environment variable naming the biome to activate.
pub const NAME_ENV: &str = "BIOME_NAME";

/// Environment variable accepting secret references without a JSON key.
pub const ALLOW_PLAIN_SECRETS_ENV: &str = "BIOME_ALLOW_PLAIN_SECRETS";

/// Environment variable selecting staged export.
pub const STAGED_EXPORT_ENV: &str = "BIOME_STAGED_EXPORT";

// =============================================================================
// Value Specification Keys
// =============================================================================

/// Secret-store identifier of a secret reference.
pub const SECRET_ARN_KEY: &str = "secret_arn";

/// Optional JSON sub-key selector of a secret reference.
pub const SECRET_JSON_KEY: &str = "secret_json_key";

/// Encrypted payload of an encrypted value.
pub const ENCRYPTED_KEY: &str = "from_dragoman";

/// Interactive prompt flag.
pub const PROMPT_KEY: &str = "from_cli";

/// Masked-input flag of an interactive prompt.
pub const PROMPT_SECRET_KEY: &str = "is_secret";

// =============================================================================
// Exported Credential Variables
// =============================================================================

pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const AWS_REGION: &str = "AWS_REGION";

/// Overrides the location of the AWS shared config file.
pub const AWS_CONFIG_FILE_ENV: &str = "AWS_CONFIG_FILE";

// =============================================================================
// Encryption
// =============================================================================

/// Keyring service name for the local master key.
pub const KEYRING_SERVICE: &str = "biome";

/// Keyring account holding the hex-encoded local master key.
pub const KEYRING_MASTER_KEY_ACCOUNT: &str = "encryption-master-key";
