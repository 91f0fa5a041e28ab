//! Deployment identifiers injected through the environment.
//!
//! These are read once at cold start and shared by reference with every
//! invocation. The greeting logic never consumes them; they only label logs.

use std::env;

const ENV_VAR: &str = "ENV";
const REGION_VAR: &str = "REGION";
const TABLE_NAME_VAR: &str = "STORAGE_DYNAMO_NAME";
const TABLE_ARN_VAR: &str = "STORAGE_DYNAMO_ARN";
const USER_POOL_VAR: &str = "AUTH_USERPOOLID";

/// Environment name reported when `ENV` is unset
pub const NO_ENVIRONMENT: &str = "NONE";

/// Base name of the storage table before the environment suffix
const BASE_TABLE_NAME: &str = "dynamo";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub env: Option<String>,
    pub region: Option<String>,
    pub storage_table_name: Option<String>,
    pub storage_table_arn: Option<String>,
    pub user_pool_id: Option<String>,
}

impl DeploymentConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            env: read(ENV_VAR),
            region: read(REGION_VAR),
            storage_table_name: read(TABLE_NAME_VAR),
            storage_table_arn: read(TABLE_ARN_VAR),
            user_pool_id: read(USER_POOL_VAR),
        }
    }

    #[must_use]
    pub fn environment_name(&self) -> &str {
        self.env.as_deref().unwrap_or(NO_ENVIRONMENT)
    }

    /// Name of the storage table for this deployment.
    ///
    /// An explicit `STORAGE_DYNAMO_NAME` wins. Otherwise the base name gets a
    /// `-<env>` suffix unless the environment is unset or `NONE`.
    #[must_use]
    pub fn table_name(&self) -> String {
        if let Some(name) = &self.storage_table_name {
            return name.clone();
        }

        match self.env.as_deref() {
            Some(env) if env != NO_ENVIRONMENT => format!("{BASE_TABLE_NAME}-{env}"),
            _ => BASE_TABLE_NAME.to_string(),
        }
    }
}
