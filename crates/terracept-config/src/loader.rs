use std::path::PathBuf;

use terracept_domain::Locations;
use tracing::debug;

use crate::error::ConfigError;

/// Azure credentials read from the environment.
///
/// `client_id`/`client_secret` are optional: when absent the ARM client falls
/// back to `az account get-access-token`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub subscription_id: String,
    pub tenant_id: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Environment-independent constructor, used by tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let required = |missing: &mut Vec<String>, var: &str| -> String {
            match lookup(var).filter(|v| !v.is_empty()) {
                Some(v) => v,
                None => {
                    missing.push(var.to_string());
                    String::new()
                }
            }
        };

        let subscription_id = required(&mut missing, "ARM_SUBSCRIPTION_ID");
        let tenant_id = required(&mut missing, "ARM_TENANT_ID");

        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv { vars: missing });
        }

        Ok(Self {
            subscription_id,
            tenant_id,
            client_id: lookup("ARM_CLIENT_ID").filter(|v| !v.is_empty()),
            client_secret: lookup("ARM_CLIENT_SECRET").filter(|v| !v.is_empty()),
        })
    }
}

/// Harness settings: regions, terraform binary, workspace root, and the
/// acceptance gate.
#[derive(Debug, Clone)]
pub struct Settings {
    pub locations: Locations,
    /// Binary to drive; `terraform` unless overridden (e.g. `tofu`).
    pub terraform_binary: String,
    /// Directory under which per-case workspaces are created.
    pub workspace_root: PathBuf,
    /// Whether live acceptance runs are enabled (`TF_ACC`).
    pub acceptance: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Locations::default();
        let locations = Locations {
            primary: lookup("ARM_TEST_LOCATION").unwrap_or(defaults.primary),
            secondary: lookup("ARM_TEST_LOCATION_ALT").unwrap_or(defaults.secondary),
            ternary: lookup("ARM_TEST_LOCATION_ALT2").unwrap_or(defaults.ternary),
        };

        let workspace_root = lookup("TERRACEPT_WORKSPACE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let home = lookup("HOME").unwrap_or_else(|| ".".into());
                PathBuf::from(home).join(".terracept").join("workspaces")
            });

        let settings = Self {
            locations,
            terraform_binary: lookup("TERRACEPT_TF_BIN").unwrap_or_else(|| "terraform".into()),
            workspace_root,
            acceptance: lookup("TF_ACC").is_some_and(|v| !v.is_empty() && v != "0"),
        };
        debug!(?settings.locations, binary = %settings.terraform_binary, "loaded harness settings");
        settings
    }

    /// Fail fast before any fixture is applied, the way the original suite's
    /// precheck does: one error naming every missing variable.
    pub fn precheck(&self, credentials: &Result<Credentials, ConfigError>) -> Result<(), ConfigError> {
        if !self.acceptance {
            return Err(ConfigError::AcceptanceDisabled);
        }
        match credentials {
            Ok(_) => Ok(()),
            Err(ConfigError::MissingEnv { vars }) => Err(ConfigError::MissingEnv { vars: vars.clone() }),
            Err(_) => Err(ConfigError::InvalidEnv {
                var: "ARM_*".into(),
                message: "credentials could not be loaded".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn lookup(map: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
        move |var| map.get(var).cloned()
    }

    #[test]
    fn credentials_require_subscription_and_tenant() {
        let map = env(&[]);
        let err = Credentials::from_lookup(lookup(&map)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ARM_SUBSCRIPTION_ID"));
        assert!(msg.contains("ARM_TENANT_ID"));
    }

    #[test]
    fn credentials_empty_values_count_as_missing() {
        let map = env(&[("ARM_SUBSCRIPTION_ID", ""), ("ARM_TENANT_ID", "t")]);
        let err = Credentials::from_lookup(lookup(&map)).unwrap_err();
        assert!(err.to_string().contains("ARM_SUBSCRIPTION_ID"));
        assert!(!err.to_string().contains("ARM_TENANT_ID"));
    }

    #[test]
    fn credentials_client_fields_optional() {
        let map = env(&[("ARM_SUBSCRIPTION_ID", "s"), ("ARM_TENANT_ID", "t")]);
        let creds = Credentials::from_lookup(lookup(&map)).unwrap();
        assert!(creds.client_id.is_none());
        assert!(creds.client_secret.is_none());
    }

    #[test]
    fn settings_defaults() {
        let map = env(&[("HOME", "/home/ci")]);
        let settings = Settings::from_lookup(lookup(&map));
        assert_eq!(settings.terraform_binary, "terraform");
        assert_eq!(settings.locations.primary, "eastus2");
        assert!(settings.workspace_root.ends_with(".terracept/workspaces"));
        assert!(!settings.acceptance);
    }

    #[test]
    fn settings_location_overrides() {
        let map = env(&[("ARM_TEST_LOCATION", "uksouth"), ("ARM_TEST_LOCATION_ALT", "ukwest")]);
        let settings = Settings::from_lookup(lookup(&map));
        assert_eq!(settings.locations.primary, "uksouth");
        assert_eq!(settings.locations.secondary, "ukwest");
        assert_eq!(settings.locations.ternary, "centralus");
    }

    #[test]
    fn tf_acc_zero_is_disabled() {
        let map = env(&[("TF_ACC", "0")]);
        assert!(!Settings::from_lookup(lookup(&map)).acceptance);
        let map = env(&[("TF_ACC", "1")]);
        assert!(Settings::from_lookup(lookup(&map)).acceptance);
    }

    #[test]
    fn precheck_reports_gate_before_credentials() {
        let map = env(&[]);
        let settings = Settings::from_lookup(lookup(&map));
        let creds = Credentials::from_lookup(lookup(&map));
        let err = settings.precheck(&creds).unwrap_err();
        assert!(matches!(err, ConfigError::AcceptanceDisabled));
    }

    #[test]
    fn precheck_passes_with_full_env() {
        let map = env(&[
            ("TF_ACC", "1"),
            ("ARM_SUBSCRIPTION_ID", "s"),
            ("ARM_TENANT_ID", "t"),
        ]);
        let settings = Settings::from_lookup(lookup(&map));
        let creds = Credentials::from_lookup(lookup(&map));
        assert!(settings.precheck(&creds).is_ok());
    }
}
