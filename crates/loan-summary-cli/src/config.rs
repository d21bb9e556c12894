use clap::Args;
use std::fs;
use std::path::Path;

use loan_summary_core::overrides::OverrideTables;

/// Override table options shared by every command that builds rows.
#[derive(Args, Debug, Clone)]
pub struct OverrideArgs {
    /// YAML or JSON file of override tables, layered over the built-in ones
    #[arg(long)]
    pub overrides: Option<String>,

    /// Start from empty tables instead of the built-in ones
    #[arg(long)]
    pub no_builtin_overrides: bool,
}

impl OverrideArgs {
    /// Resolve the effective override tables.
    pub fn load(&self) -> Result<OverrideTables, Box<dyn std::error::Error>> {
        let base = if self.no_builtin_overrides {
            OverrideTables::default()
        } else {
            OverrideTables::builtin()
        };
        match self.overrides.as_deref() {
            Some(path) => {
                let user = read_tables(path)?;
                log::info!("loaded {} override entries from {}", user.len(), path);
                Ok(base.merge(user))
            }
            None => Ok(base),
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn read_tables(path: &str) -> Result<OverrideTables, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let contents =
        fs::read_to_string(p).map_err(|e| format!("Failed to read '{}': {}", p.display(), e))?;
    if is_yaml(p) {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", p.display(), e).into())
    } else {
        Ok(OverrideTables::from_json_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_detection() {
        assert!(is_yaml(Path::new("overrides.yaml")));
        assert!(is_yaml(Path::new("conf/overrides.yml")));
        assert!(!is_yaml(Path::new("overrides.json")));
    }

    #[test]
    fn test_yaml_tables_parse() {
        let tables: OverrideTables =
            serde_yaml::from_str("deal_names:\n  n1: BANK 2024-BNK47\n").unwrap();
        assert_eq!(tables.deal_name("n1"), Some("BANK 2024-BNK47"));
        assert!(tables.tenant_ratings.is_empty());
    }

    #[test]
    fn test_no_builtin_without_file_is_empty() {
        let args = OverrideArgs {
            overrides: None,
            no_builtin_overrides: true,
        };
        assert!(args.load().unwrap().is_empty());
    }
}
