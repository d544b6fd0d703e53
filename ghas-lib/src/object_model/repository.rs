use super::ghas_target::GhasTarget;
use crate::error::GhasError;
use crate::json_lookup::{
    lookup_enabled, lookup_str, required_bool, required_nullable_str, required_str,
};
use crate::result::GhasResult;
use anyhow::anyhow;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Display, Formatter, Result as FmtResult};

const ORGANIZATION_OWNER_TYPE: &str = "Organization";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Repository {
    #[serde(rename = "name")]
    pub name: String,

    /// Empty when the repository belongs to a personal account.
    #[serde(rename = "orga")]
    pub organization: String,

    #[serde(rename = "owner")]
    pub owner: String,

    #[serde(rename = "url")]
    pub url: String,

    #[serde(rename = "description")]
    pub description: String,

    #[serde(rename = "language")]
    pub language: String,

    #[serde(rename = "default_branch")]
    pub default_branch: String,

    #[serde(rename = "license")]
    pub license: Option<String>,

    #[serde(rename = "archived")]
    pub archived: bool,

    #[serde(rename = "disabled")]
    pub disabled: bool,

    #[serde(rename = "updated_at")]
    pub updated_at: String,

    #[serde(rename = "ghas")]
    pub ghas: bool,

    #[serde(rename = "secret_scanner")]
    pub secret_scanner: bool,

    #[serde(rename = "secret_push_prot")]
    pub secret_push_prot: bool,

    /// Not exposed by the repository endpoints; always `false`.
    #[serde(rename = "dependabot")]
    pub dependabot: bool,

    #[serde(rename = "dependabot_alerts")]
    pub dependabot_alerts: bool,

    /// Not exposed by the repository endpoints; always `false`.
    #[serde(rename = "codeql")]
    pub codeql: bool,
}

impl Default for Repository {
    fn default() -> Self {
        Self {
            name: String::new(),
            organization: String::new(),
            owner: String::new(),
            url: String::new(),
            description: String::new(),
            language: String::new(),
            default_branch: String::from("main"),
            license: None,
            archived: false,
            disabled: false,
            updated_at: String::new(),
            ghas: false,
            secret_scanner: false,
            secret_push_prot: false,
            dependabot: false,
            dependabot_alerts: false,
            codeql: false,
        }
    }
}

impl Repository {
    /// Nested license and `security_and_analysis` data fall back to
    /// "none"/disabled when missing. `dependabot_alerts` is left `false`.
    pub fn from_json(obj: &Value) -> GhasResult<Self> {
        let mut repository = Self::default();
        repository.load_json(obj)?;
        Ok(repository)
    }

    pub fn load_json(&mut self, obj: &Value) -> GhasResult<()> {
        let owner = required_str(obj, &["owner", "login"])?;
        let owner_type = required_str(obj, &["owner", "type"])?;

        self.name = required_str(obj, &["name"])?;
        self.organization = if owner_type == ORGANIZATION_OWNER_TYPE {
            owner.clone()
        } else {
            String::new()
        };
        self.owner = owner;
        self.url = required_str(obj, &["html_url"])?;
        self.description = required_nullable_str(obj, &["description"])?;
        self.language = required_nullable_str(obj, &["language"])?;
        self.default_branch = required_str(obj, &["default_branch"])?;
        self.license = lookup_str(obj, &["license", "spdx_id"]).map(String::from);
        self.archived = required_bool(obj, &["archived"])?;
        self.disabled = required_bool(obj, &["disabled"])?;
        self.updated_at = required_str(obj, &["updated_at"])?;
        self.ghas = lookup_enabled(obj, &["security_and_analysis", "advanced_security", "status"]);
        self.secret_scanner =
            lookup_enabled(obj, &["security_and_analysis", "secret_scanning", "status"]);
        self.secret_push_prot = lookup_enabled(
            obj,
            &[
                "security_and_analysis",
                "secret_scanning_push_protection",
                "status",
            ],
        );
        self.dependabot = false;
        self.dependabot_alerts = false;
        self.codeql = false;
        Ok(())
    }

    /// Account that owns the repository in API paths: the organization when
    /// there is one, the personal owner otherwise.
    pub fn path_owner(&self) -> &str {
        if self.organization.is_empty() {
            &self.owner
        } else {
            &self.organization
        }
    }

    pub fn to_json(&self) -> GhasResult<Value> {
        serde_json::to_value(self).map_err(|e| GhasError::Other(anyhow!(e)))
    }

    pub fn to_ghas(&self) -> GhasTarget {
        GhasTarget {
            repo: format!("{}/{}", self.organization, self.name),
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "[{}]", self.name)?;
        writeln!(f, "  * Organization: {}", self.organization)?;
        writeln!(f, "  * Owner: {}", self.owner)?;
        writeln!(f, "  * Url: {}", self.url)?;
        writeln!(f, "  * Description: {}", self.description)?;
        writeln!(f, "  * Language: {}", self.language)?;
        writeln!(f, "  * Default branch: {}", self.default_branch)?;
        writeln!(
            f,
            "  * License: {}",
            self.license.as_deref().unwrap_or("None")
        )?;
        writeln!(f, "  * Archived: {}", self.archived)?;
        writeln!(f, "  * Disabled: {}", self.disabled)?;
        writeln!(f, "  * Last updated at: {}", self.updated_at)?;
        writeln!(f, "  * GHAS: {}", self.ghas)?;
        writeln!(f, "  * Secret Scanner: {}", self.secret_scanner)?;
        writeln!(
            f,
            "  * Secret Scanner Push Protection: {}",
            self.secret_push_prot
        )?;
        writeln!(f, "  * Dependabot: {}", self.dependabot)?;
        writeln!(f, "  * Dependabot alerts: {}", self.dependabot_alerts)?;
        write!(f, "  * CodeQL: {}", self.codeql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_repo() -> Value {
        json!({
            "name": "scanner",
            "full_name": "acme/scanner",
            "owner": { "login": "acme", "type": "Organization" },
            "html_url": "https://github.com/acme/scanner",
            "description": "Finds things",
            "language": "Go",
            "default_branch": "develop",
            "license": { "key": "mit", "spdx_id": "MIT" },
            "archived": false,
            "disabled": false,
            "updated_at": "2024-03-01T10:00:00Z",
            "security_and_analysis": {
                "advanced_security": { "status": "enabled" },
                "secret_scanning": { "status": "enabled" },
                "secret_scanning_push_protection": { "status": "disabled" }
            }
        })
    }

    #[test]
    fn maps_all_fields() {
        let repository = Repository::from_json(&raw_repo()).unwrap();
        assert_eq!("scanner", repository.name);
        assert_eq!("acme", repository.organization);
        assert_eq!("acme", repository.owner);
        assert_eq!("https://github.com/acme/scanner", repository.url);
        assert_eq!("Finds things", repository.description);
        assert_eq!("Go", repository.language);
        assert_eq!("develop", repository.default_branch);
        assert_eq!(Some("MIT"), repository.license.as_deref());
        assert!(!repository.archived);
        assert!(!repository.disabled);
        assert_eq!("2024-03-01T10:00:00Z", repository.updated_at);
        assert!(repository.ghas);
        assert!(repository.secret_scanner);
        assert!(!repository.secret_push_prot);
        assert!(!repository.dependabot);
        assert!(!repository.dependabot_alerts);
        assert!(!repository.codeql);
    }

    #[test]
    fn missing_security_and_analysis_means_disabled() {
        let mut raw = raw_repo();
        raw.as_object_mut()
            .unwrap()
            .remove("security_and_analysis");
        let repository = Repository::from_json(&raw).unwrap();
        assert!(!repository.ghas);
        assert!(!repository.secret_scanner);
        assert!(!repository.secret_push_prot);
    }

    #[test]
    fn null_license_is_none() {
        let mut raw = raw_repo();
        raw["license"] = Value::Null;
        assert_eq!(None, Repository::from_json(&raw).unwrap().license);

        raw.as_object_mut().unwrap().remove("license");
        assert_eq!(None, Repository::from_json(&raw).unwrap().license);
    }

    #[test]
    fn personal_owner_has_no_organization() {
        let mut raw = raw_repo();
        raw["owner"] = json!({ "login": "octocat", "type": "User" });
        let repository = Repository::from_json(&raw).unwrap();
        assert_eq!("", repository.organization);
        assert_eq!("octocat", repository.owner);
        assert_eq!("octocat", repository.path_owner());
    }

    #[test]
    fn null_description_and_language_are_empty() {
        let mut raw = raw_repo();
        raw["description"] = Value::Null;
        raw["language"] = Value::Null;
        let repository = Repository::from_json(&raw).unwrap();
        assert_eq!("", repository.description);
        assert_eq!("", repository.language);
    }

    #[test]
    fn missing_required_field_fails() {
        let mut raw = raw_repo();
        raw.as_object_mut().unwrap().remove("updated_at");
        let err = Repository::from_json(&raw).unwrap_err();
        assert!(matches!(err, GhasError::MissingField(ref p) if p == "updated_at"));
    }

    #[test]
    fn to_json_uses_record_keys() {
        let value = Repository::from_json(&raw_repo()).unwrap().to_json().unwrap();
        assert_eq!(json!("acme"), value["orga"]);
        assert_eq!(json!("MIT"), value["license"]);
        assert_eq!(json!(false), value["codeql"]);
        assert_eq!(17, value.as_object().unwrap().len());
    }

    #[test]
    fn to_ghas_joins_organization_and_name() {
        let repository = Repository::from_json(&raw_repo()).unwrap();
        assert_eq!(
            json!({ "repo": "acme/scanner" }),
            serde_json::to_value(repository.to_ghas()).unwrap()
        );
    }

    #[test]
    fn display_lists_fields() {
        let text = Repository::from_json(&raw_repo()).unwrap().to_string();
        assert!(text.starts_with("[scanner]\n"));
        assert!(text.contains("  * License: MIT\n"));
        assert!(text.ends_with("  * CodeQL: false"));
    }
}
