use crate::object_model::Repository;

/// In-memory filter applied to listed repositories. Empty strings disable the
/// corresponding check; `archived` and `disabled` must always match exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepositoryFilter {
    pub language: String,
    pub default_branch: String,
    pub license: String,
    pub archived: bool,
    pub disabled: bool,
}

impl RepositoryFilter {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn default_branch(mut self, default_branch: impl Into<String>) -> Self {
        self.default_branch = default_branch.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn matches(&self, repository: &Repository) -> bool {
        fn accepts(wanted: &str, actual: &str) -> bool {
            wanted.is_empty() || wanted == actual
        }

        accepts(&self.language, &repository.language)
            && accepts(&self.default_branch, &repository.default_branch)
            && (self.license.is_empty()
                || repository.license.as_deref() == Some(self.license.as_str()))
            && repository.archived == self.archived
            && repository.disabled == self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn repository(language: &str, license: Option<&str>) -> Repository {
        Repository {
            name: String::from("repo"),
            language: String::from(language),
            license: license.map(String::from),
            ..Repository::default()
        }
    }

    #[rstest]
    #[case(RepositoryFilter::default(), "Rust", true)]
    #[case(RepositoryFilter::default().language("Go"), "Go", true)]
    #[case(RepositoryFilter::default().language("Go"), "Rust", false)]
    #[case(RepositoryFilter::default().language("Go"), "", false)]
    fn filters_on_language(
        #[case] filter: RepositoryFilter,
        #[case] language: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(expected, filter.matches(&repository(language, None)));
    }

    #[rstest]
    #[case("", None, true)]
    #[case("MIT", Some("MIT"), true)]
    #[case("MIT", Some("Apache-2.0"), false)]
    #[case("MIT", None, false)]
    fn filters_on_license(
        #[case] wanted: &str,
        #[case] license: Option<&str>,
        #[case] expected: bool,
    ) {
        let filter = RepositoryFilter::default().license(wanted);
        assert_eq!(expected, filter.matches(&repository("Go", license)));
    }

    #[test]
    fn default_branch_must_match_when_set() {
        let repo = repository("Go", None);
        assert!(RepositoryFilter::default().default_branch("main").matches(&repo));
        assert!(!RepositoryFilter::default().default_branch("master").matches(&repo));
    }

    #[test]
    fn archived_and_disabled_require_exact_match() {
        let mut repo = repository("Go", None);
        assert!(RepositoryFilter::default().matches(&repo));
        assert!(!RepositoryFilter::default().archived(true).matches(&repo));

        repo.archived = true;
        assert!(!RepositoryFilter::default().matches(&repo));
        assert!(RepositoryFilter::default().archived(true).matches(&repo));

        repo.archived = false;
        repo.disabled = true;
        assert!(!RepositoryFilter::default().matches(&repo));
        assert!(RepositoryFilter::default().disabled(true).matches(&repo));
    }
}
