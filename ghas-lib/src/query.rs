use serde::Serialize;

pub(crate) const PER_PAGE: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryType {
    #[default]
    All,
    Public,
    Private,
    Forks,
    Sources,
    Member,
}

impl RepositoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Private => "private",
            Self::Forks => "forks",
            Self::Sources => "sources",
            Self::Member => "member",
        }
    }
}

impl std::str::FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "forks" => Ok(Self::Forks),
            "sources" => Ok(Self::Sources),
            "member" => Ok(Self::Member),
            _ => Err(format!("unknown repository type \"{s}\"")),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListReposQuery {
    #[serde(rename = "type")]
    pub(crate) repo_type: RepositoryType,

    #[serde(rename = "sort")]
    pub(crate) sort: &'static str,

    #[serde(rename = "per_page")]
    pub(crate) per_page: u32,

    #[serde(rename = "page")]
    pub(crate) page: u32,
}

impl ListReposQuery {
    pub(crate) fn new(repo_type: RepositoryType, page: u32) -> Self {
        Self {
            repo_type,
            sort: "full_name",
            per_page: PER_PAGE,
            page,
        }
    }
}
