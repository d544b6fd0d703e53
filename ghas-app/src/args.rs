use clap::{Parser, ValueEnum};
use ghas_lib::RepositoryType;

#[derive(Debug, Parser)]
pub struct Args {
    #[clap(
        short = 't',
        long = "token",
        help = "GitHub REST API token",
        env = "GHAS_GITHUB_TOKEN"
    )]
    pub github_token: String,

    #[clap(
        long = "api-url",
        help = "GitHub REST API base URL",
        env = "GHAS_API_URL",
        default_value = ghas_lib::ClientConfig::DEFAULT_API_URL
    )]
    pub api_url: String,

    #[clap(short = 'o', long = "org", help = "Organization")]
    pub organization: String,

    #[clap(
        long = "type",
        help = "Repository type (all, public, private, forks, sources, member)",
        default_value = "all"
    )]
    pub repo_type: RepositoryType,

    #[clap(short = 'l', long = "language", help = "Language", default_value = "")]
    pub language: String,

    #[clap(
        short = 'b',
        long = "default-branch",
        help = "Default branch",
        default_value = ""
    )]
    pub default_branch: String,

    #[clap(long = "license", help = "License SPDX identifier", default_value = "")]
    pub license: String,

    #[clap(
        short = 'a',
        long = "archived",
        help = "Archived",
        default_value = "false"
    )]
    pub archived: bool,

    #[clap(long = "disabled", help = "Disabled", default_value = "false")]
    pub disabled: bool,

    #[clap(long = "no-alerts-probe", help = "Skip the Dependabot alerts probe")]
    pub no_alerts_probe: bool,

    #[clap(long = "enable", help = "Feature to enable on every listed repository", value_enum)]
    pub enable: Vec<Feature>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Feature {
    SecretScanner,
    PushProtection,
    Dependabot,
}
