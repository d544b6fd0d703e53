mod args;

use crate::args::{Args, Feature};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use ghas_lib::{ClientConfig, GhasClient, Repository, RepositoryFilter};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = ClientConfig {
        probe_dependabot_alerts: !args.no_alerts_probe,
        ..ClientConfig::default()
    };
    let github = GhasClient::with_config(args.api_url.as_str(), &args.github_token, config)?;

    let filter = RepositoryFilter::default()
        .language(args.language.as_str())
        .default_branch(args.default_branch.as_str())
        .license(args.license.as_str())
        .archived(args.archived)
        .disabled(args.disabled);

    let listing = github
        .list_org_repositories_detailed(args.repo_type, &args.organization, &filter)
        .await?;
    log::info!(
        "fetched {} pages of {} repositories, stopped: {:?}",
        listing.pages_fetched,
        args.repo_type.as_str(),
        listing.stop
    );

    for repo in &listing.repositories {
        println!(
            "{} [{}] ghas={} secret_scanner={} push_protection={} dependabot_alerts={}",
            repo.to_ghas().repo.yellow(),
            repo.url,
            flag(repo.ghas),
            flag(repo.secret_scanner),
            flag(repo.secret_push_prot),
            flag(repo.dependabot_alerts),
        );
        for feature in &args.enable {
            enable(&github, repo, *feature).await;
        }
    }

    println!("({} repos)", listing.repositories.len());

    Ok(())
}

async fn enable(github: &GhasClient, repo: &Repository, feature: Feature) {
    let owner = repo.path_owner();
    let ok = match feature {
        Feature::SecretScanner => github.enable_secret_scanner(owner, &repo.name).await,
        Feature::PushProtection => {
            github
                .enable_secret_scanner_push_protection(owner, &repo.name)
                .await
        }
        Feature::Dependabot => github.enable_dependabot(owner, &repo.name).await,
    };
    let status = if ok { "ok".green() } else { "failed".red() };
    println!("  {:?}: {}", feature, status);
}

fn flag(value: bool) -> colored::ColoredString {
    if value {
        "on".green()
    } else {
        "off".red()
    }
}
