use log::Level;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub user_agent: String,

    /// Issue a vulnerability-alerts request for every mapped repository.
    pub probe_dependabot_alerts: bool,

    pub log_level: Level,
}

impl ClientConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com/";
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: String::from("ghas-client"),
            probe_dependabot_alerts: true,
            log_level: Level::Debug,
        }
    }
}
