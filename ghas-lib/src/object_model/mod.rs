mod ghas_target;
mod repository;
mod security_and_analysis;

pub use self::ghas_target::GhasTarget;
pub use self::repository::Repository;
pub use self::security_and_analysis::{FeatureSetting, FeatureStatus, SecurityAndAnalysis};
pub(crate) use self::security_and_analysis::RepositoryPatch;
