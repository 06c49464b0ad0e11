//! Static registries published next to the proposals
//!
//! Loads the repository registry, the KO registry and the narrative manifest
//! from a file or URL and renders them into a caller-supplied writer. Load
//! failures degrade to "no data" instead of surfacing an error. The KO
//! registry itself is built by [`aggregate()`] from trees of KO documents.

mod aggregate;
mod knowledge;
mod manifest;
mod repos;
mod source;

pub use aggregate::{aggregate, write_registry, SOURCE_PATH_KEY};
pub use knowledge::{filter_registry, load_ko_registry, render_registry};
pub use manifest::{
    load_manifest, render_manifest, Manifest, OnboardingStep, PlanetaryLane, ScrollLayer,
    VoiceChannel,
};
pub use repos::{load_repos, render_repo_cards, IPFS_GATEWAY};
pub use source::DataSource;
