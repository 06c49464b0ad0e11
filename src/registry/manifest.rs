//! Narrative manifest cards

use crate::registry::DataSource;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::warn;

/// The narrative manifest published next to the registries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Tyme-Core binding shown in the header
    #[serde(default)]
    pub tyme_core: String,
    /// CodexNet binding shown in the header
    #[serde(default)]
    pub codexnet: String,
    /// Public entry layers
    #[serde(default)]
    pub public_scroll_layers: Vec<ScrollLayer>,
    /// Narrative channels
    #[serde(default)]
    pub voice_of_tyme: Vec<VoiceChannel>,
    /// Interface lanes
    #[serde(default)]
    pub planetary_ui_architecture: Vec<PlanetaryLane>,
    /// Onboarding phases, in order
    #[serde(default)]
    pub initiate_onboarding_sequence: Vec<OnboardingStep>,
}

/// A public entry layer and what it hooks into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollLayer {
    /// Card title
    pub name: String,
    /// Card description
    pub focus: String,
    /// Where visitors enter
    pub entrypoints: Vec<String>,
    /// CodexNet hooks
    pub codexnet_hooks: Vec<String>,
    /// Tyme-Core bridges
    pub tyme_core_bridges: Vec<String>,
}

/// A narrative channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceChannel {
    /// Card title
    pub name: String,
    /// Badge
    pub tone: String,
    /// Badge
    pub cadence: String,
    /// Prompt lines
    pub prompts: Vec<String>,
    /// Delivery modes
    pub delivery_modes: Vec<String>,
    /// Guardrails
    pub guardrails: Vec<String>,
}

/// An interface lane
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetaryLane {
    /// Card title
    pub name: String,
    /// Card description
    pub purpose: String,
    /// Navigation pathways
    pub pathways: Vec<String>,
    /// Feedback signals
    pub feedback_signals: Vec<String>,
    /// Resilience measures
    pub resilience: Vec<String>,
}

/// One phase of the onboarding sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingStep {
    /// Card title
    pub phase: String,
    /// Card description
    pub intent: String,
    /// What the initiate does
    pub action: String,
    /// Signals
    pub signals: Vec<String>,
    /// Success criteria
    pub success_criteria: Vec<String>,
}

/// Load the manifest; `None` when it can't be fetched or decoded
pub async fn load_manifest(source: &DataSource) -> Option<Manifest> {
    match source.load().await {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            warn!("Manifest unavailable ({source}): {e}");
            None
        }
    }
}

/// A titled block: optional description, badges, then list lines
struct Card<'a> {
    title: &'a str,
    description: &'a str,
    badges: Vec<&'a str>,
    list: Vec<String>,
}

impl Card<'_> {
    fn write(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.title)?;
        if !self.description.is_empty() {
            writeln!(out, "  {}", self.description)?;
        }
        if !self.badges.is_empty() {
            let badges: Vec<String> = self.badges.iter().map(|b| format!("[{b}]")).collect();
            writeln!(out, "  {}", badges.join(" "))?;
        }
        for item in &self.list {
            writeln!(out, "  - {item}")?;
        }
        Ok(())
    }
}

fn write_section(out: &mut impl Write, heading: &str, cards: &[Card<'_>]) -> io::Result<()> {
    if cards.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "== {heading} ==")?;
    for card in cards {
        writeln!(out)?;
        card.write(out)?;
    }
    Ok(())
}

/// Write the header bindings followed by one section of cards per manifest list
pub fn render_manifest(out: &mut impl Write, manifest: &Manifest) -> io::Result<()> {
    writeln!(out, "Tyme-Core: {}", manifest.tyme_core)?;
    writeln!(out, "CodexNet: {}", manifest.codexnet)?;

    let layers: Vec<Card<'_>> = manifest
        .public_scroll_layers
        .iter()
        .map(|layer| Card {
            title: &layer.name,
            description: &layer.focus,
            badges: Vec::new(),
            list: vec![
                format!("Entrypoints: {}", layer.entrypoints.join(", ")),
                format!("CodexNet Hooks: {}", layer.codexnet_hooks.join(", ")),
                format!("Tyme-Core Bridges: {}", layer.tyme_core_bridges.join(", ")),
            ],
        })
        .collect();
    write_section(out, "Public Scroll Layers", &layers)?;

    let voices: Vec<Card<'_>> = manifest
        .voice_of_tyme
        .iter()
        .map(|channel| Card {
            title: &channel.name,
            description: "Narrative channel",
            badges: [channel.tone.as_str(), channel.cadence.as_str()]
                .into_iter()
                .filter(|b| !b.is_empty())
                .collect(),
            list: channel
                .prompts
                .iter()
                .map(|p| format!("Prompt: {p}"))
                .chain(channel.delivery_modes.iter().map(|d| format!("Delivery: {d}")))
                .chain(channel.guardrails.iter().map(|g| format!("Guardrail: {g}")))
                .collect(),
        })
        .collect();
    write_section(out, "Voice of Tyme", &voices)?;

    let lanes: Vec<Card<'_>> = manifest
        .planetary_ui_architecture
        .iter()
        .map(|lane| Card {
            title: &lane.name,
            description: &lane.purpose,
            badges: Vec::new(),
            list: vec![
                format!("Pathways: {}", lane.pathways.join(", ")),
                format!("Feedback: {}", lane.feedback_signals.join(", ")),
                format!("Resilience: {}", lane.resilience.join(", ")),
            ],
        })
        .collect();
    write_section(out, "Planetary UI Architecture", &lanes)?;

    let steps: Vec<Card<'_>> = manifest
        .initiate_onboarding_sequence
        .iter()
        .map(|step| Card {
            title: &step.phase,
            description: &step.intent,
            badges: Vec::new(),
            list: vec![
                format!("Action: {}", step.action),
                format!("Signals: {}", step.signals.join(", ")),
                format!("Success: {}", step.success_criteria.join(", ")),
            ],
        })
        .collect();
    write_section(out, "Initiate Onboarding Sequence", &steps)
}
