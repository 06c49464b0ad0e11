//! Registry loading and rendering tests

mod common;

use common::fixtures::make_repo;
use ko_hub::registry::{
    DataSource, SOURCE_PATH_KEY, aggregate, filter_registry, load_ko_registry, load_manifest,
    load_repos, render_manifest, render_registry, render_repo_cards, write_registry,
};
use ko_hub::types::RepoEntry;
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn source(file: &NamedTempFile) -> DataSource {
    DataSource::Path(file.path().to_path_buf())
}

#[tokio::test]
async fn test_load_repos_from_file() {
    let file = write_json(
        r#"[
            {"name": "atlas", "description": "Knowledge atlas", "github": "https://github.com/acme/atlas"},
            {"name": "lattice", "ipfs_cid": "bafylattice"}
        ]"#,
    );

    let repos = load_repos(&source(&file)).await;

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].description.as_deref(), Some("Knowledge atlas"));
    assert_eq!(repos[1].ipfs_cid.as_deref(), Some("bafylattice"));
}

#[tokio::test]
async fn test_load_repos_degrades_to_empty() {
    let missing = DataSource::Path("/nonexistent/registry/repos.json".into());
    assert!(load_repos(&missing).await.is_empty());

    let malformed = write_json(r#"{"name": "not-an-array"}"#);
    assert!(load_repos(&source(&malformed)).await.is_empty());
}

#[tokio::test]
async fn test_load_ko_registry_missing_is_none() {
    let missing = DataSource::Path("/nonexistent/data/ko-registry.json".into());
    assert!(load_ko_registry(&missing).await.is_none());

    let garbage = write_json("not json");
    assert!(load_ko_registry(&source(&garbage)).await.is_none());
}

#[tokio::test]
async fn test_load_repos_over_http() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/registry/repos.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name": "atlas"}]"#)
        .create_async()
        .await;

    let url = format!("{}/registry/repos.json", server.url());
    let repos = load_repos(&url.parse().unwrap()).await;
    assert_eq!(repos, vec![make_repo("atlas")]);
}

#[tokio::test]
async fn test_load_repos_http_error_is_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/registry/repos.json")
        .with_status(500)
        .create_async()
        .await;

    let url = format!("{}/registry/repos.json", server.url());
    assert!(load_repos(&url.parse().unwrap()).await.is_empty());
}

#[test]
fn test_render_repo_cards() {
    let repos = vec![
        RepoEntry {
            description: Some("Knowledge atlas".to_string()),
            github: Some("https://github.com/acme/atlas".to_string()),
            ipfs_cid: Some("bafyatlas".to_string()),
            ..make_repo("atlas")
        },
        RepoEntry {
            huggingface: Some("https://huggingface.co/acme/lattice".to_string()),
            replit: Some("https://replit.com/@acme/lattice".to_string()),
            ..make_repo("lattice")
        },
    ];

    let mut out = Vec::new();
    render_repo_cards(&mut out, &repos).unwrap();
    let text = String::from_utf8(out).unwrap();

    insta::assert_snapshot!(text, @r"
    atlas
      Knowledge atlas
      GitHub: https://github.com/acme/atlas · IPFS: https://ipfs.io/ipfs/bafyatlas

    lattice
      Hugging Face: https://huggingface.co/acme/lattice · Replit: https://replit.com/@acme/lattice
    ");
}

#[tokio::test]
async fn test_search_loaded_registry() {
    let file = write_json(
        r#"[
            {"id": "ko-photon-drift", "title": "Photon Drift", "tags": ["optics"]},
            {"id": "ko-tide", "title": "Tide Tables", "authors": ["Ada"]}
        ]"#,
    );
    let entries = load_ko_registry(&source(&file)).await.unwrap();

    let hits = filter_registry(&entries, "PHOTON");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], "ko-photon-drift");

    let mut out = Vec::new();
    render_registry(&mut out, &hits).unwrap();
    let rendered: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(rendered[0]["title"], "Photon Drift");
}

fn put(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_aggregate_collects_ko_documents() {
    let root = tempfile::tempdir().unwrap();
    put(root.path(), "ko/ko-a.json", r#"{"id": "ko-a"}"#);
    put(root.path(), "branch/ko/nested/ko-b.json", r#"{"id": "ko-b"}"#);
    put(root.path(), "ko/schema/ko.schema.json", r#"{"$id": "schema"}"#);
    put(root.path(), "ko/ko-schema-draft.json", r#"{"id": "skipped"}"#);
    put(root.path(), "ko/broken.json", "{not json");
    put(root.path(), "ko/list.json", "[1, 2]");
    put(root.path(), "ko/notes.md", "# not a KO");
    put(root.path(), "other/ko-c.json", r#"{"id": "outside"}"#);
    put(root.path(), ".cache/ko/ko-d.json", r#"{"id": "hidden"}"#);

    let entries = aggregate(&[root.path().to_path_buf()]);

    let ids: Vec<&str> = entries.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["ko-b", "ko-a"]);
    assert_eq!(entries[0][SOURCE_PATH_KEY], "branch/ko/nested/ko-b.json");
    assert_eq!(entries[1][SOURCE_PATH_KEY], "ko/ko-a.json");
}

#[test]
fn test_aggregate_merges_roots_in_order() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    put(first.path(), "ko/ko-z.json", r#"{"id": "ko-z"}"#);
    put(second.path(), "ko/ko-a.json", r#"{"id": "ko-a"}"#);

    let entries = aggregate(&[
        second.path().to_path_buf(),
        "/nonexistent/root".into(),
        first.path().to_path_buf(),
    ]);

    let ids: Vec<&str> = entries.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["ko-a", "ko-z"]);
}

#[test]
fn test_write_registry_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("site/data/ko-registry.json");

    write_registry(&out, &[json!({"id": "ko-a", "_source_path": "ko/ko-a.json"})]).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        "[\n  {\n    \"id\": \"ko-a\",\n    \"_source_path\": \"ko/ko-a.json\"\n  }\n]"
    );
}

#[tokio::test]
async fn test_load_manifest_degrades_to_none() {
    let missing = DataSource::Path("/nonexistent/chronicle/manifest.json".into());
    assert!(load_manifest(&missing).await.is_none());

    let wrong_shape = write_json(r#"{"public_scroll_layers": "not a list"}"#);
    assert!(load_manifest(&source(&wrong_shape)).await.is_none());
}

#[tokio::test]
async fn test_render_loaded_manifest() {
    let file = write_json(
        r#"{
            "tyme_core": "tyme-core/v1",
            "codexnet": "codexnet/main",
            "voice_of_tyme": [{
                "name": "Oracle",
                "tone": "calm",
                "cadence": "weekly",
                "prompts": ["What endures?"],
                "delivery_modes": ["scroll"],
                "guardrails": ["no prophecy"]
            }],
            "planetary_ui_architecture": [{
                "name": "Orbit",
                "purpose": "Navigation",
                "pathways": ["home", "archive"],
                "feedback_signals": ["glow"],
                "resilience": ["offline"]
            }],
            "initiate_onboarding_sequence": [{
                "phase": "Arrival",
                "intent": "Orient the initiate",
                "action": "Read the charter",
                "signals": ["first visit"],
                "success_criteria": ["charter read", "profile made"]
            }]
        }"#,
    );
    let manifest = load_manifest(&source(&file)).await.unwrap();

    let mut out = Vec::new();
    render_manifest(&mut out, &manifest).unwrap();
    let text = String::from_utf8(out).unwrap();

    insta::assert_snapshot!(text, @r"
    Tyme-Core: tyme-core/v1
    CodexNet: codexnet/main

    == Voice of Tyme ==

    Oracle
      Narrative channel
      [calm] [weekly]
      - Prompt: What endures?
      - Delivery: scroll
      - Guardrail: no prophecy

    == Planetary UI Architecture ==

    Orbit
      Navigation
      - Pathways: home, archive
      - Feedback: glow
      - Resilience: offline

    == Initiate Onboarding Sequence ==

    Arrival
      Orient the initiate
      - Action: Read the charter
      - Signals: first visit
      - Success: charter read, profile made
    ");
}

#[test]
fn test_render_repo_cards_skips_blank_links() {
    let repos = vec![RepoEntry {
        github: Some(String::new()),
        ipfs_cid: Some(String::new()),
        ..make_repo("x")
    }];
    let mut out = Vec::new();
    render_repo_cards(&mut out, &repos).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "x\n");
}
