//! # CLI Integration Tests
//!
//! Runs the `edital` binary end to end. Generation goes through the local
//! provider against a `wiremock` server.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn edital(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("edital").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("EDITAL_AI__API_KEY")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_extract_previews_text_reference() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("modelo.txt"), "Edital nº 12/2024 de estágio").unwrap();

    edital(&dir)
        .args(["extract", "--reference", "modelo.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edital nº 12/2024 de estágio"))
        .stderr(predicate::str::contains("1 file(s) loaded."));
}

#[test]
fn test_extract_truncates_long_documents() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("longo.txt"), "a".repeat(800)).unwrap();

    edital(&dir)
        .args(["extract", "--reference", "longo.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}...", "a".repeat(500))))
        .stdout(predicate::str::contains("a".repeat(501)).not());
}

#[test]
fn test_unreadable_reference_does_not_stop_the_batch() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.txt"), "conteúdo válido").unwrap();

    edital(&dir)
        .args(["extract", "-r", "missing.txt", "ok.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("conteúdo válido"))
        .stderr(predicate::str::contains("Error reading file missing.txt"))
        .stderr(predicate::str::contains("1 file(s) loaded."));
}

#[test]
fn test_prompt_contains_form_values() {
    let dir = TempDir::new().unwrap();

    edital(&dir)
        .args([
            "prompt",
            "--unit",
            "Comarca de Uberlândia",
            "--area",
            "outra",
            "--area-other",
            "Engenharia Civil",
            "--weekly-hours",
            "30",
            "--supervisor",
            "João Lima",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comarca de Uberlândia"))
        .stdout(predicate::str::contains("Engenharia Civil"))
        .stdout(predicate::str::contains("30 horas semanais"))
        .stdout(predicate::str::contains("R$ 1.250,56"))
        .stdout(predicate::str::contains("Disposições Preliminares"));
}

#[test]
fn test_prompt_reads_params_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("params.yml"),
        "unit: Comarca de Juiz de Fora\narea: Psicologia\nweekly_hours: 25\n",
    )
    .unwrap();

    edital(&dir)
        .args(["prompt", "--params", "params.yml", "--stipend", "R$ 900,00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comarca de Juiz de Fora"))
        .stdout(predicate::str::contains("Psicologia"))
        .stdout(predicate::str::contains("25 horas semanais"))
        .stdout(predicate::str::contains("R$ 900,00"));
}

#[test]
fn test_area_other_requires_name() {
    let dir = TempDir::new().unwrap();

    edital(&dir)
        .args(["prompt", "--area", "outra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--area-other"));
}

#[test]
fn test_generate_without_key_fails_before_any_call() {
    let dir = TempDir::new().unwrap();

    edital(&dir)
        .args(["generate", "--unit", "Comarca de Belo Horizonte"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key is missing"));

    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_failures_are_reported_in_reference_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("quebrado.pdf"), b"%PDF-1.7\nnot really a pdf").unwrap();
    fs::write(dir.path().join("ok.txt"), "texto").unwrap();

    edital(&dir)
        .args(["extract", "-r", "quebrado.pdf", "ausente.txt", "ok.txt"])
        .assert()
        .success()
        .stderr(predicate::str::is_match(
            r"(?s)Error reading file quebrado\.pdf.*Error reading file ausente\.txt",
        )
        .unwrap())
        .stderr(predicate::str::contains("1 file(s) loaded."));
}

#[test]
fn test_area_placeholder_is_not_an_area() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("params.yml"), "area: Outra\n").unwrap();

    edital(&dir)
        .args(["prompt", "--params", "params.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("params.yml"));

    edital(&dir)
        .args(["prompt", "--area", "outra", "--area-other", "outra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an area"));
}

#[test]
fn test_area_other_with_closed_label_is_normalized() {
    let dir = TempDir::new().unwrap();

    edital(&dir)
        .args(["prompt", "--area", "outra", "--area-other", "servico social"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Serviço Social"));
}

#[tokio::test]
async fn test_generate_stdout_prints_draft_unmodified() {
    // --- 1. Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "# EDITAL\n\nCorpo." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("edital.yml"),
        format!(
            "ai:\n  provider: local\n  api_url: \"{}/v1/chat/completions\"\n  model_name: llama3\n",
            server.uri()
        ),
    )
    .unwrap();

    // --- 2. Act & 3. Assert ---
    let mut cmd = edital(&dir);
    tokio::task::spawn_blocking(move || {
        cmd.args(["generate", "--unit", "Comarca de Betim", "--stdout"])
            .assert()
            .success()
            .stdout("# EDITAL\n\nCorpo.");
    })
    .await
    .unwrap();
}
