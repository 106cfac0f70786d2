mod common;

use common::{COMPLETIONS_PATH, TestContext, completion_body};
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn explain_prints_model_answer() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .match_header("authorization", "Bearer gsk_test")
        .match_body(Matcher::Regex("Depth: Comprehensive".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("# Gradient Descent\nStep downhill."))
        .expect(1)
        .create();
    ctx.use_server(&server);

    ctx.cli_with_key()
        .args(["explain", "Gradient", "Descent", "--depth", "comprehensive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Gradient Descent"));

    mock.assert();
}

#[test]
fn code_sends_topic_and_complexity() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("K-Means".to_string()),
            Matcher::Regex("Complexity: Advanced".to_string()),
        ]))
        .with_status(200)
        .with_body(completion_body("```python\nprint('kmeans')\n```"))
        .expect(1)
        .create();
    ctx.use_server(&server);

    ctx.cli_with_key()
        .args(["code", "K-Means", "-x", "advanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("print('kmeans')"));

    mock.assert();
}

#[test]
fn visual_prints_diagram_url() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(completion_body("Sieves.\n```mermaid\nA-->B\n```\nDone."))
        .create();
    ctx.use_server(&server);

    ctx.cli_with_key()
        .args(["visual", "Neural Networks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sieves."))
        .stdout(predicate::str::contains("https://mermaid.ink/img/0a412d2d3e420a"));
}

#[test]
fn visual_with_unterminated_block_warns_but_succeeds() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(completion_body("Intro\n```mermaid\ngraph TD; A-->B"))
        .create();
    ctx.use_server(&server);

    ctx.cli_with_key()
        .args(["visual", "Decision Trees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph TD; A-->B"))
        .stdout(predicate::str::contains("mermaid.ink").not())
        .stderr(predicate::str::contains("Could not render diagram directly"));
}

#[test]
fn service_failure_is_displayed_with_prefix() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(500)
        .with_body("internal failure")
        .create();
    ctx.use_server(&server);

    ctx.cli_with_key()
        .args(["explain", "SVM"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Error generation content: API error (500): internal failure",
        ));
}

#[test]
fn missing_api_key_fails_before_any_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", COMPLETIONS_PATH).expect(0).create();
    ctx.use_server(&server);

    ctx.cli()
        .args(["explain", "SVM"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GROQ_API_KEY environment variable not set"));

    mock.assert();
}

#[test]
fn dry_run_prints_prompt_without_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["code", "K-Means", "-x", "advanced", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("\"K-Means\""))
        .stdout(predicate::str::contains("Complexity: Advanced."));
}

#[test]
fn missing_topic_without_terminal_is_a_no_op() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", COMPLETIONS_PATH).expect(0).create();
    ctx.use_server(&server);

    ctx.cli_with_key()
        .arg("visual")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter a topic"));

    mock.assert();
}

#[test]
fn model_flag_overrides_config() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .match_body(Matcher::PartialJson(serde_json::json!({ "model": "mixtral-8x7b-32768" })))
        .with_status(200)
        .with_body(completion_body("ok"))
        .expect(1)
        .create();
    ctx.use_server(&server);

    ctx.cli_with_key().args(["explain", "PCA", "--model", "mixtral-8x7b-32768"]).assert().success();

    mock.assert();
}

#[test]
fn invalid_option_is_rejected_by_parser() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["explain", "PCA", "--depth", "advanced"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("brief, moderate, comprehensive"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli_with_key()
        .args(["explain", "PCA", "--config", "absent.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn whitespace_topic_is_sent() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(completion_body("A diagram of nothing."))
        .expect(1)
        .create();
    ctx.use_server(&server);

    ctx.cli_with_key()
        .args(["visual", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("A diagram of nothing."));

    mock.assert();
}

#[test]
fn blank_model_override_is_rejected() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", COMPLETIONS_PATH).expect(0).create();
    ctx.use_server(&server);

    ctx.cli_with_key()
        .args(["explain", "PCA", "--model", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("model override must not be empty"));

    mock.assert();
}
