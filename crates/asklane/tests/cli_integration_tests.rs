//! End-to-end tests that run the asklane binary.
//!
//! Every test runs in its own temporary directory so a stray asklane.toml
//! never leaks in. Question pages are requested with `--no-delay` where the
//! command supports it.

use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Run asklane in `dir` and return (stdout, stderr, exit_code).
fn run_asklane(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_asklane"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run asklane");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

fn run(args: &[&str]) -> (String, String, i32) {
    let temp = TempDir::new().unwrap();
    run_asklane(temp.path(), args)
}

fn json(stdout: &str) -> Value {
    serde_json::from_str(stdout).unwrap_or_else(|e| panic!("bad JSON ({e}): {stdout}"))
}

const SMALL_DATASET: &str = r#"{
    "users": [{
        "id": "u1", "name": "Solo Asker", "email": "solo@example.com",
        "avatar_url": "", "reputation": 12,
        "joined_at": "2023-01-01T00:00:00Z"
    }],
    "tags": [],
    "questions": [{
        "id": "q1", "title": "The only question here", "content": "Body text",
        "created_at": "2023-02-01T00:00:00Z", "author_id": "u1",
        "upvotes": 2, "downvotes": 0, "view_count": 9
    }],
    "current_user": "u1"
}"#;

// ============================================================================
// Browsing
// ============================================================================

#[test]
fn questions_json_lists_every_question_newest_first() {
    let (stdout, _, code) = run(&["questions", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    assert_eq!(value["status"], "ok");
    assert_eq!(value["command"], "questions");
    assert_eq!(value["data"]["view"], "home");
    let ids: Vec<&str> = value["data"]["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["4", "3", "2", "1"]);
    assert!(value["issues"].as_array().unwrap().is_empty());
}

#[test]
fn questions_sorted_by_votes() {
    let (stdout, _, code) = run(&["questions", "--sort", "votes", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    assert_eq!(value["data"]["questions"][0]["id"], "2");
    assert_eq!(value["data"]["questions"][0]["score"], 39);
}

#[test]
fn questions_text_has_a_heading() {
    let (stdout, _, code) = run(&["questions"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("All Questions"));
    assert!(stdout.contains("/questions/2"));
}

#[test]
fn unknown_sort_is_rejected() {
    let (_, _, code) = run(&["questions", "--sort", "hot"]);
    assert_eq!(code, 2);
}

#[test]
fn question_detail_joins_authors() {
    let (stdout, _, code) = run(&["question", "1", "--no-delay", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    assert_eq!(value["data"]["view"], "question_detail");
    assert_eq!(value["data"]["author"]["name"], "Jane Smith");
    assert_eq!(value["data"]["view_count"], 456);
}

#[test]
fn unknown_question_exits_with_not_found() {
    let (_, stderr, code) = run(&["question", "999", "--no-delay"]);
    assert_eq!(code, 3);
    assert!(stderr.contains("question not found: 999"), "stderr: {stderr}");
}

#[test]
fn unknown_question_json_error_goes_to_stdout() {
    let (stdout, _, code) = run(&["question", "999", "--no-delay", "--json"]);
    assert_eq!(code, 3);
    let value = json(&stdout);
    assert_eq!(value["status"], "error");
    assert_eq!(value["error"]["code"], 3);
    assert_eq!(value["error"]["details"]["kind"], "question");
    assert_eq!(value["error"]["details"]["id"], "999");
}

#[test]
fn unknown_user_exits_with_not_found() {
    let (_, stderr, code) = run(&["user", "99"]);
    assert_eq!(code, 3);
    assert!(stderr.contains("user not found: 99"), "stderr: {stderr}");
}

#[test]
fn profile_of_the_current_user_is_marked() {
    let (stdout, _, code) = run(&["user", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Jane Smith (you)"));
    assert!(stdout.contains("Member since January 15, 2022"));
}

#[test]
fn whoami_is_jane() {
    let (stdout, _, code) = run(&["whoami", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    assert_eq!(value["data"]["id"], "1");
    assert_eq!(value["data"]["reputation"], 1542);
}

#[test]
fn tags_filtered_and_sorted_by_name() {
    let (stdout, _, code) = run(&["tags", "--filter", "script", "--sort", "name", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    let names: Vec<&str> = value["data"]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["javascript", "node.js", "react", "typescript"]);
}

#[test]
fn tags_with_no_match_say_so() {
    let (stdout, _, code) = run(&["tags", "--filter", "cobol"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No tags found matching your search criteria."));
}

// ============================================================================
// Open
// ============================================================================

#[test]
fn open_unknown_question_shows_not_found_page() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("asklane.toml"), "[asklane]\nload_delay_ms = 0\n").unwrap();
    let (stdout, _, code) = run_asklane(temp.path(), &["open", "/questions/999"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Question Not Found"));
    assert!(stdout.contains("path: /questions/999"));
}

#[test]
fn open_unmatched_path_is_a_generic_not_found() {
    let (stdout, _, code) = run(&["open", "/tags/javascript", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    assert_eq!(value["data"]["view"], "not_found");
    assert_eq!(value["data"]["path"], "/tags/javascript");
}

#[test]
fn open_ask_page_is_not_a_question() {
    let (stdout, _, code) = run(&["open", "/questions/ask", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["data"]["view"], "ask_question");
}

#[test]
fn routes_lists_table_and_navigation() {
    let (stdout, _, code) = run(&["routes", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    assert_eq!(value["data"]["routes"].as_array().unwrap().len(), 6);
    assert_eq!(value["data"]["navigation"].as_array().unwrap().len(), 4);
    assert_eq!(value["data"]["navigation"][2]["path"], "/users/1");
}

// ============================================================================
// Ask form and submissions
// ============================================================================

#[test]
fn suggest_tags_skips_selected() {
    let (stdout, _, code) = run(&["suggest-tags", "script", "--selected", "1", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    let names: Vec<&str> = value["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(!names.is_empty());
    assert!(!names.contains(&"javascript"));
}

#[test]
fn suggest_tags_never_offers_any_selected_tag() {
    let (stdout, _, code) = run(&[
        "suggest-tags", "s", "--selected", "1", "--selected", "2", "--selected", "3",
        "--selected", "4", "--selected", "5", "--selected", "6", "--json",
    ]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    let ids: Vec<&str> = value["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["8"]);
}

#[test]
fn suggest_tags_with_unknown_selected_id() {
    let (_, _, code) = run(&["suggest-tags", "py", "--selected", "77"]);
    assert_eq!(code, 3);
}

#[test]
fn ask_is_acknowledged() {
    let (stdout, _, code) = run(&[
        "ask", "--title", "How?", "--body", "Details", "--tag", "JavaScript",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Your question has been submitted!");
}

#[test]
fn ask_without_body_is_invalid() {
    let (_, _, code) = run(&["ask", "--title", "How?", "--tag", "python"]);
    assert_eq!(code, 2);
}

#[test]
fn ask_with_six_tags_is_invalid() {
    let (_, _, code) = run(&[
        "ask", "--title", "T", "--body", "B", "--tag", "javascript", "--tag", "python",
        "--tag", "react", "--tag", "node.js", "--tag", "css", "--tag", "typescript",
    ]);
    assert_eq!(code, 2);
}

#[test]
fn ask_with_unknown_tag_is_not_found() {
    let (_, _, code) = run(&["ask", "--title", "T", "--body", "B", "--tag", "cobol"]);
    assert_eq!(code, 3);
}

#[test]
fn answer_and_vote_need_existing_targets() {
    let (stdout, _, code) = run(&["answer", "2", "--body", "Use generics."]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Your answer has been submitted!");

    let (_, _, code) = run(&["answer", "999", "--body", "x"]);
    assert_eq!(code, 3);

    let (_, _, code) = run(&["vote", "answer", "7", "up"]);
    assert_eq!(code, 3);

    let (stdout, _, code) = run(&["vote", "question", "1", "down"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Your vote has been recorded!");
}

// ============================================================================
// Datasets and configuration
// ============================================================================

#[test]
fn custom_fixture_replaces_the_builtin() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("small.json"), SMALL_DATASET).unwrap();
    let (stdout, _, code) =
        run_asklane(temp.path(), &["--fixture", "small.json", "questions", "--json"]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    assert_eq!(value["data"]["questions"].as_array().unwrap().len(), 1);
    assert_eq!(value["data"]["questions"][0]["title"], "The only question here");
}

#[test]
fn invalid_fixture_exits_with_data_error() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("bad.json"),
        r#"{"users": [], "tags": [], "questions": [], "current_user": "x"}"#,
    )
    .unwrap();
    let (stdout, _, code) =
        run_asklane(temp.path(), &["--fixture", "bad.json", "--json", "whoami"]);
    assert_eq!(code, 4);
    let value = json(&stdout);
    assert!(!value["error"]["details"]["violations"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn missing_fixture_exits_with_data_error() {
    let (_, _, code) = run(&["--fixture", "nowhere.json", "questions"]);
    assert_eq!(code, 4);
}

#[test]
fn config_file_in_working_directory_is_used() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("asklane.toml"),
        "[asklane]\nquestion_sort = \"votes\"\nload_delay_ms = 0\n",
    )
    .unwrap();
    let (stdout, _, code) = run_asklane(temp.path(), &["questions", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["data"]["questions"][0]["id"], "2");
}

#[test]
fn config_fixture_is_relative_to_the_config_file() {
    let temp = TempDir::new().unwrap();
    let conf = temp.path().join("conf");
    fs::create_dir(&conf).unwrap();
    fs::write(conf.join("small.json"), SMALL_DATASET).unwrap();
    fs::write(conf.join("custom.toml"), "[asklane]\nfixture = \"small.json\"\n").unwrap();
    let (stdout, _, code) =
        run_asklane(temp.path(), &["--config", "conf/custom.toml", "whoami", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["data"]["name"], "Solo Asker");
}

#[test]
fn missing_config_file_is_an_error() {
    let (_, _, code) = run(&["--config", "absent.toml", "questions"]);
    assert_eq!(code, 4);
}
