//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("matchday");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .args(["-i", &get_fixture_path("schedule.html")])
        .assert()
        .success()
        .stdout(
            "VANVES vs MEUDON\n\
             C S M CLAMART 2 vs UGS DRAVEIL JUVISY ATHIS-MONS VOLLEY-BALL\n\
             MEUDON vs C S M CLAMART 2\n\
             xxxxx vs VANVES\n",
        );
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("schedule.html")).unwrap();
    cmd()
        .args(["-i", "-"])
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("VANVES vs MEUDON\n"));
}

#[test]
fn test_cli_team_a_vs_team_b() {
    let cells: String = ["1", "2", "3", "Team A", "4", "Team B", "6", "7", "8", "9"]
        .iter()
        .map(|text| format!("<td>{}</td>", text))
        .collect();
    cmd()
        .args(["-i", "-"])
        .write_stdin(format!("<table><tr>{}</tr></table>", cells))
        .assert()
        .success()
        .stdout("Team A vs Team B\n");
}

#[test]
fn test_cli_bare_row_fragment() {
    let cells: String = ["1", "2", "3", "Team A", "4", "Team B", "6", "7", "8", "9"]
        .iter()
        .map(|text| format!("<td>{}</td>", text))
        .collect();
    cmd()
        .args(["-i", "-"])
        .write_stdin(format!("<tr>{}</tr>", cells))
        .assert()
        .success()
        .stdout("Team A vs Team B\n");
}

#[test]
fn test_cli_no_matches() {
    cmd()
        .args(["-i", &get_fixture_path("no_matches.html")])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_malformed_html() {
    cmd()
        .args(["-i", &get_fixture_path("malformed.html")])
        .assert()
        .success()
        .stdout("ISSY vs BOULOGNE\n");
}

#[test]
fn test_cli_team_filter() {
    cmd()
        .args(["-i", &get_fixture_path("schedule.html"), "--team", "vanves", "--skip-byes"])
        .assert()
        .success()
        .stdout("VANVES vs MEUDON\n");
}

#[test]
fn test_cli_standings() {
    cmd()
        .args(["-i", &get_fixture_path("schedule.html"), "--standings"])
        .assert()
        .success()
        .stdout(
            "1 VANVES\n\
             2 C S M CLAMART 2\n\
             3 UGS DRAVEIL JUVISY ATHIS-MONS VOLLEY-BALL\n\
             4 MEUDON\n",
        );
}

#[test]
fn test_cli_standings_missing_table() {
    cmd()
        .args(["-i", &get_fixture_path("no_matches.html"), "--standings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No table at index 2"));
}

#[test]
fn test_cli_invalid_file() {
    cmd().args(["-i", "nonexistent.html"]).assert().failure();
}

#[test]
fn test_cli_connection_failure() {
    cmd()
        .args([
            "--url",
            "https://127.0.0.1:9/ffvbapp/resu/vbspo_calendrier.php",
            "--cert",
            &get_fixture_path("certs/test-chain.pem"),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to fetch schedule"));
}

#[test]
fn test_cli_missing_certificate() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("chain.pem");

    cmd()
        .args(["--url", "https://127.0.0.1:9/", "--cert", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Certificate bundle not found"));
}

#[test]
fn test_cli_invalid_url() {
    cmd().args(["--url", "not a url"]).assert().failure();
}

#[test]
fn test_cli_pool_flags_build_url() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("chain.pem");

    cmd()
        .args(["--season", "2023/2024", "--entity", "LIIDF", "--pool", "RMA"])
        .args(["--cert", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("codent=LIIDF&poule=RMA"));
}

#[test]
fn test_cli_pool_flags_need_each_other() {
    cmd().args(["-i", &get_fixture_path("schedule.html"), "--pool", "RMA"]).assert().failure();
}

#[test]
fn test_cli_blank_pool() {
    cmd()
        .args(["--season", "2023/2024", "--entity", "LIIDF", "--pool", " "])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn test_cli_pool_flags_conflict_with_url() {
    cmd()
        .args(["--url", "https://example.com/", "--season", "2023/2024", "--entity", "LIIDF", "--pool", "RMA"])
        .assert()
        .failure();
}

#[test]
fn test_cli_cert_conflicts_with_system_roots() {
    cmd()
        .args(["--cert", &get_fixture_path("certs/test-chain.pem"), "--system-roots"])
        .assert()
        .failure();
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", "-i", &get_fixture_path("schedule.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("VANVES vs MEUDON"))
        .stderr(predicate::str::contains("Matchday"));
}
