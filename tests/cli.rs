//! Integration test suite for the `haversine` CLI
use assert_cmd::Command;

/// Helper function to run the `main` binary with the given arguments and return a
/// [`assert_cmd::assert::Assert`].
fn run_main(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd =
        Command::cargo_bin("haversine").expect("Failed to find main binary");
    cmd.env("NO_COLOR", "1");
    cmd.args(args);
    cmd.assert()
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone())
        .expect("Invalid UTF-8 output")
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone())
        .expect("Invalid UTF-8 output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn calc_fixture() {
        let assert =
            run_main(&["calc", "--json", "tests/data/pairs.json"]).success();
        let output = stdout_of(&assert);

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Result: 2520.334236"));
        let labels: Vec<&str> = lines
            .map(|line| line.split(' ').next().unwrap_or_default())
            .collect();
        assert_eq!(labels, ["Input", "Math", "Total", "Throughput"]);
    }

    #[test]
    fn calc_fixture_with_answers() {
        run_main(&[
            "calc",
            "--json",
            "tests/data/pairs.json",
            "--bin",
            "tests/data/pairs_answer.f64",
        ])
        .success()
        .code(0);
    }

    #[test]
    fn calc_wrong_answer() {
        let assert = run_main(&[
            "calc",
            "--json",
            "tests/data/pairs.json",
            "--bin",
            "tests/data/wrong_answer.f64",
        ])
        .failure()
        .code(1);
        let stderr = stderr_of(&assert);
        assert!(stderr.contains("Answer 2"), "{stderr}");
    }

    #[test]
    fn calc_short_answer_file() {
        let assert = run_main(&[
            "calc",
            "--json",
            "tests/data/pairs.json",
            "--bin",
            "tests/data/short_answer.f64",
        ])
        .failure();
        let stderr = stderr_of(&assert);
        assert!(stderr.contains("ended before value 3"), "{stderr}");
    }

    #[test]
    fn calc_unclosed_document() {
        let assert = run_main(&["calc", "--json", "tests/data/unclosed.json"])
            .failure()
            .code(1);
        let stderr = stderr_of(&assert);
        assert!(stderr.contains("Failed to parse JSON"), "{stderr}");
        assert!(stderr.contains("Expected `,` or `]`, got EOF"), "{stderr}");
    }

    #[test]
    fn calc_wrong_schema() {
        let assert = run_main(&["calc", "--json", "tests/data/not_pairs.json"])
            .failure()
            .code(1);
        let stderr = stderr_of(&assert);
        assert!(stderr.contains("is not a document of pairs"), "{stderr}");
        assert!(stderr.contains("Missing key `pairs`"), "{stderr}");
    }

    #[test]
    fn nonexistent_file() {
        run_main(&["calc", "--json", "tests/data/does-not-exist.json"])
            .failure()
            .code(1);
    }

    #[test]
    fn generate_then_calc() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let out = dir.path().to_str().expect("utf-8 temp path");

        for extra in [None, Some("--cluster")] {
            let mut args = vec!["generate", "--size", "100", "--seed", "7", "-o", out];
            args.extend(extra);
            let assert = run_main(&args).success();
            let output = stdout_of(&assert);
            assert!(output.contains("Pair count: 100"), "{output}");
            assert!(output.contains("Random seed: 7"), "{output}");

            let expected: f64 = output
                .lines()
                .find_map(|line| line.strip_prefix("Expected sum: "))
                .expect("expected sum line")
                .parse()
                .expect("expected sum value");

            let json = dir.path().join("data_100_flex.json");
            let bin = dir.path().join("data_100_answer.f64");
            assert_eq!(std::fs::metadata(&bin).expect("answer file").len(), 101 * 8);

            let assert = run_main(&[
                "calc",
                "--json",
                json.to_str().expect("utf-8 path"),
                "--bin",
                bin.to_str().expect("utf-8 path"),
            ])
            .success();
            let output = stdout_of(&assert);
            let result: f64 = output
                .lines()
                .find_map(|line| line.strip_prefix("Result: "))
                .expect("result line")
                .parse()
                .expect("result value");
            // inputs are written with 9 decimals, so allow for the rounding
            assert!((result - expected).abs() < 1e-5, "{output}");
        }
    }

    #[test]
    fn generate_requires_positive_size() {
        run_main(&["generate", "--size", "0"]).failure().code(2);
    }

    #[test]
    fn dump_compact() {
        let assert =
            run_main(&["dump", "--compact", "tests/data/pairs.json"]).success();
        let output: Value = serde_json::from_str(stdout_of(&assert).trim())
            .expect("Failed to parse output JSON");
        let pairs = output["pairs"].as_array().expect("pairs array");
        assert_eq!(pairs.len(), 5);
        assert!((pairs[3]["x1"].as_f64().expect("number") - 121.549_765).abs() < 1e-9);
    }

    #[test]
    fn dump_depth() {
        let assert =
            run_main(&["dump", "--depth", "tests/data/pairs.json"]).success();
        let output = stdout_of(&assert);
        assert_eq!(output.lines().next(), Some("Depth: 4"));
    }

    #[test]
    fn dump_malformed() {
        let assert = run_main(&["dump", "tests/data/unclosed.json"]).failure();
        assert!(stderr_of(&assert).contains("Failed to parse JSON"));
    }

    #[test]
    fn completions() {
        let assert = run_main(&["completions", "bash"]).success();
        assert!(stdout_of(&assert).contains("haversine"));
    }
}
