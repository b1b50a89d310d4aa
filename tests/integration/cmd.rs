// SPDX-FileCopyrightText: 2026 oddeven developers
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use simple_test_case::test_case;

#[test_case(vec!["diff", "2", "4", "6", "8", "10"], "-5\n"; "all even")]
#[test_case(vec!["diff"], "0\n"; "no values")]
#[test_case(vec!["list"], "OddEvenDiff\n"; "list templates")]
#[test]
fn smoke_oddeven_cli(args: Vec<&str>, expect: &str) {
    Command::cargo_bin("oddeven")
        .unwrap()
        .args(args)
        .env("RUST_LOG", "error")
        .assert()
        .success()
        .stdout(expect.to_string());
}
