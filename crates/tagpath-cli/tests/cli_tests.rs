use assert_cmd::Command;
use predicates::prelude::*;

fn tagpath() -> Command {
    Command::cargo_bin("tagpath").expect("binary builds")
}

#[test]
fn resolves_queries_from_stdin() {
    let input = "2 3\n<tag1 v1=\"123\" v2=\"43.4\">\n<tag2 name=\"x\"></tag2></tag1>\ntag1~v2\ntag1.tag2~name\ntag1.tag0~v1\n";
    tagpath()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("43.4\nx\nNot Found!\n");
}

#[test]
fn query_without_attribute_prints_nothing() {
    let input = "1 1\n<a value=\"GoodVal\"><c height=\"auto\"></c></a>\na.c\n";
    tagpath().write_stdin(input).assert().success().stdout("");
}

#[test]
fn reads_and_writes_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("queries.txt");
    let output_path = dir.path().join("answers.txt");
    std::fs::write(
        &input_path,
        "1 2\n<a value=\"GoodVal\"><c height=\"auto\"></c></a>\na.c~height\na~value\n",
    )?;

    tagpath()
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();

    let answers = std::fs::read_to_string(&output_path)?;
    assert_eq!(answers, "auto\nGoodVal\n");
    Ok(())
}

#[test]
fn strict_flag_rejects_mismatched_close_tags() {
    let input = "1 1\n<a></b>\na~x\n";
    tagpath()
        .arg("--strict")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("mismatched close tag"));
}

#[test]
fn empty_stdin_is_an_error() {
    tagpath()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided"));
}
