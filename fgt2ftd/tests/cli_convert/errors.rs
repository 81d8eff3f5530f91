use super::*;

#[test]
fn missing_input_fails() {
    let dir = tempdir().expect("tempdir");

    fgt2ftd()
        .arg(path_as_str(&dir.path().join("absent.yaml")))
        .arg("--output")
        .arg(path_as_str(&dir.path().join("ftd.json")))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn malformed_yaml_fails() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("broken.yaml");
    fs::write(&input, "firewall:\n  address: [\n").expect("write");

    fgt2ftd()
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&dir.path().join("ftd.json")))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse YAML"));
}

#[test]
fn non_mapping_top_level_fails() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("list.yaml");
    fs::write(&input, "- firewall\n").expect("write");

    fgt2ftd()
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&dir.path().join("ftd.json")))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be a mapping"));
}

#[test]
fn unwritable_output_fails() {
    let dir = tempdir().expect("tempdir");

    fgt2ftd()
        .arg(fixture("fixtures/fortigate-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&dir.path().join("missing-dir").join("ftd.json")))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to write output JSON"));
}

#[test]
fn refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("fortigate.yaml");
    fs::write(&input, "firewall: {}\n").expect("write");

    fgt2ftd()
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite input file"));

    assert_eq!(fs::read_to_string(&input).expect("read"), "firewall: {}\n");
}

#[test]
fn conversion_warnings_do_not_fail_the_run() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("fortigate.yaml");
    let output_path = dir.path().join("ftd.json");
    fs::write(
        &input,
        "firewall:\n  address:\n    - name: Bad\n      subnet: \"10.0.0.0 255.255.255.abc\"\n",
    )
    .expect("write");

    fgt2ftd()
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("255.255.255.abc"))
        .stdout(predicate::str::contains("Warnings: 1"));

    let json = read_json(&output_path);
    assert_eq!(json["network_objects"][0]["value"], "10.0.0.0/32");
}
