use super::*;

#[test]
fn convert_fixture_writes_all_six_sections() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("ftd.json");

    fgt2ftd()
        .arg(fixture("fixtures/fortigate-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully converted configuration"))
        .stdout(predicate::str::contains("Network Objects: 4"))
        .stdout(predicate::str::contains("Access Policies: 2"))
        .stdout(predicate::str::contains("NAT Policies: 1"));

    let json = read_json(&output_path);
    let keys: Vec<&str> = json
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys.len(),
        6,
        "expected six top-level sections, got {keys:?}"
    );
    for key in [
        "network_objects",
        "network_groups",
        "port_objects",
        "port_groups",
        "access_policies",
        "nat_policies",
    ] {
        assert!(json[key].is_array(), "{key} should be an array");
    }
}

#[test]
fn default_output_is_ftd_config_json() {
    let dir = tempdir().expect("tempdir");

    fgt2ftd()
        .current_dir(dir.path())
        .arg(fixture("fixtures/fortigate-basic.yaml"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("ftd_config.json").exists());
}

#[test]
fn pretty_and_compact_differ_only_in_whitespace() {
    let dir = tempdir().expect("tempdir");
    let compact = dir.path().join("compact.json");
    let pretty = dir.path().join("pretty.json");

    fgt2ftd()
        .arg(fixture("fixtures/fortigate-basic.yaml"))
        .arg("-o")
        .arg(path_as_str(&compact))
        .assert()
        .success();
    fgt2ftd()
        .arg(fixture("fixtures/fortigate-basic.yaml"))
        .arg("-o")
        .arg(path_as_str(&pretty))
        .arg("-p")
        .assert()
        .success();

    let compact_raw = fs::read_to_string(&compact).expect("compact");
    let pretty_raw = fs::read_to_string(&pretty).expect("pretty");
    assert_eq!(compact_raw.lines().count(), 1);
    assert!(pretty_raw.lines().count() > 1);
    assert_eq!(read_json(&compact), read_json(&pretty));
}

#[test]
fn verbose_logs_each_converted_object() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("ftd.json");

    fgt2ftd()
        .arg(fixture("fixtures/fortigate-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("converted address"))
        .stderr(predicate::str::contains("Server1"));
}

#[test]
fn action_map_file_extends_defaults() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("fortigate.yaml");
    let actions = dir.path().join("actions.toml");
    let output_path = dir.path().join("ftd.json");

    fs::write(
        &input,
        "firewall:\n  policy:\n    - policyid: 1\n      action: ipsec\n    - policyid: 2\n      action: accept\n",
    )
    .expect("write input");
    fs::write(
        &actions,
        "[[action]]\nkeyword = \"ipsec\"\nrule_action = \"ALLOW\"\n",
    )
    .expect("write actions");

    fgt2ftd()
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--action-map")
        .arg(path_as_str(&actions))
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded action map").and(predicate::str::contains("entries=5")));

    let json = read_json(&output_path);
    assert_eq!(json["access_policies"][0]["ruleAction"], "ALLOW");
    assert_eq!(json["access_policies"][1]["ruleAction"], "ALLOW");
}
