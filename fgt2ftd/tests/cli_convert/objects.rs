use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

fn convert_fixture(name: &str) -> Value {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("ftd.json");

    fgt2ftd()
        .arg(fixture(name))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .assert()
        .success();

    read_json(&output_path)
}

#[test]
fn list_of_records_addresses_convert() {
    let json = convert_fixture("fixtures/fortigate-basic.yaml");

    assert_eq!(
        json["network_objects"],
        json!([
            {
                "name": "Server1",
                "description": "Production web server",
                "type": "networkobject",
                "subType": "HOST",
                "value": "192.168.1.10/32"
            },
            {
                "name": "Network1",
                "description": "",
                "type": "networkobject",
                "subType": "NETWORK",
                "value": "10.0.0.0/16"
            },
            {
                "name": "ServerRange",
                "description": "",
                "type": "networkobject",
                "subType": "RANGE",
                "value": "192.168.1.10-192.168.1.20"
            },
            {
                "name": "WebServer",
                "description": "",
                "type": "networkobject",
                "subType": "FQDN",
                "value": "www.example.com"
            }
        ])
    );
}

#[test]
fn named_map_addresses_convert() {
    let json = convert_fixture("fixtures/fortigate-named.yaml");

    let summary: Vec<(String, String, String)> = json["network_objects"]
        .as_array()
        .expect("array")
        .iter()
        .map(|o| {
            (
                o["name"].as_str().unwrap_or_default().to_string(),
                o["subType"].as_str().unwrap_or_default().to_string(),
                o["value"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("LAN_NET".to_string(), "NETWORK".to_string(), "172.16.0.0/20".to_string()),
            ("MGMT_HOST".to_string(), "HOST".to_string(), "172.16.1.5/32".to_string()),
            (
                "DHCP_POOL".to_string(),
                "RANGE".to_string(),
                "172.16.2.100-172.16.2.200".to_string()
            ),
        ]
    );
}

#[test]
fn groups_services_and_policies_convert() {
    let json = convert_fixture("fixtures/fortigate-basic.yaml");

    assert_eq!(
        json["network_groups"][0],
        json!({
            "name": "Servers",
            "description": "All servers",
            "type": "networkobjectgroup",
            "objects": [{"name": "Server1"}, {"name": "ServerRange"}, {"name": "WebServer"}]
        })
    );
    assert_eq!(
        json["port_objects"],
        json!([
            {"name": "HTTPS", "description": "", "type": "portobject", "protocol": "TCP", "port": "443"},
            {"name": "DNS", "description": "", "type": "portobject", "protocol": "UDP", "port": "53"},
            {"name": "ANY_PROTO", "description": "", "type": "portobject", "protocol": "TCP", "port": "any"}
        ])
    );
    assert_eq!(json["port_groups"][0]["type"], "portobjectgroup");
    assert_eq!(
        json["port_groups"][0]["objects"],
        json!([{"name": "HTTPS"}, {"name": "DNS"}])
    );

    assert_eq!(
        json["access_policies"][0],
        json!({
            "name": "Allow-Web",
            "ruleAction": "ALLOW",
            "enabled": true,
            "sourceZones": [{"name": "port1"}],
            "destinationZones": [{"name": "port2"}],
            "sourceNetworks": [{"name": "Network1"}],
            "destinationNetworks": [{"name": "Servers"}],
            "sourcePorts": [{"name": "Web"}],
            "logBegin": true,
            "logEnd": true
        })
    );
    assert_eq!(json["access_policies"][1]["name"], "Rule_2");
    assert_eq!(json["access_policies"][1]["ruleAction"], "BLOCK");
    assert_eq!(json["access_policies"][1]["enabled"], false);
    assert_eq!(json["access_policies"][1]["logBegin"], false);

    assert_eq!(
        json["nat_policies"],
        json!([{
            "name": "NAT_1",
            "natType": "DYNAMIC",
            "sourceInterface": "port1",
            "destinationInterface": "port2",
            "originalSource": [{"name": "Network1"}],
            "originalDestination": [{"name": "Servers"}],
            "translatedSource": "pool-outbound"
        }])
    );
}
