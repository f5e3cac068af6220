use std::fs;

use tempfile::TempDir;

use quota_ingest::load_rows;

#[test]
fn loads_realistic_request_dump() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("requests.csv");
    fs::write(
        &path,
        concat!(
            "Original ID,Subscription ID,Request Type,VM Type,Region,Zone,Cores,Status\n",
            "1,sub-001,Zonal Enablement,,eastus,2,16,Approved\n",
            "2,,Quota,Dv3,westus,,8,In Progress\n",
            "3,sub-003,Region Enablement,Ev5,brazilsouth,,,Rejected\n",
        ),
    )
    .expect("write csv");

    let rows = load_rows(&path).expect("load rows");
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].original_id(), "1");
    assert_eq!(rows[0].trimmed("Request Type"), "Zonal Enablement");
    assert!(rows[0].cell("VM Type").is_missing());
    assert_eq!(rows[0].trimmed("Zone"), "2");

    assert_eq!(rows[1].original_id(), "2");
    assert!(rows[1].cell("Subscription ID").is_missing());
    assert_eq!(rows[1].trimmed("Status"), "In Progress");

    assert_eq!(rows[2].original_id(), "3");
    assert!(rows[2].cell("Cores").is_missing());
}

#[test]
fn json_and_csv_dumps_agree_on_shape() {
    let dir = TempDir::new().expect("temp dir");
    let csv_path = dir.path().join("requests.csv");
    let json_path = dir.path().join("requests.json");
    fs::write(&csv_path, "Original ID,Request Type,Cores\n9,Quota,4\n").expect("write csv");
    fs::write(
        &json_path,
        r#"[{"Original ID": "9", "Request Type": "Quota", "Cores": 4}]"#,
    )
    .expect("write json");

    let from_csv = load_rows(&csv_path).expect("csv rows");
    let from_json = load_rows(&json_path).expect("json rows");
    assert_eq!(from_csv.len(), 1);
    assert_eq!(from_json.len(), 1);
    assert_eq!(from_csv[0].original_id(), from_json[0].original_id());
    assert_eq!(from_csv[0].trimmed("Cores"), from_json[0].trimmed("Cores"));
    assert_eq!(
        from_csv[0].headers().collect::<Vec<_>>(),
        from_json[0].headers().collect::<Vec<_>>()
    );
}
