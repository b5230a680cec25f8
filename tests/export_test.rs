use serde_json::{Value, json};
use spotex::{
    management::{csv_columns, write_csv, write_json},
    types::{FeatureRecord, PlaylistItem},
};
use tempfile::tempdir;

fn record(value: Value) -> FeatureRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {}", other),
    }
}

#[tokio::test]
async fn test_write_json_array_of_items() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracks.json");
    let items = vec![
        PlaylistItem(json!({ "track": { "id": "a", "name": "One" } })),
        PlaylistItem(json!({ "track": { "id": null }, "is_local": true })),
    ];

    write_json(&path, &items).await.unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!([
            { "track": { "id": "a", "name": "One" } },
            { "track": { "id": null }, "is_local": true }
        ])
    );
}

#[tokio::test]
async fn test_write_json_overwrites_and_creates_parents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/out/tracks.json");

    write_json(&path, &[1, 2, 3]).await.unwrap();
    write_json(&path, &[4]).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n  4\n]");
}

#[tokio::test]
async fn test_write_csv_header_is_key_union() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("features.csv");
    let records = vec![
        record(json!({ "id": "a", "tempo": 120.5, "mode": 1 })),
        record(json!({ "id": "b", "energy": 0.8, "type": "audio_features" })),
    ];

    write_csv(&path, &records).await.unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let header: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    let mut sorted = header.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["energy", "id", "mode", "tempo", "type"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);

    let column = |name: &str| header.iter().position(|h| h == name).unwrap();
    assert_eq!(&rows[0][column("id")], "a");
    assert_eq!(&rows[0][column("tempo")], "120.5");
    assert_eq!(&rows[0][column("energy")], "");
    assert_eq!(&rows[1][column("type")], "audio_features");
    assert_eq!(&rows[1][column("mode")], "");
}

#[tokio::test]
async fn test_write_csv_overwrites_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("features.csv");

    let many: Vec<FeatureRecord> = (0..5)
        .map(|i| record(json!({ "id": format!("t{}", i) })))
        .collect();
    write_csv(&path, &many).await.unwrap();
    write_csv(&path, &many[..1]).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "id\nt0\n");
}

#[tokio::test]
async fn test_write_csv_without_records_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("features.csv");

    write_csv(&path, &[]).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_csv_columns_first_seen_order() {
    let records = vec![
        record(json!({ "b": 1 })),
        record(json!({ "a": 1, "b": 2 })),
        record(json!({ "c": null })),
    ];

    assert_eq!(csv_columns(&records), vec!["b", "a", "c"]);
}
