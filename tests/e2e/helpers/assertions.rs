use serde_json::Value;
use uuid::Uuid;

/// Assert `filename` is `speech_<uuid>` and return the uuid part
pub fn assert_generated_filename(filename: &str) -> Uuid {
    let id = filename
        .strip_prefix("speech_")
        .unwrap_or_else(|| panic!("Filename '{}' lacks the speech_ prefix", filename));
    assert!(
        !id.ends_with(".mp3"),
        "Filename '{}' should not carry an extension",
        filename
    );
    Uuid::parse_str(id).unwrap_or_else(|_| panic!("Filename '{}' does not end in a uuid", filename))
}

pub fn assert_synthesis_response(body: &Value) -> (String, String) {
    let audio = body
        .get("audio")
        .and_then(|v| v.as_str())
        .expect("Missing audio field");
    let filename = body
        .get("filename")
        .and_then(|v| v.as_str())
        .expect("Missing filename field");

    assert!(!audio.is_empty(), "Audio should not be empty");
    assert_generated_filename(filename);

    (audio.to_string(), filename.to_string())
}

pub fn assert_upload_response(body: &Value, bucket: &str, filename: &str) {
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some("File uploaded successfully!")
    );
    assert_eq!(
        body.get("file_url").and_then(|v| v.as_str()),
        Some(format!("https://{}.s3.amazonaws.com/{}.mp3", bucket, filename).as_str())
    );
}
