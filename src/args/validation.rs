use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    let files = file.split(';').map(str::trim).filter(|f| !f.is_empty());
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the clubs json format
/// format we expect is this:
/// [{ "name": "Driver", "claimedDistance": <int> }, { "name": "Wedge 56°" }, ...]
///
/// `claimedDistance` is optional but must be a positive integer when present.
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(clubs) = json.as_array() else {
        return Err("The json file is not in the correct format. Expected a list of clubs.".to_string());
    };

    let expected_keys = ["name", "claimedDistance"];
    for club in clubs {
        let Some(fields) = club.as_object() else {
            return Err(
                "The json file is not in the correct format. Expected objects.".to_string(),
            );
        };
        if let Some(key) = fields.keys().find(|k| !expected_keys.contains(&k.as_str())) {
            return Err(format!(
                "The json key {key} is not expected. Expected keys: {expected_keys:?}"
            ));
        }
        match fields.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => {}
            _ => {
                return Err(
                    "The json key name is not in the correct format. Expected a non-empty string."
                        .to_string(),
                );
            }
        }
        match fields.get("claimedDistance") {
            None | Some(Value::Null) => {}
            Some(distance) => {
                let positive = distance
                    .as_u64()
                    .is_some_and(|d| d > 0 && u32::try_from(d).is_ok());
                if !positive {
                    return Err(
                        "The json key claimedDistance is not in the correct format. Expected a positive integer."
                            .to_string(),
                    );
                }
            }
        }
    }

    Ok(())
}
