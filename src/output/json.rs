use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Pretty JSON of any serializable view.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write JSON to `output_file`, creating parent directories, or to stdout.
pub fn output_json<T: Serialize + ?Sized>(value: &T, output_file: Option<&Path>) -> Result<()> {
    let json = to_json(value)?;
    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
    } else {
        println!("{json}");
    }
    Ok(())
}
