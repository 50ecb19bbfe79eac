use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into `T`.

    # Arguments
    * `file_path` - path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - the parsed structure

    # Errors
    - the file does not exist or cannot be read
    - the TOML is malformed or does not fit `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path).map_err(|e| {
        anyhow!(
            "[Error][read_toml_from_file()] Failed to read '{}': {}",
            file_path,
            e
        )
    })?;

    let toml: T = toml::from_str(&toml_content).map_err(|e| {
        anyhow!(
            "[Error][read_toml_from_file()] Failed to parse '{}': {}",
            file_path,
            e
        )
    })?;

    Ok(toml)
}

#[doc = "Rounds half away from zero to two decimal places"]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
