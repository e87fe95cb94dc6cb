use std::path::Path;

/// Read & deserialize a JSON file.
pub async fn read_json<T: serde::de::DeserializeOwned>(
    path: impl AsRef<Path>,
) -> std::io::Result<T> {
    let file = tokio::fs::read(path).await?;
    let data: T = serde_json::from_slice(&file)?;
    Ok(data)
}

/// Serialize `data` to `path` via a sibling `.json.tmp` file and a rename.
pub async fn write_json<T: serde::Serialize>(
    path: impl AsRef<Path>,
    data: &T,
) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }

    let bytes = serde_json::to_vec_pretty(data)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
