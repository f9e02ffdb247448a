use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;

pub mod inspect;
pub mod pack;
pub mod perft;
pub mod show;
pub mod starter;
pub mod validate;

pub fn read_pack_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read pack {}", path.display()))
}

pub fn write_pack_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write pack {}", path.display()))
}

/// Writes `<index_root>/index/<pack name>/theme_<theme>.bit` for every theme.
pub fn write_theme_index(
    index_root: &Path,
    pack_path: &Path,
    bitsets: &BTreeMap<String, Vec<u8>>,
) -> anyhow::Result<()> {
    let pack_name = pack_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("Output path has no file name")?;
    let dir = index_root.join("index").join(pack_name);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    for (theme, bits) in bitsets {
        let path = dir.join(format!("theme_{theme}.bit"));
        fs::write(&path, bits).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
