use super::types::CompilationUnit;
use anyhow::Context;
use std::path::Path;

/// Serialization format of a parsed compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFormat {
    Yaml,
    Json,
}

impl UnitFormat {
    /// YAML for `.yaml`/`.yml` files, JSON for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => UnitFormat::Yaml,
            _ => UnitFormat::Json,
        }
    }
}

/// Parse a compilation unit from its serialized text.
///
/// YAML enums are read in single-key map form (`{simple: int}`, `{use: {name: X}}`)
/// or as bare scalars for unit variants (`tx`), the same shape JSON uses.
pub fn parse_unit(content: &str, format: UnitFormat) -> anyhow::Result<CompilationUnit> {
    let unit = match format {
        UnitFormat::Yaml => serde_yaml::with::singleton_map_recursive::deserialize(
            serde_yaml::Deserializer::from_str(content),
        )?,
        UnitFormat::Json => serde_json::from_str(content)?,
    };
    Ok(unit)
}

/// Load a compilation unit produced by the parser stage from disk.
pub fn load_unit(path: &Path) -> anyhow::Result<CompilationUnit> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read RDL unit: {}", path.display()))?;
    let unit = parse_unit(&content, UnitFormat::from_path(path))
        .with_context(|| format!("Failed to parse RDL unit: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        traits = unit.traits.len(),
        resources = unit.resources.len(),
        "Loaded compilation unit"
    );
    Ok(unit)
}
