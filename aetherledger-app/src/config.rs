use aetherledger_core::catalog;
use aetherledger_schemas::{
    advisor::{FilterEffectiveness, FilterSolution, RecommendedLocation},
    file_formats::{FilterFile, FootprintFile, HotspotFile, LocationFile},
    footprint::FootprintInput,
    hotspot::HotspotRecord,
};
use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub const DATA_DIR_ENV: &str = "AETHERLEDGER_DATA_DIR";
pub const OUTPUT_DIR_ENV: &str = "AETHERLEDGER_OUTPUT_DIR";

/// Where to read the knowledge base from and where to write run artefacts.
#[derive(Debug, Clone, PartialEq)]
pub struct AppCfg {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./aetherledger-app/data"),
            output_dir: PathBuf::from("./runs"),
        }
    }
}

impl AppCfg {
    /// Built from defaults, then environment variables, then explicit flags.
    pub fn resolve(data_flag: Option<PathBuf>, output_flag: Option<PathBuf>) -> Self {
        let mut c = Self::default();
        if let Ok(v) = env::var(DATA_DIR_ENV) { c.data_dir = PathBuf::from(v); }
        if let Ok(v) = env::var(OUTPUT_DIR_ENV) { c.output_dir = PathBuf::from(v); }
        if let Some(v) = data_flag { c.data_dir = v; }
        if let Some(v) = output_flag { c.output_dir = v; }
        c
    }
}

/// All reference data for a run: hotspots, advisor locations and filters.
/// Each part comes from YAML under the data directory when present, and from
/// the built-in catalogue otherwise.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub hotspots: Vec<HotspotRecord>,
    pub locations: Vec<RecommendedLocation>,
    pub filter_solutions: Vec<FilterSolution>,
    pub filter_effectiveness: Vec<FilterEffectiveness>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            hotspots: catalog::baseline_hotspots(),
            locations: catalog::recommended_locations(),
            filter_solutions: catalog::filter_solutions(),
            filter_effectiveness: catalog::filter_effectiveness(),
        }
    }
}

impl KnowledgeBase {
    /// Loads all data from the specified base directory.
    pub fn load(base_path: &Path) -> Result<Self> {
        tracing::info!("Loading knowledge base from '{}'", base_path.display());
        let mut kb = Self::default();

        if let Some(files) = load_yaml_files::<HotspotFile>(base_path.join("hotspots"))? {
            kb.hotspots = sorted_by_id(files.into_iter().flat_map(|f| f.hotspots), |h| h.id);
        }
        if let Some(files) = load_yaml_files::<LocationFile>(base_path.join("locations"))? {
            kb.locations = sorted_by_id(files.into_iter().flat_map(|f| f.locations), |l| l.id);
        }
        if let Some(files) = load_yaml_files::<FilterFile>(base_path.join("filters"))? {
            let (solutions, effectiveness): (Vec<_>, Vec<_>) =
                files.into_iter().map(|f| (f.solutions, f.effectiveness)).unzip();
            kb.filter_solutions = solutions.into_iter().flatten().collect();
            kb.filter_effectiveness = effectiveness.into_iter().flatten().collect();
        }

        tracing::info!(
            hotspots = kb.hotspots.len(),
            locations = kb.locations.len(),
            filters = kb.filter_solutions.len(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }
}

/// Reads a footprint form from a YAML file.
pub fn load_footprint_input(path: &Path) -> Result<FootprintInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read footprint input: {:?}", path))?;
    let file: FootprintFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
    Ok(file.footprint)
}

/// Later records replace earlier ones with the same id.
fn sorted_by_id<T, I, K>(items: I, get_key: K) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Fn(&T) -> u32,
{
    let mut map = std::collections::BTreeMap::new();
    for item in items {
        map.insert(get_key(&item), item);
    }
    map.into_values().collect()
}

/// Parses every YAML file in a directory, in file-name order. A missing
/// directory, or one without YAML files, yields `None`.
fn load_yaml_files<F>(dir_path: PathBuf) -> Result<Option<Vec<F>>>
where
    F: for<'de> serde::Deserialize<'de>,
{
    if !dir_path.is_dir() {
        tracing::debug!("No directory at {:?}, using built-in data", dir_path);
        return Ok(None);
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(&dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            paths.push(path);
        }
    }
    paths.sort();
    if paths.is_empty() {
        tracing::debug!("No YAML files in {:?}, using built-in data", dir_path);
        return Ok(None);
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(&path)?;
        let file: F = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
        files.push(file);
    }
    Ok(Some(files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn empty_directory_falls_back_to_catalogue() {
        let dir = tempdir().unwrap();
        let kb = KnowledgeBase::load(dir.path()).unwrap();
        assert_eq!(kb.hotspots, catalog::baseline_hotspots());
        assert_eq!(kb.locations.len(), 4);
        assert_eq!(kb.filter_effectiveness.len(), 5);
    }

    #[test]
    fn reads_hotspots_from_yaml() {
        let dir = tempdir().unwrap();
        create_dir(dir.path().join("hotspots")).unwrap();
        {
            let mut file = File::create(dir.path().join("hotspots/port.yaml")).unwrap();
            writeln!(
                file,
                r#"schema_version: "1"
hotspots:
  - id: 9
    name: Port Rashid
    source: Shipping emissions
    category: Industrial
    position: {{ lat: 25.27, lng: 55.27 }}
    radius_m: 8000
    intensity: 75
    population: 20000
    risk: High"#
            )
            .unwrap();
        }

        let kb = KnowledgeBase::load(dir.path()).unwrap();
        assert_eq!(kb.hotspots.len(), 1);
        assert_eq!(kb.hotspots[0].name, "Port Rashid");
        assert_eq!(kb.locations, catalog::recommended_locations());
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let dir = tempdir().unwrap();
        create_dir(dir.path().join("locations")).unwrap();
        fs::write(dir.path().join("locations/bad.yaml"), "locations: [").unwrap();
        let err = KnowledgeBase::load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse YAML"));
    }

    #[test]
    fn reads_footprint_form() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("me.yaml");
        fs::write(
            &path,
            r#"schema_version: "1"
footprint:
  transport: { car_type: electric, weekly_km: 40, public_transport: 2 }
  home: { electricity_kwh: 180, gas_usage: 0, renewable_percentage: 100, occupants: 1 }
  work: { work_from_home: 5, office_type: leed, company_size: small }
  lifestyle: { meat_consumption: none, shopping: minimal, flights: 0 }
"#,
        )
        .unwrap();
        let input = load_footprint_input(&path).unwrap();
        assert_eq!(input.home.renewable_percentage, 100.0);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = AppCfg::resolve(Some(PathBuf::from("/kb")), Some(PathBuf::from("/out")));
        assert_eq!(cfg.data_dir, PathBuf::from("/kb"));
        assert_eq!(cfg.output_dir, PathBuf::from("/out"));
    }
}
