use std::{fs, path::Path};

use crate::{Track, TrackError, TrackSpec};

/// Read a track description from a YAML file without building it.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<TrackSpec, TrackError> {
    Ok(serde_yaml::from_str(&fs::read_to_string(path)?)?)
}

/// Read and build a track from a YAML file.
pub fn compile_yaml(path: impl AsRef<Path>) -> Result<Track, TrackError> {
    load_yaml(path)?.compile()
}

/// Write `track` with its coins spelled out, so a generated track reloads
/// to the same values without its generator.
pub fn save_yaml(path: impl AsRef<Path>, track: &Track) -> Result<(), TrackError> {
    fs::write(path, serde_yaml::to_string(&TrackSpec::from(track))?)?;
    Ok(())
}
