//! Load client profiles from an advisor book CSV

use std::path::Path;

use csv::Reader;
use log::info;
use thiserror::Error;

use super::ClientProfile;

/// A profile CSV could not be read
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read client profiles: {0}")]
    Csv(#[from] csv::Error),
}

/// Load all client profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<ClientProfile>, LoadError> {
    let reader = Reader::from_path(path.as_ref())?;
    let profiles = collect_profiles(reader)?;
    info!(
        "loaded {} client profile(s) from {}",
        profiles.len(),
        path.as_ref().display()
    );
    Ok(profiles)
}

/// Load profiles from any reader (e.g. a string buffer or network stream)
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<ClientProfile>, LoadError> {
    collect_profiles(Reader::from_reader(reader))
}

fn collect_profiles<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<ClientProfile>, LoadError> {
    let mut profiles = Vec::new();
    for result in reader.deserialize() {
        let profile: ClientProfile = result?;
        profiles.push(profile);
    }
    Ok(profiles)
}
