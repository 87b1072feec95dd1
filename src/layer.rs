//! Layer holding the process types contributed at launch

use crate::error::BuildpackError;
use crate::fs::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layer sub-directory name inside the layers directory
pub const PROCESSES_LAYER: &str = "processes";

/// Flags recorded in the layer's `layer.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMetadata {
    pub launch: bool,
    pub build: bool,
    pub cache: bool,
}

impl LayerMetadata {
    /// Available at launch only, never cached between builds
    pub fn launch_only() -> Self {
        Self {
            launch: true,
            build: false,
            cache: false,
        }
    }
}

/// Creates the processes layer and writes its metadata, returning the layer path
pub fn write_processes_layer(
    fs: &dyn FileSystem,
    layers_dir: &Path,
) -> Result<PathBuf, BuildpackError> {
    let layer_dir = layers_dir.join(PROCESSES_LAYER);
    fs.create_dir_all(&layer_dir)
        .map_err(|source| BuildpackError::Io {
            path: layer_dir.clone(),
            source,
        })?;

    let metadata_path = layer_dir.join("layer.toml");
    let content = toml::to_string(&LayerMetadata::launch_only())?;
    fs.write(&metadata_path, &content)
        .map_err(|source| BuildpackError::Io {
            path: metadata_path,
            source,
        })?;

    Ok(layer_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_launch_only_flags() {
        let metadata = LayerMetadata::launch_only();
        assert!(metadata.launch);
        assert!(!metadata.build);
        assert!(!metadata.cache);
    }

    #[test]
    fn test_write_processes_layer() {
        let fs = MockFileSystem::new();
        let layer_dir = write_processes_layer(&fs, Path::new("/layers")).unwrap();
        assert_eq!(layer_dir, PathBuf::from("/layers/processes"));

        let content = fs.file_content("/layers/processes/layer.toml").unwrap();
        let metadata: LayerMetadata = toml::from_str(&content).unwrap();
        assert_eq!(metadata, LayerMetadata::launch_only());
        assert!(content.contains("launch = true"));
    }
}
