use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the game's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let exe_dir = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf));
    data_root_candidates(exe_dir.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("gallows_engine/data"))
}

/// Directories probed for data files, in order of preference.
fn data_root_candidates(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    // workspace root and flattened `data/`
    let mut candidates = vec![PathBuf::from("gallows_engine/data"), PathBuf::from("data")];

    if let Some(dir) = exe_dir {
        candidates.push(dir.join("gallows_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("gallows_engine/data"));
            candidates.push(parent.join("data"));
        }
    }
    candidates
}
