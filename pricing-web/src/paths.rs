//! Helpers for constructing URLs to static assets that respect the deployment base path.
use pricing_core::Resource;

/// Directory, relative to the base path, holding the JSON resources.
const DATA_DIR: &str = "data";

/// Prefix `relative` with the compile-time `PUBLIC_URL` base path.
///
/// Local builds without `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Default URL of one of the three catalog resources.
#[must_use]
pub fn data_path(resource: Resource) -> String {
    asset_path(&format!("{DATA_DIR}/{}", resource.file_name()))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
