//! Detection of a system-installed UPX.

use std::path::PathBuf;

/// Name of the UPX command on the executable search path.
pub const TOOL_NAME: &str = "upx";

/// Resolves `name` on the current process's `PATH`.
///
/// Absence is an expected outcome and yields `None`.
pub fn locate_tool(name: &str) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => {
            log::debug!("Found {} at: {}", name, path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::locate_tool;

    #[test]
    fn missing_tool_is_none() {
        assert_eq!(locate_tool("upx-not-installed-on-this-machine"), None);
    }

    #[test]
    fn executable_given_by_absolute_path_is_found() {
        let exe = std::env::current_exe().unwrap();
        let found = locate_tool(exe.to_str().unwrap()).unwrap();

        assert_eq!(found.file_name(), exe.file_name());
    }
}
