//! File Set Resolution
//!
//! Expands an ordered list of file or directory references into the concrete
//! relative paths a run will test. References that do not resolve are skipped
//! with a diagnostic, never an error; duplicates are kept as-is, so a
//! reference listed twice is tested twice.

use crate::capture::RunLog;
use std::path::Path;

/// Resolve references against `root` into an ordered list of relative paths.
///
/// Directories are enumerated one level deep with entries sorted by name
/// (platform `readdir` order is not deterministic); only files whose
/// extension appears in `extensions` survive, for directory entries and
/// direct references alike.
pub fn resolve_file_set(
    references: &[String],
    root: &Path,
    extensions: &[String],
    log: &mut RunLog,
) -> Vec<String> {
    let mut resolved = Vec::new();

    for reference in references {
        let full = root.join(reference);
        if !full.exists() {
            log.line(&format!("Skipping: {reference} (not found)"));
            continue;
        }

        if full.is_dir() {
            let mut names = match list_dir(&full) {
                Ok(names) => names,
                Err(err) => {
                    log.line(&format!("Skipping: {reference} (unreadable: {err})"));
                    continue;
                }
            };
            names.sort();
            for name in names {
                if has_accepted_extension(Path::new(&name), extensions) {
                    resolved.push(format!("{reference}/{name}"));
                }
            }
        } else if has_accepted_extension(&full, extensions) {
            resolved.push(reference.clone());
        } else {
            log.line(&format!("Skipping: {reference} (invalid extension)"));
        }
    }

    resolved
}

fn list_dir(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

fn has_accepted_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let dotted = format!(".{}", ext.to_string_lossy().to_lowercase());
    extensions.iter().any(|accepted| accepted == &dotted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goudbench_oracle::LogLevel;

    fn txt_json() -> Vec<String> {
        vec![".txt".to_string(), ".json".to_string()]
    }

    #[test]
    fn directory_entries_are_filtered_and_ordered() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("c.bin"), b"x").unwrap();
        std::fs::write(dir.join("b.json"), b"{}").unwrap();
        std::fs::write(dir.join("a.txt"), b"x").unwrap();

        let mut log = RunLog::new(LogLevel::None);
        let resolved = resolve_file_set(
            &["data".to_string()],
            tmp.path(),
            &txt_json(),
            &mut log,
        );

        assert_eq!(resolved, ["data/a.txt", "data/b.json"]);
    }

    #[test]
    fn missing_reference_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let mut log = RunLog::new(LogLevel::Debug);
        let resolved = resolve_file_set(
            &["ghost.txt".to_string()],
            tmp.path(),
            &txt_json(),
            &mut log,
        );

        assert!(resolved.is_empty());
        assert_eq!(log.captured(), ["Skipping: ghost.txt (not found)"]);
    }

    #[test]
    fn rejected_extension_is_diagnosed() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("blob.bin"), b"x").unwrap();

        let mut log = RunLog::new(LogLevel::Debug);
        let resolved = resolve_file_set(
            &["blob.bin".to_string()],
            tmp.path(),
            &txt_json(),
            &mut log,
        );

        assert!(resolved.is_empty());
        assert_eq!(log.captured(), ["Skipping: blob.bin (invalid extension)"]);
    }

    #[test]
    fn duplicate_references_stay_duplicated() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("twice.txt"), b"x").unwrap();

        let mut log = RunLog::new(LogLevel::None);
        let refs = vec!["twice.txt".to_string(), "twice.txt".to_string()];
        let resolved = resolve_file_set(&refs, tmp.path(), &txt_json(), &mut log);

        assert_eq!(resolved, ["twice.txt", "twice.txt"]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("UPPER.TXT"), b"x").unwrap();

        let mut log = RunLog::new(LogLevel::None);
        let resolved = resolve_file_set(
            &["UPPER.TXT".to_string()],
            tmp.path(),
            &txt_json(),
            &mut log,
        );

        assert_eq!(resolved, ["UPPER.TXT"]);
    }
}
