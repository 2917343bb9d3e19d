//! Checks that every source file has a unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    /// Files that only wire modules together or start a binary
    fn is_structural(relative_path: &str) -> bool {
        let file_name = Path::new(relative_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();

        if dir.is_dir() {
            for entry_result in fs::read_dir(dir)? {
                let path = entry_result?.path();
                let relative_path = path
                    .strip_prefix(base)
                    .map_err(|_prefix_error| io::Error::other("Failed to strip prefix"))?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative_path);
                    paths.extend(collect_relative_paths(&path, base)?);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative_path);
                }
            }
        }

        Ok(paths)
    }

    fn source_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src_dir = Path::new(SRC_DIR);
        let unit_dir = Path::new(UNIT_DIR);
        let src_paths = collect_relative_paths(src_dir, src_dir).unwrap_or_default();
        let unit_paths = collect_relative_paths(unit_dir, unit_dir).unwrap_or_default();
        assert!(!src_paths.is_empty(), "Failed to read {SRC_DIR}");
        (src_paths, unit_paths)
    }

    // Tests each src file has a mirrored file under tests/unit
    // Verified by deleting tests/unit/layer/tagged.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, unit_paths) = source_and_unit_paths();

        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| !is_structural(path) && !unit_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its src file
    // Verified by adding tests/unit/layer/legacy.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, unit_paths) = source_and_unit_paths();

        let orphaned: Vec<String> = unit_paths
            .iter()
            .filter(|path| !is_structural(path) && !src_paths.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without src counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    fn files_without_tests(dir: &Path, found: &mut Vec<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                files_without_tests(&path, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs")
                && !is_structural(&path.to_string_lossy())
                && !fs::read_to_string(&path)?.contains("#[test]")
            {
                found.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }

    // Tests every non-structural test file declares at least one test
    // Verified by emptying tests/unit/io/logging.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let mut found = Vec::new();
        let scan = files_without_tests(Path::new(TESTS_DIR), &mut found);
        assert!(scan.is_ok(), "Failed to scan {TESTS_DIR}: {scan:?}");

        assert!(
            found.is_empty(),
            "Test files without any #[test] function:\n{}",
            found.join("\n")
        );
    }
}
