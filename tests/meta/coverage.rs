//! Keeps `tests/unit/` a mirror of `src/`: every source file has a unit test
//! file at the same relative path, and every unit test file has a source.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Entry points and module wiring carry no logic of their own
    fn is_wiring(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn walk(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                out.insert(relative);
                walk(&path, base, out)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.insert(relative);
            }
        }
        Ok(())
    }

    fn tree(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        let mut out = BTreeSet::new();
        if base.exists() {
            walk(base, base, &mut out)
                .unwrap_or_else(|error| unreachable!("failed to scan {root}: {error}"));
        }
        out
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let unit = tree(UNIT_ROOT);
        let missing: Vec<String> = tree(SRC_ROOT)
            .into_iter()
            .filter(|path| !is_wiring(path) && !unit.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT_ROOT}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let src = tree(SRC_ROOT);
        let orphaned: Vec<String> = tree(UNIT_ROOT)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(path))
            .map(|path| format!("  - {UNIT_ROOT}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let mut files = Vec::new();
        let mut pending = vec![PathBuf::from("tests")];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir).into_iter().flatten().flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs")
                    && path.file_name().is_some_and(|name| name != "mod.rs")
                {
                    files.push(path);
                }
            }
        }

        let empty: Vec<String> = files
            .iter()
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
