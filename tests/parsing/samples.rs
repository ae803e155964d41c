#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use lectionary::parsing;

    fn sample_files(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_parse() {
        crate::init_logging();

        let mut failures = Vec::new();

        for file in sample_files(Path::new("tests/samples/")) {
            let content = fs::read_to_string(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            for line in content.lines() {
                if line
                    .trim()
                    .is_empty()
                {
                    continue;
                }

                let references = parsing::parse(line);
                if references.is_empty() {
                    println!("Line in {:?} yielded no references: {}", file, line);
                    failures.push(line.to_string());
                    continue;
                }

                // each citation read on its own must come out the same
                for reference in &references {
                    let again = parsing::parse(reference.text());
                    if again.len() != 1 || again[0].citation != reference.citation {
                        println!(
                            "Citation {} did not survive being reparsed from {:?}",
                            reference,
                            reference.text()
                        );
                        failures.push(line.to_string());
                    }
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample lines should parse successfully, but {} failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_yield_nothing() {
        crate::init_logging();

        let mut unexpected = Vec::new();

        for file in sample_files(Path::new("tests/broken/")) {
            let content = fs::read_to_string(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            for line in content.lines() {
                let references = parsing::parse(line);
                if !references.is_empty() {
                    println!("Line in {:?} unexpectedly yielded {:?}", file, references);
                    unexpected.push(line.to_string());
                }
            }
        }

        if !unexpected.is_empty() {
            panic!(
                "Prose lines should not contain references, but {} did",
                unexpected.len()
            );
        }
    }
}
