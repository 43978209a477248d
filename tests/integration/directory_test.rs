//! Integration tests for directory conversion

#[cfg(test)]
mod directory_tests {
    use std::fs;
    use std::process::Command;
    use tempfile::tempdir;

    fn run_casewrap(args: &[&str]) -> (bool, String, String) {
        let output = Command::new(env!("CARGO_BIN_EXE_casewrap"))
            .args(args)
            .output()
            .expect("failed to run casewrap");

        (
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }

    #[test]
    fn test_directory_conversion_mirrors_structure() {
        let input_dir = tempdir().unwrap();
        fs::write(input_dir.path().join("users.txt"), "user id\nuser name\n").unwrap();
        fs::create_dir(input_dir.path().join("orders")).unwrap();
        fs::write(input_dir.path().join("orders/lines.txt"), "order id").unwrap();
        fs::write(input_dir.path().join("readme.md"), "ignored").unwrap();

        let output_dir = tempdir().unwrap();
        let (ok, _stdout, stderr) = run_casewrap(&[
            input_dir.path().to_str().unwrap(),
            "--output",
            output_dir.path().to_str().unwrap(),
            "--recursive",
            "--style",
            "snake",
            "--extension",
            "sql",
            "--quiet",
        ]);
        assert!(ok, "stderr: {}", stderr);

        assert_eq!(
            fs::read_to_string(output_dir.path().join("users.sql")).unwrap(),
            "USER_ID\nUSER_NAME"
        );
        assert_eq!(
            fs::read_to_string(output_dir.path().join("orders/lines.sql")).unwrap(),
            "ORDER_ID"
        );
        assert!(!output_dir.path().join("readme.sql").exists());
    }

    #[test]
    fn test_non_recursive_skips_nested() {
        let input_dir = tempdir().unwrap();
        fs::write(input_dir.path().join("top.txt"), "a").unwrap();
        fs::create_dir(input_dir.path().join("nested")).unwrap();
        fs::write(input_dir.path().join("nested/deep.txt"), "b").unwrap();

        let output_dir = tempdir().unwrap();
        let (ok, _, stderr) = run_casewrap(&[
            input_dir.path().to_str().unwrap(),
            "-o",
            output_dir.path().to_str().unwrap(),
            "-q",
        ]);
        assert!(ok, "stderr: {}", stderr);
        assert!(output_dir.path().join("top.out").exists());
        assert!(!output_dir.path().join("nested/deep.out").exists());
    }

    #[test]
    fn test_directory_without_output_fails() {
        let input_dir = tempdir().unwrap();
        let (ok, _, stderr) = run_casewrap(&[input_dir.path().to_str().unwrap()]);
        assert!(!ok);
        assert!(stderr.contains("Output directory required"));
    }
}
