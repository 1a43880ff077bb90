use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use super::fixtures::load_fixture;

/// TestHarness provides an isolated project directory for the appdocs binary.
/// Each harness creates a temporary directory holding a README.md, an
/// `apps.sh` script standing in for the tool under test, and an
/// `.appdocs.md` config pointing at both.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub config_path: PathBuf,
    pub appdocs_binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness whose README is the fixture `readme` and whose
    /// command prints `apps_output`.
    pub fn new(readme: &str, apps_output: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path();

        fs::write(base_path.join("README.md"), load_fixture(readme))
            .expect("Failed to write README");
        Self::write_apps_script(base_path, apps_output);

        let config_path = base_path.join(".appdocs.md");
        let config = r#"---
command: [sh, apps.sh]
document: README.md
region:
  marker: apps
---

# appdocs config
"#;
        fs::write(&config_path, config).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            appdocs_binary: PathBuf::from(env!("CARGO_BIN_EXE_appdocs")),
        }
    }

    /// Creates a harness with custom config content.
    #[allow(dead_code)]
    pub fn with_config(readme: &str, apps_output: &str, config_content: &str) -> Self {
        let harness = Self::new(readme, apps_output);
        fs::write(&harness.config_path, config_content).expect("Failed to write custom config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the appdocs binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> std::io::Result<std::process::Output> {
        Command::new(&self.appdocs_binary)
            .args(args)
            .current_dir(self.path())
            .env_remove("APPDOCS_QUIET")
            .env("NO_COLOR", "1")
            .output()
    }

    fn write_apps_script(base_path: &Path, apps_output: &str) {
        let mut script = String::from("cat <<'APPS'\n");
        script.push_str(apps_output);
        if !apps_output.ends_with('\n') {
            script.push('\n');
        }
        script.push_str("APPS\n");
        fs::write(base_path.join("apps.sh"), script).expect("Failed to write apps.sh");
    }
}
