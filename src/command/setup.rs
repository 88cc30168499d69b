//! Idempotent repository scaffolding: ignore rules, document stubs, git
//! init, and the origin remote.
//!
//! Every sub-step checks for its artifact before writing, so running setup
//! twice leaves the repository byte-for-byte unchanged.
use log::*;
use std::fs;
use std::path::Path;

use crate::{
    cli::SetupArgs,
    config::RepoConfig,
    docs::{self, README_FILE},
    error::Result,
    repo::Repository,
};

pub const GITIGNORE_FILE: &str = ".gitignore";
pub const ISSUES_FILE: &str = "ISSUES.md";
pub const TODO_FILE: &str = "TODO.md";

const LEGACY_README_FILE: &str = "README.txt";

const GITIGNORE_TEMPLATE: &str = "\
# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Virtual Environment
venv/
ENV/
env/

# IDE
.idea/
.vscode/
*.swp
*.swo

# Local configuration
*.ini
*.cfg
config.json
github_config.json

# Logs
*.log
";

const ISSUES_TEMPLATE: &str = "\
# Known Issues

## Current Issues
- [ ] List current issues here

## Resolved Issues
- [x] Example resolved issue
";

const TODO_TEMPLATE: &str = "\
# Todo Items

## High Priority
- [ ] List high priority items here

## Normal Priority
- [ ] List normal priority items here

## Future Enhancements
- [ ] List future enhancements here
";

/// Answers for the origin-remote question, normally collected
/// interactively.
pub trait RemotePrompt {
    /// Whether a missing origin remote should be added.
    fn confirm_add_remote(&self) -> Result<bool>;
    /// The remote URL to add.
    fn remote_url(&self) -> Result<String>;
}

/// Interactive prompt backed by inquire.
struct InteractivePrompt;

impl RemotePrompt for InteractivePrompt {
    fn confirm_add_remote(&self) -> Result<bool> {
        let answer = inquire::Confirm::new(
            "No remote repository found. Would you like to add one?",
        )
        .with_default(false)
        .prompt()?;
        Ok(answer)
    }

    fn remote_url(&self) -> Result<String> {
        let url =
            inquire::Text::new("Enter your GitHub repository URL:").prompt()?;
        Ok(url)
    }
}

/// Non-interactive prompt fed by the `--remote-url` flag.
struct PresetRemote {
    url: String,
}

impl RemotePrompt for PresetRemote {
    fn confirm_add_remote(&self) -> Result<bool> {
        Ok(true)
    }

    fn remote_url(&self) -> Result<String> {
        Ok(self.url.clone())
    }
}

/// Execute the setup command.
pub fn execute(
    args: SetupArgs,
    config: &mut RepoConfig,
    config_path: &Path,
) -> Result<()> {
    match args.remote_url {
        Some(url) => run(&args.repo, &PresetRemote { url })?,
        None => run(&args.repo, &InteractivePrompt)?,
    }

    config.remember_repo(&args.repo.to_string_lossy());
    config.save(config_path)?;
    Ok(())
}

/// Run all setup steps against the repository at `root`.
pub fn run(root: &Path, prompt: &dyn RemotePrompt) -> Result<()> {
    ensure_gitignore(root)?;
    normalize_readme(root)?;
    ensure_template(root, ISSUES_FILE, ISSUES_TEMPLATE)?;
    ensure_template(root, TODO_FILE, TODO_TEMPLATE)?;

    let repo = Repository::open_or_init(root)?;

    if !repo.has_origin() && prompt.confirm_add_remote()? {
        let url = prompt.remote_url()?;
        if !url.trim().is_empty() {
            repo.add_origin(url.trim())?;
        }
    }

    info!("repository setup complete: {}", root.display());
    Ok(())
}

fn ensure_gitignore(root: &Path) -> Result<()> {
    ensure_template(root, GITIGNORE_FILE, GITIGNORE_TEMPLATE)
}

fn ensure_template(root: &Path, file: &str, template: &str) -> Result<()> {
    let path = root.join(file);
    if !path.exists() {
        debug!("creating {file}");
        fs::write(&path, template)?;
    }
    Ok(())
}

/// Merge a legacy plain-text README into the Markdown one, or create the
/// Markdown README when neither exists. Unique content is never destroyed.
fn normalize_readme(root: &Path) -> Result<()> {
    let legacy = root.join(LEGACY_README_FILE);
    let markdown = root.join(README_FILE);

    if legacy.exists() && markdown.exists() {
        let legacy_content = fs::read_to_string(&legacy)?;
        let markdown_content = fs::read_to_string(&markdown)?;

        if !markdown_content.contains(&legacy_content) {
            info!("merging {LEGACY_README_FILE} into {README_FILE}");
            fs::write(
                &markdown,
                format!("{markdown_content}\n\n{legacy_content}"),
            )?;
        }
        fs::remove_file(&legacy)?;
    } else if legacy.exists() {
        info!("converting {LEGACY_README_FILE} to {README_FILE}");
        let content = fs::read_to_string(&legacy)?;
        fs::write(
            &markdown,
            format!("# {}\n\n{}", docs::dir_title(root), content),
        )?;
        fs::remove_file(&legacy)?;
    } else if !markdown.exists() {
        fs::write(
            &markdown,
            format!(
                "# {}\n\nRepository update tool\n",
                docs::dir_title(root)
            ),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct StubPrompt {
        add: bool,
        url: &'static str,
    }

    impl RemotePrompt for StubPrompt {
        fn confirm_add_remote(&self) -> Result<bool> {
            Ok(self.add)
        }

        fn remote_url(&self) -> Result<String> {
            Ok(self.url.to_string())
        }
    }

    fn declining() -> StubPrompt {
        StubPrompt { add: false, url: "" }
    }

    fn snapshot(root: &Path) -> BTreeMap<String, String> {
        let mut files = BTreeMap::new();
        for entry in fs::read_dir(root).unwrap() {
            let entry = entry.unwrap();
            if entry.path().is_file() {
                files.insert(
                    entry.file_name().to_string_lossy().to_string(),
                    fs::read_to_string(entry.path()).unwrap(),
                );
            }
        }
        files
    }

    #[test]
    fn creates_all_scaffolding_files() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), &declining()).unwrap();

        assert!(dir.path().join(GITIGNORE_FILE).exists());
        assert!(dir.path().join(README_FILE).exists());
        assert!(dir.path().join(ISSUES_FILE).exists());
        assert!(dir.path().join(TODO_FILE).exists());
        assert!(dir.path().join(".git").exists());

        let todo = fs::read_to_string(dir.path().join(TODO_FILE)).unwrap();
        assert!(todo.contains("## High Priority"));
        assert!(todo.contains("## Future Enhancements"));
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        run(dir.path(), &declining()).unwrap();
        let before = snapshot(dir.path());

        run(dir.path(), &declining()).unwrap();
        let after = snapshot(dir.path());

        assert_eq!(before, after);
    }

    #[test]
    fn merges_legacy_readme_into_markdown() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(README_FILE), "# project\n\nmd content\n")
            .unwrap();
        fs::write(dir.path().join(LEGACY_README_FILE), "legacy notes\n")
            .unwrap();

        run(dir.path(), &declining()).unwrap();

        assert!(!dir.path().join(LEGACY_README_FILE).exists());
        let content =
            fs::read_to_string(dir.path().join(README_FILE)).unwrap();
        assert!(content.starts_with("# project\n\nmd content\n"));
        assert!(content.contains("legacy notes\n"));
    }

    #[test]
    fn merge_skips_content_already_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(README_FILE),
            "# project\n\nlegacy notes\n",
        )
        .unwrap();
        fs::write(dir.path().join(LEGACY_README_FILE), "legacy notes\n")
            .unwrap();

        run(dir.path(), &declining()).unwrap();

        let content =
            fs::read_to_string(dir.path().join(README_FILE)).unwrap();
        assert_eq!(content, "# project\n\nlegacy notes\n");
        assert!(!dir.path().join(LEGACY_README_FILE).exists());
    }

    #[test]
    fn converts_legacy_readme_when_markdown_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        fs::create_dir(&root).unwrap();
        fs::write(root.join(LEGACY_README_FILE), "plain text readme\n")
            .unwrap();

        run(&root, &declining()).unwrap();

        assert!(!root.join(LEGACY_README_FILE).exists());
        let content = fs::read_to_string(root.join(README_FILE)).unwrap();
        assert!(content.starts_with("# project\n\n"));
        assert!(content.contains("plain text readme\n"));
    }

    #[test]
    fn existing_readme_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(README_FILE), "# custom\n\nhands off\n")
            .unwrap();

        run(dir.path(), &declining()).unwrap();

        let content =
            fs::read_to_string(dir.path().join(README_FILE)).unwrap();
        assert_eq!(content, "# custom\n\nhands off\n");
    }

    #[test]
    fn adds_origin_remote_when_prompt_accepts() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = StubPrompt {
            add: true,
            url: "https://github.com/owner/repo.git",
        };

        run(dir.path(), &prompt).unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        assert_eq!(
            repo.origin_url().unwrap(),
            "https://github.com/owner/repo.git"
        );
    }

    #[test]
    fn declining_the_prompt_leaves_no_remote() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), &declining()).unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        assert!(!repo.has_origin());
    }

    #[test]
    fn existing_remote_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        repo.add_origin("https://github.com/owner/original.git").unwrap();

        let prompt = StubPrompt {
            add: true,
            url: "https://github.com/owner/other.git",
        };
        run(dir.path(), &prompt).unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        assert_eq!(
            repo.origin_url().unwrap(),
            "https://github.com/owner/original.git"
        );
    }
}
