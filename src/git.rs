//! Publishing the output tree with git.
//!
//! GitPitch renders straight from a repository, so after a build the output
//! directory is staged and committed, and optionally pushed. This runs after
//! the build has finished and never changes its result: a failed commit only
//! means the user has to commit by hand.
//!
//! The steps go through the [`VersionControl`] trait so the sequencing in
//! [`publish`] can be tested without a git binary.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to launch git: {0}")]
    Launch(#[from] io::Error),
    #[error("`git {command}` exited with {status}")]
    Status { command: String, status: ExitStatus },
}

/// The handful of git operations a publish needs.
pub trait VersionControl {
    fn is_work_tree(&self) -> bool;
    fn init(&self) -> Result<(), GitError>;
    fn stage_all(&self) -> Result<(), GitError>;
    /// Commit staged changes. Without a message the user's editor opens.
    fn commit(&self, message: Option<&str>) -> Result<(), GitError>;
    fn push(&self) -> Result<(), GitError>;
}

/// Runs the system `git` binary inside a working directory.
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new("git");
        command.current_dir(&self.work_dir);
        command
    }

    /// Run with inherited stdio so editors and credential prompts work.
    fn run(&self, args: &[&str]) -> Result<(), GitError> {
        let status = self.command().args(args).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(GitError::Status {
                command: args.join(" "),
                status,
            })
        }
    }
}

impl VersionControl for GitCli {
    fn is_work_tree(&self) -> bool {
        self.command()
            .args(["rev-parse", "--is-inside-work-tree"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .is_some_and(|o| String::from_utf8_lossy(&o.stdout).trim() == "true")
    }

    fn init(&self) -> Result<(), GitError> {
        self.run(&["init"])
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.run(&["add", "."])
    }

    fn commit(&self, message: Option<&str>) -> Result<(), GitError> {
        match message {
            Some(message) => self.run(&["commit", "-m", message]),
            None => self.run(&["commit"]),
        }
    }

    fn push(&self) -> Result<(), GitError> {
        self.run(&["push"])
    }
}

/// What a publish run should do.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    pub push: bool,
    pub commit_message: Option<String>,
}

/// How far a publish run got.
#[derive(Debug)]
pub enum PublishOutcome {
    /// `git add` failed; nothing was committed.
    StageFailed(GitError),
    /// Changes were staged but the commit failed or was aborted.
    CommitFailed(GitError),
    /// Committed, push not requested.
    Committed,
    /// Committed and pushed.
    Pushed,
    /// Committed, but the push failed.
    PushFailed(GitError),
}

impl PublishOutcome {
    pub fn committed(&self) -> bool {
        matches!(self, Self::Committed | Self::Pushed | Self::PushFailed(_))
    }
}

/// Initialize if needed, stage everything, commit, and optionally push.
pub fn publish(vcs: &dyn VersionControl, options: &PublishOptions) -> PublishOutcome {
    if !vcs.is_work_tree() {
        // A failed init surfaces at the staging step.
        let _ = vcs.init();
    }
    if let Err(e) = vcs.stage_all() {
        return PublishOutcome::StageFailed(e);
    }
    if let Err(e) = vcs.commit(options.commit_message.as_deref()) {
        return PublishOutcome::CommitFailed(e);
    }
    if !options.push {
        return PublishOutcome::Committed;
    }
    match vcs.push() {
        Ok(()) => PublishOutcome::Pushed,
        Err(e) => PublishOutcome::PushFailed(e),
    }
}
