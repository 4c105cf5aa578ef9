#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_TODAY");
    cmd.env_remove("MOODLOG_LOG");
    cmd
}

/// Command running inside `root` with "today" pinned to `today`
pub fn moodlog_on(root: &Path, today: &str) -> Command {
    let mut cmd = moodlog_cmd();
    cmd.current_dir(root).env("MOODLOG_TODAY", today);
    cmd
}

pub fn init_journal(root: &Path) {
    moodlog_cmd().arg("init").arg(root).assert().success();
}
