use assert_cmd::Command;
use std::path::Path;

pub fn workxlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("workxlog").unwrap();
    cmd.env_remove("WORKXLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a log in `dir` for user "sam"
#[allow(dead_code)]
pub fn init_log(dir: &Path) {
    workxlog_cmd()
        .arg("--user")
        .arg("sam")
        .arg("init")
        .arg(dir)
        .assert()
        .success();
}

/// Log one week from inside `dir`
#[allow(dead_code)]
pub fn log_week(dir: &Path, week: &str, lines: &[&str], skills: &[&str], mood: u8) {
    let mut cmd = workxlog_cmd();
    cmd.current_dir(dir).arg("log").arg("--week").arg(week);
    for line in lines {
        cmd.arg("--line").arg(line);
    }
    for skill in skills {
        cmd.arg("--skill").arg(skill);
    }
    cmd.arg("--mood").arg(mood.to_string()).assert().success();
}
