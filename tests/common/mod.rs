use assert_cmd::Command;

pub fn revtag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("revtag").unwrap();
    cmd.env_remove("REVTAG_ROOT");
    cmd
}
