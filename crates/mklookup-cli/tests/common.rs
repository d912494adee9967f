use assert_cmd::Command;
use mklookup_testing::TestWorld;

/// `mklookup` pointed at an isolated config and log location.
#[allow(deprecated)]
pub fn mklookup(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("mklookup").expect("binary builds");
    world.configure_command(&mut cmd);
    cmd
}
