use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn board_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("asciiboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn help_prints_usage() {
    let home = TempDir::new().unwrap();
    board_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ASCII art drawing board driven by text commands",
        ));
}

#[test]
fn exit_ends_session_successfully() {
    let home = TempDir::new().unwrap();
    board_cmd(&home)
        .write_stdin("exit\nadd circle 10 10 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added shape").not());
}

#[test]
fn end_of_input_ends_session() {
    let home = TempDir::new().unwrap();
    board_cmd(&home)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No shapes added."));
}

#[test]
fn rectangle_is_drawn_and_duplicate_rejected() {
    let home = TempDir::new().unwrap();
    board_cmd(&home)
        .write_stdin("add rectangle 0 0 4 4\nadd rectangle 0 0 4 4\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added shape 1"))
        .stdout(predicate::str::contains("\n****  "))
        .stdout(predicate::str::contains("\n*  *  "))
        .stdout(predicate::str::contains(
            "Shape already exists: rectangle 0 0 4 4 none frame",
        ));
}

#[test]
fn errors_do_not_end_the_session() {
    let home = TempDir::new().unwrap();
    board_cmd(&home)
        .write_stdin("hexagon 1 2 3\nremove\nadd circle 1 x 3\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown shape type: hexagon"))
        .stdout(predicate::str::contains("No shape selected"))
        .stdout(predicate::str::contains("Not an integer: x"))
        .stdout(predicate::str::contains("No shapes added."));
}

#[test]
fn save_then_load_at_startup() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("board.txt");

    board_cmd(&home)
        .write_stdin(format!(
            "add circle 10 10 3\nadd fill red triangle right 2 2 4\nsave {}\nexit\n",
            file.display()
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 shapes"));

    let saved = std::fs::read_to_string(&file).unwrap();
    assert_eq!(
        saved,
        "circle 10 10 3 none frame\ntriangle right 2 2 4 red filled\n"
    );

    board_cmd(&home)
        .arg(&file)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 shapes"))
        .stdout(predicate::str::contains(
            "ID: 2 - Triangle (2, 2), length: 4, type: right, color: red, filled",
        ));
}

#[test]
fn custom_board_size_bounds_placement() {
    let home = TempDir::new().unwrap();
    board_cmd(&home)
        .args(["--width", "10", "--height", "5"])
        .write_stdin("add rectangle 0 0 12 2\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shape does not fit on the board"));
}

#[test]
fn non_positive_dimensions_fail_fast() {
    let home = TempDir::new().unwrap();
    board_cmd(&home)
        .args(["--width", "0"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("board dimensions must be positive"));
}

#[test]
fn oversized_dimensions_fail_fast() {
    let home = TempDir::new().unwrap();
    board_cmd(&home)
        .args(["--width", "50000", "--height", "50000"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("board dimensions must be at most 1000"));
}
