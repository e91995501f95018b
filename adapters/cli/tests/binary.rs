use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_snake-pit"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("TERM", "xterm-256color")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("snake-pit binary starts");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin.as_bytes())
        .expect("stdin accepts the script");
    child.wait_with_output().expect("snake-pit binary exits")
}

#[test]
fn quitting_at_the_introduction_plays_nothing() {
    let output = run(&["--seed", "1"], "q\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Press enter to continue or 'q' to quit"));
    assert!(!stdout.contains("snakes remaining"));
}

#[test]
fn mini_game_shows_the_pit_and_quits_cleanly() {
    let output = run(&["--mini", "--seed", "7"], "\nh\n\nq\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("There are 2 snakes remaining."));
    assert!(stdout.contains("Move (u/d/l/r//h/q): "));
    assert!(stdout.contains("...\n...\n...\n\nPress enter to continue."));
    assert!(!stdout.contains("You win!"));
    assert!(!stdout.contains("You lose."));
    assert!(!stdout.contains('\x1B'), "piped output carries no escape sequences");
}

#[test]
fn too_many_snakes_exit_with_a_diagnostic() {
    let output = run(&["--snakes", "500"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("cannot create game with 500 snakes; only 180 are allowed"));
    assert!(output.stdout.is_empty(), "nothing is drawn before validation");
}

#[test]
fn oversized_pit_is_rejected() {
    let output = run(&["--rows", "21"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("pit created with invalid size 21 by 18"));
}
