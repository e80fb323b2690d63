use assert_cmd::Command;
use predicates::prelude::*;

fn contact_manager() -> Command {
    let mut cmd = Command::cargo_bin("contact-manager").unwrap();
    cmd.env_remove("CONTACTS_FORMAT");
    cmd
}

#[test]
fn session_keeps_contacts_until_exit() {
    let output = contact_manager()
        .arg("shell")
        .write_stdin(
            "1\nJohn\nDoe\n0974112067\n\
             1\nAlice\nSmith\n08031234567\n\
             1\nJohn\nDoe\n0974112067\n\
             2\n3\n",
        )
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output = String::from_utf8_lossy(&output);
    let rows: Vec<_> = output
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()) && line.contains(". "))
        .filter(|line| !line.contains("Contact") && !line.contains("Exit"))
        .collect();

    // Duplicates are kept in insertion order
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("John") && rows[0].starts_with("  1."));
    assert!(rows[1].contains("Alice") && rows[1].starts_with("  2."));
    assert!(rows[2].contains("John") && rows[2].starts_with("  3."));
    assert!(output.contains("Bye!"));
}

#[test]
fn session_is_the_default_command() {
    contact_manager()
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn session_reports_rejected_contact() {
    contact_manager()
        .arg("shell")
        .write_stdin("1\nJohn\nDoe\n\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid argument: phone number must not be empty",
        ))
        .stdout(predicate::str::contains("No contact yet"));
}

#[test]
fn session_reports_unknown_menu_entry() {
    contact_manager()
        .arg("shell")
        .write_stdin("add\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized command: 'add'"));
}

#[test]
fn session_ends_at_end_of_input() {
    contact_manager()
        .arg("shell")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!").not());
}
