use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn phonebook(dir: &TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env("STORAGE_CHOICE", "json")
        .env("CONTACTS_STORAGE_DIR", dir.path());
    Ok(cmd)
}

fn listed_names(dir: &TempDir, args: &[&str]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let output = phonebook(dir)?.arg("list").args(args).output()?;
    assert!(output.status.success());

    let names = String::from_utf8(output.stdout)?
        .lines()
        .filter_map(|line| line.split_whitespace().nth(2).map(str::to_string))
        .collect();
    Ok(names)
}

#[test]
fn seed_fills_empty_book_once() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    phonebook(&dir)?
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 15 demo contacts"));

    phonebook(&dir)?
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing seeded"));

    phonebook(&dir)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Иванов Александр Петрович"))
        .stdout(predicate::str::contains("+7 (999) 555-66-77"));

    Ok(())
}

#[test]
fn lists_in_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    for (surname, name, category) in [
        ("Zeta", "Zoe", "friend"),
        ("Alpha", "Adam", "work"),
        ("Mid", "Mia", "friend"),
    ] {
        phonebook(&dir)?
            .args([
                "add",
                "--name",
                name,
                "--surname",
                surname,
                "--category",
                category,
                "--phones",
                "+79991234567",
            ])
            .assert()
            .success();
    }

    assert_eq!(listed_names(&dir, &[])?, vec!["Zoe", "Adam", "Mia"]);
    assert_eq!(listed_names(&dir, &["--reverse"])?, vec!["Mia", "Adam", "Zoe"]);
    assert_eq!(
        listed_names(&dir, &["--category", "FRIEND"])?,
        vec!["Zoe", "Mia"]
    );

    Ok(())
}

#[test]
fn empty_category_listing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    phonebook(&dir)?
        .args(["add", "--name", "Ivan", "--phones", "+79991234567"])
        .assert()
        .success();

    phonebook(&dir)?
        .args(["list", "--category", "family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));

    phonebook(&dir)?
        .args(["list", "--category", "gym"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category \"gym\""))
        .stderr(predicate::str::contains("Not found").not());

    Ok(())
}
