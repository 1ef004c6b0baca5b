//! End-to-end tests for the interactive session.
//!
//! These tests drive the session with input lines exactly as typed at the
//! prompt and check the replies that would be printed.

use contact_book::cli::{help_text, Reply, Session};
use contact_book::ContactService;

mod common;
use common::*;

/// Test a full contact lifecycle through commands.
#[test]
fn test_contact_lifecycle() {
    let mut session = test_session();

    assert_eq!(
        run_lines(&mut session, &["add Alice 1234567890"]),
        "Contact added."
    );
    assert_eq!(
        run_lines(&mut session, &["add Bob +0987654321", "all"]),
        "You have 2 contacts:\n  Alice : 1234567890\n  Bob   : +0987654321"
    );
    assert_eq!(
        run_lines(&mut session, &["change Bob +0987654321 0501234567"]),
        "Phone updated."
    );
    assert_eq!(
        run_lines(&mut session, &["phone 0501"]),
        "Found 1 match for '0501':\n  Bob : 0501234567"
    );
    assert_eq!(run_lines(&mut session, &["delete Bob"]), "Contact deleted.");
    assert_eq!(session.service().book().len(), 1);
}

/// Test that core errors are printed and the session continues.
#[test]
fn test_errors_are_replies() {
    let mut session = test_session();
    run_lines(&mut session, &["add Alex 1234567890"]);

    assert_eq!(
        session.execute("phone-book"),
        Reply::Continue(
            "Invalid command. Type 'help' for the available list of commands.".to_string()
        )
    );
    assert_eq!(
        run_lines(&mut session, &["delete alex"]),
        "Contact 'alex' not found. However, a contact with a similar name exists as 'Alex'. Did you mean 'Alex'?"
    );
    assert_eq!(
        run_lines(&mut session, &["add Alex 12345"]),
        "Invalid phone number '12345'. Expected 10 digits, optionally starting with '+'."
    );
    assert_eq!(
        run_lines(&mut session, &["change Alex 1234567890"]),
        "You must provide username, old phone number and new phone number (3 arguments)."
    );
}

/// Test birthday commands against the fixed reference date.
#[test]
fn test_birthday_commands() {
    let mut session = test_session();
    run_lines(
        &mut session,
        &[
            "add Alice 1234567890",
            "add Bob 0987654321",
            "add Carol 0501234567",
        ],
    );

    assert_eq!(
        run_lines(&mut session, &["add-birthday Alice 04.01.1990"]),
        "Birthday added."
    );
    assert_eq!(
        run_lines(&mut session, &["add-birthday Bob 01.01.1985"]),
        "Birthday added."
    );
    assert_eq!(
        run_lines(&mut session, &["add-birthday Bob 01.01.1985"]),
        "Birthday for 'Bob' is already set to '01.01.1985'."
    );
    assert_eq!(
        run_lines(&mut session, &["add-birthday Carol 01.01.2030"]),
        "Given birthday date '01.01.2030' can't be in the future."
    );
    assert_eq!(
        run_lines(&mut session, &["show-birthday Carol"]),
        "Contact 'Carol' has no birthday set."
    );
    assert_eq!(
        run_lines(&mut session, &["birthdays"]),
        "Upcoming birthdays in the next 7 days:\n  Bob   : 01.01.2025\n  Alice : 06.01.2025"
    );
}

/// Test that the configured window reaches the session.
#[test]
fn test_custom_birthday_window() {
    let service = service_on(reference_today()).with_birthday_window(2);
    assert_eq!(service.birthday_window_days(), 2);

    let mut session = Session::new(service);
    run_lines(
        &mut session,
        &["add Alice 1234567890", "add-birthday Alice 04.01.1990"],
    );

    assert_eq!(
        run_lines(&mut session, &["birthdays"]),
        "No upcoming birthdays in the next 2 days."
    );
}

/// Test the help listing and exit aliases.
#[test]
fn test_help_and_exit() {
    let mut session = test_session();

    let help = session.execute("help");
    assert_eq!(help, Reply::Continue(help_text()));
    assert!(help.message().contains("exit (or close)"));
    assert!(help.message().contains("add-birthday <username> <DD.MM.YYYY>"));

    assert_eq!(session.execute("CLOSE"), Reply::Exit("Good bye!".to_string()));
}

/// Test that the service trait can drive the book directly.
#[test]
fn test_service_trait_object() {
    let mut service: Box<dyn ContactService> = Box::new(service_on(reference_today()));

    service.add_contact("Dana", "1234567890").unwrap();
    assert_eq!(
        service.show_all().unwrap(),
        "You have 1 contact:\n  Dana : 1234567890"
    );
}
