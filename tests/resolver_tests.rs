use schedbot::core::resolver::{resolve, Subject};
use schedbot::errors::AppError;
use schedbot::models::Dataset;

mod common;
use common::{person, project};

fn dataset() -> Dataset {
    Dataset::new(
        vec![project(10, "Engine"), project(11, "Docs Site")],
        vec![
            person(1, "Ada", "Lovelace"),
            person(2, "Grace", "Hopper"),
        ],
        vec![],
        vec![],
    )
}

#[test]
fn project_name_matches_case_insensitively() {
    let data = dataset();
    match resolve("engine", &data).unwrap() {
        Subject::Project(p) => assert_eq!(p.id, 10),
        other => panic!("expected project, got {:?}", other),
    }
}

#[test]
fn first_name_alone_matches_a_person() {
    let data = dataset();
    match resolve("ada", &data).unwrap() {
        Subject::Person(p) => assert_eq!(p.id, 1),
        other => panic!("expected person, got {:?}", other),
    }
}

#[test]
fn full_name_matches_a_person() {
    let data = dataset();
    match resolve("Grace Hopper", &data).unwrap() {
        Subject::Person(p) => assert_eq!(p.id, 2),
        other => panic!("expected person, got {:?}", other),
    }
}

#[test]
fn projects_are_checked_before_people() {
    // A project and a person both answer to "Ada": the project wins.
    let data = Dataset::new(
        vec![project(20, "Ada")],
        vec![person(1, "Ada", "Lovelace")],
        vec![],
        vec![],
    );
    match resolve("Ada", &data).unwrap() {
        Subject::Project(p) => assert_eq!(p.id, 20),
        other => panic!("expected project, got {:?}", other),
    }
}

#[test]
fn matching_requires_the_full_string() {
    // "Engine" must not match a person whose first name merely starts
    // with it, nor a project with a longer name.
    let data = Dataset::new(
        vec![project(11, "Engine Room")],
        vec![person(5, "Engineer", "Smith")],
        vec![],
        vec![],
    );
    let err = resolve("Engine", &data).unwrap_err();
    assert!(matches!(err, AppError::SubjectNotFound(_)));
}

#[test]
fn unknown_term_carries_the_original_text() {
    let data = dataset();
    let err = resolve("Bob Nobody", &data).unwrap_err();

    match err {
        AppError::SubjectNotFound(term) => assert_eq!(term, "Bob Nobody"),
        other => panic!("expected SubjectNotFound, got {:?}", other),
    }
    assert_eq!(
        resolve("Bob Nobody", &data).unwrap_err().to_string(),
        "Unknown person/project matching term: Bob Nobody"
    );
}

#[test]
fn first_listed_person_wins_on_duplicate_first_names() {
    let data = Dataset::new(
        vec![],
        vec![person(1, "Ada", "Lovelace"), person(2, "Ada", "Byron")],
        vec![],
        vec![],
    );
    match resolve("ada", &data).unwrap() {
        Subject::Person(p) => assert_eq!(p.id, 1),
        other => panic!("expected person, got {:?}", other),
    }
}
