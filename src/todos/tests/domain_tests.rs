//! Domain-focused tests for list and task validation behaviour.

use crate::todos::domain::{
    ListId, ListName, Task, TaskId, TaskList, TaskTitle, TodoDomainError,
};
use rstest::rstest;

fn task(id: &str, title: &str) -> Task {
    Task {
        id: TaskId::new(id),
        title: TaskTitle::new(title).expect("valid title"),
        description: None,
        done: false,
        created_at: None,
        task_list_id: None,
    }
}

fn list(name: &str) -> TaskList {
    TaskList::new(
        ListId::new("list-1"),
        ListName::new(name).expect("valid name"),
    )
}

#[rstest]
fn list_name_trims_surrounding_whitespace() {
    let name = ListName::new("  Work  ").expect("valid name");
    assert_eq!(name.as_str(), "Work");
}

#[rstest]
#[case("")]
#[case("   ")]
fn list_name_rejects_blank_values(#[case] value: &str) {
    assert_eq!(ListName::new(value), Err(TodoDomainError::EmptyListName));
}

#[rstest]
fn list_name_matches_ignores_case() {
    let first = ListName::new("Groceries").expect("valid name");
    let second = ListName::new("groceries").expect("valid name");
    assert!(first.matches(&second));
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_title_rejects_blank_values(#[case] value: &str) {
    assert_eq!(TaskTitle::new(value), Err(TodoDomainError::EmptyTaskTitle));
}

#[rstest]
fn task_title_keeps_original_casing() {
    let title = TaskTitle::new("  Buy Milk ").expect("valid title");
    assert_eq!(title.as_str(), "Buy Milk");
}

#[rstest]
fn push_task_rejects_duplicate_title_ignoring_case() {
    let mut owner = list("Personal");
    owner.push_task(task("t1", "Buy milk")).expect("first push");

    let result = owner.push_task(task("t2", "buy MILK"));
    assert_eq!(
        result,
        Err(TodoDomainError::DuplicateTaskTitle("buy MILK".to_owned()))
    );
    assert_eq!(owner.task_count(), 1);
}

#[rstest]
fn push_task_rejects_duplicate_identifier() {
    let mut owner = list("Personal");
    owner.push_task(task("t1", "Buy milk")).expect("first push");

    let result = owner.push_task(task("t1", "Buy eggs"));
    assert_eq!(
        result,
        Err(TodoDomainError::DuplicateTaskId(TaskId::new("t1")))
    );
}

#[rstest]
fn task_count_tracks_push_and_remove() {
    let mut owner = list("Personal");
    owner.push_task(task("t1", "First")).expect("push");
    owner.push_task(task("t2", "Second")).expect("push");
    assert_eq!(owner.task_count(), 2);

    let removed = owner.remove_task(&TaskId::new("t1"));
    assert!(removed.is_some());
    assert_eq!(owner.task_count(), 1);
}

#[rstest]
fn remove_task_returns_none_for_unknown_identifier() {
    let mut owner = list("Personal");
    assert!(owner.remove_task(&TaskId::new("missing")).is_none());
}

#[rstest]
fn replace_tasks_keeps_given_order() {
    let mut owner = list("Personal");
    owner.push_task(task("t1", "Old")).expect("push");

    owner.replace_tasks(vec![task("t9", "Second"), task("t8", "First")]);

    let ids: Vec<&str> = owner.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t9", "t8"]);
}

#[rstest]
fn title_taken_skips_the_excluded_task() {
    let mut owner = list("Personal");
    owner.push_task(task("t1", "Buy milk")).expect("push");

    let title = TaskTitle::new("Buy milk").expect("valid title");
    assert!(owner.title_taken(&title, None));
    assert!(!owner.title_taken(&title, Some(&TaskId::new("t1"))));
}
