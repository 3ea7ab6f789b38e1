// Classification tests: exact control words, rule precedence and fallthrough.
use studybuddy::model::{Intent, classify};

#[test]
fn test_exit_words_with_whitespace_and_case() {
    for input in ["exit", "  QUIT ", "\tBye\n", "Exit"] {
        assert_eq!(classify(input), Intent::Exit, "input: {:?}", input);
    }
}

#[test]
fn test_help_words() {
    for input in ["help", " H ", "?", "  ?  ", "HELP"] {
        assert_eq!(classify(input), Intent::Help, "input: {:?}", input);
    }
}

#[test]
fn test_control_words_only_match_whole_input() {
    // "help" inside a sentence is a question, not the help command
    assert_eq!(classify("can you help me with referencing"), Intent::Faq);
    assert_eq!(classify("bye for now then"), Intent::Faq);
}

#[test]
fn test_show_tasks_variants() {
    assert_eq!(classify("show tasks"), Intent::ShowTasks);
    assert_eq!(classify("Show me my tasks please"), Intent::ShowTasks);
    assert_eq!(classify("list tasks"), Intent::ShowTasks);
    assert_eq!(classify("VIEW TASK"), Intent::ShowTasks);
}

#[test]
fn test_add_task_variants() {
    assert_eq!(classify("add task: buy milk"), Intent::AddTask);
    assert_eq!(classify("Add a task: revise chapter 3"), Intent::AddTask);
    assert_eq!(classify("create task read paper"), Intent::AddTask);
    assert_eq!(classify("new task: email tutor"), Intent::AddTask);
}

#[test]
fn test_delete_task_variants() {
    assert_eq!(classify("delete task 3"), Intent::DeleteTask);
    assert_eq!(classify("remove task 12"), Intent::DeleteTask);
    assert_eq!(classify("delete 4"), Intent::DeleteTask);
    assert_eq!(classify("  remove 9  "), Intent::DeleteTask);
    assert_eq!(classify("please delete that task"), Intent::DeleteTask);
}

#[test]
fn test_show_wins_over_add() {
    assert_eq!(classify("show tasks then add task: X"), Intent::ShowTasks);
}

#[test]
fn test_add_wins_over_delete() {
    assert_eq!(
        classify("delete the old one and add task: new one"),
        Intent::AddTask
    );
}

#[test]
fn test_show_wins_over_delete() {
    assert_eq!(classify("remove task 2 and list tasks"), Intent::ShowTasks);
}

#[test]
fn test_bare_delete_needs_whole_line() {
    assert_eq!(classify("delete 4 now"), Intent::Faq);
}

#[test]
fn test_unmatched_goes_to_faq() {
    assert_eq!(classify("when is the library open?"), Intent::Faq);
    assert_eq!(classify(""), Intent::Faq);
    // "tasks" alone is not a command
    assert_eq!(classify("tasks"), Intent::Faq);
}

#[test]
fn test_classification_is_idempotent() {
    let inputs = [
        "show tasks then add task: X",
        "delete 7",
        "how do I print?",
        " bye ",
    ];
    for input in inputs {
        assert_eq!(classify(input), classify(input));
    }
}
