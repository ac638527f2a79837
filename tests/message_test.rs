//! CLI message assembly tests

use announcer::{message_from_args, DEFAULT_MESSAGE};

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_arguments_join_with_single_spaces() {
    assert_eq!(message_from_args(args(&["Build", "done"])), "Build done");
    assert_eq!(
        message_from_args(args(&["Tests", "passed", "on", "main"])),
        "Tests passed on main"
    );
}

#[test]
fn test_single_argument_is_verbatim() {
    assert_eq!(message_from_args(args(&["Hi"])), "Hi");
}

#[test]
fn test_arguments_with_internal_spaces_survive() {
    // A quoted shell argument arrives as one word and stays one word
    assert_eq!(
        message_from_args(args(&["Build done", "today"])),
        "Build done today"
    );
}

#[test]
fn test_empty_args_yield_default_message() {
    assert_eq!(message_from_args(Vec::new()), DEFAULT_MESSAGE);
    assert_eq!(DEFAULT_MESSAGE, "Development milestone completed!");
}
