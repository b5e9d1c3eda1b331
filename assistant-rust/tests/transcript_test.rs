use catalog_assistant::{
    transcript::{DEFAULT_FALLBACK_TEXT, DEFAULT_GREETING},
    Transcript, QUICK_REPLIES,
};
use catalog_sdk::{Message, Role};

#[test]
fn seeded_transcript_holds_only_the_greeting() {
    let transcript = Transcript::seeded(DEFAULT_GREETING);

    assert_eq!(transcript.messages(), [Message::assistant(DEFAULT_GREETING)]);
    assert_eq!(transcript.count(Role::User), 0);
    assert!(!transcript.is_empty());
}

#[test]
fn user_turn_returns_prior_history() {
    let mut transcript = Transcript::seeded("Hello");

    let history = transcript.append_user_turn("IT in Astana").unwrap();
    assert_eq!(history, vec![Message::assistant("Hello")]);

    transcript.append_assistant_turn("Here you go");
    let history = transcript.append_user_turn("Cheaper ones?").unwrap();

    assert_eq!(
        history,
        vec![
            Message::assistant("Hello"),
            Message::user("IT in Astana"),
            Message::assistant("Here you go"),
        ]
    );
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript.last(), Some(&Message::user("Cheaper ones?")));
}

#[test]
fn blank_user_turn_is_rejected() {
    let mut transcript = Transcript::seeded("Hello");

    assert!(transcript.append_user_turn("").is_none());
    assert!(transcript.append_user_turn("   \n\t").is_none());

    assert_eq!(transcript.len(), 1);
}

#[test]
fn counts_messages_per_role() {
    let mut transcript = Transcript::default();
    assert!(transcript.is_empty());

    transcript.append_user_turn("one");
    transcript.append_assistant_turn(DEFAULT_FALLBACK_TEXT);
    transcript.append_user_turn("two");

    assert_eq!(transcript.count(Role::User), 2);
    assert_eq!(transcript.count(Role::Assistant), 1);
}

#[test]
fn quick_replies_are_not_blank() {
    assert_eq!(QUICK_REPLIES.len(), 3);
    for question in QUICK_REPLIES {
        let mut transcript = Transcript::default();
        assert!(transcript.append_user_turn(question).is_some());
    }
}
