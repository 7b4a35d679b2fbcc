use circle_ussd::ussd::{MenuRegistry, ScreenId, Target, TransitionResult, UssdEngine};

fn engine() -> UssdEngine {
    UssdEngine::with_builtin_menu().expect("builtin menu is valid")
}

#[test]
fn new_session_starts_at_welcome() {
    let engine = engine();
    assert_eq!(engine.session().current(), ScreenId::Welcome);
    assert!(engine.session().history().is_empty());
    assert!(engine.session().pending_input().is_empty());
}

#[test]
fn every_welcome_option_except_zero_navigates_to_its_target() {
    let welcome = MenuRegistry::builtin().screen(ScreenId::Welcome);
    for option in welcome.options.iter().filter(|o| o.key != "0") {
        let Target::Screen(target) = option.target else {
            panic!("welcome option {} should navigate", option.key);
        };
        let mut engine = engine();
        assert_eq!(
            engine.submit(option.key),
            TransitionResult::Navigated {
                from: ScreenId::Welcome,
                to: target
            }
        );
        assert_eq!(engine.session().current(), target);
        assert_eq!(engine.session().history(), &[ScreenId::Welcome]);
    }
}

#[test]
fn concrete_trace_through_learn_and_earn() {
    let mut engine = engine();

    engine.submit("3");
    assert_eq!(engine.session().current(), ScreenId::LearnEarn);
    assert_eq!(engine.session().history(), &[ScreenId::Welcome]);

    // Leaf option loops back to its own screen
    engine.submit("1");
    assert_eq!(engine.session().current(), ScreenId::LearnEarn);
    assert_eq!(
        engine.session().history(),
        &[ScreenId::Welcome, ScreenId::LearnEarn]
    );

    assert_eq!(
        engine.submit("0"),
        TransitionResult::WentBack {
            to: ScreenId::LearnEarn
        }
    );
    assert_eq!(engine.session().current(), ScreenId::LearnEarn);
    assert_eq!(engine.session().history(), &[ScreenId::Welcome]);

    assert_eq!(
        engine.submit("0"),
        TransitionResult::WentBack {
            to: ScreenId::Welcome
        }
    );
    assert_eq!(engine.session().current(), ScreenId::Welcome);
    assert!(engine.session().history().is_empty());
}

#[test]
fn repeated_back_always_ends_at_welcome() {
    let mut engine = engine();
    for key in ["2", "1", "2", "3", "4", "5", "9"] {
        engine.submit(key);
    }
    assert_eq!(engine.session().history().len(), 7);

    let mut steps = 0;
    while !engine.session().history().is_empty() {
        let before = engine.session().history().len();
        engine.submit("0");
        assert_eq!(engine.session().history().len(), before - 1);
        steps += 1;
    }
    assert_eq!(steps, 7);
    assert_eq!(engine.session().current(), ScreenId::Welcome);
}

#[test]
fn zero_on_auth_pops_history() {
    let mut engine = engine();
    engine.submit("1");
    assert_eq!(
        engine.submit("0"),
        TransitionResult::WentBack {
            to: ScreenId::Welcome
        }
    );
    assert!(engine.session().history().is_empty());
}

#[test]
fn auth_options_return_to_welcome_as_forward_moves() {
    let mut engine = engine();
    engine.submit("1");
    assert_eq!(
        engine.submit("2"),
        TransitionResult::Navigated {
            from: ScreenId::Auth,
            to: ScreenId::Welcome
        }
    );
    assert_eq!(
        engine.session().history(),
        &[ScreenId::Welcome, ScreenId::Auth]
    );
}

#[test]
fn unknown_key_is_invalid_and_changes_nothing() {
    let mut engine = engine();
    engine.submit("5");
    let before = engine.session().clone();

    for key in ["7", "", "x", "12", "*"] {
        assert_eq!(engine.submit(key), TransitionResult::InvalidSelection);
        assert_eq!(engine.session().current(), before.current());
        assert_eq!(engine.session().history(), before.history());
    }
}

#[test]
fn invalid_selection_clears_pending_input() {
    let mut engine = engine();
    engine.submit("7");
    // Events has no option 8
    assert!(engine.push_input('8'));
    assert_eq!(engine.submit_pending(), TransitionResult::InvalidSelection);
    assert!(engine.session().pending_input().is_empty());
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let mut engine = engine();
    assert_eq!(
        engine.submit(" 4\n"),
        TransitionResult::Navigated {
            from: ScreenId::Welcome,
            to: ScreenId::Circles
        }
    );
}

#[test]
fn exit_from_welcome_terminates_and_is_idempotent() {
    let mut engine = engine();
    assert_eq!(engine.submit("0"), TransitionResult::SessionTerminated);
    assert_eq!(engine.session().current(), ScreenId::Welcome);
    assert!(engine.session().history().is_empty());

    assert_eq!(engine.submit("0"), TransitionResult::SessionTerminated);
    assert_eq!(engine.session().current(), ScreenId::Welcome);
    assert!(engine.session().history().is_empty());
}

#[test]
fn exit_after_navigation_clears_history() {
    let mut engine = engine();
    engine.submit("1");
    engine.submit("3");
    assert_eq!(engine.session().history().len(), 2);
    assert_eq!(engine.submit("0"), TransitionResult::SessionTerminated);
    assert!(engine.session().history().is_empty());

    // Still usable afterwards
    engine.submit("8");
    assert_eq!(engine.session().current(), ScreenId::Profile);
}

#[test]
fn reset_always_returns_to_initial_state() {
    let mut engine = engine();
    engine.reset();
    assert_eq!(engine.session().current(), ScreenId::Welcome);
    assert!(engine.session().history().is_empty());

    engine.submit("6");
    engine.submit("3");
    engine.push_input('4');
    engine.reset();
    assert_eq!(engine.session().current(), ScreenId::Welcome);
    assert!(engine.session().history().is_empty());
    assert!(engine.session().pending_input().is_empty());

    engine.reset();
    assert_eq!(engine.session().current(), ScreenId::Welcome);
}

#[test]
fn back_button_pops_one_step() {
    let mut engine = engine();
    engine.submit("7");
    engine.submit("9");
    engine.go_back_one_step();
    assert_eq!(engine.session().current(), ScreenId::Events);
    assert_eq!(engine.session().history(), &[ScreenId::Welcome]);
    engine.go_back_one_step();
    assert_eq!(engine.session().current(), ScreenId::Welcome);
}

#[test]
fn back_button_without_history_is_noop() {
    let mut engine = engine();
    engine.go_back_one_step();
    assert_eq!(engine.session().current(), ScreenId::Welcome);
    assert!(engine.session().history().is_empty());
}

#[test]
fn breadcrumb_runs_from_welcome_to_current() {
    let mut engine = engine();
    assert_eq!(engine.breadcrumb(), vec!["Karibu TheCircle 🌍"]);
    engine.submit("5");
    engine.submit("2");
    assert_eq!(
        engine.breadcrumb(),
        vec!["Karibu TheCircle 🌍", "The Wall 🙏", "The Wall 🙏"]
    );
}

#[test]
fn snapshot_reflects_current_screen() {
    let mut engine = engine();
    engine.submit("2");
    engine.push_input('9');
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.screen, ScreenId::FaithPaths);
    assert_eq!(snapshot.title, "Faith Paths 📖");
    assert_eq!(snapshot.options.len(), 7);
    assert_eq!(snapshot.options[5].key, "9");
    assert_eq!(snapshot.options[5].label, "Daily Verse (SMS)");
    assert_eq!(snapshot.pending_input, "9");
    assert_eq!(
        snapshot.breadcrumb,
        vec!["Karibu TheCircle 🌍".to_string(), "Faith Paths 📖".to_string()]
    );
    assert_eq!(snapshot.session_id, engine.session_id().to_string());
}

#[test]
fn snapshot_serializes_camel_case() {
    let engine = engine();
    let json = serde_json::to_value(engine.snapshot()).expect("serialize snapshot");
    assert_eq!(json["screen"], "welcome");
    assert_eq!(json["pendingInput"], "");
    assert_eq!(json["options"][0]["key"], "1");
    assert_eq!(json["options"][0]["icon"], "🔐");
    assert!(json["options"][8].get("icon").is_none());
}
