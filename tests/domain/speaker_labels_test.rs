use transcriber::domain::SpeakerLabelMap;

#[test]
fn given_default_map_when_resolving_a_then_returns_bot() {
    assert_eq!(SpeakerLabelMap::default().label_for("A"), "Bot");
}

#[test]
fn given_default_map_when_resolving_b_then_returns_user() {
    assert_eq!(SpeakerLabelMap::default().label_for("B"), "User");
}

#[test]
fn given_default_map_when_resolving_unknown_code_then_returns_generic_label() {
    let labels = SpeakerLabelMap::default();

    assert_eq!(labels.label_for("C"), "Speaker C");
    assert_eq!(labels.label_for("a"), "Speaker a");
}

#[test]
fn given_custom_entries_when_resolving_then_only_custom_entries_are_named() {
    let labels = SpeakerLabelMap::new([("A", "Agent")]);

    assert_eq!(labels.label_for("A"), "Agent");
    assert_eq!(labels.label_for("B"), "Speaker B");
}
