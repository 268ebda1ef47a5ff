use super::*;

#[test]
fn decode_create_success() {
    let raw = r#"{"kind":"createSuccess","gameId":"g-42","hostName":"ethan"}"#;
    let decoded = decode_inbound(raw).expect("decode");
    assert_eq!(
        decoded,
        Inbound::CreateSuccess {
            game_id: "g-42".to_owned(),
            host_name: "ethan".to_owned(),
        }
    );
}

#[test]
fn decode_create_failed() {
    let raw = r#"{"kind":"createFailed","message":"name already taken"}"#;
    let decoded = decode_inbound(raw).expect("decode");
    assert_eq!(
        decoded,
        Inbound::CreateFailed {
            message: "name already taken".to_owned(),
        }
    );
}

#[test]
fn decode_refresh_lobby_preserves_user_order() {
    let raw = r#"{"kind":"refreshLobby","users":["carol","alice","bob"]}"#;
    let decoded = decode_inbound(raw).expect("decode");
    let Inbound::RefreshLobby { users } = decoded else {
        panic!("expected refreshLobby, got {decoded:?}");
    };
    assert_eq!(users, ["carol", "alice", "bob"]);
}

#[test]
fn decode_refresh_lobby_accepts_empty_roster() {
    let decoded = decode_inbound(r#"{"kind":"refreshLobby","users":[]}"#).expect("decode");
    assert_eq!(decoded, Inbound::RefreshLobby { users: Vec::new() });
}

#[test]
fn decode_initial_stuff_has_no_payload() {
    let decoded = decode_inbound(r#"{"kind":"initialStuff"}"#).expect("decode");
    assert_eq!(decoded, Inbound::InitialStuff);
}

#[test]
fn decode_ignores_extra_fields() {
    let raw = r#"{"kind":"initialStuff","question":"unused","count":3}"#;
    let decoded = decode_inbound(raw).expect("decode");
    assert_eq!(decoded, Inbound::InitialStuff);
}

#[test]
fn decode_rejects_malformed_json() {
    let err = decode_inbound("not json at all").expect_err("should fail");
    assert!(matches!(err, CodecError::Malformed(_)));
}

#[test]
fn decode_rejects_missing_kind() {
    let err = decode_inbound(r#"{"gameId":"g-42"}"#).expect_err("should fail");
    assert!(matches!(err, CodecError::MissingKind));
}

#[test]
fn decode_rejects_non_string_kind() {
    let err = decode_inbound(r#"{"kind":7}"#).expect_err("should fail");
    assert!(matches!(err, CodecError::MissingKind));
}

#[test]
fn decode_rejects_unknown_kind() {
    let err = decode_inbound(r#"{"kind":"serverGossip"}"#).expect_err("should fail");
    let CodecError::UnknownKind(kind) = err else {
        panic!("expected UnknownKind, got {err:?}");
    };
    assert_eq!(kind, "serverGossip");
}

#[test]
fn decode_rejects_known_kind_with_wrong_payload() {
    let err =
        decode_inbound(r#"{"kind":"refreshLobby","users":"alice"}"#).expect_err("should fail");
    let CodecError::InvalidPayload { kind, .. } = err else {
        panic!("expected InvalidPayload, got {err:?}");
    };
    assert_eq!(kind, "refreshLobby");
}

#[test]
fn decode_rejects_known_kind_with_missing_field() {
    let err = decode_inbound(r#"{"kind":"createSuccess","gameId":"g-42"}"#)
        .expect_err("should fail");
    assert!(matches!(err, CodecError::InvalidPayload { .. }));
}

#[test]
fn encode_create_matches_wire_shape_exactly() {
    let message = Outbound::Create {
        username: "alice".to_owned(),
        settings: GameSettings {
            start_section: "1".to_owned(),
            end_section: "5".to_owned(),
            game_kind: "trivia".to_owned(),
        },
    };
    assert_eq!(
        encode_outbound(&message),
        r#"{"kind":"create","username":"alice","settings":{"startSection":"1","endSection":"5","gameKind":"trivia"}}"#
    );
}

#[test]
fn encode_create_keeps_empty_strings() {
    let message = Outbound::Create {
        username: String::new(),
        settings: GameSettings {
            start_section: String::new(),
            end_section: String::new(),
            game_kind: String::new(),
        },
    };
    assert_eq!(
        encode_outbound(&message),
        r#"{"kind":"create","username":"","settings":{"startSection":"","endSection":"","gameKind":""}}"#
    );
}

#[test]
fn encode_start_is_bare_kind() {
    assert_eq!(encode_outbound(&Outbound::Start), r#"{"kind":"start"}"#);
}

#[test]
fn encode_next_question_is_bare_kind() {
    assert_eq!(
        encode_outbound(&Outbound::NextQuestion),
        r#"{"kind":"nextQuestion"}"#
    );
}

#[test]
fn inbound_kind_matches_wire_discriminator() {
    assert_eq!(
        Inbound::CreateSuccess {
            game_id: String::new(),
            host_name: String::new(),
        }
        .kind(),
        "createSuccess"
    );
    assert_eq!(
        Inbound::CreateFailed {
            message: String::new(),
        }
        .kind(),
        "createFailed"
    );
    assert_eq!(Inbound::RefreshLobby { users: Vec::new() }.kind(), "refreshLobby");
    assert_eq!(Inbound::InitialStuff.kind(), "initialStuff");
}

#[test]
fn outbound_kind_matches_wire_discriminator() {
    assert_eq!(Outbound::Start.kind(), "start");
    assert_eq!(Outbound::NextQuestion.kind(), "nextQuestion");
}

#[test]
fn outbound_round_trips_through_json() {
    let message = Outbound::Create {
        username: "alice".to_owned(),
        settings: GameSettings {
            start_section: "1".to_owned(),
            end_section: "5".to_owned(),
            game_kind: "trivia".to_owned(),
        },
    };
    let decoded: Outbound =
        serde_json::from_str(&encode_outbound(&message)).expect("deserialize");
    assert_eq!(decoded, message);
}
