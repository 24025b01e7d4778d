//! Property-based tests for room name resolution

use hth_server::shared::room_key;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn test_string_rooms_are_used_verbatim(name in ".*") {
        prop_assert_eq!(room_key(&json!(name.clone())), Some(name));
    }

    #[test]
    fn test_integer_rooms_match_decimal_text(id in any::<i64>()) {
        prop_assert_eq!(room_key(&json!(id)), Some(id.to_string()));
    }
}

#[test]
fn test_structured_values_have_no_room() {
    assert_eq!(room_key(&json!(null)), None);
    assert_eq!(room_key(&json!({"chatId": "room1"})), None);
    assert_eq!(room_key(&json!(["room1"])), None);
}
