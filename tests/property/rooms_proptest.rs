//! Property-based tests for room membership

use hth_server::backend::realtime::{ConnectionId, RoomManager};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn test_join_is_idempotent(room in ".{0,16}", repeats in 1usize..6) {
        let connection = ConnectionId::generate();

        let mut once = RoomManager::new();
        once.join(connection, room.clone());

        let mut many = RoomManager::new();
        for _ in 0..repeats {
            many.join(connection, room.clone());
        }

        prop_assert_eq!(once.members(&room), many.members(&room));
        prop_assert_eq!(many.rooms_of(connection).len(), 1);
    }

    #[test]
    fn test_removing_every_member_empties_rooms(
        rooms in prop::collection::vec("[a-z]{1,4}", 1..10),
        clients in 1usize..6,
    ) {
        let mut manager = RoomManager::new();
        let connections: Vec<ConnectionId> = (0..clients).map(|_| ConnectionId::generate()).collect();

        for (i, room) in rooms.iter().enumerate() {
            manager.join(connections[i % clients], room.clone());
        }
        for connection in &connections {
            manager.remove_connection(*connection);
        }

        prop_assert_eq!(manager.room_count(), 0);
        for room in &rooms {
            prop_assert!(manager.members(room).is_empty());
        }
    }

    #[test]
    fn test_members_match_joins(
        joins in prop::collection::vec((0usize..4, "[a-c]"), 0..20),
    ) {
        let mut manager = RoomManager::new();
        let connections: Vec<ConnectionId> = (0..4).map(|_| ConnectionId::generate()).collect();
        let mut expected: HashSet<(usize, String)> = HashSet::new();

        for (client, room) in &joins {
            manager.join(connections[*client], room.clone());
            expected.insert((*client, room.clone()));
        }

        for room in ["a", "b", "c"] {
            let members: HashSet<ConnectionId> = manager.members(room).into_iter().collect();
            let wanted: HashSet<ConnectionId> = expected
                .iter()
                .filter(|(_, r)| r == room)
                .map(|(c, _)| connections[*c])
                .collect();
            prop_assert_eq!(members, wanted);
        }
    }
}
