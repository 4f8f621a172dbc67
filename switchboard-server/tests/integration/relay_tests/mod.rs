mod test_same_room_policy;
