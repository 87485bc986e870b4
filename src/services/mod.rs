pub mod seat_map;
