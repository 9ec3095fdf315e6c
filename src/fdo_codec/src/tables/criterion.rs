//! Action criterion codes. Code 13 has no observed name; values beyond the
//! table stay numeric in both directions.

use phf::phf_map;

static CODES: phf::Map<&'static str, u8> = phf_map! {
    "void" => 0,
    "select" => 1,
    "close" => 2,
    "open" => 3,
    "gain_focus" => 4,
    "lose_focus" => 5,
    "cancel" => 6,
    "enter_free" => 7,
    "enter_paid" => 8,
    "create" => 9,
    "set_online" => 10,
    "set_offline" => 11,
    "restore" => 12,
    "minimize" => 14,
    "restore_from_maximize" => 15,
    "restore_from_minimize" => 16,
    "timeout" => 17,
    "screen_name_changed" => 18,
    "movie_over" => 19,
    "drop" => 20,
    "url_drop" => 21,
    "user_delete" => 22,
    "toggle_up" => 23,
    "activated" => 24,
    "deactivated" => 25,
    "popupmenu" => 26,
    "destroyed" => 27,
};

pub fn code(name: &str) -> Option<u8> {
    CODES.get(name).copied()
}

pub fn name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "void",
        1 => "select",
        2 => "close",
        3 => "open",
        4 => "gain_focus",
        5 => "lose_focus",
        6 => "cancel",
        7 => "enter_free",
        8 => "enter_paid",
        9 => "create",
        10 => "set_online",
        11 => "set_offline",
        12 => "restore",
        14 => "minimize",
        15 => "restore_from_maximize",
        16 => "restore_from_minimize",
        17 => "timeout",
        18 => "screen_name_changed",
        19 => "movie_over",
        20 => "drop",
        21 => "url_drop",
        22 => "user_delete",
        23 => "toggle_up",
        24 => "activated",
        25 => "deactivated",
        26 => "popupmenu",
        27 => "destroyed",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_with_gap_at_13() {
        for c in 0..=27u8 {
            match name(c) {
                Some(n) => assert_eq!(code(n), Some(c)),
                None => assert_eq!(c, 13),
            }
        }
    }
}
