//! Buffer-management flag word (32-bit, big-endian on the wire).

use phf::phf_map;

static FLAGS: phf::Map<&'static str, u32> = phf_map! {
    "token_header" => 0x001,
    "stream_id_header" => 0x002,
    "host_bound" => 0x004,
    "start_stream_header" => 0x008,
    "end_stream_trailer" => 0x010,
    "data_included" => 0x020,
    "leave_buffer_open" => 0x040,
    "response_id_header" => 0x080,
    "pointer_included" => 0x100,
    "clear_buffer" => 0x200,
};

pub fn flag(name: &str) -> Option<u32> {
    FLAGS.get(name).copied()
}

pub fn flag_names(word: u32) -> Option<Vec<&'static str>> {
    if word & !0x3FF != 0 {
        return None;
    }
    let ordered = [
        (0x001, "token_header"),
        (0x002, "stream_id_header"),
        (0x004, "host_bound"),
        (0x008, "start_stream_header"),
        (0x010, "end_stream_trailer"),
        (0x020, "data_included"),
        (0x040, "leave_buffer_open"),
        (0x080, "response_id_header"),
        (0x100, "pointer_included"),
        (0x200, "clear_buffer"),
    ];
    let mut names = Vec::new();
    for (bit, name) in ordered {
        if word & bit != 0 {
            names.push(name);
        }
    }
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_round_trips() {
        let word = 0x249; // token_header | start_stream_header | leave_buffer_open | clear_buffer
        let names = flag_names(word).unwrap();
        let back = names.iter().map(|n| flag(n).unwrap()).fold(0, |a, b| a | b);
        assert_eq!(back, word);
        assert_eq!(flag_names(0x400), None);
    }
}
