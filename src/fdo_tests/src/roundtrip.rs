//! Round-trip properties over a source corpus that touches every rule
//! family: parse → compile → decompile → recompile must reproduce the
//! bytes, and the decompiled tree must re-render to parseable source.

use fdo_codec::EncodeOptions;
use fdo_syntax::Formatter;

use crate::support;

const CORPUS: &[&str] = &[
    // stream control
    "uni_start_stream\nuni_end_stream\n",
    "uni_wait_on <120>\nuni_sync_skip <0>\n",
    "uni_start_typed_data <latin1>\nuni_next_atom_typed <ascii>\n",
    "uni_use_last_atom_string <mat_title>\nuni_use_last_atom_value <mat_capacity>\n",
    // objects and attributes
    "man_start_object <ind_group, \"Main\">\nman_end_object\n",
    "man_start_object <org_group, \"Top\">\nman_set_context_relative <2>\nman_end_context\n",
    "man_get_display_characteristics <horzres>\nman_get_display_characteristics <width, 3>\n",
    "mat_object_id <32-105>\nmat_art_id <1-0-1329>\n",
    "mat_orientation <vff>\nmat_orientation <hef>\n",
    "mat_position <bottom_right>\nmat_size <10, 20>\nmat_size <10, 20, 4000>\n",
    "mat_font_sis <arial, 10, bold | underline>\nmat_font_sis <courier, 9>\n",
    "mat_frame_style <sunken>\nmat_trigger_style <group_state>\nmat_trigger_style <9>\n",
    "mat_title_pos <top_or_left | right>\nmat_title_pos <below>\n",
    "mat_text_on_picture_pos <art_middle_right | title_middle_left>\n",
    "mat_auto_complete <web_list | address_list>\n",
    "mat_log_object <on>\nmat_sort_order <descending>\nmat_field_script <on_exit>\n",
    "mat_title_append_screen_name <yes>\nmat_bool_default <yes>\nmat_bool_disabled <no>\n",
    "mat_title <\"Chat \\\"Lobby\\\"\\n\">\nmat_capacity <500>\n",
    "mat_color_face <128, 64, 32>\nmat_tab_order <1, 2, 3, 9>\n",
    "mat_bool_double_byte <yes>\nmat_relative_tag <7>\n",
    // actions and criteria
    "act_set_criterion <select>\nact_do_action <screen_name_changed>\n",
    "act_set_criterion <99>\nact_change_criterion <close>\n",
    "act_replace_select_action <\n    uni_start_stream\n    uni_end_stream\n>\n",
    "act_append_action <\n    async_alert <warning, \"Careful\">\n>\n",
    // data extraction
    "de_start_extraction <0>\nde_start_extraction <append | validate>\n",
    "de_set_data_type <gid>\nde_get_data <text>\nde_set_extraction_type <all>\n",
    "de_validate <display_msg | terminate>\nde_data <\"field one\">\n",
    // buffers
    "buf_start_buffer <token_header | host_bound>\nbuf_end_buffer\n",
    "buf_set_flags <clear_buffer>\nbuf_set_buffer_limit <300>\n",
    "buf_set_data_atom <de_data>\nbuf_get_flags <1024>\n",
    // file manager
    "fm_item_type <date_modified>\nfm_item_get <name, size>\n",
    "fm_handle_error <display_msg | broadcast>\nfm_delete <\"old.txt\">\n",
    // database and display object data
    "idb_set_context <0-3-300>\nidb_get_data <12>\n",
    "dod_start\ndod_gid <0-5-77>\ndod_end\n",
    // variables
    "var_number_set <A, 300>\nvar_number_get <B>\n",
    "var_string_set <C, \"hello\">\nvar_string_append <D, \"!\">\n",
    "var_number_zero <Z>\nvar_lookup <Q>\n",
    // tokens
    "sm_send_token_raw <\"At\">\nsm_send_token_arg <\"fT\", 300>\nsm_send_token_arg <\"fT\", 7>\n",
    // conditionals
    "if_num_equal <3, 9>\nif_last_return_true_then <1, 2>\n",
    // modem interface flag words
    "mip_set_flags <196608>\nmip_get_flags <5>\nmip_set_version <2>\n",
    // connection layer words
    "phone_port_list <9600, 14400>\ncomit_reboot <1>\n",
    // alerts
    "async_alert <info, \"Hi\">\nasync_error <yes_no_cancel, \"Sure?\">\nasync_message <error, \"Bad\">\n",
    // escape hatch
    "the_unknown <29, 77, 01x, 255, \"abc\">\n",
    // nested reference with data
    "act_replace_select_action <uni_start_stream>\n",
    "dod_data <dod_gid <0-5-77> 7F>\n",
];

#[test]
fn corpus_round_trips_canonical_bytes() {
    let catalog = support::catalog();
    for source in CORPUS {
        support::compile_checked(&catalog, source);
    }
}

#[test]
fn corpus_round_trips_compact_bytes() {
    let catalog = support::catalog();
    let compact = EncodeOptions { compact: true };
    for source in CORPUS {
        let tree = support::parse(source);
        let bytes = fdo_codec::compile_with(&catalog, &tree, &compact).expect("compiles");
        let reparsed = fdo_codec::decompile(&catalog, &bytes).expect("decompiles");
        let recompiled =
            fdo_codec::compile_with(&catalog, &reparsed, &compact).expect("recompiles");
        assert_eq!(
            hex::encode(&recompiled),
            hex::encode(&bytes),
            "compact byte round-trip failed for:\n{source}"
        );
    }
}

#[test]
fn corpus_round_trips_through_rendered_source() {
    let catalog = support::catalog();
    let formatter = Formatter::default();
    for source in CORPUS {
        let bytes = fdo_codec::compile(&catalog, &support::parse(source)).expect("compiles");
        let tree = fdo_codec::decompile(&catalog, &bytes).expect("decompiles");
        let rendered = formatter.format(&tree, &catalog);
        let reparsed = fdo_parser::parse_source(&rendered)
            .unwrap_or_else(|e| panic!("rendered source re-parses:\n{rendered}\n{e}"));
        let recompiled = fdo_codec::compile(&catalog, &reparsed).expect("recompiles");
        assert_eq!(
            hex::encode(&recompiled),
            hex::encode(&bytes),
            "render/re-parse round-trip failed for:\n{source}\nrendered:\n{rendered}"
        );
    }
}

#[test]
fn unknown_frames_survive_via_the_unknown() {
    let catalog = support::catalog();
    // Protocol 29 has no definitions in the built-in table.
    let bytes = [29u8, 200, 3, 0xAA, 0xBB, 0xCC];
    let tree = fdo_codec::decompile(&catalog, &bytes).unwrap();
    assert_eq!(tree.atoms[0].name, "the_unknown");
    let recompiled = fdo_codec::compile(&catalog, &tree).unwrap();
    assert_eq!(recompiled, bytes);
}
