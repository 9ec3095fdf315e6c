//! Formatter output snapshots for decompiled streams.

use fdo_syntax::Formatter;

use crate::support;

fn decompiled(source: &str) -> String {
    let catalog = support::catalog();
    let bytes = fdo_codec::compile(&catalog, &support::parse(source)).unwrap();
    let tree = fdo_codec::decompile(&catalog, &bytes).unwrap();
    let text = Formatter::default().format(&tree, &catalog);
    text.trim_end().to_string()
}

#[test]
fn window_skeleton_renders_with_indentation() {
    let text = decompiled(
        "uni_start_stream\nman_start_object <ind_group, \"Lobby\">\nmat_orientation <vff>\nmat_title <\"Who's Here\">\nman_end_object\nuni_end_stream\n",
    );
    insta::assert_snapshot!(text, @r###"
    uni_start_stream
        man_start_object <ind_group, "Lobby">
            mat_orientation <vff>
            mat_title <"Who's Here">
        man_end_object
    uni_end_stream
    "###);
}

#[test]
fn action_stream_renders_in_block_form() {
    let text = decompiled(
        "uni_start_stream\nact_replace_select_action <\n    uni_start_stream\n    async_alert <info, \"Hi\">\n    uni_end_stream\n>\nuni_end_stream\n",
    );
    insta::assert_snapshot!(text, @r###"
    uni_start_stream
        act_replace_select_action <
            uni_start_stream
                async_alert <info, "Hi">
            uni_end_stream
        >
    uni_end_stream
    "###);
}

#[test]
fn unknown_atoms_render_as_the_unknown() {
    let catalog = support::catalog();
    let tree = fdo_codec::decompile(&catalog, &[29, 200, 2, 0xAB, 0xCD]).unwrap();
    let text = Formatter::default().format(&tree, &catalog);
    insta::assert_snapshot!(text.trim_end(), @"the_unknown <29, 200, ABCDx>");
}
