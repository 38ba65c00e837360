#[cfg(test)]
mod tests {
    use crate::sanitize::{
        basename, ensure_public_path, normalize_serving_path, sanitize_id, sanitize_name,
        strip_extension, PUBLIC_PREFIX,
    };

    #[test]
    fn strip_extension_removes_trailing_ext() {
        assert_eq!(strip_extension("photo.png"), "photo");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn strip_extension_ignores_dots_in_directories() {
        assert_eq!(strip_extension("a.b/c.txt"), "a.b/c");
        assert_eq!(strip_extension("no_ext_dir/file"), "no_ext_dir/file");
        assert_eq!(strip_extension("a.b\\c"), "a.b\\c");
    }

    #[test]
    fn strip_extension_empty_input() {
        assert_eq!(strip_extension(""), "");
    }

    #[test]
    fn sanitize_id_replaces_disallowed_runs() {
        assert_eq!(sanitize_id("Hello, World!"), "Hello_World");
        assert_eq!(sanitize_id("héllo"), "h_llo");
    }

    #[test]
    fn sanitize_id_collapses_and_trims_underscores() {
        assert_eq!(sanitize_id("__a__b__"), "a_b");
        assert_eq!(sanitize_id("a - b"), "a_b");
        assert_eq!(sanitize_id(""), "");
        assert_eq!(sanitize_id("!!!"), "");
    }

    #[test]
    fn sanitize_name_turns_separators_into_dashes() {
        assert_eq!(sanitize_name("foo/bar\\baz"), "foo - bar - baz");
        assert_eq!(sanitize_name("a//b"), "a - b");
    }

    #[test]
    fn sanitize_name_collapses_whitespace_and_strips_symbols() {
        assert_eq!(sanitize_name("  a   b  "), "a b");
        assert_eq!(sanitize_name("café!"), "caf");
        assert_eq!(sanitize_name("snow-cap_1"), "snow-cap_1");
    }

    #[test]
    fn normalize_serving_path_basics() {
        assert_eq!(normalize_serving_path(""), "");
        assert_eq!(normalize_serving_path("   "), "");
        assert_eq!(normalize_serving_path("a\\b"), "/a/b");
        assert_eq!(normalize_serving_path("//a///b"), "/a/b");
        assert_eq!(normalize_serving_path("/x"), "/x");
    }

    #[test]
    fn ensure_public_path_empty_yields_bare_prefix() {
        assert_eq!(ensure_public_path(""), PUBLIC_PREFIX);
    }

    #[test]
    fn ensure_public_path_is_idempotent_under_prefix() {
        assert_eq!(ensure_public_path("/backgroundimages/x"), "/backgroundimages/x");
        assert_eq!(ensure_public_path("/backgroundimages"), "/backgroundimages");
    }

    #[test]
    fn ensure_public_path_joins_other_paths() {
        assert_eq!(ensure_public_path("x/y"), "/backgroundimages/x/y");
        assert_eq!(ensure_public_path("\\img\\a.png"), "/backgroundimages/img/a.png");
        // A prefix-looking segment is still a plain segment
        assert_eq!(
            ensure_public_path("/backgroundimagesfoo"),
            "/backgroundimages/backgroundimagesfoo"
        );
    }

    #[test]
    fn basename_takes_last_component() {
        assert_eq!(basename("a/b/c.png"), "c.png");
        assert_eq!(basename("a\\b\\c.png"), "c.png");
        assert_eq!(basename("plain"), "plain");
        assert_eq!(basename(""), "");
    }
}
