use golfstats::utils::table::{Table, strip_ansi, visible_width};

#[test]
fn test_wide_characters_count_double() {
    let mut table = Table::with_headers(&["LOCATION"]);
    table.add_row(vec!["東京都港区六本木ヒルズ".to_string()]);

    assert_eq!(table.columns[0].width, 22);
}

#[test]
fn test_ansi_sequences_do_not_count() {
    assert_eq!(visible_width("\x1b[Kabc"), 3);
    assert_eq!(visible_width("\x1b[32mYES\x1b[0m"), 3);
    assert_eq!(strip_ansi("\x1b[1;31mNO\x1b[0m"), "NO");
}

#[test]
fn test_render_pads_to_display_width() {
    let mut table = Table::with_headers(&["A", "B"]);
    table.add_row(vec!["港区".to_string(), "x".to_string()]);
    table.add_row(vec!["\x1b[32mok\x1b[0m".to_string(), "y".to_string()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "A     B  ");
    assert_eq!(lines[2], "港区  x  ");
    assert_eq!(strip_ansi(lines[3]), "ok    y  ");
}
