use rshowenv::write_multiline;

/// Helper to format one multi-line record at a name column width of 10
fn render(name: &str, value: &str) -> String {
    render_at(name, value, 10)
}

/// Helper to format one multi-line record at an explicit name column width
fn render_at(name: &str, value: &str, width: usize) -> String {
    let mut out = Vec::new();
    write_multiline(&mut out, name, value, width).expect("Vec sink never fails");
    String::from_utf8(out).expect("record output is valid UTF-8")
}

#[cfg(test)]
mod header_tests {
    use super::*;

    #[test]
    fn test_header_is_styled_name_and_dashes() {
        assert_eq!(
            render("WEATHER", ""),
            "\x1b[97m   WEATHER\x1b[0m = ---\n"
        );
    }

    #[test]
    fn test_empty_value_prints_header_only() {
        let rendered = render("EMPTY", "");
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.ends_with(" = ---\n"));
    }

    #[test]
    fn test_name_wider_than_column_is_not_truncated() {
        assert_eq!(
            render("GEOGRAPHIC_DATA", ""),
            "\x1b[97mGEOGRAPHIC_DATA\x1b[0m = ---\n"
        );
    }
}

#[cfg(test)]
mod body_layout_tests {
    use super::*;

    #[test]
    fn test_line_without_colon_is_right_aligned() {
        assert_eq!(
            render("D", "---\n").lines().nth(1),
            Some("           ---")
        );
    }

    #[test]
    fn test_empty_body_line_becomes_indent_spaces() {
        let rendered = render("D", "a: b\n\nc: d\n");
        assert_eq!(rendered.lines().nth(2), Some("              "));
    }

    #[test]
    fn test_field_is_uppercased_and_right_aligned() {
        assert_eq!(
            render("D", "city: Portland\n").lines().nth(1),
            Some("          CITY = Portland")
        );
    }

    #[test]
    fn test_remainder_leading_whitespace_is_trimmed() {
        assert_eq!(
            render("D", "city:\t   Portland\n").lines().nth(1),
            Some("          CITY = Portland")
        );
    }

    #[test]
    fn test_split_happens_at_first_colon_only() {
        assert_eq!(
            render("D", "note: a:b:c\n").lines().nth(1),
            Some("          NOTE = a:b:c")
        );
    }

    #[test]
    fn test_empty_field_name_keeps_layout() {
        assert_eq!(
            render("D", ": loose note\n").lines().nth(1),
            Some("               = loose note")
        );
    }

    #[test]
    fn test_field_cell_keeps_minimum_width() {
        // a narrow name column still leaves an 11 character field cell
        assert_eq!(
            render_at("D", "temp: 12C\n", 6).lines().nth(1),
            Some("       TEMP = 12C")
        );
    }

    #[test]
    fn test_long_field_is_not_truncated() {
        assert_eq!(
            render("D", "autonomoussystem: AS7922\n").lines().nth(1),
            Some("AUTONOMOUSSYSTEM = AS7922")
        );
    }

    #[test]
    fn test_missing_trailing_newline_renders_the_same() {
        assert_eq!(render("D", "city: Portland"), render("D", "city: Portland\n"));
    }
}

#[cfg(test)]
mod field_dispatch_tests {
    use super::*;

    #[test]
    fn test_ip_field_is_bright_green() {
        assert_eq!(
            render("GEO", "IP: 10.0.0.1\n"),
            "\x1b[97m       GEO\x1b[0m = ---\n            IP = \x1b[92m10.0.0.1\x1b[0m\n"
        );
    }

    #[test]
    fn test_isp_field_is_bold_white() {
        let rendered = render("GEO", "ISP: Comcast Cable\n");
        assert_eq!(
            rendered.lines().nth(1),
            Some("           ISP = \x1b[1;37mComcast Cable\x1b[0m")
        );
    }

    #[test]
    fn test_ok_prefix_is_green_whole_remainder() {
        let rendered = render("GEO", "Status: OK - reachable\n");
        assert_eq!(
            rendered.lines().nth(1),
            Some("        STATUS = \x1b[32mOK - reachable\x1b[0m")
        );
    }

    #[test]
    fn test_us_prefix_is_replaced_with_usa() {
        let rendered = render("GEO", "Country: US-East\n");
        assert_eq!(
            rendered.lines().nth(1),
            Some("       COUNTRY = \x1b[1;31mU\x1b[0m\x1b[1;37mS\x1b[0m\x1b[1;94mA\x1b[0m")
        );
    }

    #[test]
    fn test_prefix_checks_need_two_characters() {
        let rendered = render("GEO", "flag: o\nmark: u\n");
        assert_eq!(rendered.lines().nth(1), Some("          FLAG = o"));
        assert_eq!(rendered.lines().nth(2), Some("          MARK = u"));
    }

    #[test]
    fn test_ip_field_with_empty_remainder_still_emits_codes() {
        let rendered = render("GEO", "IP:\n");
        assert_eq!(rendered.lines().nth(1), Some("            IP = \x1b[92m\x1b[0m"));
    }

    #[test]
    fn test_lowercase_field_name_still_dispatches() {
        let rendered = render("GEO", "ip: 9.9.9.9\n");
        assert_eq!(
            rendered.lines().nth(1),
            Some("            IP = \x1b[92m9.9.9.9\x1b[0m")
        );
    }

    #[test]
    fn test_other_fields_fall_through_to_highlighter() {
        let rendered = render("SYS", "distro: Ubuntu stable\n");
        assert_eq!(
            rendered.lines().nth(1),
            Some("        DISTRO = \x1b[38;5;202mUbuntu\x1b[0m stable")
        );
    }

    #[test]
    fn test_full_geodata_record() {
        let value = "IP: 9.9.9.9\nRegion: US-East\nStatus: OK\n---\n";
        let expected = "\x1b[97m       GEO\x1b[0m = ---\n\
                        \x20           IP = \x1b[92m9.9.9.9\x1b[0m\n\
                        \x20       REGION = \x1b[1;31mU\x1b[0m\x1b[1;37mS\x1b[0m\x1b[1;94mA\x1b[0m\n\
                        \x20       STATUS = \x1b[32mOK\x1b[0m\n\
                        \x20          ---\n";
        assert_eq!(render("GEO", value), expected);
    }
}
