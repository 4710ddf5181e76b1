//! Integration tests for ipv4-subnet-calc
//!
//! These tests run the complete workflow from raw input to the finished report.

use ipv4_subnet_calc::{
    calculate,
    output::{csv_rows, to_json},
    processing::{get_parent_network, paginate, parse_input},
    CalcConfig, CalcError,
};

#[test]
fn test_cidr_with_host_bits() {
    let report = calculate("192.168.1.10/24", None, &CalcConfig::default())
        .expect("Failed to calculate");

    assert_eq!(report.network, "192.168.1.0");
    assert_eq!(report.broadcast, "192.168.1.255");
    assert_eq!(report.hosts_usable, "254");
    assert_eq!(
        format!("{} - {}", report.host_min, report.host_max),
        "192.168.1.1 - 192.168.1.254"
    );
    assert_eq!(report.ip_class, "C");
    assert_eq!(report.ip_type, "Private");
    assert_eq!(report.in_addr, "0.1.168.192.in-addr.arpa");
    assert_eq!(report.cidr_full, "192.168.1.0/24");
}

#[test]
fn test_subnet_mask_and_wildcard_agree() {
    let config = CalcConfig::default();
    let by_mask = calculate("10.10.10.1 255.255.255.252", None, &config).expect("mask");
    let by_wildcard = calculate("10.10.10.1 0.0.0.3", None, &config).expect("wildcard");
    let by_cidr = calculate("10.10.10.1/30", None, &config).expect("cidr");

    assert_eq!(by_mask.cidr_full, "10.10.10.0/30");
    assert_eq!(by_mask.hosts_usable, "2");
    assert_eq!(by_mask.host_min, "10.10.10.1");
    assert_eq!(by_mask.host_max, "10.10.10.2");
    assert_eq!(by_mask, by_wildcard);
    assert_eq!(by_mask, by_cidr);
}

#[test]
fn test_invalid_input() {
    let config = CalcConfig::default();
    for input in ["not.an.ip", "", "10.0.0.1/40", "10.0.0.1 255.0.255.0"] {
        assert_eq!(
            calculate(input, Some("3"), &config),
            Err(CalcError::InvalidInput),
            "{input:?}"
        );
    }
    assert_eq!(
        CalcError::InvalidInput.to_string(),
        "Invalid IP address or subnet mask."
    );
}

#[test]
fn test_cidr_text_is_network_aligned() {
    for (input, expected) in [
        ("10.0.0.5/24", "10.0.0.0/24"),
        ("172.31.200.77/12", "172.16.0.0/12"),
        ("203.0.113.9/29", "203.0.113.8/29"),
        ("1.2.3.4/0", "0.0.0.0/0"),
    ] {
        let net = parse_input(input).expect("valid cidr");
        assert_eq!(net.to_string(), expected);
        assert_eq!(parse_input(&net.to_string()), Ok(net));
    }
}

#[test]
fn test_usable_hosts_by_prefix() {
    let config = CalcConfig::default();
    for len in 0..=32u32 {
        let input = format!("10.0.0.0/{len}");
        let report = calculate(&input, None, &config).expect("valid prefix");
        let expected = if len >= 31 { 0 } else { (1u64 << (32 - len)) - 2 };
        assert_eq!(report.hosts_usable.replace(',', ""), expected.to_string(), "/{len}");
        if len >= 31 {
            assert_eq!(report.host_min, report.network);
            assert_eq!(report.host_max, report.network);
        }
    }
}

#[test]
fn test_page_window_is_clamped() {
    let config = CalcConfig::default();
    let net = parse_input("10.1.2.3/32").unwrap();
    let parent = get_parent_network(net);

    let low = paginate(net, parent, Some("0"), &config);
    assert_eq!(low.pages.current_page, 1);
    assert_eq!(low.pages.window_start_page, 1);

    let high = paginate(net, parent, Some("1000"), &config);
    assert_eq!(high.pages.total_pages, 13);
    assert_eq!(high.pages.current_page, 13);
    assert_eq!(high.pages.window_start_page, 3);
    assert_eq!(high.pages.window_end_page, 13);
    assert_eq!(high.entries.len(), 256 - 40);
    assert_eq!(high.entries.last().unwrap().network, "10.1.2.255");
}

#[test]
fn test_wide_network_parent_is_first_octet() {
    let report = calculate("96.0.0.0/4", None, &CalcConfig::default()).expect("valid");
    assert_eq!(report.cidr_full, "96.0.0.0/4");
    assert!(!report.show_subnet_list);
    assert_eq!(report.parent_desc, "Network: 96.0.0.0/4");
    assert_eq!(report.all_nets.len(), 1);
    assert_eq!(report.all_nets[0].broadcast, "111.255.255.255");
}

#[test]
fn test_identical_input_identical_output() {
    let config = CalcConfig::default();
    let a = calculate("172.16.10.1/19", Some("2"), &config).unwrap();
    let b = calculate("172.16.10.1/19", Some("2"), &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(to_json(&a).unwrap(), to_json(&b).unwrap());
    assert_eq!(csv_rows(&a), csv_rows(&b));
    assert_eq!(a.parent_desc, "All 8 Possible /19 Networks in 172.16.*.*");
}
