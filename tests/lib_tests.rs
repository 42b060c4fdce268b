use std::path::{Path, PathBuf};
use svsdecode::Opts;
use svsdecode::engine::{
    ShardTarget, column_label, derived_base_name, file_base_name, identifier_from_filename,
    shard_dir_name, shard_index,
};
use svsdecode::format::{PacketMetadata, Timestamp, Upi};
use svsdecode::pipeline::is_bad;

fn meta(source: u8, sequence: u32, acquisition: u64, upi: &str) -> PacketMetadata {
    PacketMetadata {
        acquisition: Timestamp(acquisition),
        sequence,
        auxiliary: 0,
        source,
        x: 0,
        y: 0,
        format: 0,
        drop: 0,
        offset_x: 0,
        size_x: 0,
        offset_y: 0,
        size_y: 0,
        scale_x: 0,
        scale_y: 0,
        ratio: 0,
        upi: Upi::from_text(upi),
    }
}

// --- identifier_from_filename ---

#[test]
fn test_identifier_single_segment() {
    assert_eq!(identifier_from_filename("rt_FOO_a_b_c_d_e.dat"), "FOO");
}

#[test]
fn test_identifier_keeps_inner_underscores() {
    assert_eq!(
        identifier_from_filename("hrdl_CAM_01_X_2024_001_12_00_00.dat"),
        "CAM_01_X"
    );
}

#[test]
fn test_identifier_degenerate_names_are_empty() {
    assert_eq!(identifier_from_filename("plain.dat"), "");
    assert_eq!(identifier_from_filename("a_b_c_d_e_f"), "");
    assert_eq!(identifier_from_filename(""), "");
}

#[test]
fn test_file_base_name() {
    assert_eq!(file_base_name(Path::new("/in/x/rt_A_1_2_3_4_5")), "rt_A_1_2_3_4_5");
}

// --- shards ---

#[test]
fn test_shard_index_floor_division() {
    assert_eq!(shard_index(1025, 512), 2);
    assert_eq!(shard_index(511, 512), 0);
    assert_eq!(shard_index(512, 512), 1);
    assert_eq!(shard_index(u32::MAX, 1), u64::from(u32::MAX));
}

#[test]
fn test_shard_dir_name_is_six_digits() {
    assert_eq!(shard_dir_name(2), "000002");
    assert_eq!(shard_dir_name(123456), "123456");
}

// --- derived names ---

#[test]
fn test_derived_base_name() {
    let ticks = (86_400 + 3_723) * 1_000_000_000;
    let m = meta(0x0a, 7, ticks, "ignored");
    assert_eq!(derived_base_name(&m, "FOO"), "000a_FOO_19800107_010203_000007");
}

#[test]
fn test_derived_base_name_wide_fields() {
    let m = meta(0xff, 1_234_567, 0, "");
    assert_eq!(derived_base_name(&m, "X"), "00ff_X_19800106_000000_1234567");
}

#[test]
fn test_shard_target_paths() {
    let t = ShardTarget {
        base_name: "000a_FOO_19800106_000000_000007".to_string(),
        shard_index: 0,
        dir: PathBuf::from("/out/FOO/000000"),
    };
    assert_eq!(
        t.csv_path(),
        PathBuf::from("/out/FOO/000000/000a_FOO_19800106_000000_000007.csv")
    );
    assert_eq!(
        t.xml_path(),
        PathBuf::from("/out/FOO/000000/000a_FOO_19800106_000000_000007.csv.xml")
    );
}

#[test]
fn test_column_label() {
    assert_eq!(column_label(5), "g2(t, 5)");
}

// --- opts ---

#[test]
fn test_opts_non_positive_fall_back_to_defaults() {
    let opts = Opts {
        files_per_dir: 0,
        workers: -3,
        ..Default::default()
    }
    .normalized();
    assert_eq!(opts.files_per_dir, 512);
    assert_eq!(opts.workers, 4);
}

#[test]
fn test_opts_positive_values_kept() {
    let opts = Opts {
        files_per_dir: 10,
        workers: 1,
        ..Default::default()
    }
    .normalized();
    assert_eq!(opts.files_per_dir(), 10);
    assert_eq!(opts.workers(), 1);
}

// --- input filtering ---

#[test]
fn test_is_bad_extension() {
    assert!(is_bad(Path::new("/in/a.bad")));
    assert!(!is_bad(Path::new("/in/a.dat")));
    assert!(!is_bad(Path::new("/in/bad")));
    assert!(!is_bad(Path::new("/in/a.bad.dat")));
}
