//! Integration tests for buffered inputs, outputs and file lists.

use std::fs;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};

use cliutil::files::{
    access_file, capture, open, open_buffered, parse_file_list, InputOptions, OverridePrompt,
};
use cliutil::UtilError;
use tempfile::TempDir;

use crate::integration::fixtures::{create_files, entry_count, pattern, standard_files};

fn options_in(dir: &TempDir) -> InputOptions {
    InputOptions {
        temp_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    }
}

// ==================== Capture ====================

#[test]
fn test_capture_round_trip_is_repeatable() {
    let scratch = TempDir::new().unwrap();
    let samples: [&[u8]; 4] = [b"", b"x", b"\0\xff\r\n", &[b'z'; 20_000]];

    for sample in samples {
        let mut input = capture(&mut Cursor::new(sample.to_vec()), &options_in(&scratch)).unwrap();

        for _ in 0..3 {
            let mut read = Vec::new();
            input.read_to_end(&mut read).unwrap();
            assert_eq!(read, sample);
            input.seek(SeekFrom::Start(0)).unwrap();
        }

        input.close().unwrap();
    }

    assert_eq!(entry_count(scratch.path()), 0);
}

#[test]
fn test_capture_metadata_matches_content() {
    let scratch = TempDir::new().unwrap();

    let input = capture(&mut Cursor::new(vec![7u8; 4096]), &options_in(&scratch)).unwrap();
    let metadata = input.metadata().unwrap();
    assert!(metadata.is_file());
    assert_eq!(metadata.len(), 4096);
}

// ==================== Open ====================

#[test]
fn test_open_errors_do_not_open_anything() {
    let dir = create_files(&standard_files());

    let err = open(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, UtilError::NotFound { .. }));

    let err = open(dir.path()).unwrap_err();
    assert!(matches!(err, UtilError::IsDirectory { .. }));

    let err = open_buffered(dir.path(), &InputOptions::default()).unwrap_err();
    assert!(matches!(err, UtilError::IsDirectory { .. }));
}

#[test]
fn test_access_file_matches_open() {
    let dir = create_files(&standard_files());
    let alpha = dir.path().join("alpha.txt");

    let metadata = access_file(&alpha).unwrap().unwrap();
    let input = open(&alpha).unwrap();
    assert_eq!(input.metadata().unwrap().len(), metadata.len());
    assert!(access_file("-").unwrap().is_none());
}

// ==================== File lists feeding inputs ====================

#[test]
fn test_file_list_opens_every_match() {
    let dir = create_files(&standard_files());
    let names = parse_file_list(&[pattern(dir.path(), "*")], false).unwrap();
    assert_eq!(names.len(), 3);

    let mut combined = String::new();
    for name in &names {
        let buffered = open_buffered(name, &InputOptions::default()).unwrap();
        assert!(buffered.stdin.is_none());

        let (mut input, _) = buffered.into_parts();
        input.read_to_string(&mut combined).unwrap();
        input.close().unwrap();
    }
    assert_eq!(combined, "alpha\nbeta\ngamma\n");
}

// ==================== Outputs ====================

#[test]
fn test_capture_then_write_elsewhere() {
    let dir = create_files(&standard_files());
    let scratch = TempDir::new().unwrap();
    let dest = dir.path().join("alpha.txt");

    let mut input =
        capture(&mut Cursor::new(b"captured".to_vec()), &options_in(&scratch)).unwrap();

    let mut prompt = OverridePrompt::new(Cursor::new(b"y\n".to_vec()), Vec::new());
    let mut output = prompt.create(&dest).unwrap();
    std::io::copy(&mut input, &mut output).unwrap();
    output.flush().unwrap();
    output.close().unwrap();
    input.close().unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "captured");
    assert_eq!(entry_count(scratch.path()), 0);
}
