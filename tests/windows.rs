extern crate makeicon;

use byteorder::{ByteOrder, LittleEndian};
use makeicon::{DecodedImage, Error, IconDir, Options, Platform, RasterCodec,
               StandardCodec};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

//===========================================================================//

fn write_input(dir: &Path, size: u32, shade: u8) -> PathBuf {
    let rgba = [shade, 255 - shade, 64, 255].repeat((size * size) as usize);
    let image = DecodedImage::from_rgba_data(size, size, rgba);
    let path = dir.join(format!("input-{:03}.png", size));
    fs::write(&path, StandardCodec.encode_png(&image).unwrap()).unwrap();
    path
}

fn png_size(data: &[u8]) -> (u32, u32) {
    let reader = png::Decoder::new(data).read_info().unwrap();
    (reader.info().width, reader.info().height)
}

struct Job {
    dir: tempfile::TempDir,
    options: Options,
}

impl Job {
    fn new(input_sizes: &[u32], sizes: &[u32], resize: bool) -> Job {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("staging");
        fs::create_dir(&staging).unwrap();
        let inputs = input_sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| {
                write_input(dir.path(), size, (index * 40) as u8)
            })
            .collect();
        let options = Options {
            sizes: sizes.to_vec(),
            contents: None,
            inputs,
            output: dir.path().join("icon.ico"),
            resize,
            platform: Platform::Win32,
            temp_root: Some(staging),
        };
        Job { dir, options }
    }

    fn staging_is_empty(&self) -> bool {
        let staging = self.options.temp_root.as_ref().unwrap();
        fs::read_dir(staging).unwrap().next().is_none()
    }
}

//===========================================================================//

#[test]
fn exact_sizes_produce_contiguous_directory() {
    let job = Job::new(&[16, 32, 256], &[256, 16, 32], false);
    makeicon::make_icon(&job.options).unwrap();
    let bytes = fs::read(&job.options.output).unwrap();

    assert_eq!(LittleEndian::read_u16(&bytes[0..]), 0);
    assert_eq!(LittleEndian::read_u16(&bytes[2..]), 1);
    assert_eq!(LittleEndian::read_u16(&bytes[4..]), 3);
    let mut expected_offset = 6 + 16 * 3;
    let mut total = expected_offset;
    for (index, &size) in [256u32, 16, 32].iter().enumerate() {
        let entry = &bytes[(6 + 16 * index)..][..16];
        assert_eq!(entry[0], size as u8);
        assert_eq!(entry[1], size as u8);
        assert_eq!(LittleEndian::read_u16(&entry[4..]), 0);
        assert_eq!(LittleEndian::read_u16(&entry[6..]), 32);
        let data_size = LittleEndian::read_u32(&entry[8..]);
        let data_offset = LittleEndian::read_u32(&entry[12..]);
        assert_eq!(data_offset, expected_offset);
        let payload =
            &bytes[(data_offset as usize)..][..(data_size as usize)];
        assert_eq!(png_size(payload), (size, size));
        expected_offset += data_size;
        total += data_size;
    }
    assert_eq!(bytes.len() as u32, total);
    assert_eq!(bytes[6], 0);
    assert!(job.staging_is_empty());
}

#[test]
fn written_icon_reads_back_in_request_order() {
    let job = Job::new(&[48, 24], &[24, 48, 24], false);
    makeicon::make_icon(&job.options).unwrap();
    let bytes = fs::read(&job.options.output).unwrap();
    let icondir = IconDir::read(Cursor::new(&bytes)).unwrap();
    let sizes: Vec<u32> =
        icondir.entries().iter().map(|entry| entry.size().pixels()).collect();
    assert_eq!(sizes, vec![24, 48, 24]);
    assert!(icondir.entries().iter().all(|entry| entry.is_png()));
    assert_eq!(icondir.entries()[0].data(), icondir.entries()[2].data());
}

#[test]
fn missing_size_without_resize_fails_cleanly() {
    let job = Job::new(&[16, 32], &[16, 48], false);
    match makeicon::make_icon(&job.options) {
        Err(Error::UnsatisfiableSize(48)) => {}
        other => panic!("expected UnsatisfiableSize(48), got {:?}", other),
    }
    assert!(!job.options.output.exists());
    assert!(job.staging_is_empty());
}

#[test]
fn missing_size_with_resize_uses_largest_input() {
    let job = Job::new(&[16, 128, 32], &[16, 48, 256], true);
    makeicon::make_icon(&job.options).unwrap();
    let bytes = fs::read(&job.options.output).unwrap();
    let icondir = IconDir::read(Cursor::new(&bytes)).unwrap();
    let entries = icondir.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(png_size(entries[1].data()), (48, 48));
    assert_eq!(png_size(entries[2].data()), (256, 256));
    assert!(job.staging_is_empty());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let job = Job::new(&[16, 64], &[16, 32, 64], true);
    makeicon::make_icon(&job.options).unwrap();
    let first = fs::read(&job.options.output).unwrap();
    makeicon::make_icon(&job.options).unwrap();
    let second = fs::read(&job.options.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn undecodable_input_aborts_the_run() {
    let mut job = Job::new(&[16], &[16], false);
    let bogus = job.dir.path().join("bogus.png");
    fs::write(&bogus, b"not an image").unwrap();
    job.options.inputs.push(bogus);
    assert!(matches!(makeicon::make_icon(&job.options),
                     Err(Error::Decode { .. })));
    assert!(!job.options.output.exists());
}

//===========================================================================//
