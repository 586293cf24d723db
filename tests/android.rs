extern crate makeicon;

use makeicon::android::{DENSITY_DIRECTORIES, LAUNCHER_FILE_NAME};
use makeicon::{DecodedImage, Error, Options, Platform, RasterCodec,
               StandardCodec};
use std::fs;
use std::path::{Path, PathBuf};

//===========================================================================//

fn write_input(dir: &Path, size: u32) -> PathBuf {
    let rgba = [200, 40, 90, 255].repeat((size * size) as usize);
    let image = DecodedImage::from_rgba_data(size, size, rgba);
    let path = dir.join(format!("input-{}.png", size));
    fs::write(&path, StandardCodec.encode_png(&image).unwrap()).unwrap();
    path
}

fn options(dir: &Path, input_sizes: &[u32], resize: bool) -> Options {
    Options {
        sizes: vec![192],
        contents: None,
        inputs: input_sizes
            .iter()
            .map(|&size| write_input(dir, size))
            .collect(),
        output: dir.join("res"),
        resize,
        platform: Platform::Android,
        temp_root: None,
    }
}

//===========================================================================//

#[test]
fn buckets_are_derived_from_base_size() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(dir.path(), &[192], true);
    makeicon::make_icon(&options).unwrap();
    let expected = [192, 144, 96, 72, 48];
    for (directory, &size) in DENSITY_DIRECTORIES.iter().zip(expected.iter()) {
        let path = options.output.join(directory).join(LAUNCHER_FILE_NAME);
        let image = StandardCodec.decode(&path).unwrap();
        assert_eq!((image.width(), image.height()), (size, size),
                   "{}", directory);
    }
}

#[test]
fn existing_bucket_contents_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(dir.path(), &[192, 144, 96, 72, 48], false);
    let hdpi = options.output.join("mipmap-hdpi");
    fs::create_dir_all(&hdpi).unwrap();
    fs::write(hdpi.join("ic_launcher_round.png"), b"keep me").unwrap();
    makeicon::make_icon(&options).unwrap();
    assert_eq!(fs::read(hdpi.join("ic_launcher_round.png")).unwrap(),
               b"keep me");
    assert!(hdpi.join(LAUNCHER_FILE_NAME).is_file());
}

#[test]
fn missing_bucket_without_resize_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(dir.path(), &[192, 144], false);
    assert!(matches!(makeicon::make_icon(&options),
                     Err(Error::UnsatisfiableSize(96))));
    assert!(!options.output.exists());
}

//===========================================================================//
