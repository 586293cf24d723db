extern crate makeicon;

use makeicon::{DecodedImage, Error, Options, Platform, RasterCodec,
               StandardCodec};
use std::fs;
use std::path::{Path, PathBuf};

//===========================================================================//

const MANIFEST: &str = r#"{
  "images" : [
    {
      "size" : "60x60",
      "idiom" : "iphone",
      "filename" : "a.png",
      "scale" : "2x"
    }
  ],
  "info" : {
    "version" : 1,
    "author" : "xcode"
  }
}
"#;

fn write_input(dir: &Path, size: u32) -> PathBuf {
    let rgba = [10, 20, 30, 255].repeat((size * size) as usize);
    let image = DecodedImage::from_rgba_data(size, size, rgba);
    let path = dir.join(format!("input-{}.png", size));
    fs::write(&path, StandardCodec.encode_png(&image).unwrap()).unwrap();
    path
}

fn options(dir: &Path, input_size: u32, resize: bool) -> Options {
    let manifest = dir.join("Contents.json");
    fs::write(&manifest, MANIFEST).unwrap();
    Options {
        sizes: Vec::new(),
        contents: Some(manifest),
        inputs: vec![write_input(dir, input_size)],
        output: dir.join("AppIcon.appiconset"),
        resize,
        platform: Platform::Ios,
        temp_root: None,
    }
}

//===========================================================================//

#[test]
fn exact_input_is_written_with_manifest_copy() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(dir.path(), 120, false);
    makeicon::make_icon(&options).unwrap();
    let image = StandardCodec.decode(&options.output.join("a.png")).unwrap();
    assert_eq!((image.width(), image.height()), (120, 120));
    let copied = fs::read_to_string(options.output.join("Contents.json"));
    assert_eq!(copied.unwrap(), MANIFEST);
}

#[test]
fn larger_input_is_resized_when_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options(dir.path(), 256, true);
    options.platform = Platform::Osx;
    makeicon::make_icon(&options).unwrap();
    let image = StandardCodec.decode(&options.output.join("a.png")).unwrap();
    assert_eq!((image.width(), image.height()), (120, 120));
}

#[test]
fn unsatisfiable_entry_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(dir.path(), 256, false);
    assert!(matches!(makeicon::make_icon(&options),
                     Err(Error::UnsatisfiableSize(120))));
    assert!(!options.output.exists());
}

#[test]
fn repackaging_in_place_skips_the_self_copy() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options(dir.path(), 120, false);
    makeicon::make_icon(&options).unwrap();
    options.contents = Some(options.output.join("Contents.json"));
    makeicon::make_icon(&options).unwrap();
    let copied = fs::read_to_string(options.output.join("Contents.json"));
    assert_eq!(copied.unwrap(), MANIFEST);
}

#[test]
fn absolute_manifest_filename_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let escaped = elsewhere.path().join("escaped.png");
    let options = options(dir.path(), 120, false);
    let manifest = MANIFEST.replace(
        "\"filename\" : \"a.png\"",
        &format!("\"filename\" : \"{}\"", escaped.display()),
    );
    fs::write(options.contents.as_ref().unwrap(), manifest).unwrap();
    assert!(matches!(makeicon::make_icon(&options),
                     Err(Error::ManifestMalformed { line: 6, .. })));
    assert!(!escaped.exists());
    assert!(!options.output.exists());
}

#[test]
fn parent_directory_manifest_filename_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let options = options(dir.path(), 120, false);
    let manifest = MANIFEST.replace("\"a.png\"", "\"../a.png\"");
    fs::write(options.contents.as_ref().unwrap(), manifest).unwrap();
    assert!(matches!(makeicon::make_icon(&options),
                     Err(Error::ManifestMalformed { line: 6, .. })));
    assert!(!dir.path().join("a.png").exists());
}

#[test]
fn apple_platform_requires_a_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options(dir.path(), 120, false);
    options.contents = None;
    options.sizes = vec![120];
    assert!(matches!(makeicon::make_icon(&options),
                     Err(Error::ManifestMissing)));
}

//===========================================================================//
