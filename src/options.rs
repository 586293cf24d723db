use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::size::IconSize;
use std::fs;
use std::path::{Path, PathBuf};

//===========================================================================//

/// Everything one packaging run needs to know.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Requested edge lengths, in order.  Android uses only the first.
    pub sizes: Vec<u32>,
    /// The `Contents.json` manifest driving an Apple icon set.
    pub contents: Option<PathBuf>,
    /// Input image files, in registration order.
    pub inputs: Vec<PathBuf>,
    /// The `.ico` file (Windows) or directory (Apple, Android) to produce.
    pub output: PathBuf,
    /// Whether missing sizes may be resized from the largest input.
    pub resize: bool,
    /// The platform to package for.
    pub platform: Platform,
    /// Where the Windows packager creates its staging directory; the system
    /// temporary directory if `None`.
    pub temp_root: Option<PathBuf>,
}

impl Options {
    /// Checks that the options describe a runnable job.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() && self.contents.is_none() {
            invalid_options!(
                "No icon sizes provided! Specify sizes using: -sizes:x,y,z,w..."
            );
        }
        if self.inputs.is_empty() {
            invalid_options!(
                "No input images provided! Specify input using: \
                 -input:x,y,z,w..."
            );
        }
        if self.output.as_os_str().is_empty() {
            invalid_options!(
                "No output name provided! Specify output name like so: \
                 makeicon ... outputname.ico"
            );
        }
        for &size in self.sizes.iter() {
            IconSize::new(size as i64)?;
        }
        Ok(())
    }
}

//===========================================================================//

/// Splits `-sizes` parameters into icon sizes and an optional manifest path.
/// Any parameter mentioning `.json` is taken as the manifest.
pub fn parse_size_params<S: AsRef<str>>(
    params: &[S],
) -> Result<(Vec<u32>, Option<PathBuf>)> {
    let mut sizes = Vec::new();
    let mut contents = None;
    for param in params.iter().map(AsRef::as_ref) {
        if param.contains(".json") {
            contents = Some(PathBuf::from(param));
            continue;
        }
        let pixels = match param.trim().parse::<i64>() {
            Ok(pixels) => pixels,
            Err(_) => invalid_options!("Invalid icon size '{}'", param),
        };
        sizes.push(IconSize::new(pixels)?.pixels());
    }
    Ok((sizes, contents))
}

/// Expands `-input` parameters into a sorted list of files.  A directory
/// contributes the regular files directly inside it, a `.txt` file
/// contributes each line that names an existing regular file, and anything
/// else is taken as a file path.
pub fn expand_inputs<S: AsRef<str>>(params: &[S]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for param in params.iter().map(AsRef::as_ref) {
        let path = Path::new(param);
        if path.is_dir() {
            let listing =
                fs::read_dir(path).map_err(|error| Error::io(path, error))?;
            for dir_entry in listing {
                let dir_entry =
                    dir_entry.map_err(|error| Error::io(path, error))?;
                let entry_path = dir_entry.path();
                if entry_path.is_file() {
                    inputs.push(entry_path);
                }
            }
        } else if path.extension().map_or(false, |ext| ext == "txt") {
            let listing = fs::read_to_string(path)
                .map_err(|error| Error::io(path, error))?;
            for line in listing.lines() {
                let listed = Path::new(line);
                if listed.is_file() {
                    inputs.push(listed.to_path_buf());
                } else {
                    log::debug!("Skipping {:?} listed in {:?}", line, path);
                }
            }
        } else {
            inputs.push(path.to_path_buf());
        }
    }
    inputs.sort();
    Ok(inputs)
}

//===========================================================================//


//===========================================================================//
