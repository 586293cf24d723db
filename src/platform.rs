use crate::codec::RasterCodec;
use crate::error::Result;
use crate::options::Options;
use crate::registry::ImageRegistry;
use crate::{android, apple, windows};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//===========================================================================//

/// The platform to package icons for.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// A Windows `.ico` file.
    #[default]
    Win32,
    /// A macOS icon set directory driven by a `Contents.json` manifest.
    Osx,
    /// An iOS app icon set; packaged exactly like `Osx`.
    Ios,
    /// Android `mipmap-*` launcher icon directories.
    Android,
}

impl Platform {
    /// All platforms, in the order the command line lists them.
    pub const ALL: [Platform; 4] =
        [Platform::Win32, Platform::Osx, Platform::Ios, Platform::Android];

    /// Returns the name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Win32 => "win32",
            Platform::Osx => "osx",
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Runs this platform's packager over the registered images.
    pub fn package<C: RasterCodec + ?Sized>(
        self,
        options: &Options,
        registry: &ImageRegistry,
        codec: &C,
    ) -> Result<()> {
        match self {
            Platform::Win32 => windows::pack(
                &options.sizes,
                registry,
                codec,
                &options.output,
                options.resize,
                options.temp_root.as_deref(),
            ),
            Platform::Osx | Platform::Ios => apple::pack(
                options.contents.as_deref(),
                registry,
                codec,
                &options.output,
                options.resize,
            ),
            Platform::Android => {
                let base_size = options.sizes.first().copied().unwrap_or(0);
                android::pack(
                    base_size,
                    registry,
                    codec,
                    &options.output,
                    options.resize,
                )
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(name: &str) -> std::result::Result<Platform, String> {
        Platform::ALL
            .iter()
            .copied()
            .find(|platform| platform.name() == name)
            .ok_or_else(|| format!("Unknown platform: {}", name))
    }
}

//===========================================================================//


//===========================================================================//
