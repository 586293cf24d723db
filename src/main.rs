use clap::{App, Arg, ArgMatches};
use makeicon::{Options, Platform};
use std::env;
use std::path::PathBuf;
use std::process;

//===========================================================================//

fn app() -> App<'static, 'static> {
    App::new("makeicon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Packages images into Windows, Apple, and Android icons")
        .usage(
            "makeicon [-resize] -sizes:x,y,z,w,... -input:x,y,z,w,... \
             [-platform:NAME] output",
        )
        .arg(
            Arg::with_name("sizes")
                .long("sizes")
                .takes_value(true)
                .value_name("x,y,z,w,...")
                .help(
                    "Comma-separated sizes to put in the icon, or a \
                     Contents.json manifest for Apple platforms",
                ),
        )
        .arg(
            Arg::with_name("input")
                .long("input")
                .takes_value(true)
                .value_name("x,y,z,w,...")
                .help(
                    "Comma-separated input images, directories of images, \
                     and/or .txt files listing image paths",
                ),
        )
        .arg(
            Arg::with_name("resize")
                .long("resize")
                .help("Resize the largest input to fill in missing sizes"),
        )
        .arg(
            Arg::with_name("platform")
                .long("platform")
                .takes_value(true)
                .value_name("NAME")
                .possible_values(&["win32", "osx", "ios", "android"])
                .help("Platform to generate icons for (default: win32)"),
        )
        .arg(
            Arg::with_name("output")
                .index(1)
                .value_name("output")
                .help("The icon file (win32) or directory to generate"),
        )
}

/// Rewrites the `-name:a,b` spelling into the `--name=a,b` form that clap
/// understands.  Single-letter flags such as `-h` pass through unchanged.
fn normalize_arg(arg: String) -> String {
    if !arg.starts_with('-') || arg.starts_with("--") || arg.len() <= 2 {
        return arg;
    }
    match arg[1..].split_once(':') {
        Some((name, params)) => format!("--{}={}", name, params),
        None => format!("-{}", arg),
    }
}

fn split_params(matches: &ArgMatches, name: &str) -> Vec<String> {
    matches
        .value_of(name)
        .map(|value| {
            value
                .split(',')
                .filter(|param| !param.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn run(matches: &ArgMatches) -> makeicon::Result<()> {
    let (sizes, contents) =
        makeicon::parse_size_params(&split_params(matches, "sizes"))?;
    let inputs = makeicon::expand_inputs(&split_params(matches, "input"))?;
    let platform = match matches.value_of("platform") {
        Some(name) => name
            .parse::<Platform>()
            .map_err(makeicon::Error::InvalidOptions)?,
        None => Platform::default(),
    };
    let options = Options {
        sizes,
        contents,
        inputs,
        output: PathBuf::from(matches.value_of("output").unwrap_or("")),
        resize: matches.is_present("resize"),
        platform,
        temp_root: None,
    };
    makeicon::make_icon(&options)
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    let args: Vec<String> = env::args_os()
        .map(|arg| normalize_arg(arg.to_string_lossy().into_owned()))
        .collect();
    if args.len() <= 1 {
        app().print_help().ok();
        println!();
        return;
    }
    let matches = app().get_matches_from(args);
    if let Err(error) = run(&matches) {
        log::error!("{}", error);
        process::exit(1);
    }
}

//===========================================================================//


//===========================================================================//
