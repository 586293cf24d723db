//===========================================================================//

macro_rules! malformed_icon {
    ($e:expr) => {
        return Err($crate::error::Error::MalformedIcon(($e).to_string()))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::Error::MalformedIcon(format!($fmt, $($arg)+)))
    };
}

macro_rules! malformed_manifest {
    ($line:expr, $fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::Error::ManifestMalformed {
            line: $line,
            reason: format!($fmt, $($arg)+),
        })
    };
}

macro_rules! invalid_options {
    ($e:expr) => {
        return Err($crate::error::Error::InvalidOptions(($e).to_string()))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::Error::InvalidOptions(format!($fmt, $($arg)+)))
    };
}

//===========================================================================//
