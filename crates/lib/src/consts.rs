/// Name used for the binary, the Lua global and environment prefixes.
pub const APP_NAME: &str = "pathos";

/// Environment variable selecting the path grammar.
pub const STYLE_ENV: &str = "PATHOS_PATH_STYLE";

/// Environment variable supplying the working directory for `resolve`.
pub const CWD_ENV: &str = "PATHOS_CWD";
