use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Base URL for all requests. Saved when the session ends with quit.
    #[clap(short = 'b', long = "base-url", help = "base URL for all requests")]
    base_url: Option<String>,

    /// Echo response headers before the body
    #[clap(long, value_parser = ["on", "off"], help = "show response headers (on|off)")]
    headers: Option<String>,

    /// Per-request timeout in seconds
    #[clap(long, help = "request timeout in seconds")]
    timeout: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    base_url: Option<String>,
    headers: Option<String>,
    timeout: Option<f64>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            base_url: args.base_url,
            headers: args.headers,
            timeout: args.timeout,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn headers(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    pub fn timeout(&self) -> Option<f64> {
        self.timeout
    }

    /// Settings given on the command line as `(key, value)` pairs, in the
    /// form `config_set` accepts
    pub fn overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        if let Some(url) = &self.base_url {
            overrides.push((crate::config::KEY_BASE_URL, url.clone()));
        }
        if let Some(headers) = &self.headers {
            overrides.push((crate::config::KEY_HEADERS, headers.clone()));
        }
        if let Some(timeout) = self.timeout {
            overrides.push((crate::config::KEY_TIMEOUT, timeout.to_string()));
        }
        overrides
    }
}
