#[cfg(test)]
mod fmtp_test;

use std::collections::HashMap;

/// Parameters is the key/value mapping carried by an `a=fmtp` line.
pub type Parameters = HashMap<String, String>;

/// FmtpConfigParser turns the configuration string of an `a=fmtp` line
/// into codec parameters.
pub trait FmtpConfigParser {
    fn parse_config(&self, config: &str) -> Parameters;
}

impl<F> FmtpConfigParser for F
where
    F: Fn(&str) -> Parameters,
{
    fn parse_config(&self, config: &str) -> Parameters {
        self(config)
    }
}

/// DefaultFmtpConfigParser is the parser used unless another one is
/// installed through the builder. See [`parse_fmtp_config`].
#[derive(Default, Debug, Copy, Clone)]
pub struct DefaultFmtpConfigParser;

impl FmtpConfigParser for DefaultFmtpConfigParser {
    fn parse_config(&self, config: &str) -> Parameters {
        parse_fmtp_config(config)
    }
}

/// parse_fmtp_config parses an fmtp configuration string such as
/// `minptime=10;useinbandfec=1`.
///
/// Keys keep their case and values are kept verbatim. A segment without `=`
/// maps to an empty value and empty segments are ignored.
pub fn parse_fmtp_config(config: &str) -> Parameters {
    let mut parameters = Parameters::new();
    for p in config.split(';') {
        let p = p.trim();
        if p.is_empty() {
            continue;
        }

        let (key, value) = match p.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (p, ""),
        };
        parameters.insert(key.to_owned(), value.to_owned());
    }
    parameters
}
