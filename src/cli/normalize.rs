//! Turns parsed arguments into a scan request and threshold settings.

use std::collections::BTreeMap;
use tracing::debug;
use url::Url;

use crate::core::models::{DEFAULT_HTTP_PORT, DEFAULT_HTTPS_PORT, ScanRequest};
use crate::core::threshold::ThresholdConfig;
use crate::error::CliError;
use crate::report::OutputFormat;

/// Everything one run needs once the command line has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub request: ScanRequest,
    pub thresholds: ThresholdConfig,
    pub format: OutputFormat,
}

pub fn normalize(args: &super::Args) -> Result<Invocation, CliError> {
    if !args.has_scan_options() {
        return Err(CliError::Usage("no scan options were given".to_string()));
    }

    let format = match args.format.as_deref() {
        None => OutputFormat::default(),
        Some(raw) => raw
            .parse::<OutputFormat>()
            .map_err(|_| CliError::Usage(format!("unrecognized output format '{raw}'")))?,
    };

    let min_score = match args.min_score {
        Some(score) if score < 0 => {
            return Err(CliError::Usage(format!("minimum score must be >= 0, got {score}")));
        }
        // A zero minimum cannot fail, so it is the same as none.
        Some(0) | None => None,
        Some(score) => Some(
            u32::try_from(score)
                .map_err(|_| CliError::Usage(format!("minimum score {score} is out of range")))?,
        ),
    };

    check_bare_hostname(&args.hostname)?;

    let cookies = args
        .cookies
        .as_deref()
        .map(|raw| parse_string_map("--cookies", raw))
        .transpose()?;
    let headers = args
        .headers
        .as_deref()
        .map(|raw| parse_string_map("--headers", raw))
        .transpose()?;

    let request = ScanRequest {
        hostname: args.hostname.clone(),
        http_port: args.http_port.filter(|p| *p != DEFAULT_HTTP_PORT),
        https_port: args.https_port.filter(|p| *p != DEFAULT_HTTPS_PORT),
        path: args.path.clone(),
        cookies,
        headers,
        verify: args.no_verify.then_some(false),
    };
    let thresholds = ThresholdConfig { min_grade: args.min_grade, min_score };

    debug!(?request, ?thresholds, %format, "Arguments normalized.");
    Ok(Invocation { request, thresholds, format })
}

/// Both ports get scanned, so the hostname must not pick a scheme or a port.
fn check_bare_hostname(hostname: &str) -> Result<(), CliError> {
    // `example.com:8443` parses as scheme `example.com`, so this catches bare
    // `host:port` forms as well.
    if Url::parse(hostname).is_ok() {
        return Err(CliError::Usage(format!(
            "hostname '{hostname}' must not include a protocol or port"
        )));
    }

    let with_scheme = Url::parse(&format!("http://{hostname}"))
        .map_err(|e| CliError::Usage(format!("'{hostname}' is not a valid hostname: {e}")))?;
    if with_scheme.host_str().is_none_or(str::is_empty) {
        return Err(CliError::Usage(format!("'{hostname}' is not a valid hostname")));
    }
    // `Url::port` hides a port equal to the scheme default, so look at the text too.
    if with_scheme.port().is_some() || has_explicit_port(hostname) {
        return Err(CliError::Usage(format!("hostname '{hostname}' must not include a port")));
    }
    Ok(())
}

fn has_explicit_port(hostname: &str) -> bool {
    let authority = hostname
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, rest)| rest);

    match host_port.rsplit_once(':') {
        // `[::1]` has colons of its own; only a colon after the bracket counts.
        Some((host, _)) if host.starts_with('[') && !host.ends_with(']') => false,
        Some(_) => true,
        None => false,
    }
}

fn parse_string_map(option: &'static str, raw: &str) -> Result<BTreeMap<String, String>, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::Validation {
        option,
        reason: format!("expected a JSON object of strings ({e})"),
    })
}
