//! Default reachability probe.

use scout_core::traits::{IReachabilityProbe, ProbeOutcome};
use url::{Host, Url};

/// Hosts reserved by RFC 2606 / RFC 6761 that can never resolve publicly.
const RESERVED_SUFFIXES: &[&str] = &[".invalid", ".test", ".example", ".localhost"];
const RESERVED_HOSTS: &[&str] = &["localhost", "invalid", "test", "example"];

/// Deterministic probe that judges reachability from the URL alone.
///
/// A URL is reachable when it is absolute http(s) with a public host.
/// Reserved and loopback/unspecified hosts are unreachable. Deployments that
/// record live probe results alongside candidates supply their own probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOnlyProbe;

impl IReachabilityProbe for FormatOnlyProbe {
    fn probe(&self, source_url: &str) -> ProbeOutcome {
        let url = match Url::parse(source_url) {
            Ok(url) => url,
            Err(e) => return ProbeOutcome::unreachable(format!("unparseable url: {e}")),
        };
        if !matches!(url.scheme(), "http" | "https") {
            return ProbeOutcome::unreachable(format!("unsupported scheme {}", url.scheme()));
        }
        match url.host() {
            None => ProbeOutcome::unreachable("url has no host"),
            Some(Host::Domain(domain)) => {
                let domain = domain.trim_end_matches('.').to_ascii_lowercase();
                if RESERVED_HOSTS.contains(&domain.as_str())
                    || RESERVED_SUFFIXES.iter().any(|s| domain.ends_with(s))
                {
                    ProbeOutcome::unreachable(format!("reserved host {domain}"))
                } else {
                    ProbeOutcome::reachable(format!("host {domain}"))
                }
            }
            Some(Host::Ipv4(ip)) if ip.is_loopback() || ip.is_unspecified() => {
                ProbeOutcome::unreachable(format!("non-routable address {ip}"))
            }
            Some(Host::Ipv6(ip)) if ip.is_loopback() || ip.is_unspecified() => {
                ProbeOutcome::unreachable(format!("non-routable address {ip}"))
            }
            Some(host) => ProbeOutcome::reachable(format!("host {host}")),
        }
    }
}

/// Lowercased host of an absolute URL, if it has one.
pub fn host_of(source_url: &str) -> Option<String> {
    Url::parse(source_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_end_matches('.').to_ascii_lowercase()))
}

/// Whether `host` is `domain` or a subdomain of it.
pub fn host_matches(host: &str, domain: &str) -> bool {
    let domain = domain.trim().trim_end_matches('.').to_ascii_lowercase();
    if domain.is_empty() {
        return false;
    }
    host == domain || host.ends_with(&format!(".{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_hosts_are_unreachable() {
        let probe = FormatOnlyProbe;
        assert!(!probe.probe("https://tenders.rovers.invalid/rfp").reachable);
        assert!(!probe.probe("http://localhost:8080/").reachable);
        assert!(!probe.probe("http://127.0.0.1/x").reachable);
        assert!(!probe.probe("ftp://rovers.com/file").reachable);
        assert!(probe.probe("https://www.rovers.com/news").reachable);
    }

    #[test]
    fn subdomains_match_their_parent() {
        assert!(host_matches("jobs.rovers.com", "rovers.com"));
        assert!(host_matches("rovers.com", "Rovers.com"));
        assert!(!host_matches("notrovers.com", "rovers.com"));
        assert!(!host_matches("rovers.com", ""));
    }
}
