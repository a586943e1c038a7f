use std::borrow::Cow;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use bytes::BytesMut;

use crate::errors::*;
use crate::packet::*;

/// Timeout applied when [MotdRequest::new] is used.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A single status query against a Bedrock server.
///
/// The timeout applies to each resolved address separately: a hostname with
/// both an A and an AAAA record can take up to twice the timeout before the
/// query gives up.
pub struct MotdRequest<'a> {
    pub hostname: Cow<'a, str>,
    pub port: u16,
    pub timeout: Duration,
}

impl<'a> MotdRequest<'a> {
    /// Creates a request with the default 5 second timeout.
    pub fn new(hostname: impl Into<Cow<'a, str>>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sends the unconnected ping and blocks until a server status arrives or
    /// every resolved address has failed.
    ///
    /// The returned string is the raw MOTD payload; splitting it into its
    /// semicolon-separated fields is left to the caller.
    pub fn query(&self) -> Result<String> {
        query_motd(&self.hostname, self.port, self.timeout)
    }
}

/// Probes every resolved address in order and returns the first usable MOTD.
pub(crate) fn query_motd(host: &str, port: u16, timeout: Duration) -> Result<String> {
    let addrs: Vec<SocketAddr> =
        (host, port)
            .to_socket_addrs()
            .map_err(|source| QueryError::ResolveError {
                host: host.to_string(),
                port,
                source,
            })?
            .collect();

    log::debug!("resolved {} address(es) for '{}:{}'", addrs.len(), host, port);

    for addr in addrs {
        // One socket per attempt, dropped before the next one starts.
        let sock = match UdpSocket::bind(local_bind_addr(&addr)) {
            Ok(sock) => sock,
            Err(e) => {
                log::debug!("can't bind a socket for {}: {}", addr, e);
                continue;
            }
        };

        if let Err(e) = sock.set_read_timeout(Some(timeout)) {
            log::debug!("can't set read timeout for {}: {}", addr, e);
            continue;
        }

        let sent = match sock.send_to(&UNCONNECTED_PING, addr) {
            Ok(sent) => sent,
            Err(e) => {
                log::debug!("send to {} failed: {}", addr, e);
                continue;
            }
        };

        log::debug!("sent {} bytes to {}", sent, addr);
        if sent != UNCONNECTED_PING.len() {
            log::warn!(
                "bytes sent ({}) not equal to probe size ({})!",
                sent,
                UNCONNECTED_PING.len()
            );
        }

        let mut buf = BytesMut::zeroed(RECV_BUFFER_LEN);
        match sock.recv_from(&mut buf) {
            Ok((received, from)) => {
                log::debug!("received {} bytes from {}", received, from);
                buf.truncate(received);
                match extract_motd(buf) {
                    Some(motd) => return Ok(motd),
                    None => log::debug!("reply from {} carries no status payload", from),
                }
            }
            Err(e) => log::debug!("receive from {} failed: {}", addr, e),
        }
    }

    Err(QueryError::AllAttemptsFailed {
        host: host.to_string(),
        port,
    })
}

fn local_bind_addr(remote: &SocketAddr) -> SocketAddr {
    match remote {
        SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    }
}
